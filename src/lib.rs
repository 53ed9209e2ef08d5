//! FF1, FF3 and FF3-1 format-preserving encryption.
//!
//! This crate implements the NIST SP 800-38G format-preserving modes over AES.
//! A numeral string encrypts to another numeral string of the same length
//! drawn from the same alphabet.
//!
//! # Overview
//!
//! Format-preserving encryption is suitable for applications like:
//! - Tokenizing card numbers and account identifiers
//! - Encrypting database fields with fixed formats
//! - Encrypting identifiers that must pass existing validation
//!
//! # Variants
//!
//! - **FF1**: 10-round Feistel network with a CBC-MAC round function and
//!   arbitrary-length tweaks
//! - **FF3**: 8-round Feistel network with a single AES call per round and a
//!   64-bit tweak
//! - **FF3-1**: FF3 with the revised 56-bit tweak
//!
//! Symbols are taken from `0-9A-Za-z`; radix `r` uses the first `r` of them.
//! Every mode accepts AES-128, AES-192 and AES-256 keys.
//!
//! # Quick Start
//!
//! ## One-shot encryption
//!
//! ```rust
//! use ffx::{Algorithm, decrypt, encrypt};
//!
//! let key = hex::decode("2B7E151628AED2A6ABF7158809CF4F3C").unwrap();
//!
//! let ciphertext = encrypt(&key, &[], "0123456789", 10, Algorithm::Ff1).unwrap();
//! assert_eq!(ciphertext, "2433477484");
//!
//! let plaintext = decrypt(&key, &[], &ciphertext, 10, Algorithm::Ff1).unwrap();
//! assert_eq!(plaintext, "0123456789");
//! ```
//!
//! ## Reusing a keyed cipher
//!
//! ```rust
//! use ffx::{Ff3Variant, Ff3_128};
//!
//! let key = [0x2bu8; 16];
//! let tweak = [0u8; 7];
//! let cipher = Ff3_128::new(&key, 16, Ff3Variant::Ff3_1).unwrap();
//!
//! let ciphertext = cipher.encrypt("DEADBEEF", &tweak).unwrap();
//! assert_eq!(ciphertext.len(), 8);
//! assert_eq!(cipher.decrypt(&ciphertext, &tweak).unwrap(), "DEADBEEF");
//! ```
//!
//! ## Tool settings with hex input
//!
//! ```rust
//! use ffx::{Algorithm, FpeConfig, KeyLength};
//!
//! let config = FpeConfig::new(Algorithm::Ff1, KeyLength::Aes128, 10, true);
//! let ciphertext = config
//!     .encrypt("2B7E151628AED2A6ABF7158809CF4F3C", "39383736353433323130", "0123456789")
//!     .unwrap();
//! assert_eq!(ciphertext, "6124200773");
//! ```
//!
//! # Security Considerations
//!
//! - **Deterministic**: equal plaintexts under the same (key, tweak) give equal
//!   ciphertexts; vary the tweak to separate domains
//! - **No authentication**: these are encryption-only modes
//! - **Small domains**: very short messages in small radices offer little
//!   security; the minimum accepted length is 2 symbols
//! - **No side-channel hardening** beyond wiping decoded key material
//!
//! # Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`FpeConfig`], [`Algorithm`] and
//!   [`KeyLength`]

pub mod block;
pub mod common;
pub mod ff1;
pub mod ff3;
pub mod fpe;
pub mod radix;

#[cfg(test)]
mod vectors;

pub use block::{AesCipher, KeyLength, UnknownName, encrypt_block_with_key};
pub use common::{Error, Field};
pub use ff1::{Ff1, Ff1_128, Ff1_192, Ff1_256};
pub use ff3::{Ff3, Ff3_128, Ff3_192, Ff3_256, Ff3Variant};
pub use fpe::{Algorithm, FpeConfig, UI_RADICES, decrypt, encrypt};
pub use radix::{ALPHABET, MAX_RADIX, MIN_RADIX, num_to_str, str_to_num};
