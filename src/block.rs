#![allow(deprecated)]
//! AES single-block primitive and the CBC-MAC PRF used by FF1.
//!
//! Both FF1 and FF3 only ever call the forward direction of AES on one
//! 16-byte block at a time: no padding, no chaining, no decryption.

#[allow(deprecated)]
use aes::cipher::{Array, BlockCipherEncrypt, KeyInit};
use aes::{Aes128, Aes192, Aes256};

use crate::common::{BLOCK_LENGTH, Error, xor_block};

/// AES key strength.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeyLength {
    #[cfg_attr(feature = "serde", serde(rename = "AES-128"))]
    Aes128,
    #[cfg_attr(feature = "serde", serde(rename = "AES-192"))]
    Aes192,
    #[cfg_attr(feature = "serde", serde(rename = "AES-256"))]
    Aes256,
}

impl KeyLength {
    /// Key length in bytes.
    pub const fn bytes(self) -> usize {
        match self {
            KeyLength::Aes128 => 16,
            KeyLength::Aes192 => 24,
            KeyLength::Aes256 => 32,
        }
    }

    /// Strength matching a raw key length.
    pub const fn from_len(len: usize) -> Option<Self> {
        match len {
            16 => Some(KeyLength::Aes128),
            24 => Some(KeyLength::Aes192),
            32 => Some(KeyLength::Aes256),
            _ => None,
        }
    }

    pub(crate) const fn expected(self) -> &'static str {
        match self {
            KeyLength::Aes128 => "16 bytes (AES-128)",
            KeyLength::Aes192 => "24 bytes (AES-192)",
            KeyLength::Aes256 => "32 bytes (AES-256)",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            KeyLength::Aes128 => "AES-128",
            KeyLength::Aes192 => "AES-192",
            KeyLength::Aes256 => "AES-256",
        }
    }
}

impl core::fmt::Display for KeyLength {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl core::str::FromStr for KeyLength {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AES-128" | "AES128" | "128" => Ok(KeyLength::Aes128),
            "AES-192" | "AES192" | "192" => Ok(KeyLength::Aes192),
            "AES-256" | "AES256" | "256" => Ok(KeyLength::Aes256),
            _ => Err(UnknownName(s.to_string())),
        }
    }
}

/// A configuration name that does not match any known option.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown option name: {0:?}")]
pub struct UnknownName(pub String);

/// Trait for AES ciphers usable as the FPE block primitive.
pub trait AesCipher: BlockCipherEncrypt + KeyInit + Clone {
    const KEY_LENGTH: KeyLength;
}

impl AesCipher for Aes128 {
    const KEY_LENGTH: KeyLength = KeyLength::Aes128;
}

impl AesCipher for Aes192 {
    const KEY_LENGTH: KeyLength = KeyLength::Aes192;
}

impl AesCipher for Aes256 {
    const KEY_LENGTH: KeyLength = KeyLength::Aes256;
}

/// Expand an AES key schedule, checking the key length first.
pub fn new_cipher<Aes: AesCipher>(key: &[u8]) -> Result<Aes, Error> {
    let invalid = || Error::InvalidKeyLength {
        expected: Aes::KEY_LENGTH.expected(),
        actual: key.len(),
    };
    if key.len() != Aes::KEY_LENGTH.bytes() {
        return Err(invalid());
    }
    Aes::new_from_slice(key).map_err(|_| invalid())
}

/// Encrypt exactly one block (AES-ECB, single call).
#[inline]
pub fn encrypt_block<Aes: BlockCipherEncrypt>(
    ks: &Aes,
    input: &[u8; BLOCK_LENGTH],
) -> [u8; BLOCK_LENGTH] {
    let mut block = Array::clone_from_slice(input);
    ks.encrypt_block(&mut block);
    let mut out = [0u8; BLOCK_LENGTH];
    out.copy_from_slice(block.as_slice());
    out
}

/// Encrypt one block under a raw 16, 24 or 32 byte key.
pub fn encrypt_block_with_key(
    key: &[u8],
    input: &[u8; BLOCK_LENGTH],
) -> Result<[u8; BLOCK_LENGTH], Error> {
    match KeyLength::from_len(key.len()) {
        Some(KeyLength::Aes128) => Ok(encrypt_block(&new_cipher::<Aes128>(key)?, input)),
        Some(KeyLength::Aes192) => Ok(encrypt_block(&new_cipher::<Aes192>(key)?, input)),
        Some(KeyLength::Aes256) => Ok(encrypt_block(&new_cipher::<Aes256>(key)?, input)),
        None => Err(Error::InvalidKeyLength {
            expected: "16, 24 or 32 bytes",
            actual: key.len(),
        }),
    }
}

/// CBC-MAC with a zero IV over `data`, zero-padded to a block boundary.
///
/// Only sound on fixed-format inputs, which FF1's `P || Q` provides.
pub fn prf<Aes: BlockCipherEncrypt>(ks: &Aes, data: &[u8]) -> [u8; BLOCK_LENGTH] {
    let mut state = [0u8; BLOCK_LENGTH];
    for chunk in data.chunks(BLOCK_LENGTH) {
        let mut block = [0u8; BLOCK_LENGTH];
        block[..chunk.len()].copy_from_slice(chunk);
        xor_block(&mut state, &block);
        state = encrypt_block(ks, &state);
    }
    state
}
