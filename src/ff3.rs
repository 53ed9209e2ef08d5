//! FF3 and FF3-1 format-preserving encryption (NIST SP 800-38G, section 6.2).
//!
//! An 8-round Feistel network whose round function is a single AES call.
//! Operands are handled in reversed symbol order, the key is used with its
//! bytes reversed, and every AES input and output is byte-reversed.
//!
//! The tweak is split into two 32-bit halves `TL` and `TR`, used on odd and
//! even rounds respectively:
//! - [`Ff3Variant::Ff3`] takes a 64-bit tweak, split in the middle.
//! - [`Ff3Variant::Ff3_1`] takes the revised 56-bit tweak, whose middle byte is
//!   shared between both halves. A 64-bit tweak is still accepted and handled
//!   exactly as FF3 does.
//!
//! Each half must fit the 96-bit field of the round input, which bounds the
//! message length at `2 * floor(log_radix(2^96))` symbols.

use aes::{Aes128, Aes192, Aes256};
use num_bigint::BigUint;
use tracing::trace;
use zeroize::Zeroizing;

use crate::block::{AesCipher, encrypt_block, new_cipher};
use crate::common::{
    BLOCK_LENGTH, Direction, Error, add_mod, check_min_length, sub_mod, write_be,
};
use crate::radix::{
    check_digits, check_radix, digits_to_num, num_to_digits, parse_digits, radix_pow,
    render_digits,
};

/// Tweak handling of the FF3 family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Ff3Variant {
    /// Original FF3: 8-byte tweak.
    Ff3,
    /// FF3-1: 7-byte tweak, or an 8-byte tweak handled as FF3.
    Ff3_1,
}

impl Ff3Variant {
    const fn expected_tweak(self) -> &'static str {
        match self {
            Ff3Variant::Ff3 => "8 bytes",
            Ff3Variant::Ff3_1 => "7 or 8 bytes",
        }
    }

    /// Check a tweak length without splitting it.
    pub fn check_tweak_length(self, len: usize) -> Result<(), Error> {
        match (self, len) {
            (_, 8) | (Ff3Variant::Ff3_1, 7) => Ok(()),
            _ => Err(Error::InvalidTweakLength {
                expected: self.expected_tweak(),
                actual: len,
            }),
        }
    }

    /// Split a tweak into `(TL, TR)`.
    pub fn split_tweak(self, tweak: &[u8]) -> Result<([u8; 4], [u8; 4]), Error> {
        self.check_tweak_length(tweak.len())?;
        let mut tl = [0u8; 4];
        let mut tr = [0u8; 4];
        if tweak.len() == 8 {
            tl.copy_from_slice(&tweak[..4]);
            tr.copy_from_slice(&tweak[4..]);
        } else {
            tl[..3].copy_from_slice(&tweak[..3]);
            tl[3] = tweak[3] & 0xf0;
            tr[..3].copy_from_slice(&tweak[4..]);
            tr[3] = (tweak[3] & 0x0f) << 4;
        }
        Ok((tl, tr))
    }
}

/// Largest `k` with `radix^k <= 2^96`.
pub fn max_half_length(radix: u32) -> usize {
    let limit = 1u128 << 96;
    let radix = u128::from(radix.max(2));
    let mut power = 1u128;
    let mut k = 0;
    while let Some(next) = power.checked_mul(radix).filter(|&p| p <= limit) {
        power = next;
        k += 1;
    }
    k
}

/// Maximum FF3 message length in symbols for a radix.
pub fn max_message_length(radix: u32) -> usize {
    2 * max_half_length(radix)
}

/// Generic FF3/FF3-1 cipher parameterized by AES key size.
#[derive(Clone)]
pub struct Ff3<Aes: AesCipher> {
    /// Key schedule of the byte-reversed key.
    ks: Aes,
    radix: u32,
    variant: Ff3Variant,
}

/// FF3 family with AES-128.
#[allow(non_camel_case_types)]
pub type Ff3_128 = Ff3<Aes128>;

/// FF3 family with AES-192.
#[allow(non_camel_case_types)]
pub type Ff3_192 = Ff3<Aes192>;

/// FF3 family with AES-256.
#[allow(non_camel_case_types)]
pub type Ff3_256 = Ff3<Aes256>;

impl<Aes: AesCipher> Ff3<Aes> {
    /// Number of Feistel rounds.
    pub const ROUNDS: u8 = 8;

    /// Encryption key length in bytes.
    pub const KEY_LENGTH: usize = Aes::KEY_LENGTH.bytes();

    /// Initialize a cipher for the given key, radix and tweak variant.
    pub fn new(key: &[u8], radix: u32, variant: Ff3Variant) -> Result<Self, Error> {
        check_radix(radix)?;
        let mut reversed = Zeroizing::new(key.to_vec());
        reversed.reverse();
        Ok(Self {
            ks: new_cipher(&reversed)?,
            radix,
            variant,
        })
    }

    /// Radix this cipher was created for.
    pub fn radix(&self) -> u32 {
        self.radix
    }

    /// Tweak variant this cipher was created for.
    pub fn variant(&self) -> Ff3Variant {
        self.variant
    }

    /// Maximum message length in symbols.
    pub fn max_message_length(&self) -> usize {
        max_message_length(self.radix)
    }

    /// Encrypt a numeral string.
    pub fn encrypt(&self, plaintext: &str, tweak: &[u8]) -> Result<String, Error> {
        self.cipher_str(plaintext, tweak, Direction::Encrypt)
    }

    /// Decrypt a numeral string.
    pub fn decrypt(&self, ciphertext: &str, tweak: &[u8]) -> Result<String, Error> {
        self.cipher_str(ciphertext, tweak, Direction::Decrypt)
    }

    /// Encrypt digit values (each below the radix).
    pub fn encrypt_digits(&self, plaintext: &[u8], tweak: &[u8]) -> Result<Vec<u8>, Error> {
        self.cipher_digits(plaintext, tweak, Direction::Encrypt)
    }

    /// Decrypt digit values (each below the radix).
    pub fn decrypt_digits(&self, ciphertext: &[u8], tweak: &[u8]) -> Result<Vec<u8>, Error> {
        self.cipher_digits(ciphertext, tweak, Direction::Decrypt)
    }

    fn cipher_str(&self, src: &str, tweak: &[u8], direction: Direction) -> Result<String, Error> {
        check_min_length(src.chars().count())?;
        let digits = parse_digits(src, self.radix)?;
        let out = self.ff3(&digits, tweak, direction)?;
        Ok(render_digits(&out))
    }

    fn cipher_digits(
        &self,
        src: &[u8],
        tweak: &[u8],
        direction: Direction,
    ) -> Result<Vec<u8>, Error> {
        check_min_length(src.len())?;
        check_digits(src, self.radix)?;
        self.ff3(src, tweak, direction)
    }

    fn ff3(&self, src: &[u8], tweak: &[u8], direction: Direction) -> Result<Vec<u8>, Error> {
        let (tl, tr) = self.variant.split_tweak(tweak)?;

        let n = src.len();
        let maximum = self.max_message_length();
        if n > maximum {
            return Err(Error::MessageTooLong { length: n, maximum });
        }

        let u = n.div_ceil(2);
        let v = n - u;
        let modulus_u = radix_pow(self.radix, u);
        let modulus_v = radix_pow(self.radix, v);
        let round_params = |i: u8| {
            if i % 2 == 0 {
                (&modulus_u, &tr)
            } else {
                (&modulus_v, &tl)
            }
        };

        // Halves are kept as NUM(REV(X)).
        let mut a = self.num_rev(&src[..u]);
        let mut b = self.num_rev(&src[u..]);

        match direction {
            Direction::Encrypt => {
                for i in 0..Self::ROUNDS {
                    let (modulus, w) = round_params(i);
                    let y = self.round(i, w, &b)?;
                    let c = add_mod(&a, &y, modulus);
                    a = b;
                    b = c;
                }
            }
            Direction::Decrypt => {
                for i in (0..Self::ROUNDS).rev() {
                    let (modulus, w) = round_params(i);
                    let y = self.round(i, w, &a)?;
                    let c = sub_mod(&b, &y, modulus);
                    b = a;
                    a = c;
                }
            }
        }

        let mut out = self.str_rev(&a, u);
        out.extend(self.str_rev(&b, v));
        Ok(out)
    }

    /// NUM_radix(REV(X)).
    fn num_rev(&self, digits: &[u8]) -> BigUint {
        let reversed: Vec<u8> = digits.iter().rev().copied().collect();
        digits_to_num(&reversed, self.radix)
    }

    /// REV(STR^m_radix(x)).
    fn str_rev(&self, num: &BigUint, m: usize) -> Vec<u8> {
        let mut digits = num_to_digits(num, self.radix, m);
        digits.reverse();
        digits
    }

    /// Round function: `REVB(CIPH(REVB(W xor [i]^4 || [half]^12)))`.
    fn round(&self, i: u8, w: &[u8; 4], half: &BigUint) -> Result<BigUint, Error> {
        let mut p = [0u8; BLOCK_LENGTH];
        p[..4].copy_from_slice(&(u32::from_be_bytes(*w) ^ u32::from(i)).to_be_bytes());
        write_be(half, &mut p[4..])?;

        p.reverse();
        let mut s = encrypt_block(&self.ks, &p);
        s.reverse();
        trace!(round = i, "ff3 round");

        Ok(BigUint::from_bytes_be(&s))
    }
}
