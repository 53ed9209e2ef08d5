//! Validating front end over the FF1 and FF3 ciphers.
//!
//! The facade checks inputs in a fixed order and fails on the first problem,
//! before any Feistel round runs:
//!
//! 1. key length (and hex well-formedness for hex input)
//! 2. message length
//! 3. symbol membership in the radix alphabet
//! 4. tweak length for the algorithm (and hex well-formedness)
//! 5. radix range
//!
//! It then dispatches on the key length to the matching AES variant.

use core::fmt;
use core::str::FromStr;

use aes::{Aes128, Aes192, Aes256};
use tracing::debug;
use zeroize::Zeroizing;

use crate::block::{AesCipher, KeyLength, UnknownName};
use crate::common::{Direction, Error, Field, check_min_length};
use crate::ff1::Ff1;
use crate::ff3::{Ff3, Ff3Variant};
use crate::radix::{check_radix, parse_digits, render_digits};

/// Radices offered by the interactive tool.
pub const UI_RADICES: [u32; 7] = [2, 8, 10, 16, 26, 36, 62];

/// FPE algorithm selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// FF1, any tweak length.
    #[cfg_attr(feature = "serde", serde(rename = "FF1"))]
    Ff1,
    /// FF3 with a 64-bit tweak.
    #[cfg_attr(feature = "serde", serde(rename = "FF3"))]
    Ff3,
    /// FF3-1 with a 56-bit tweak (64-bit tweaks are handled as FF3).
    #[cfg_attr(feature = "serde", serde(rename = "FF3-1"))]
    Ff3_1,
}

impl Algorithm {
    /// Display name used by the tool.
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Ff1 => "FF1",
            Algorithm::Ff3 => "FF3",
            Algorithm::Ff3_1 => "FF3-1",
        }
    }

    /// Check a tweak length for this algorithm.
    pub fn check_tweak_length(self, len: usize) -> Result<(), Error> {
        match self.ff3_variant() {
            Some(variant) => variant.check_tweak_length(len),
            None => Ok(()),
        }
    }

    /// Tweak used when the tweak is disabled.
    pub fn default_tweak(self) -> &'static [u8] {
        match self {
            Algorithm::Ff1 => &[],
            Algorithm::Ff3 | Algorithm::Ff3_1 => &[0u8; 8],
        }
    }

    fn ff3_variant(self) -> Option<Ff3Variant> {
        match self {
            Algorithm::Ff1 => None,
            Algorithm::Ff3 => Some(Ff3Variant::Ff3),
            Algorithm::Ff3_1 => Some(Ff3Variant::Ff3_1),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "FF1" => Ok(Algorithm::Ff1),
            "FF3" => Ok(Algorithm::Ff3),
            "FF3-1" | "FF3_1" | "FF31" => Ok(Algorithm::Ff3_1),
            _ => Err(UnknownName(s.to_string())),
        }
    }
}

/// Encrypt a numeral string.
///
/// The AES variant is chosen from the key length (16, 24 or 32 bytes).
pub fn encrypt(
    key: &[u8],
    tweak: &[u8],
    plaintext: &str,
    radix: u32,
    algorithm: Algorithm,
) -> Result<String, Error> {
    transform(key, tweak, plaintext, radix, algorithm, Direction::Encrypt)
}

/// Decrypt a numeral string.
pub fn decrypt(
    key: &[u8],
    tweak: &[u8],
    ciphertext: &str,
    radix: u32,
    algorithm: Algorithm,
) -> Result<String, Error> {
    transform(key, tweak, ciphertext, radix, algorithm, Direction::Decrypt)
}

fn transform(
    key: &[u8],
    tweak: &[u8],
    text: &str,
    radix: u32,
    algorithm: Algorithm,
    direction: Direction,
) -> Result<String, Error> {
    let result = KeyLength::from_len(key.len())
        .ok_or(Error::InvalidKeyLength {
            expected: "16, 24 or 32 bytes",
            actual: key.len(),
        })
        .and_then(|key_length| {
            let digits = check_text(text, radix)?;
            algorithm.check_tweak_length(tweak.len())?;
            check_radix(radix)?;
            run(key_length, key, tweak, &digits, radix, algorithm, direction)
        });
    report(result, algorithm, radix, direction)
}

/// Steps 2 and 3: length, then alphabet membership.
fn check_text(text: &str, radix: u32) -> Result<Vec<u8>, Error> {
    check_min_length(text.chars().count())?;
    parse_digits(text, radix)
}

fn run(
    key_length: KeyLength,
    key: &[u8],
    tweak: &[u8],
    digits: &[u8],
    radix: u32,
    algorithm: Algorithm,
    direction: Direction,
) -> Result<String, Error> {
    debug!(
        %algorithm,
        %key_length,
        radix,
        length = digits.len(),
        tweak_length = tweak.len(),
        ?direction,
        "running fpe"
    );
    let out = match key_length {
        KeyLength::Aes128 => dispatch::<Aes128>(key, tweak, digits, radix, algorithm, direction),
        KeyLength::Aes192 => dispatch::<Aes192>(key, tweak, digits, radix, algorithm, direction),
        KeyLength::Aes256 => dispatch::<Aes256>(key, tweak, digits, radix, algorithm, direction),
    }?;
    Ok(render_digits(&out))
}

fn dispatch<Aes: AesCipher>(
    key: &[u8],
    tweak: &[u8],
    digits: &[u8],
    radix: u32,
    algorithm: Algorithm,
    direction: Direction,
) -> Result<Vec<u8>, Error> {
    match (algorithm.ff3_variant(), direction) {
        (None, Direction::Encrypt) => Ff1::<Aes>::new(key, radix)?.encrypt_digits(digits, tweak),
        (None, Direction::Decrypt) => Ff1::<Aes>::new(key, radix)?.decrypt_digits(digits, tweak),
        (Some(variant), Direction::Encrypt) => {
            Ff3::<Aes>::new(key, radix, variant)?.encrypt_digits(digits, tweak)
        }
        (Some(variant), Direction::Decrypt) => {
            Ff3::<Aes>::new(key, radix, variant)?.decrypt_digits(digits, tweak)
        }
    }
}

fn report(
    result: Result<String, Error>,
    algorithm: Algorithm,
    radix: u32,
    direction: Direction,
) -> Result<String, Error> {
    if let Err(err) = &result {
        debug!(%algorithm, radix, ?direction, error = %err, "fpe input rejected");
    }
    result
}

/// Decode a hex field, ignoring whitespace and case.
pub fn decode_hex(field: Field, input: &str) -> Result<Zeroizing<Vec<u8>>, Error> {
    let cleaned: Zeroizing<String> =
        Zeroizing::new(input.chars().filter(|c| !c.is_whitespace()).collect());
    hex::decode(cleaned.as_bytes())
        .map(Zeroizing::new)
        .map_err(|source| Error::MalformedHexInput { field, source })
}

/// Settings chosen in the tool: algorithm, AES strength, radix and whether
/// a tweak is supplied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct FpeConfig {
    pub algorithm: Algorithm,
    pub key_length: KeyLength,
    pub radix: u32,
    pub use_tweak: bool,
}

impl Default for FpeConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Ff1,
            key_length: KeyLength::Aes128,
            radix: 10,
            use_tweak: false,
        }
    }
}

impl FpeConfig {
    pub fn new(algorithm: Algorithm, key_length: KeyLength, radix: u32, use_tweak: bool) -> Self {
        Self {
            algorithm,
            key_length,
            radix,
            use_tweak,
        }
    }

    /// Check the radix range.
    pub fn validate(&self) -> Result<(), Error> {
        check_radix(self.radix)
    }

    /// Whether the radix is one the tool offers.
    pub fn is_ui_radix(&self) -> bool {
        UI_RADICES.contains(&self.radix)
    }

    /// Encrypt with a hex key and optional hex tweak.
    ///
    /// `tweak_hex` is ignored unless `use_tweak` is set.
    pub fn encrypt(&self, key_hex: &str, tweak_hex: &str, plaintext: &str) -> Result<String, Error> {
        self.transform(key_hex, tweak_hex, plaintext, Direction::Encrypt)
    }

    /// Decrypt with a hex key and optional hex tweak.
    pub fn decrypt(&self, key_hex: &str, tweak_hex: &str, ciphertext: &str) -> Result<String, Error> {
        self.transform(key_hex, tweak_hex, ciphertext, Direction::Decrypt)
    }

    fn transform(
        &self,
        key_hex: &str,
        tweak_hex: &str,
        text: &str,
        direction: Direction,
    ) -> Result<String, Error> {
        let result = self.checked(key_hex, tweak_hex, text).and_then(|(key, tweak, digits)| {
            run(
                self.key_length,
                &key,
                &tweak,
                &digits,
                self.radix,
                self.algorithm,
                direction,
            )
        });
        report(result, self.algorithm, self.radix, direction)
    }

    #[allow(clippy::type_complexity)]
    fn checked(
        &self,
        key_hex: &str,
        tweak_hex: &str,
        text: &str,
    ) -> Result<(Zeroizing<Vec<u8>>, Zeroizing<Vec<u8>>, Vec<u8>), Error> {
        let key = decode_hex(Field::Key, key_hex)?;
        if key.len() != self.key_length.bytes() {
            return Err(Error::InvalidKeyLength {
                expected: self.key_length.expected(),
                actual: key.len(),
            });
        }

        let digits = check_text(text, self.radix)?;

        let tweak = if self.use_tweak {
            decode_hex(Field::Tweak, tweak_hex)?
        } else {
            Zeroizing::new(self.algorithm.default_tweak().to_vec())
        };
        self.algorithm.check_tweak_length(tweak.len())?;

        self.validate()?;
        Ok((key, tweak, digits))
    }
}
