//! Common types shared across the FF1 and FF3 cipher implementations.

use core::fmt;

use num_bigint::BigUint;
use thiserror::Error;

/// Unified error type for all FPE operations.
///
/// Every variant is produced before the first Feistel round runs, so a
/// failed call never yields partial output.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Key length does not match the selected AES strength.
    #[error("invalid key length: got {actual} bytes, expected {expected}")]
    InvalidKeyLength {
        /// Accepted key length(s).
        expected: &'static str,
        /// Observed key length in bytes.
        actual: usize,
    },

    /// Tweak length is not accepted by the selected algorithm.
    #[error("invalid tweak length: got {actual} bytes, expected {expected}")]
    InvalidTweakLength {
        /// Accepted tweak length(s).
        expected: &'static str,
        /// Observed tweak length in bytes.
        actual: usize,
    },

    /// A symbol is not part of the alphabet for the radix.
    #[error("invalid symbol {symbol:?} at position {position} for radix {radix}")]
    InvalidSymbolForRadix {
        /// The offending symbol.
        symbol: char,
        /// Zero-based symbol position in the input.
        position: usize,
        /// Radix in effect.
        radix: u32,
    },

    /// Input has fewer symbols than the algorithm accepts.
    #[error("message too short: {length} symbols, minimum is {minimum}")]
    MessageTooShort {
        /// Observed length in symbols.
        length: usize,
        /// Minimum length in symbols.
        minimum: usize,
    },

    /// Input has more symbols than the algorithm accepts.
    #[error("message too long: {length} symbols, maximum is {maximum}")]
    MessageTooLong {
        /// Observed length in symbols.
        length: usize,
        /// Maximum length in symbols.
        maximum: usize,
    },

    /// A hex-encoded field has odd length or non-hex characters.
    #[error("malformed hex input in {field}: {source}")]
    MalformedHexInput {
        /// Field that failed to decode.
        field: Field,
        /// Underlying decode failure.
        #[source]
        source: hex::FromHexError,
    },

    /// Radix outside of [2, 62].
    #[error("invalid radix {0}, must be between 2 and 62")]
    InvalidRadix(u32),

    /// An integer does not fit the fixed byte width it must be encoded into.
    #[error("value does not fit in {width} bytes")]
    WidthOverflow {
        /// Target width in bytes.
        width: usize,
    },
}

/// Input field an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// AES key.
    Key,
    /// Tweak.
    Tweak,
    /// Plaintext or ciphertext.
    Text,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Key => write!(f, "key"),
            Field::Tweak => write!(f, "tweak"),
            Field::Text => write!(f, "text"),
        }
    }
}

/// AES block length in bytes.
pub const BLOCK_LENGTH: usize = 16;

/// Minimum numeral string length accepted by every mode.
pub const MIN_MESSAGE_LENGTH: usize = 2;

/// Direction of cipher operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

/// XOR two 16-byte blocks, storing result in the first argument.
#[inline]
pub fn xor_block(dst: &mut [u8; BLOCK_LENGTH], src: &[u8; BLOCK_LENGTH]) {
    for i in 0..BLOCK_LENGTH {
        dst[i] ^= src[i];
    }
}

/// Write `num` big-endian into `out`, right-justified and zero-padded.
///
/// Fails instead of truncating when `num` needs more than `out.len()` bytes.
pub fn write_be(num: &BigUint, out: &mut [u8]) -> Result<(), Error> {
    let bytes = num.to_bytes_be();
    if bytes.len() > out.len() {
        return Err(Error::WidthOverflow { width: out.len() });
    }
    let split = out.len() - bytes.len();
    out[..split].fill(0);
    out[split..].copy_from_slice(&bytes);
    Ok(())
}

/// `(a + b) mod m`.
pub fn add_mod(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    (a + b) % m
}

/// `(a - b) mod m`, lifted into `[0, m)` without going negative.
pub fn sub_mod(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    let b = b % m;
    (a % m + m - b) % m
}

/// Reject inputs shorter than [`MIN_MESSAGE_LENGTH`].
pub fn check_min_length(length: usize) -> Result<(), Error> {
    if length < MIN_MESSAGE_LENGTH {
        return Err(Error::MessageTooShort {
            length,
            minimum: MIN_MESSAGE_LENGTH,
        });
    }
    Ok(())
}
