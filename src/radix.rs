//! Conversion between numeral strings and arbitrary-precision integers.
//!
//! Symbols are drawn from a single 62-character alphabet. A radix `r` uses the
//! first `r` symbols, so radix 10 is `0-9`, radix 16 is `0-9A-F` and radix 62
//! adds the lowercase letters after the uppercase ones.
//!
//! Internally a numeral string is a sequence of digit values (`u8`, each below
//! the radix), most significant first.

use num_bigint::BigUint;

use crate::common::Error;

/// Symbol alphabet; radix `r` uses `ALPHABET[..r]`.
pub const ALPHABET: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Smallest supported radix.
pub const MIN_RADIX: u32 = 2;

/// Largest supported radix (size of [`ALPHABET`]).
pub const MAX_RADIX: u32 = 62;

/// Check that a radix is within `[MIN_RADIX, MAX_RADIX]`.
pub fn check_radix(radix: u32) -> Result<(), Error> {
    if radix < MIN_RADIX || radix > MAX_RADIX {
        return Err(Error::InvalidRadix(radix));
    }
    Ok(())
}

/// Alphabet index of a symbol, independent of radix.
pub const fn symbol_index(symbol: char) -> Option<u8> {
    match symbol {
        '0'..='9' => Some(symbol as u8 - b'0'),
        'A'..='Z' => Some(symbol as u8 - b'A' + 10),
        'a'..='z' => Some(symbol as u8 - b'a' + 36),
        _ => None,
    }
}

/// Symbol for a digit value, if it is inside the alphabet.
pub fn digit_symbol(digit: u8) -> Option<char> {
    ALPHABET.get(usize::from(digit)).map(|&b| b as char)
}

/// Parse a numeral string into digit values.
pub fn parse_digits(s: &str, radix: u32) -> Result<Vec<u8>, Error> {
    s.chars()
        .enumerate()
        .map(|(position, symbol)| match symbol_index(symbol) {
            Some(d) if u32::from(d) < radix => Ok(d),
            _ => Err(Error::InvalidSymbolForRadix {
                symbol,
                position,
                radix,
            }),
        })
        .collect()
}

/// Check that every digit value is below the radix.
pub fn check_digits(digits: &[u8], radix: u32) -> Result<(), Error> {
    match digits.iter().position(|&d| u32::from(d) >= radix) {
        Some(position) => Err(Error::InvalidSymbolForRadix {
            symbol: digit_symbol(digits[position]).unwrap_or(char::REPLACEMENT_CHARACTER),
            position,
            radix,
        }),
        None => Ok(()),
    }
}

/// Render digit values as a numeral string.
///
/// Digits must already be below the radix in use.
pub fn render_digits(digits: &[u8]) -> String {
    digits
        .iter()
        .map(|&d| digit_symbol(d).unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect()
}

/// NUM_radix(X): fold digits most significant first into an integer.
pub fn digits_to_num(digits: &[u8], radix: u32) -> BigUint {
    digits
        .iter()
        .fold(BigUint::ZERO, |acc, &d| acc * radix + u32::from(d))
}

/// STR^length_radix(x): exactly `length` digits, most significant first.
///
/// Shorter representations are left-padded with zeros; when `num` needs more
/// than `length` digits the most significant ones are dropped.
pub fn num_to_digits(num: &BigUint, radix: u32, length: usize) -> Vec<u8> {
    let mut digits = num.to_radix_le(radix);
    digits.resize(length, 0);
    digits.reverse();
    digits
}

/// Convert a numeral string to an integer.
pub fn str_to_num(s: &str, radix: u32) -> Result<BigUint, Error> {
    check_radix(radix)?;
    let digits = parse_digits(s, radix)?;
    Ok(digits_to_num(&digits, radix))
}

/// Convert an integer to a numeral string of exactly `length` symbols.
pub fn num_to_str(num: &BigUint, radix: u32, length: usize) -> Result<String, Error> {
    check_radix(radix)?;
    Ok(render_digits(&num_to_digits(num, radix, length)))
}

/// `radix^exponent`.
pub fn radix_pow(radix: u32, exponent: usize) -> BigUint {
    // Lengths are bounded by u32 before any cipher reaches this point.
    BigUint::from(radix).pow(exponent as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_indices() {
        for (i, &b) in ALPHABET.iter().enumerate() {
            assert_eq!(symbol_index(b as char), Some(i as u8));
        }
        assert_eq!(symbol_index('-'), None);
        assert_eq!(symbol_index(' '), None);
    }

    #[test]
    fn test_str_to_num_decimal() {
        assert_eq!(
            str_to_num("0123456789", 10).unwrap(),
            BigUint::from(123_456_789u32)
        );
    }

    #[test]
    fn test_str_to_num_invalid_symbol() {
        assert_eq!(
            str_to_num("12G4", 10),
            Err(Error::InvalidSymbolForRadix {
                symbol: 'G',
                position: 2,
                radix: 10
            })
        );
        assert!(matches!(
            str_to_num("12$", 62),
            Err(Error::InvalidSymbolForRadix { symbol: '$', .. })
        ));
    }

    #[test]
    fn test_lowercase_requires_radix_above_36() {
        assert!(str_to_num("abc", 36).is_err());
        assert!(str_to_num("ABC", 36).is_ok());
        assert_eq!(str_to_num("a", 62).unwrap(), BigUint::from(36u32));
    }

    #[test]
    fn test_num_to_str_pads() {
        assert_eq!(num_to_str(&BigUint::from(255u32), 16, 4).unwrap(), "00FF");
        assert_eq!(num_to_str(&BigUint::ZERO, 10, 3).unwrap(), "000");
    }

    #[test]
    fn test_num_to_str_drops_high_digits() {
        assert_eq!(num_to_str(&BigUint::from(12_345u32), 10, 3).unwrap(), "345");
    }

    #[test]
    fn test_wide_values() {
        // 20 symbols of radix 62 exceed 2^119.
        let s = "zzzzzzzzzzzzzzzzzzzz";
        let num = str_to_num(s, 62).unwrap();
        assert_eq!(num, radix_pow(62, 20) - 1u32);
        assert!(num.bits() > 119);
        assert_eq!(num_to_str(&num, 62, 20).unwrap(), s);
    }

    #[test]
    fn test_check_digits() {
        assert!(check_digits(&[0, 1, 9], 10).is_ok());
        assert_eq!(
            check_digits(&[0, 10], 10),
            Err(Error::InvalidSymbolForRadix {
                symbol: 'A',
                position: 1,
                radix: 10
            })
        );
    }

    #[test]
    fn test_check_radix() {
        assert!(check_radix(2).is_ok());
        assert!(check_radix(62).is_ok());
        assert_eq!(check_radix(1), Err(Error::InvalidRadix(1)));
        assert_eq!(check_radix(63), Err(Error::InvalidRadix(63)));
    }
}
