//! `0`/`1` text form of bitstrings.

use bitvec::prelude::*;

use crate::error::{Error, Result};
use crate::table::Bitstring;

/// Render bits as a string of `'0'` and `'1'`.
pub fn to_string(bits: &BitSlice<u8, Msb0>) -> String {
    bits.iter()
        .by_vals()
        .map(|b| if b { '1' } else { '0' })
        .collect()
}

/// Parse a string of `'0'` and `'1'` into bits.
pub fn parse(text: &str) -> Result<Bitstring> {
    let mut bits = Bitstring::with_capacity(text.len());
    for (position, digit) in text.chars().enumerate() {
        match digit {
            '0' => bits.push(false),
            '1' => bits.push(true),
            _ => return Err(Error::InvalidBitDigit { digit, position }),
        }
    }
    Ok(bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_roundtrip() {
        let bits = parse("0110100").unwrap();
        assert_eq!(bits.len(), 7);
        assert_eq!(to_string(&bits), "0110100");
    }

    #[test]
    fn test_empty() {
        assert!(parse("").unwrap().is_empty());
        assert_eq!(to_string(BitSlice::<u8, Msb0>::empty()), "");
    }

    #[test]
    fn test_rejects_other_digits() {
        let err = parse("01x1").unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidBitDigit {
                digit: 'x',
                position: 2
            }
        ));
    }
}
