// Text Codec
// Characters to and from concatenated three-digit decimal code points

use crate::error::{Error, Result};
use crate::rsa::bigint::DecimalBigInt;

/// Width of one encoded character in decimal digits.
pub const CODE_WIDTH: usize = 3;

/// Largest code point that fits in one three-digit group.
const MAX_CODE_POINT: u32 = 999;

/// Encode text as a big integer: each character becomes its code point,
/// zero-padded to exactly three digits, concatenated in order.
///
/// A code point above 999 cannot be represented in a fixed-width group and
/// is rejected rather than truncated.
pub fn encode(text: &str) -> Result<DecimalBigInt> {
    let mut digits = String::with_capacity(text.len() * CODE_WIDTH);
    for ch in text.chars() {
        let code = ch as u32;
        if code > MAX_CODE_POINT {
            return Err(Error::CharOutOfRange(code));
        }
        digits.push_str(&format!("{code:03}"));
    }
    digits.parse()
}

/// Decode a big integer back into text.
///
/// The digit string is left-padded with zeros to a multiple of three before
/// grouping; values coming out of modular exponentiation routinely lose the
/// leading zeros of their first code point, so the padding step must come
/// first.
pub fn decode(value: &DecimalBigInt) -> Result<String> {
    let mut digits = value.to_string();
    let partial = digits.len() % CODE_WIDTH;
    if partial != 0 {
        digits.insert_str(0, &"0".repeat(CODE_WIDTH - partial));
    }

    let mut text = String::with_capacity(digits.len() / CODE_WIDTH);
    for group in digits.as_bytes().chunks(CODE_WIDTH) {
        let code = group
            .iter()
            .fold(0u32, |acc, &b| acc * 10 + (b - b'0') as u32);
        let ch = char::from_u32(code).ok_or(Error::CharOutOfRange(code))?;
        text.push(ch);
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_single_char() {
        // 'A' is code point 65
        assert_eq!(encode("A").unwrap().to_string(), "65");
    }

    #[test]
    fn test_encode_concatenates_groups() {
        // 'H' = 072, 'i' = 105; the leading zero of the first group drops
        // out of the numeric value
        assert_eq!(encode("Hi").unwrap().to_string(), "72105");
    }

    #[test]
    fn test_encode_rejects_wide_char() {
        // U+20AC (euro sign) needs four digits
        assert_eq!(encode("€"), Err(Error::CharOutOfRange(0x20AC)));
    }

    #[test]
    fn test_encode_empty_is_error() {
        assert!(matches!(encode(""), Err(Error::InvalidDigit(_))));
    }

    #[test]
    fn test_decode_pads_to_group_width() {
        // "65" regains its leading zero before grouping
        let value: DecimalBigInt = "65".parse().unwrap();
        assert_eq!(decode(&value).unwrap(), "A");
    }

    #[test]
    fn test_roundtrip_ascii() {
        for s in ["A", "Hi", "Hello, world!", "   spaced   ", "0123456789"] {
            assert_eq!(decode(&encode(s).unwrap()).unwrap(), s);
        }
    }

    #[test]
    fn test_roundtrip_high_code_points() {
        // Greek pi is U+03C0 = 960, still within one group
        let s = "a\u{03C0}z";
        assert_eq!(decode(&encode(s).unwrap()).unwrap(), s);
    }

    #[test]
    fn test_roundtrip_leading_low_code() {
        // A first character below 100 loses a zero in the numeric form
        let s = "\u{7}after-bell";
        let encoded = encode(s).unwrap();
        // 11 chars encode to 33 digits; the two leading zeros of 007 drop out
        assert_eq!(encoded.digit_count(), 31);
        assert_eq!(decode(&encoded).unwrap(), s);
    }
}
