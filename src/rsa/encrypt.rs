// Block Encryption
// Frames each plaintext line and encrypts its two halves independently

use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::rsa::codec;
use crate::rsa::framing;
use crate::rsa::keys::RsaKeys;
use crate::rsa::modexp::mod_exponent;

/// The two encrypted half-blocks of one plaintext line, as decimal strings.
pub type CiphertextPair = (String, String);

/// Encrypt text line by line, producing one ciphertext pair per line.
///
/// Lines carry no dependency on each other, so they are dispatched to the
/// rayon worker pool; output order matches input order. Collection
/// short-circuits on the first per-line error, abandoning in-flight work.
pub fn encrypt_text(text: &str, keys: &RsaKeys) -> Result<Vec<CiphertextPair>> {
    if text.is_empty() {
        return Err(Error::EmptyInput);
    }

    let lines: Vec<&str> = text.lines().collect();
    lines
        .par_iter()
        .enumerate()
        .map(|(idx, line)| encrypt_line(line, idx + 1, keys))
        .collect()
}

/// Encrypt a single line under its 1-based line number.
pub fn encrypt_line(line: &str, line_num: usize, keys: &RsaKeys) -> Result<CiphertextPair> {
    let content = framing::truncate(line);
    let framed = framing::frame(content, line_num);
    let (first, second) = framing::split_halves(&framed);

    Ok((encrypt_half(first, keys)?, encrypt_half(second, keys)?))
}

/// Encode one half-block and raise it to the public exponent.
fn encrypt_half(half: &str, keys: &RsaKeys) -> Result<String> {
    let encoded = codec::encode(half)?;
    let encrypted = mod_exponent(&encoded, &keys.public_exp, &keys.modulus)?;
    Ok(encrypted.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;

    fn toy_keys() -> RsaKeys {
        // n = 61 * 53, e = 17, d = 2753
        RsaKeys::from_decimal_strs("3233", "17", "2753").unwrap()
    }

    /// Oracle for one half-block: encode, then modpow with num-bigint.
    fn oracle_half(half: &str, keys: &RsaKeys) -> String {
        let encoded: BigUint = codec::encode(half).unwrap().to_string().parse().unwrap();
        let e: BigUint = keys.public_exp.to_string().parse().unwrap();
        let n: BigUint = keys.modulus.to_string().parse().unwrap();
        encoded.modpow(&e, &n).to_string()
    }

    #[test]
    fn test_empty_input_is_error() {
        assert_eq!(encrypt_text("", &toy_keys()), Err(Error::EmptyInput));
    }

    #[test]
    fn test_one_pair_per_line() {
        let pairs = encrypt_text("one\ntwo\nthree", &toy_keys()).unwrap();
        assert_eq!(pairs.len(), 3);
    }

    #[test]
    fn test_trailing_newline_adds_no_line() {
        let keys = toy_keys();
        let with = encrypt_text("one\ntwo\n", &keys).unwrap();
        let without = encrypt_text("one\ntwo", &keys).unwrap();
        assert_eq!(with, without);
    }

    #[test]
    fn test_lines_numbered_in_order() {
        let keys = toy_keys();
        let pairs = encrypt_text("same\nsame", &keys).unwrap();
        assert_eq!(pairs[0], encrypt_line("same", 1, &keys).unwrap());
        assert_eq!(pairs[1], encrypt_line("same", 2, &keys).unwrap());
        // Identical content still differs through the line-number marker
        assert_ne!(pairs[0], pairs[1]);
    }

    #[test]
    fn test_wide_char_is_error() {
        assert_eq!(
            encrypt_text("price: €5", &toy_keys()),
            Err(Error::CharOutOfRange(0x20AC))
        );
    }

    #[test]
    fn test_known_scenario_single_char() {
        // "A" frames to "001A" + 95 spaces + "001"; each encrypted half must
        // match the hand-checkable modular exponentiation of its encoding.
        let keys = toy_keys();
        let framed = framing::frame("A", 1);
        assert_eq!(framed, format!("001A{}001", " ".repeat(95)));

        let (first, second) = framing::split_halves(&framed);
        let pairs = encrypt_text("A", &keys).unwrap();
        assert_eq!(pairs, vec![(oracle_half(first, &keys), oracle_half(second, &keys))]);
    }
}
