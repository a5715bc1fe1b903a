// Block Decryption
// Recovers plaintext lines from ciphertext pairs

use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::rsa::bigint::DecimalBigInt;
use crate::rsa::codec;
use crate::rsa::encrypt::CiphertextPair;
use crate::rsa::framing;
use crate::rsa::keys::RsaKeys;
use crate::rsa::modexp::mod_exponent;

/// Group a flat sequence of ciphertext lines into pairs.
///
/// Decryption consumes two lines per plaintext line; a trailing unpaired
/// line is an error, never silently dropped.
pub fn pair_ciphertext_lines<I, S>(lines: I) -> Result<Vec<CiphertextPair>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut pairs = Vec::new();
    let mut iter = lines.into_iter();
    while let Some(first) = iter.next() {
        match iter.next() {
            Some(second) => pairs.push((first.into(), second.into())),
            None => {
                return Err(Error::MalformedCiphertext(
                    "odd number of ciphertext lines".to_string(),
                ));
            }
        }
    }
    Ok(pairs)
}

/// Decrypt a sequence of ciphertext pairs into plaintext lines.
///
/// Pairs are independent and run on the rayon worker pool; output order
/// matches input order.
pub fn decrypt_pairs(pairs: &[CiphertextPair], keys: &RsaKeys) -> Result<Vec<String>> {
    if pairs.is_empty() {
        return Err(Error::EmptyInput);
    }

    pairs
        .par_iter()
        .map(|pair| decrypt_pair(pair, keys))
        .collect()
}

/// Decrypt one ciphertext pair.
///
/// The two halves share no state and are decrypted concurrently, then the
/// reassembled frame loses its markers and trailing padding.
pub fn decrypt_pair(pair: &CiphertextPair, keys: &RsaKeys) -> Result<String> {
    let (first, second) = rayon::join(
        || decrypt_half(&pair.0, keys),
        || decrypt_half(&pair.1, keys),
    );

    let framed = format!("{}{}", first?, second?);
    Ok(framing::unframe(&framed))
}

/// Parse one ciphertext block, raise it to the private exponent and decode.
fn decrypt_half(block: &str, keys: &RsaKeys) -> Result<String> {
    let value: DecimalBigInt = block.parse().map_err(|_| {
        Error::MalformedCiphertext(format!("not a decimal number: {block:?}"))
    })?;
    let decrypted = mod_exponent(&value, &keys.private_exp, &keys.modulus)?;
    codec::decode(&decrypted)
}
