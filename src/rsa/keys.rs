// RSA Key Material
// Modulus and exponents supplied as external configuration, never generated here

use crate::error::{Error, Result};
use crate::rsa::bigint::DecimalBigInt;
use crate::rsa::encrypt::CiphertextPair;

/// RSA key constants for the block cipher.
///
/// Loaded once from decimal strings and injected wherever the arithmetic
/// needs them; there are no process-wide statics, so tests can supply toy
/// keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaKeys {
    pub modulus: DecimalBigInt,
    pub public_exp: DecimalBigInt,
    pub private_exp: DecimalBigInt,
}

impl RsaKeys {
    /// Parse and validate the three decimal key strings.
    ///
    /// Empty or non-numeric input is rejected, as is a zero modulus, which
    /// would turn every later reduction into a division by zero.
    pub fn from_decimal_strs(modulus: &str, public_exp: &str, private_exp: &str) -> Result<Self> {
        let modulus: DecimalBigInt = modulus.parse()?;
        let public_exp: DecimalBigInt = public_exp.parse()?;
        let private_exp: DecimalBigInt = private_exp.parse()?;

        if modulus.is_zero() {
            return Err(Error::DivisionByZero);
        }

        Ok(RsaKeys {
            modulus,
            public_exp,
            private_exp,
        })
    }

    /// Encrypt text line by line with the public exponent.
    pub fn encrypt(&self, text: &str) -> Result<Vec<CiphertextPair>> {
        super::encrypt::encrypt_text(text, self)
    }

    /// Decrypt ciphertext pairs with the private exponent.
    pub fn decrypt(&self, pairs: &[CiphertextPair]) -> Result<Vec<String>> {
        super::decrypt::decrypt_pairs(pairs, self)
    }
}
