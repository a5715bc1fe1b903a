// decimal_rsa - RSA-style block encryption over decimal big integers
// Command-line dispatch and I/O belong to the caller; this crate is the core

pub mod error;
pub mod rsa;

pub use error::{Error, Result};
pub use rsa::{
    decrypt_pairs, encrypt_text, mod_exponent, pair_ciphertext_lines, CiphertextPair,
    DecimalBigInt, RsaKeys,
};
