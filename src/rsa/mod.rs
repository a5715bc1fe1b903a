// RSA Module - Main module file
// Exports the decimal arithmetic core and the block cipher built on it

pub mod bigint;
pub mod codec;
pub mod decrypt;
pub mod encrypt;
pub mod framing;
pub mod keys;
pub mod modexp;

pub use bigint::DecimalBigInt;
pub use decrypt::{decrypt_pairs, pair_ciphertext_lines};
pub use encrypt::{encrypt_text, CiphertextPair};
pub use keys::RsaKeys;
pub use modexp::mod_exponent;
