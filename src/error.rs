// Error taxonomy for the decimal RSA core
// Malformed data is rejected at the boundary where it enters the core

use thiserror::Error;

/// Errors reported by the arithmetic, codec and block-protocol layers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A decimal-number input was empty or contained a non-digit character.
    #[error("invalid decimal input: {0}")]
    InvalidDigit(String),

    /// Division or modulo by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Subtraction would produce a negative value.
    #[error("subtraction underflow: minuend is smaller than subtrahend")]
    NegativeResult,

    /// A ciphertext line was unpaired or not a decimal number.
    #[error("malformed ciphertext: {0}")]
    MalformedCiphertext(String),

    /// A character's code point does not fit in three decimal digits.
    #[error("character code point {0} does not fit in three decimal digits")]
    CharOutOfRange(u32),

    /// No text to encrypt, or no ciphertext pairs to decrypt.
    #[error("empty input")]
    EmptyInput,
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
