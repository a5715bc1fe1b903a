// Decimal Big Integer Arithmetic
// Arbitrary-precision non-negative integers, one decimal digit per element

use std::cmp::Ordering;
use std::fmt;
use std::ops::Mul;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Arbitrary-precision non-negative integer stored as decimal digits,
/// most significant first.
///
/// Invariant: no leading zero unless the value is zero, which is the single
/// digit `0`. Values are immutable; every operation builds a new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecimalBigInt {
    digits: Vec<u8>,
}

impl DecimalBigInt {
    /// The value zero.
    pub fn zero() -> Self {
        DecimalBigInt { digits: vec![0] }
    }

    /// The value one.
    pub fn one() -> Self {
        DecimalBigInt { digits: vec![1] }
    }

    /// Create a big integer from u64.
    pub fn from_u64(mut n: u64) -> Self {
        if n == 0 {
            return Self::zero();
        }
        let mut digits = Vec::new();
        while n > 0 {
            digits.push((n % 10) as u8);
            n /= 10;
        }
        digits.reverse();
        DecimalBigInt { digits }
    }

    /// Build from raw digit values, trimming leading zeros to restore the
    /// canonical form.
    fn from_digits(mut digits: Vec<u8>) -> Self {
        let first_nonzero = digits.iter().position(|&d| d != 0).unwrap_or(digits.len());
        if first_nonzero > 0 {
            digits.drain(..first_nonzero);
        }
        if digits.is_empty() {
            digits.push(0);
        }
        DecimalBigInt { digits }
    }

    pub fn is_zero(&self) -> bool {
        self.digits == [0]
    }

    /// Parity of the least significant decimal digit.
    pub fn is_odd(&self) -> bool {
        self.digits[self.digits.len() - 1] % 2 == 1
    }

    /// Number of decimal digits in the canonical representation.
    pub fn digit_count(&self) -> usize {
        self.digits.len()
    }

    /// Subtract `other` from `self` with digit-by-digit borrow propagation,
    /// least significant digit first.
    ///
    /// The borrow chain assumes a non-negative difference, so a larger
    /// `other` is rejected up front rather than producing garbage digits.
    pub fn checked_sub(&self, other: &DecimalBigInt) -> Result<DecimalBigInt> {
        if self < other {
            return Err(Error::NegativeResult);
        }
        let mut digits = self.digits.clone();
        sub_in_place(&mut digits, &other.digits);
        Ok(DecimalBigInt { digits })
    }

    /// Long division, returning the quotient. Fails on a zero divisor.
    pub fn checked_div(&self, divisor: &DecimalBigInt) -> Result<DecimalBigInt> {
        Ok(self.div_rem(divisor)?.0)
    }

    /// Long division, returning the remainder. Fails on a zero divisor.
    pub fn checked_rem(&self, divisor: &DecimalBigInt) -> Result<DecimalBigInt> {
        Ok(self.div_rem(divisor)?.1)
    }

    /// Digit-by-digit long division.
    ///
    /// Each dividend digit is appended to a running remainder, then the
    /// divisor is subtracted from the remainder until it no longer fits;
    /// the subtraction count is that position's quotient digit (at most
    /// nine, since the remainder stays below divisor * 10).
    pub fn div_rem(&self, divisor: &DecimalBigInt) -> Result<(DecimalBigInt, DecimalBigInt)> {
        if divisor.is_zero() {
            return Err(Error::DivisionByZero);
        }

        let mut quotient = Vec::with_capacity(self.digits.len());
        let mut remainder: Vec<u8> = Vec::with_capacity(divisor.digits.len() + 1);

        for &digit in &self.digits {
            remainder.push(digit);
            while remainder.len() > 1 && remainder[0] == 0 {
                remainder.remove(0);
            }

            let mut q = 0u8;
            while cmp_digit_slices(&remainder, &divisor.digits) != Ordering::Less {
                sub_in_place(&mut remainder, &divisor.digits);
                q += 1;
            }
            quotient.push(q);
        }

        Ok((
            DecimalBigInt::from_digits(quotient),
            DecimalBigInt::from_digits(remainder),
        ))
    }
}

/// Compare two canonical digit slices: the shorter one is the smaller value,
/// equal lengths compare lexicographically.
fn cmp_digit_slices(a: &[u8], b: &[u8]) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// In-place digit subtraction with borrow, requiring `a >= b`. Trims the
/// result back to canonical form.
fn sub_in_place(a: &mut Vec<u8>, b: &[u8]) {
    let offset = a.len() - b.len();
    let mut borrow = 0i8;
    for k in (0..a.len()).rev() {
        let subtrahend = if k >= offset { b[k - offset] as i8 } else { 0 };
        let mut diff = a[k] as i8 - subtrahend - borrow;
        if diff < 0 {
            diff += 10;
            borrow = 1;
        } else {
            borrow = 0;
        }
        a[k] = diff as u8;
    }
    let first_nonzero = a.iter().position(|&d| d != 0).unwrap_or(a.len() - 1);
    if first_nonzero > 0 {
        a.drain(..first_nonzero);
    }
}

impl Ord for DecimalBigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_digit_slices(&self.digits, &other.digits)
    }
}

impl PartialOrd for DecimalBigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Mul for &DecimalBigInt {
    type Output = DecimalBigInt;

    /// Grade-school long multiplication; the accumulation buffer is
    /// len(a) + len(b) digits and carries propagate leftward within it.
    fn mul(self, other: &DecimalBigInt) -> DecimalBigInt {
        let mut product = vec![0u8; self.digits.len() + other.digits.len()];

        for i in (0..self.digits.len()).rev() {
            if self.digits[i] == 0 {
                continue;
            }

            let mut carry = 0u32;
            for j in (0..other.digits.len()).rev() {
                let curr = self.digits[i] as u32 * other.digits[j] as u32
                    + product[i + j + 1] as u32
                    + carry;
                product[i + j + 1] = (curr % 10) as u8;
                carry = curr / 10;
            }
            product[i] += carry as u8;
        }

        DecimalBigInt::from_digits(product)
    }
}

impl FromStr for DecimalBigInt {
    type Err = Error;

    /// Parse a decimal-digit string. Empty input and non-digit characters
    /// are rejected here, the boundary where text enters the arithmetic.
    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(Error::InvalidDigit("empty string".to_string()));
        }
        let mut digits = Vec::with_capacity(s.len());
        for ch in s.chars() {
            match ch.to_digit(10) {
                Some(d) => digits.push(d as u8),
                None => {
                    return Err(Error::InvalidDigit(format!("non-digit character {ch:?}")));
                }
            }
        }
        Ok(DecimalBigInt::from_digits(digits))
    }
}

impl fmt::Display for DecimalBigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &d in &self.digits {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}
