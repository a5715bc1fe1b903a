// Modular Exponentiation
// Square-and-multiply over DecimalBigInt with parallel per-round products

use crate::error::Result;
use crate::rsa::bigint::DecimalBigInt;

/// Compute `base ^ exponent mod modulus` by square-and-multiply.
///
/// Every round squares the running base and, when the exponent is odd,
/// folds the base into the accumulator. The two products are independent,
/// so they run concurrently on the rayon pool; the next round waits for
/// both before halving the exponent. The exponent strictly decreases each
/// round, so the loop terminates after O(log exponent) iterations.
pub fn mod_exponent(
    base: &DecimalBigInt,
    exponent: &DecimalBigInt,
    modulus: &DecimalBigInt,
) -> Result<DecimalBigInt> {
    let two = DecimalBigInt::from_u64(2);

    let mut result = DecimalBigInt::one();
    let mut curr_base = base.checked_rem(modulus)?;
    let mut curr_exp = exponent.clone();

    while !curr_exp.is_zero() {
        let multiply = curr_exp.is_odd();
        let (next_result, next_base) = rayon::join(
            || {
                if multiply {
                    (&result * &curr_base).checked_rem(modulus)
                } else {
                    Ok(result.clone())
                }
            },
            || (&curr_base * &curr_base).checked_rem(modulus),
        );

        result = next_result?;
        curr_base = next_base?;
        curr_exp = curr_exp.checked_div(&two)?;
    }

    Ok(result)
}
