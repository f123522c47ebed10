/// Divides `dividend` by `divisor`, rounding toward negative infinity.
///
/// Returns `None` if `divisor` is zero or the result overflows
/// (`i64::MIN / -1`).
///
/// # Example
/// ```
/// use scoobylang::util::num::checked_floor_div;
///
/// assert_eq!(checked_floor_div(7, 2), Some(3));
/// assert_eq!(checked_floor_div(-7, 2), Some(-4));
/// assert_eq!(checked_floor_div(7, 0), None);
/// ```
#[must_use]
pub const fn checked_floor_div(dividend: i64, divisor: i64) -> Option<i64> {
    let Some(quotient) = dividend.checked_div(divisor) else {
        return None;
    };
    if dividend % divisor != 0 && (dividend < 0) != (divisor < 0) {
        Some(quotient - 1)
    } else {
        Some(quotient)
    }
}
