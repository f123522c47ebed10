/// Integer arithmetic helpers.
///
/// Checked integer routines that the standard library does not provide
/// directly, such as division rounding toward negative infinity.
pub mod num;
