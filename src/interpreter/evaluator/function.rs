/// The builtin table, arity checks and call dispatch.
pub mod core;
/// The `avg` function implementation.
///
/// Averages its arguments, keeping a currency symbol they all share.
pub mod average;
/// The `sqrt` (square root) function implementation.
///
/// Computes the square root of a single non-negative number or amount.
pub mod sqrt;
