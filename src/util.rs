/// Numeric conversion helpers.
///
/// This module provides checked arithmetic and conversion routines around
/// [`rust_decimal::Decimal`]: literal parsing, exact integer powers, and the
/// round trip through `f64` used where exact decimal math is unavailable.
///
/// Every function returns an `Option` or `Result`; none of them panic on
/// overflow.
pub mod num;
