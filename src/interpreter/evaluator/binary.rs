/// Dispatch for arithmetic operators and unit propagation.
pub mod core;
/// Checked decimal arithmetic.
pub mod scalar;
/// `base ± base × percentage`.
pub mod percent;
/// Exponentiation.
pub mod power;
/// Comparison operators.
pub mod comparison;
