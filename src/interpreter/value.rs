/// The runtime value type.
///
/// Declares [`core::Value`], its constructors, and the accessors the
/// evaluator uses to read amounts, currency symbols and percentage-ness.
pub mod core;
/// Display formatting.
///
/// Renders values for people: literals exactly as written, computed
/// currency amounts with two decimals, and optional thousands grouping.
pub mod format;
