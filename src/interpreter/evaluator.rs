/// Binary operator evaluation logic.
///
/// Handles arithmetic with the currency and percentage rules, exponentiation
/// and comparisons.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements prefix plus and minus, which keep the operand's variant.
pub mod unary;

/// Core evaluation logic.
///
/// Contains the entry points, statement execution and the expression
/// dispatch.
pub mod core;

/// The variable store threaded through one evaluation session.
pub mod environment;

/// Utility functions for evaluation.
///
/// Reserved constants, boolean keyword lookups and shared error builders.
pub mod utils;

/// Function evaluation.
///
/// Handles builtin function calls, argument checking, and return value
/// computation.
pub mod function;

pub use self::{
    core::{EvalResult, evaluate, evaluate_from_line},
    environment::Environment,
};
