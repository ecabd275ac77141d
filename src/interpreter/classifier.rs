/// Line types and the ordered decision procedure.
pub mod core;
/// Walks a parsed expression for names the environment cannot resolve.
pub mod walk;

pub use self::core::{LineType, classify, classify_at};
