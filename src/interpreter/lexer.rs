/// Main tokenizer loop and identifier handling.
pub mod core;
/// Number, currency amount and unit-phrase scanning.
pub mod number;
/// Date and duration phrases.
pub mod date;
/// Post-pass that joins multi-word function names.
pub mod merge;
/// Character cursor with checkpoints for bounded backtracking.
pub mod scanner;
/// Operators and punctuation.
pub mod symbol;
/// Token kinds and the token record.
pub mod token;
/// Case-insensitive keyword, boolean, month and time-unit words.
pub mod word;

pub use self::{
    core::{
        LexResult, MAX_IDENTIFIER_LEN, MAX_LINE_OPERATORS, MAX_NESTING_DEPTH, MAX_NUMBER_LEN,
        MAX_UNIT_WORDS, tokenize,
    },
    token::{Token, TokenKind},
};
