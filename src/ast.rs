use std::fmt;

use rust_decimal::Decimal;

use crate::{interpreter::units::UnitDef, span::Span};

/// The unit attached to a quantity literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuantityUnit {
    /// A currency sign or code as written, `"$"` or `"EUR"`.
    Currency(String),
    /// A measurement unit from the unit table.
    Measure(&'static UnitDef),
}

/// The builtin functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinFunction {
    /// `avg(...)`, `average(...)`, `average of ...`
    Average,
    /// `sqrt(...)`, `square root of ...`
    SquareRoot,
}

impl BuiltinFunction {
    /// The canonical name, used in messages and as the token value.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Average => "avg",
            Self::SquareRoot => "sqrt",
        }
    }

    /// Maps a name written before `(` to its builtin, ignoring case.
    ///
    /// # Example
    /// ```
    /// use calcnote::ast::BuiltinFunction;
    ///
    /// assert_eq!(BuiltinFunction::from_call_name("AVERAGE"), Some(BuiltinFunction::Average));
    /// assert_eq!(BuiltinFunction::from_call_name("sqrt"), Some(BuiltinFunction::SquareRoot));
    /// assert_eq!(BuiltinFunction::from_call_name("max"), None);
    /// ```
    #[must_use]
    pub fn from_call_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "avg" | "average" => Some(Self::Average),
            "sqrt" => Some(Self::SquareRoot),
            _ => None,
        }
    }
}

impl fmt::Display for BuiltinFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Every variant carries the [`Span`] it was parsed from. Literal variants
/// also keep their source text so values can be displayed exactly as the
/// user wrote them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A numeric literal. Percentages are stored as fractions (`20%` is
    /// `0.2`) and magnitudes are multiplied out (`5k` is `5000`).
    Number {
        value:  Decimal,
        /// The literal as written, such as `"1,000"` or `"20%"`.
        source: String,
        span:   Span,
    },
    /// A number with a currency or measurement unit.
    Quantity {
        value:  Decimal,
        unit:   QuantityUnit,
        /// The literal as written, such as `"$1,000.50"` or `"5 kg"`.
        source: String,
        span:   Span,
    },
    /// A boolean keyword. `name` is the word as written so that an
    /// assignment to it can be looked up again.
    Boolean {
        value: bool,
        name:  String,
        span:  Span,
    },
    /// Reference to a variable or constant by name.
    Identifier {
        name: String,
        span: Span,
    },
    /// A prefix `+` or `-`.
    Unary {
        op:      UnaryOperator,
        operand: Box<Self>,
        span:    Span,
    },
    /// An arithmetic operation.
    Binary {
        left:  Box<Self>,
        op:    BinaryOperator,
        right: Box<Self>,
        span:  Span,
    },
    /// A comparison, which always produces a boolean.
    Comparison {
        left:  Box<Self>,
        op:    ComparisonOperator,
        right: Box<Self>,
        span:  Span,
    },
    /// A call to a builtin function.
    FunctionCall {
        function:  BuiltinFunction,
        arguments: Vec<Self>,
        span:      Span,
    },
}

impl Expr {
    /// The source range this node was parsed from.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Number { span, .. }
            | Self::Quantity { span, .. }
            | Self::Boolean { span, .. }
            | Self::Identifier { span, .. }
            | Self::Unary { span, .. }
            | Self::Binary { span, .. }
            | Self::Comparison { span, .. }
            | Self::FunctionCall { span, .. } => *span,
        }
    }
}

/// A top-level statement. A parsed line holds at most one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `name = expression`
    Assignment {
        name:      String,
        name_span: Span,
        value:     Expr,
        span:      Span,
    },
    /// A bare expression.
    Expression {
        expr: Expr,
        span: Span,
    },
}

impl Statement {
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Assignment { span, .. } | Self::Expression { span, .. } => *span,
        }
    }

    #[must_use]
    pub const fn is_assignment(&self) -> bool {
        matches!(self, Self::Assignment { .. })
    }
}

/// Supported unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Prefix `+`.
    Plus,
    /// Prefix `-`.
    Negate,
}

/// Supported arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`).
    Add,
    /// Subtraction (`-`).
    Sub,
    /// Multiplication (`*`).
    Mul,
    /// Division (`/`).
    Div,
    /// Remainder (`%` after a space).
    Mod,
    /// Exponentiation (`^` or `**`).
    Pow,
}

/// Supported comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOperator {
    /// Equality (`==`).
    Equal,
    /// Inequality (`!=`).
    NotEqual,
    /// Less than (`<`).
    Less,
    /// Less than or equal (`<=`).
    LessEqual,
    /// Greater than (`>`).
    Greater,
    /// Greater than or equal (`>=`).
    GreaterEqual,
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Plus => "+",
            Self::Negate => "-",
        };
        write!(f, "{s}")
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "^",
        };
        write!(f, "{s}")
    }
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
        };
        write!(f, "{s}")
    }
}
