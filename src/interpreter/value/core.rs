use rust_decimal::Decimal;

use crate::{error::EvalError, interpreter::evaluator::core::EvalResult, span::Span};

/// Represents a runtime value in the interpreter.
///
/// Values are immutable; every operation builds a new one. The optional
/// `format` on numeric variants is the source text of the literal the value
/// came from and is dropped by any computation.
#[derive(Debug, Clone)]
pub enum Value {
    /// A plain number.
    Number {
        value:  Decimal,
        /// The literal as written, such as `"1,000"` or `"20%"`.
        format: Option<String>,
    },
    /// An amount of money.
    Currency {
        value:  Decimal,
        /// `"$"`, `"€"` or a three-letter code as written.
        symbol: String,
        /// The literal as written, such as `"$1,000.50"`.
        format: Option<String>,
    },
    /// A truth value, produced by comparisons and boolean keywords.
    Boolean(bool),
}

/// Numbers compare by value alone, currencies by value and symbol. Source
/// formatting never matters.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number { value: a, .. }, Self::Number { value: b, .. }) => a == b,
            (Self::Currency { value: a, symbol: s, .. },
             Self::Currency { value: b, symbol: t, .. }) => a == b && s == t,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            _ => false,
        }
    }
}

impl From<Decimal> for Value {
    fn from(value: Decimal) -> Self {
        Self::number(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::number(Decimal::from(value))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl Value {
    /// A number with no source formatting.
    #[must_use]
    pub const fn number(value: Decimal) -> Self {
        Self::Number { value,
                       format: None }
    }

    /// A currency amount with no source formatting.
    ///
    /// # Example
    /// ```
    /// use calcnote::interpreter::value::core::Value;
    /// use rust_decimal::Decimal;
    ///
    /// let price = Value::currency(Decimal::from(12), "$");
    /// assert_eq!(price.symbol(), Some("$"));
    /// assert_ne!(price, Value::currency(Decimal::from(12), "€"));
    /// ```
    #[must_use]
    pub fn currency(value: Decimal, symbol: impl Into<String>) -> Self {
        Self::Currency { value,
                         symbol: symbol.into(),
                         format: None }
    }

    /// A percentage holding `fraction`, displayed as a percent.
    ///
    /// The result is recognized by [`Value::is_percentage`], so it keeps the
    /// percentage rules for `+` and `-`.
    ///
    /// # Example
    /// ```
    /// use calcnote::interpreter::value::core::Value;
    /// use rust_decimal::Decimal;
    ///
    /// let rate = Value::percentage(Decimal::new(25, 2));
    /// assert!(rate.is_percentage());
    /// assert_eq!(rate.to_string(), "25%");
    /// ```
    #[must_use]
    pub fn percentage(fraction: Decimal) -> Self {
        let format = fraction.checked_mul(Decimal::ONE_HUNDRED)
                             .map(|percent| format!("{}%", percent.normalize()));
        Self::Number { value: fraction,
                       format }
    }

    /// Attaches source formatting.
    #[must_use]
    pub fn with_format(self, text: impl Into<String>) -> Self {
        match self {
            Self::Number { value, .. } => Self::Number { value,
                                                         format: Some(text.into()) },
            Self::Currency { value, symbol, .. } => Self::Currency { value,
                                                                     symbol,
                                                                     format: Some(text.into()) },
            Self::Boolean(_) => self,
        }
    }

    /// A value of the same variant and symbol holding `amount`, with no
    /// source formatting.
    #[must_use]
    pub fn with_amount(&self, amount: Decimal) -> Self {
        match self {
            Self::Currency { symbol, .. } => Self::currency(amount, symbol.clone()),
            _ => Self::number(amount),
        }
    }

    /// The numeric amount, or `None` for booleans.
    #[must_use]
    pub const fn amount(&self) -> Option<Decimal> {
        match self {
            Self::Number { value, .. } | Self::Currency { value, .. } => Some(*value),
            Self::Boolean(_) => None,
        }
    }

    /// The numeric amount, or a type error naming `context`.
    ///
    /// # Parameters
    /// - `context`: What needed a number, for the message.
    /// - `span`: Source range for error reporting.
    pub fn expect_amount(&self, context: &str, span: Span) -> EvalResult<Decimal> {
        self.amount()
            .ok_or_else(|| EvalError::TypeMismatch { details: format!("{context} needs a number, found {}",
                                                                      self.type_name()),
                                                     line:    span.line,
                                                     column:  span.column, })
    }

    /// The currency symbol, if this is a currency amount.
    #[must_use]
    pub fn symbol(&self) -> Option<&str> {
        match self {
            Self::Currency { symbol, .. } => Some(symbol),
            _ => None,
        }
    }

    /// The source text this value was read from, if it is an unmodified
    /// literal.
    #[must_use]
    pub fn source_format(&self) -> Option<&str> {
        match self {
            Self::Number { format, .. } | Self::Currency { format, .. } => format.as_deref(),
            Self::Boolean(_) => None,
        }
    }

    /// Whether this is a number written (or displayed) with a `%` suffix.
    #[must_use]
    pub fn is_percentage(&self) -> bool {
        matches!(self, Self::Number { format: Some(f), .. } if f.ends_with('%'))
    }

    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Number { .. } => "number",
            Self::Currency { .. } => "currency",
            Self::Boolean(_) => "boolean",
        }
    }
}
