use std::fmt;

use rust_decimal::Decimal;

use crate::interpreter::value::core::Value;

/// Literals print exactly as written. Computed numbers print without
/// trailing zeros. Computed currency amounts with a fractional part print
/// with two decimals; signs go before the amount (`$12.50`) and codes after
/// it (`12.50 USD`).
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = self.source_format() {
            return write!(f, "{source}");
        }
        match self {
            Self::Number { value, .. } => write!(f, "{}", value.normalize()),
            Self::Currency { value, symbol, .. } => {
                write!(f, "{}", render_currency(*value, symbol, false))
            },
            Self::Boolean(b) => write!(f, "{b}"),
        }
    }
}

impl Value {
    /// Like [`Display`](fmt::Display), but computed amounts get thousands
    /// separators.
    ///
    /// # Example
    /// ```
    /// use calcnote::interpreter::value::core::Value;
    /// use rust_decimal::Decimal;
    ///
    /// let total = Value::currency(Decimal::new(123_456_750, 2), "$");
    /// assert_eq!(total.to_string(), "$1234567.50");
    /// assert_eq!(total.format_grouped(), "$1,234,567.50");
    ///
    /// // Literals keep their own formatting.
    /// let literal = Value::number(Decimal::from(1000)).with_format("1000");
    /// assert_eq!(literal.format_grouped(), "1000");
    /// ```
    #[must_use]
    pub fn format_grouped(&self) -> String {
        if let Some(source) = self.source_format() {
            return source.to_string();
        }
        match self {
            Self::Number { value, .. } => group_thousands(&value.normalize().to_string()),
            Self::Currency { value, symbol, .. } => render_currency(*value, symbol, true),
            Self::Boolean(b) => b.to_string(),
        }
    }
}

fn render_currency(value: Decimal, symbol: &str, grouped: bool) -> String {
    let magnitude = value.abs();
    let digits = if magnitude.fract().is_zero() {
        magnitude.normalize().to_string()
    } else {
        let mut cents = magnitude;
        cents.rescale(2);
        cents.to_string()
    };
    let digits = if grouped {
        group_thousands(&digits)
    } else {
        digits
    };
    let sign = if value.is_sign_negative() && !value.is_zero() {
        "-"
    } else {
        ""
    };

    if symbol.chars().count() == 1 {
        format!("{sign}{symbol}{digits}")
    } else {
        format!("{sign}{digits} {symbol}")
    }
}

/// Inserts `,` every three digits of the integer part of a decimal string.
fn group_thousands(number: &str) -> String {
    let (sign, unsigned) = number.strip_prefix('-')
                                 .map_or(("", number), |rest| ("-", rest));
    let (integer, fraction) = unsigned.split_once('.')
                                      .map_or((unsigned, None), |(i, f)| (i, Some(f)));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match fraction {
        Some(fraction) => format!("{sign}{grouped}.{fraction}"),
        None => format!("{sign}{grouped}"),
    }
}
