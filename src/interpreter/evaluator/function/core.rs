use tracing::debug;

use crate::{
    ast::BuiltinFunction,
    error::EvalError,
    interpreter::{
        evaluator::{
            core::EvalResult,
            environment::Environment,
            function::{average, sqrt},
        },
        value::core::Value,
    },
    span::Span,
};

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated argument values and the span of
/// the call.
type BuiltinFn = fn(&[Value], Span) -> EvalResult<Value>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `AtLeast(n)` means the builtin accepts `n` or more.
#[derive(Clone, Copy)]
enum Arity {
    Exact(usize),
    AtLeast(usize),
}

/// Defines builtin functions by generating a lookup function and a list of
/// the builtins.
///
/// Each entry provides:
/// - a [`BuiltinFunction`] variant,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The lookup is an exhaustive `match`, so a builtin without an entry does
/// not compile.
macro_rules! builtin_functions {
    (
        $(
            $variant:path => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            arity: Arity,
            func:  BuiltinFn,
        }
        fn builtin_def(function: BuiltinFunction) -> BuiltinDef {
            match function {
                $(
                    $variant => BuiltinDef { arity: $arity, func: $func },
                )*
            }
        }
        pub const BUILTIN_FUNCTIONS: &[BuiltinFunction] = &[
            $($variant,)*
        ];
    };
}

builtin_functions! {
    BuiltinFunction::Average    => { arity: Arity::AtLeast(1), func: average::average },
    BuiltinFunction::SquareRoot => { arity: Arity::Exact(1), func: sqrt::sqrt },
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    const fn check(self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == m,
            Self::AtLeast(m) => n >= m,
        }
    }

    fn describe(self) -> String {
        match self {
            Self::Exact(m) => m.to_string(),
            Self::AtLeast(m) => format!("at least {m}"),
        }
    }
}

impl Environment {
    /// Calls a builtin function on already evaluated arguments.
    ///
    /// # Parameters
    /// - `function`: The builtin to call.
    /// - `arguments`: Evaluated argument values.
    /// - `span`: Source range of the call, for errors.
    ///
    /// # Returns
    /// The function result, or [`EvalError::ArgumentCount`] if the number of
    /// arguments is wrong.
    ///
    /// # Example
    /// ```
    /// use calcnote::{
    ///     ast::BuiltinFunction,
    ///     interpreter::{evaluator::Environment, value::core::Value},
    ///     span::Span,
    /// };
    ///
    /// let args = [Value::from(10), Value::from(20), Value::from(30)];
    /// let mean = Environment::eval_function(BuiltinFunction::Average, &args, Span::default());
    /// assert_eq!(mean.unwrap(), Value::from(20));
    ///
    /// let too_many = [Value::from(4), Value::from(9)];
    /// assert!(Environment::eval_function(BuiltinFunction::SquareRoot, &too_many, Span::default()).is_err());
    /// ```
    pub fn eval_function(function: BuiltinFunction,
                         arguments: &[Value],
                         span: Span)
                         -> EvalResult<Value> {
        let builtin = builtin_def(function);
        if !builtin.arity.check(arguments.len()) {
            return Err(EvalError::ArgumentCount { function: function.name(),
                                                  expected: builtin.arity.describe(),
                                                  found:    arguments.len(),
                                                  line:     span.line,
                                                  column:   span.column, });
        }

        debug!(%function, arguments = arguments.len(), "calling builtin");
        (builtin.func)(arguments, span)
    }
}
