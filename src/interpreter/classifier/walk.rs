use crate::{
    ast::{Expr, Statement},
    interpreter::evaluator::{environment::Environment, utils::is_boolean_keyword},
};

/// Names referenced by `statement` that are neither defined in `env` nor
/// boolean keywords, in source order.
///
/// The target of an assignment is not a reference and is skipped.
#[must_use]
pub fn undefined_identifiers(statement: &Statement, env: &Environment) -> Vec<String> {
    let mut names = Vec::new();
    let expr = match statement {
        Statement::Assignment { value, .. } => value,
        Statement::Expression { expr, .. } => expr,
    };
    collect(expr, env, &mut names);
    names
}

fn collect(expr: &Expr, env: &Environment, names: &mut Vec<String>) {
    match expr {
        Expr::Identifier { name, .. } => {
            if !env.is_defined(name) && !is_boolean_keyword(name) {
                names.push(name.clone());
            }
        },
        Expr::Number { .. } | Expr::Quantity { .. } | Expr::Boolean { .. } => {},
        Expr::Unary { operand, .. } => collect(operand, env, names),
        Expr::Binary { left, right, .. } | Expr::Comparison { left, right, .. } => {
            collect(left, env, names);
            collect(right, env, names);
        },
        Expr::FunctionCall { arguments, .. } => {
            for argument in arguments {
                collect(argument, env, names);
            }
        },
    }
}
