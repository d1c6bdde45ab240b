//! Expression evaluation.

use crate::program::ast::{ExpressionType, TemplatePart};
use crate::runner::ds::error::ResolveError;
use crate::runner::ds::operations::lex_env::read;
use crate::runner::ds::operations::test_and_comparison::strict_equality_comparison;
use crate::runner::ds::value::JsValue;

use super::function::call_function;
use super::types::{EvalContext, EvalResult};

pub fn evaluate_expression(expr: &ExpressionType, ctx: &mut EvalContext) -> EvalResult {
    match expr {
        ExpressionType::Literal(literal) => Ok(JsValue::from_literal(literal)),

        ExpressionType::Identifier(name) => resolve_identifier(name, ctx),

        ExpressionType::StrictEquality {
            left,
            right,
            negated,
        } => {
            let l = evaluate_expression(left, ctx)?;
            let r = evaluate_expression(right, ctx)?;
            let equal = strict_equality_comparison(&l, &r);
            Ok(JsValue::Boolean(equal != *negated))
        }

        ExpressionType::TemplateLiteral(parts) => {
            let mut s = String::new();
            for part in parts {
                match part {
                    TemplatePart::Text(t) => s.push_str(t),
                    TemplatePart::Substitution(e) => {
                        let v = evaluate_expression(e, ctx)?;
                        s.push_str(&v.to_string());
                    }
                }
            }
            Ok(JsValue::String(s))
        }

        ExpressionType::Call { callee } => {
            let f = resolve_identifier(callee, ctx)?;
            match f {
                JsValue::Function(f) => call_function(&f, ctx),
                _ => Err(ResolveError::NotCallable(callee.to_string())),
            }
        }
    }
}

/// Reads `name` from the running scope and records the observation.
fn resolve_identifier(name: &str, ctx: &mut EvalContext) -> EvalResult {
    let resolved = read(&ctx.lex_env(), name, ctx.point())?;
    ctx.record_read(name, &resolved);
    Ok(resolved.value)
}
