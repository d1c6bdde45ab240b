//! Statement execution.

use tracing::{debug, debug_span};

use crate::program::ast::{BlockData, DeclarationKind, ExpressionType, Program, StatementType};
use crate::program::static_semantics::check_early_errors;
use crate::runner::ds::error::ResolveError;
use crate::runner::ds::operations::lex_env::{assign, initialize};
use crate::runner::ds::operations::test_and_comparison::to_boolean;
use crate::runner::ds::value::JsValue;

use super::expression::evaluate_expression;
use super::function::{block_declaration_instantiation, global_declaration_instantiation};
use super::types::EvalContext;

/// Checks `program` for static errors, hoists its declarations into the
/// global scope, then runs its statements in order.
pub fn execute_program(program: &Program, ctx: &mut EvalContext) -> Result<(), ResolveError> {
    check_early_errors(program)?;
    let _span = debug_span!("program", statements = program.body.body.len()).entered();
    global_declaration_instantiation(&program.body, ctx)?;
    execute_statements(&program.body.body, ctx)
}

pub fn execute_statements(stmts: &[StatementType], ctx: &mut EvalContext) -> Result<(), ResolveError> {
    for stmt in stmts {
        execute_statement(stmt, ctx)?;
    }
    Ok(())
}

/// Executes one statement at the next program point.
pub fn execute_statement(stmt: &StatementType, ctx: &mut EvalContext) -> Result<(), ResolveError> {
    ctx.advance();
    match stmt {
        StatementType::Declaration { kind, name, init } => {
            execute_variable_declaration(*kind, name, init.as_ref(), ctx)
        }

        StatementType::Assignment { name, value } => {
            let value = evaluate_expression(value, ctx)?;
            assign(&ctx.lex_env(), name, value, ctx.point())?;
            Ok(())
        }

        StatementType::Log(args) => {
            let mut parts = Vec::with_capacity(args.len());
            for arg in args {
                parts.push(evaluate_expression(arg, ctx)?.to_string());
            }
            let line = parts.join(" ");
            debug!(point = %ctx.point(), %line, "console.log");
            ctx.write_line(line);
            Ok(())
        }

        StatementType::If {
            test,
            consequent,
            alternate,
        } => {
            let test = evaluate_expression(test, ctx)?;
            if to_boolean(&test) {
                execute_block_statement(consequent, ctx)
            } else if let Some(alternate) = alternate {
                execute_block_statement(alternate, ctx)
            } else {
                Ok(())
            }
        }

        StatementType::Block(block) => execute_block_statement(block, ctx),

        // Bound when the enclosing scope was entered.
        StatementType::FunctionDeclaration(_) => Ok(()),

        StatementType::Expression(expr) => {
            evaluate_expression(expr, ctx)?;
            Ok(())
        }
    }
}

/// Runs `block` in a new block scope and leaves it again, also on failure.
fn execute_block_statement(block: &BlockData, ctx: &mut EvalContext) -> Result<(), ResolveError> {
    let env = ctx.push_block_scope()?;
    let result = block_declaration_instantiation(block, &env, ctx)
        .and_then(|_| execute_statements(&block.body, ctx));
    ctx.pop_block_scope();
    result
}

fn execute_variable_declaration(
    kind: DeclarationKind,
    name: &str,
    init: Option<&ExpressionType>,
    ctx: &mut EvalContext,
) -> Result<(), ResolveError> {
    match kind {
        DeclarationKind::Var => {
            // The binding already exists; `var x;` leaves its value alone.
            if let Some(init) = init {
                let value = evaluate_expression(init, ctx)?;
                assign(&ctx.lex_env(), name, value, ctx.point())?;
            }
        }
        DeclarationKind::Let | DeclarationKind::Const => {
            let value = match init {
                Some(init) => evaluate_expression(init, ctx)?,
                None => JsValue::Undefined,
            };
            initialize(&ctx.lex_env(), name, value, ctx.point())?;
        }
    }
    Ok(())
}
