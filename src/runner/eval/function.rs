//! Scope instantiation and function calls.

use std::rc::Rc;

use tracing::debug_span;

use crate::program::ast::{BlockData, DeclarationKind};
use crate::program::static_semantics::{
    function_declarations, lexically_scoped_declarations, var_scoped_declarations,
};
use crate::runner::ds::env_record::{EnvironmentRecord, EnvironmentRecordType};
use crate::runner::ds::error::ResolveError;
use crate::runner::ds::execution_context::ExecutionContext;
use crate::runner::ds::function_object::FunctionObject;
use crate::runner::ds::lex_env::{new_function_environment, JsLexEnvironmentType};
use crate::runner::ds::operations::lex_env::{assign, declare, initialize};
use crate::runner::ds::value::JsValue;

use super::statement::execute_statements;
use super::types::{EvalContext, EvalResult};

/// Registration pass for a function body or the global program.
///
/// Every `var` in the body (nested blocks included) is bound uninitialized in
/// `var_env`, top-level function declarations are bound and already hold
/// their function, and top-level `let`/`const` are bound but unreachable
/// until their declaration runs.
pub fn function_declaration_instantiation(
    body: &BlockData,
    var_env: &JsLexEnvironmentType,
    ctx: &mut EvalContext,
) -> Result<(), ResolveError> {
    for name in var_scoped_declarations(body) {
        declare(var_env, &name, DeclarationKind::Var)?;
    }
    for f in function_declarations(body) {
        declare(var_env, &f.name, DeclarationKind::Var)?;
        let fo = Rc::new(FunctionObject::new(f, var_env.clone()));
        assign(var_env, &f.name, JsValue::Function(fo), ctx.point())?;
    }
    for (name, kind) in lexically_scoped_declarations(body) {
        declare(var_env, &name, kind)?;
    }
    Ok(())
}

/// Registration pass for a program run in the shared global scope.
///
/// Every name the program declares is checked against what earlier programs
/// left in the global record before any binding is created, so a rejected
/// program binds nothing.
pub fn global_declaration_instantiation(
    body: &BlockData,
    ctx: &mut EvalContext,
) -> Result<(), ResolveError> {
    let global = ctx.global_env();
    {
        let env = global.borrow();
        if let EnvironmentRecordType::Global(record) = env.inner.as_ref() {
            for (name, _) in lexically_scoped_declarations(body) {
                if record.has_binding(&name) {
                    return Err(ResolveError::DuplicateDeclaration(name));
                }
            }
            let var_names = var_scoped_declarations(body)
                .into_iter()
                .chain(function_declarations(body).map(|f| f.name.clone()));
            for name in var_names {
                if record.has_lexical_declaration(&name) {
                    return Err(ResolveError::DuplicateDeclaration(name));
                }
            }
        }
    }
    function_declaration_instantiation(body, &global, ctx)
}

/// Registration pass for a nested block: its own `let`/`const`, and its
/// function declarations, which are block-scoped and usable at once.
pub fn block_declaration_instantiation(
    block: &BlockData,
    env: &JsLexEnvironmentType,
    ctx: &mut EvalContext,
) -> Result<(), ResolveError> {
    for (name, kind) in lexically_scoped_declarations(block) {
        declare(env, &name, kind)?;
    }
    for f in function_declarations(block) {
        declare(env, &f.name, DeclarationKind::Let)?;
        let fo = Rc::new(FunctionObject::new(f, env.clone()));
        initialize(env, &f.name, JsValue::Function(fo), ctx.point())?;
    }
    Ok(())
}

/// Runs `f` in a new function scope nested in the scope `f` was declared in.
pub fn call_function(f: &Rc<FunctionObject>, ctx: &mut EvalContext) -> EvalResult {
    ctx.check_stack_depth()?;
    let id = ctx.alloc_scope_id();
    let env = new_function_environment(id, &f.name, f.environment.clone());
    let _span = debug_span!("call", function = %f.name, scope = %id).entered();

    ctx.ctx_stack
        .push_execution_ctx(ExecutionContext::new(Some(f.clone()), env.clone()));
    let result = function_declaration_instantiation(&f.body_code, &env, ctx)
        .and_then(|_| execute_statements(&f.body_code.body, ctx));
    ctx.ctx_stack.pop_running_execution_ctx();
    result.map(|_| JsValue::Undefined)
}
