//! Binding resolution over the scope chain.
//!
//! `declare` registers names, `initialize` runs a block-scoped declaration,
//! `read` and `assign` resolve a name innermost-first.

use std::rc::Rc;

use tracing::{debug, trace};

use crate::program::ast::DeclarationKind;
use crate::runner::ds::error::ResolveError;
use crate::runner::ds::lex_env::{JsLexEnvironmentType, LexEnvironment};
use crate::runner::ds::misc::{BindingRef, ProgramPoint, ScopeId};
use crate::runner::ds::value::JsValue;

/// Value observed by a read together with the declaration it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedValue {
    pub value: JsValue,
    pub binding: BindingRef,
}

/// Innermost scope on the chain starting at `lex` that binds `name`.
pub fn get_identifier_reference(
    lex: Option<JsLexEnvironmentType>,
    name: &str,
) -> Option<JsLexEnvironmentType> {
    let lex = lex?;
    if lex.borrow().inner.as_env_record().has_binding(name) {
        Some(lex)
    } else {
        let outer = lex.borrow().outer.clone();
        get_identifier_reference(outer, name)
    }
}

/// Nearest enclosing global or function scope.
pub fn get_var_scope(lex: &JsLexEnvironmentType) -> JsLexEnvironmentType {
    let mut current = lex.clone();
    loop {
        let outer = {
            let env = current.borrow();
            if env.is_var_scope() {
                None
            } else {
                env.outer.clone()
            }
        };
        match outer {
            Some(o) => current = o,
            None => return current,
        }
    }
}

/// First scope from `scope` up to, not including, `var_scope` that binds
/// `name` as block-scoped. A `var` may not hoist out past it.
fn lexical_binding_below(
    scope: &JsLexEnvironmentType,
    var_scope: &JsLexEnvironmentType,
    name: &str,
) -> Option<ScopeId> {
    let mut current = scope.clone();
    while !Rc::ptr_eq(&current, var_scope) {
        let outer = {
            let env = current.borrow();
            let blocks = env
                .inner
                .as_env_record()
                .get_binding(name)
                .map_or(false, |b| b.kind.is_block_scoped());
            if blocks {
                return Some(env.id);
            }
            env.outer.clone()
        };
        current = outer?;
    }
    None
}

fn binding_ref(env: &LexEnvironment, name: &str) -> Option<BindingRef> {
    env.inner
        .as_env_record()
        .get_binding(name)
        .map(|b| BindingRef {
            scope: env.id,
            scope_kind: env.kind.clone(),
            kind: b.kind,
        })
}

/// Registers `name` without giving it a value.
///
/// `var` lands in the nearest function scope and silently reuses an existing
/// binding there. `let` and `const` land in `scope` itself and may not clash
/// with anything already bound in it.
pub fn declare(
    scope: &JsLexEnvironmentType,
    name: &str,
    kind: DeclarationKind,
) -> Result<BindingRef, ResolveError> {
    let target = match kind {
        DeclarationKind::Var => {
            let current = get_var_scope(scope);
            if let Some(blocker) = lexical_binding_below(scope, &current, name) {
                debug!(ident = name, scope = %blocker, "var blocked by lexical binding");
                return Err(ResolveError::DuplicateDeclaration(name.to_string()));
            }
            let created = current
                .borrow_mut()
                .inner
                .as_env_record_mut()
                .create_mutable_binding(name.to_string(), kind)?;
            debug!(ident = name, scope = %current.borrow().id, created, "hoisted var");
            current
        }
        DeclarationKind::Let => {
            scope
                .borrow_mut()
                .inner
                .as_env_record_mut()
                .create_mutable_binding(name.to_string(), kind)?;
            debug!(ident = name, scope = %scope.borrow().id, "registered let");
            scope.clone()
        }
        DeclarationKind::Const => {
            scope
                .borrow_mut()
                .inner
                .as_env_record_mut()
                .create_immutable_binding(name.to_string())?;
            debug!(ident = name, scope = %scope.borrow().id, "registered const");
            scope.clone()
        }
    };
    let env = target.borrow();
    binding_ref(&env, name).ok_or_else(|| ResolveError::UnboundIdentifier(name.to_string()))
}

/// Runs the declaration of a name registered in `scope`: stores its first
/// value and, for block-scoped names, marks `point` as its declaration point.
pub fn initialize(
    scope: &JsLexEnvironmentType,
    name: &str,
    value: JsValue,
    point: ProgramPoint,
) -> Result<BindingRef, ResolveError> {
    let mut env = scope.borrow_mut();
    env.inner
        .as_env_record_mut()
        .initialize_binding(name, value, point)?;
    trace!(ident = name, scope = %env.id, %point, "initialized");
    binding_ref(&env, name).ok_or_else(|| ResolveError::UnboundIdentifier(name.to_string()))
}

pub fn read(
    scope: &JsLexEnvironmentType,
    name: &str,
    point: ProgramPoint,
) -> Result<ResolvedValue, ResolveError> {
    let found = get_identifier_reference(Some(scope.clone()), name)
        .ok_or_else(|| ResolveError::UnboundIdentifier(name.to_string()))?;
    let env = found.borrow();
    let value = env.inner.as_env_record().get_binding_value(name, point)?;
    let binding =
        binding_ref(&env, name).ok_or_else(|| ResolveError::UnboundIdentifier(name.to_string()))?;
    trace!(ident = name, %point, %binding, %value, "read");
    Ok(ResolvedValue { value, binding })
}

/// Stores `value` into the binding `name` resolves to. No dead-zone check.
pub fn assign(
    scope: &JsLexEnvironmentType,
    name: &str,
    value: JsValue,
    point: ProgramPoint,
) -> Result<BindingRef, ResolveError> {
    let found = get_identifier_reference(Some(scope.clone()), name)
        .ok_or_else(|| ResolveError::UnboundIdentifier(name.to_string()))?;
    let mut env = found.borrow_mut();
    env.inner
        .as_env_record_mut()
        .set_mutable_binding(name, value)?;
    let binding =
        binding_ref(&env, name).ok_or_else(|| ResolveError::UnboundIdentifier(name.to_string()))?;
    trace!(ident = name, %point, %binding, "assigned");
    Ok(binding)
}
