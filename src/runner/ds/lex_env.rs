use std::cell::RefCell;
use std::rc::Rc;

use crate::runner::ds::env_record::{
    DeclarativeEnvironmentRecord, EnvironmentRecordType, FunctionEnvironmentRecord,
    GlobalEnvironmentRecord,
};
use crate::runner::ds::misc::{ScopeId, ScopeKind, GLOBAL_SCOPE_ID};

pub type JsLexEnvironmentType = Rc<RefCell<LexEnvironment>>;

/// A scope: an environment record plus the link to its enclosing scope.
pub struct LexEnvironment {
    pub id: ScopeId,
    pub kind: ScopeKind,
    pub inner: Box<EnvironmentRecordType>,
    pub outer: Option<JsLexEnvironmentType>,
}
impl LexEnvironment {
    pub fn is_var_scope(&self) -> bool {
        self.kind.is_var_scope()
    }
}

pub fn new_declarative_environment(
    id: ScopeId,
    outer_lex: Option<JsLexEnvironmentType>,
) -> JsLexEnvironmentType {
    Rc::new(RefCell::new(LexEnvironment {
        id,
        kind: ScopeKind::Block,
        inner: Box::new(EnvironmentRecordType::Declarative(
            DeclarativeEnvironmentRecord::new(),
        )),
        outer: outer_lex,
    }))
}

pub fn new_function_environment(
    id: ScopeId,
    function_name: &str,
    outer_lex: JsLexEnvironmentType,
) -> JsLexEnvironmentType {
    Rc::new(RefCell::new(LexEnvironment {
        id,
        kind: ScopeKind::Function(function_name.to_string()),
        inner: Box::new(EnvironmentRecordType::Function(
            FunctionEnvironmentRecord::new(),
        )),
        outer: Some(outer_lex),
    }))
}

pub fn new_global_environment() -> JsLexEnvironmentType {
    Rc::new(RefCell::new(LexEnvironment {
        id: GLOBAL_SCOPE_ID,
        kind: ScopeKind::Global,
        inner: Box::new(EnvironmentRecordType::Global(GlobalEnvironmentRecord::new())),
        outer: None,
    }))
}
