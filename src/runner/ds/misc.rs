use std::fmt;
use std::fmt::{Display, Formatter};

use crate::program::ast::DeclarationKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScopeId(pub usize);

pub const GLOBAL_SCOPE_ID: ScopeId = ScopeId(0);

impl Display for ScopeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScopeKind {
    Global,
    Function(String),
    Block,
}
impl ScopeKind {
    /// Global and function scopes receive hoisted `var` bindings.
    pub fn is_var_scope(&self) -> bool {
        !matches!(self, ScopeKind::Block)
    }
}
impl Display for ScopeKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ScopeKind::Global => write!(f, "global"),
            ScopeKind::Function(name) => write!(f, "function {}", name),
            ScopeKind::Block => write!(f, "block"),
        }
    }
}

/// Position in the evaluation trace. Advances by one per executed statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ProgramPoint(pub u64);
impl ProgramPoint {
    pub fn next(self) -> Self {
        ProgramPoint(self.0 + 1)
    }
}
impl Display for ProgramPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.0)
    }
}

/// Names the declaration a read or assignment resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingRef {
    pub scope: ScopeId,
    pub scope_kind: ScopeKind,
    pub kind: DeclarationKind,
}
impl Display for BindingRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} in {} scope {}", self.kind, self.scope_kind, self.scope)
    }
}
