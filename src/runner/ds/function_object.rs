use std::fmt;

use crate::program::ast::{BlockData, FunctionData};
use crate::runner::ds::lex_env::JsLexEnvironmentType;

/// A declared function closed over the scope it was declared in.
pub struct FunctionObject {
    pub name: String,
    pub body_code: BlockData,
    pub environment: JsLexEnvironmentType,
}
impl FunctionObject {
    pub fn new(def: &FunctionData, environment: JsLexEnvironmentType) -> Self {
        FunctionObject {
            name: def.name.clone(),
            body_code: def.body.clone(),
            environment,
        }
    }
}
impl fmt::Debug for FunctionObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionObject")
            .field("name", &self.name)
            .field("environment", &self.environment.borrow().id)
            .finish()
    }
}
