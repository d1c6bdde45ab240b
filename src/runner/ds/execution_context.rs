use std::rc::Rc;

use crate::runner::ds::function_object::FunctionObject;
use crate::runner::ds::lex_env::JsLexEnvironmentType;

/// State of one running function body (or of the global program).
pub struct ExecutionContext {
    pub function: Option<Rc<FunctionObject>>,
    /// Innermost scope of the running code. Changes as blocks are entered.
    pub lex_env: JsLexEnvironmentType,
    /// Blocks entered and not yet left by this code.
    pub open_blocks: usize,
}
impl ExecutionContext {
    pub fn new(function: Option<Rc<FunctionObject>>, lex_env: JsLexEnvironmentType) -> Self {
        ExecutionContext {
            function,
            lex_env,
            open_blocks: 0,
        }
    }
}

pub struct ExecutionContextStack {
    stack: Vec<ExecutionContext>,
}
impl ExecutionContextStack {
    pub fn new() -> Self {
        ExecutionContextStack { stack: Vec::new() }
    }

    pub fn get_running_execution_ctx(&self) -> Option<&ExecutionContext> {
        self.stack.last()
    }

    pub fn get_running_execution_ctx_mut(&mut self) -> Option<&mut ExecutionContext> {
        self.stack.last_mut()
    }

    pub fn pop_running_execution_ctx(&mut self) -> Option<ExecutionContext> {
        self.stack.pop()
    }

    pub fn push_execution_ctx(&mut self, ctx: ExecutionContext) {
        self.stack.push(ctx)
    }

    /// Active function calls plus open blocks, across every context.
    pub fn frame_depth(&self) -> usize {
        self.stack
            .iter()
            .map(|c| c.open_blocks + usize::from(c.function.is_some()))
            .sum()
    }
}
impl Default for ExecutionContextStack {
    fn default() -> Self {
        Self::new()
    }
}
