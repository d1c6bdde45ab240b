//! Core types for the evaluation engine.

use crate::runner::config::EvalConfig;
use crate::runner::ds::error::ResolveError;
use crate::runner::ds::execution_context::{ExecutionContext, ExecutionContextStack};
use crate::runner::ds::lex_env::{
    new_declarative_environment, new_global_environment, JsLexEnvironmentType,
};
use crate::runner::ds::misc::{BindingRef, ProgramPoint, ScopeId, GLOBAL_SCOPE_ID};
use crate::runner::ds::operations::lex_env::ResolvedValue;
use crate::runner::ds::value::JsValue;

pub type EvalResult = Result<JsValue, ResolveError>;

/// One identifier read: where it happened, what it saw, and which
/// declaration it resolved to.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub name: String,
    pub point: ProgramPoint,
    pub value: JsValue,
    pub binding: BindingRef,
}

/// Everything a finished evaluation observed.
#[derive(Debug, Clone, Default)]
pub struct Evaluation {
    pub reads: Vec<Observation>,
    /// Lines written by `console.log`.
    pub output: Vec<String>,
}
impl Evaluation {
    /// Values observed by reads of `name`, in evaluation order.
    pub fn values_of(&self, name: &str) -> Vec<JsValue> {
        self.reads
            .iter()
            .filter(|o| o.name == name)
            .map(|o| o.value.clone())
            .collect()
    }

    pub fn last_value_of(&self, name: &str) -> Option<JsValue> {
        self.reads
            .iter()
            .rev()
            .find(|o| o.name == name)
            .map(|o| o.value.clone())
    }
}

/// Mutable state of one evaluation run.
pub struct EvalContext {
    pub config: EvalConfig,
    pub ctx_stack: ExecutionContextStack,
    global_env: JsLexEnvironmentType,
    point: ProgramPoint,
    next_scope_id: usize,
    evaluation: Evaluation,
}

impl EvalContext {
    pub fn new(config: EvalConfig) -> Self {
        let global_env = new_global_environment();
        let mut ctx_stack = ExecutionContextStack::new();
        ctx_stack.push_execution_ctx(ExecutionContext::new(None, global_env.clone()));
        EvalContext {
            config,
            ctx_stack,
            global_env,
            point: ProgramPoint::default(),
            next_scope_id: GLOBAL_SCOPE_ID.0 + 1,
            evaluation: Evaluation::default(),
        }
    }

    pub fn global_env(&self) -> JsLexEnvironmentType {
        self.global_env.clone()
    }

    /// Innermost scope of the running code.
    pub fn lex_env(&self) -> JsLexEnvironmentType {
        match self.ctx_stack.get_running_execution_ctx() {
            Some(running) => running.lex_env.clone(),
            None => self.global_env.clone(),
        }
    }

    /// Fails once another call or block would exceed `max_stack_depth`.
    pub fn check_stack_depth(&self) -> Result<(), ResolveError> {
        let limit = self.config.max_stack_depth;
        if self.ctx_stack.frame_depth() >= limit {
            return Err(ResolveError::StackDepthExceeded(limit));
        }
        Ok(())
    }

    pub fn alloc_scope_id(&mut self) -> ScopeId {
        let id = ScopeId(self.next_scope_id);
        self.next_scope_id += 1;
        id
    }

    /// Enters a fresh block scope nested in the current one.
    pub fn push_block_scope(&mut self) -> Result<JsLexEnvironmentType, ResolveError> {
        self.check_stack_depth()?;
        let id = self.alloc_scope_id();
        let env = new_declarative_environment(id, Some(self.lex_env()));
        if let Some(running) = self.ctx_stack.get_running_execution_ctx_mut() {
            running.lex_env = env.clone();
            running.open_blocks += 1;
        }
        Ok(env)
    }

    pub fn pop_block_scope(&mut self) {
        let outer = self.lex_env().borrow().outer.clone();
        if let Some(running) = self.ctx_stack.get_running_execution_ctx_mut() {
            if let Some(outer) = outer {
                running.lex_env = outer;
            }
            running.open_blocks = running.open_blocks.saturating_sub(1);
        }
    }

    pub fn point(&self) -> ProgramPoint {
        self.point
    }

    /// Moves to the next point of the trace and returns it.
    pub fn advance(&mut self) -> ProgramPoint {
        self.point = self.point.next();
        self.point
    }

    pub fn record_read(&mut self, name: &str, resolved: &ResolvedValue) {
        if self.config.record_reads {
            self.evaluation.reads.push(Observation {
                name: name.to_string(),
                point: self.point,
                value: resolved.value.clone(),
                binding: resolved.binding.clone(),
            });
        }
    }

    pub fn write_line(&mut self, line: String) {
        self.evaluation.output.push(line);
    }

    pub fn evaluation(&self) -> &Evaluation {
        &self.evaluation
    }

    pub fn take_evaluation(&mut self) -> Evaluation {
        std::mem::take(&mut self.evaluation)
    }
}
