use crate::program::ast::Program;
use crate::runner::config::EvalConfig;
use crate::runner::ds::error::ResolveError;
use crate::runner::ds::operations::lex_env::{read, ResolvedValue};
use crate::runner::eval::statement::execute_program;
use crate::runner::eval::types::{EvalContext, Evaluation, Observation};

/// Runs programs against one global scope.
///
/// Output and observations gathered before a failure stay available, so a
/// caller can show what a program printed before it stopped.
pub struct Interpreter {
    ctx: EvalContext,
}

impl Interpreter {
    pub fn new(config: EvalConfig) -> Self {
        Interpreter {
            ctx: EvalContext::new(config),
        }
    }

    pub fn run(&mut self, program: &Program) -> Result<(), ResolveError> {
        execute_program(program, &mut self.ctx)
    }

    pub fn output(&self) -> &[String] {
        &self.ctx.evaluation().output
    }

    pub fn reads(&self) -> &[Observation] {
        &self.ctx.evaluation().reads
    }

    /// Looks `name` up in the global scope as a read at the current point.
    pub fn global_binding(&self, name: &str) -> Result<ResolvedValue, ResolveError> {
        read(&self.ctx.global_env(), name, self.ctx.point())
    }

    /// Names bound in the global scope, sorted.
    pub fn global_names(&self) -> Vec<String> {
        self.ctx
            .global_env()
            .borrow()
            .inner
            .as_env_record()
            .binding_names()
    }

    pub fn into_evaluation(mut self) -> Evaluation {
        self.ctx.take_evaluation()
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new(EvalConfig::default())
    }
}

/// Evaluates `program` in a fresh global scope.
pub fn evaluate(program: &Program, config: &EvalConfig) -> Result<Evaluation, ResolveError> {
    let mut interpreter = Interpreter::new(config.clone());
    interpreter.run(program)?;
    Ok(interpreter.into_evaluation())
}
