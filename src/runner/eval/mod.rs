//! Evaluation module for running programs.
//!
//! Each scope is evaluated in two phases: a registration pass that binds the
//! names the scope declares, then sequential execution of its statements.

pub mod expression;
pub mod function;
pub mod statement;
pub mod types;

pub use types::{EvalContext, EvalResult, Evaluation, Observation};
