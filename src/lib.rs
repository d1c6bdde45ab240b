//! # hoist - var/let/const binding resolution
//!
//! A small evaluator for a nested-block language with function-scoped
//! (`var`) and block-scoped (`let`, `const`) declarations. It reproduces how
//! names resolve and when they become usable:
//! - `var` is hoisted to the top of its function scope and reads `undefined`
//!   until assigned
//! - `let`/`const` bind only in their block and fail when read before their
//!   declaration runs
//! - redeclaring a `var` is allowed, redeclaring a `let` is a syntax error
//!
//! ## Quick Start
//!
//! ```
//! use hoist::program::ast::{ExpressionType as E, Program, StatementType as S};
//! use hoist::runner::{evaluate, EvalConfig};
//! use hoist::runner::ds::value::JsValue;
//!
//! // console.log(x); var x = 100;
//! let program = Program::new(vec![S::log_ident("x"), S::var("x", E::int(100))]);
//! let evaluation = evaluate(&program, &EvalConfig::default()).unwrap();
//!
//! assert_eq!(evaluation.output, vec!["undefined"]);
//! assert_eq!(evaluation.values_of("x"), vec![JsValue::Undefined]);
//! ```
//!
//! ## Architecture
//!
//! - **[`program`]** - program model and the static (early error) checks
//! - **[`runner`]** - evaluation
//!   - **[`runner::ds`]** - values, scopes, bindings, and the resolver operations
//!   - **[`runner::eval`]** - two-phase statement and expression evaluation
//! - **[`notes`]** - the hoisting and scope notes as replayable programs

#[macro_use]
extern crate lazy_static;

pub mod notes;
pub mod program;
pub mod runner;
pub mod tracing_config;
