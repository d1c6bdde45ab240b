//! Runtime data structures: values, scopes, bindings and errors.

pub mod env_record;
pub mod error;
pub mod execution_context;
pub mod function_object;
pub mod lex_env;
pub mod misc;
pub mod operations;
pub mod value;
