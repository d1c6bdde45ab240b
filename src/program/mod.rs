pub mod ast;
pub mod static_semantics;

pub use ast::Program;
