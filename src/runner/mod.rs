pub mod api;
pub mod config;
pub mod ds;
pub mod eval;

pub use api::{evaluate, Interpreter};
pub use config::EvalConfig;
