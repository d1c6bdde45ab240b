//! Evaluation settings.

use std::env;

/// Fits comfortably in a 2 MiB thread stack, even in debug builds.
pub const DEFAULT_MAX_STACK_DEPTH: usize = 128;

/// Environment variable overriding [`EvalConfig::max_stack_depth`].
pub const MAX_STACK_DEPTH_ENV: &str = "HOIST_MAX_STACK_DEPTH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalConfig {
    /// Function calls and blocks that may be active at once before
    /// evaluation fails with `StackDepthExceeded`.
    pub max_stack_depth: usize,
    /// Keep an observation for every identifier read.
    pub record_reads: bool,
}

impl EvalConfig {
    pub fn new() -> Self {
        EvalConfig {
            max_stack_depth: DEFAULT_MAX_STACK_DEPTH,
            record_reads: true,
        }
    }

    /// Defaults, with `HOIST_MAX_STACK_DEPTH` applied when it holds a number.
    pub fn from_env() -> Self {
        let config = Self::new();
        match env::var(MAX_STACK_DEPTH_ENV) {
            Ok(val) => match val.trim().parse::<usize>() {
                Ok(depth) => config.with_max_stack_depth(depth),
                Err(_) => {
                    tracing::warn!(value = %val, "ignoring invalid {}", MAX_STACK_DEPTH_ENV);
                    config
                }
            },
            Err(_) => config,
        }
    }

    pub fn with_max_stack_depth(mut self, depth: usize) -> Self {
        self.max_stack_depth = depth;
        self
    }

    pub fn with_record_reads(mut self, record: bool) -> Self {
        self.record_reads = record;
        self
    }
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self::new()
    }
}
