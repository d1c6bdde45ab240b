//! Log output for the `hoist` binary.
//!
//! Nothing is logged unless `HOIST_LOG` or `RUST_LOG` holds filter
//! directives, e.g. `HOIST_LOG=hoist=trace hoist run`. Set
//! `HOIST_LOG_FORMAT=json` for one JSON object per event. Logs go to stderr
//! and never mix with transcripts on stdout.

use std::env;
use std::io;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

const FILTER_ENV: &str = "HOIST_LOG";
const FORMAT_ENV: &str = "HOIST_LOG_FORMAT";

/// Filter directives, `HOIST_LOG` first.
fn directives() -> Option<String> {
    env::var(FILTER_ENV).or_else(|_| env::var("RUST_LOG")).ok()
}

pub fn init_tracing() {
    let Some(directives) = directives() else {
        return;
    };
    let json = env::var(FORMAT_ENV).map_or(false, |v| v.eq_ignore_ascii_case("json"));

    let filter = EnvFilter::builder().parse_lossy(directives);
    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(fmt::layer().json().with_writer(io::stderr)).init();
    } else {
        registry.with(fmt::layer().with_writer(io::stderr)).init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_falls_back_to_rust_log() {
        // Both variables are process-wide; restore them afterwards.
        let saved = (env::var(FILTER_ENV).ok(), env::var("RUST_LOG").ok());
        env::remove_var(FILTER_ENV);
        env::set_var("RUST_LOG", "warn");
        assert_eq!(directives().as_deref(), Some("warn"));
        env::set_var(FILTER_ENV, "hoist=trace");
        assert_eq!(directives().as_deref(), Some("hoist=trace"));
        match saved.0 {
            Some(v) => env::set_var(FILTER_ENV, v),
            None => env::remove_var(FILTER_ENV),
        }
        match saved.1 {
            Some(v) => env::set_var("RUST_LOG", v),
            None => env::remove_var("RUST_LOG"),
        }
    }
}
