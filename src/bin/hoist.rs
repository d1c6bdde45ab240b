//! CLI for replaying the hoisting and scope notes.
//!
//! Usage:
//!   hoist list                      # List every snippet
//!   hoist run                       # Replay all snippets
//!   hoist run <id>... --check       # Replay and compare with the documented output
//!   hoist run <id> --reads          # Also show what each read resolved to

use std::io;
use std::process;

use clap::{Parser, Subcommand};

use hoist::notes;
use hoist::notes::replay::{self, ReplayOptions, ReplayStatus};
use hoist::runner::EvalConfig;
use hoist::tracing_config::init_tracing;

#[derive(Parser)]
#[command(name = "hoist", version, about = "Replay var/let/const hoisting and scope snippets")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the bundled snippets.
    List,
    /// Replay snippets and print their console output.
    Run {
        /// Snippet ids. Replays every snippet when empty.
        ids: Vec<String>,
        /// Compare with the documented output and fail on a mismatch.
        #[arg(long)]
        check: bool,
        /// Print every identifier read and the declaration it resolved to.
        #[arg(long)]
        reads: bool,
        /// Calls and blocks active at once (defaults to HOIST_MAX_STACK_DEPTH or 128).
        #[arg(long)]
        max_stack_depth: Option<usize>,
    },
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::List => {
            for note in notes::catalog() {
                println!("{:<34} [{}] {}", note.id, note.topic, note.title);
            }
        }
        Command::Run {
            ids,
            check,
            reads,
            max_stack_depth,
        } => {
            let mut config = EvalConfig::from_env();
            if let Some(depth) = max_stack_depth {
                config = config.with_max_stack_depth(depth);
            }
            let options = ReplayOptions {
                check,
                show_reads: reads,
            };
            let status = match replay::run(&ids, &config, options, &mut io::stdout().lock()) {
                Ok(status) => status,
                Err(e) => {
                    eprintln!("hoist: {}", e);
                    process::exit(1);
                }
            };
            match &status {
                ReplayStatus::Matched => {}
                ReplayStatus::Mismatched(n) => {
                    eprintln!("{} snippet(s) did not match their documented output", n)
                }
                ReplayStatus::UnknownNote(id) => {
                    eprintln!("Unknown snippet '{}'. Try `hoist list`.", id)
                }
            }
            process::exit(status.exit_code());
        }
    }
}
