//! Replaying notes the way `hoist run` prints them.

use std::io;
use std::io::Write;

use crate::runner::config::EvalConfig;

use super::{catalog, find, Note};

#[derive(Debug, Clone, Copy, Default)]
pub struct ReplayOptions {
    /// Compare each transcript with the documented one.
    pub check: bool,
    /// Print every identifier read and the declaration it resolved to.
    pub show_reads: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayStatus {
    Matched,
    /// Number of notes whose transcript differed from the documented one.
    Mismatched(usize),
    UnknownNote(String),
}
impl ReplayStatus {
    pub fn exit_code(&self) -> i32 {
        match self {
            ReplayStatus::Matched => 0,
            ReplayStatus::Mismatched(_) => 1,
            ReplayStatus::UnknownNote(_) => 2,
        }
    }
}

/// Notes named by `ids`, or the whole catalog when `ids` is empty.
/// Fails with the first id that names no note.
pub fn select(ids: &[String]) -> Result<Vec<&'static Note>, String> {
    if ids.is_empty() {
        return Ok(catalog().iter().collect());
    }
    ids.iter()
        .map(|id| find(id).ok_or_else(|| id.to_string()))
        .collect()
}

/// Replays the notes named by `ids` into `out`. Nothing is written when an id
/// is unknown.
pub fn run<W: Write>(
    ids: &[String],
    config: &EvalConfig,
    options: ReplayOptions,
    out: &mut W,
) -> io::Result<ReplayStatus> {
    match select(ids) {
        Ok(selected) => replay_all(&selected, config, options, out),
        Err(id) => Ok(ReplayStatus::UnknownNote(id)),
    }
}

pub fn replay_all<W: Write>(
    notes: &[&Note],
    config: &EvalConfig,
    options: ReplayOptions,
    out: &mut W,
) -> io::Result<ReplayStatus> {
    let mut mismatches = 0;
    for note in notes {
        if !write_replay(note, config, options, out)? {
            mismatches += 1;
        }
    }
    if mismatches > 0 {
        Ok(ReplayStatus::Mismatched(mismatches))
    } else {
        Ok(ReplayStatus::Matched)
    }
}

/// Returns `false` on a failed check.
fn write_replay<W: Write>(
    note: &Note,
    config: &EvalConfig,
    options: ReplayOptions,
    out: &mut W,
) -> io::Result<bool> {
    writeln!(out, "// {} ({})", note.title, note.id)?;
    let transcript = note.replay(config);
    for line in transcript.lines() {
        writeln!(out, "{}", line)?;
    }
    if options.show_reads {
        for read in &transcript.reads {
            writeln!(
                out,
                "  {} {} = {} -> {}",
                read.point, read.name, read.value, read.binding
            )?;
        }
    }
    let ok = !options.check || note.matches(&transcript);
    if !ok {
        writeln!(out, "// expected:")?;
        for line in &note.expected {
            writeln!(out, "{}", line)?;
        }
    }
    writeln!(out)?;
    Ok(ok)
}
