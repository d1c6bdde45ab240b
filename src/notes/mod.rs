//! The snippets of the hoisting and scope notes, as runnable programs paired
//! with the console transcript each one is documented to print.

mod hoisting;
pub mod replay;
mod scope;

use std::fmt;
use std::fmt::{Display, Formatter};

use crate::program::ast::Program;
use crate::runner::api::Interpreter;
use crate::runner::config::EvalConfig;
use crate::runner::ds::error::ResolveError;
use crate::runner::eval::types::Observation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Hoisting,
    Scope,
}
impl Display for Topic {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Topic::Hoisting => write!(f, "hoisting"),
            Topic::Scope => write!(f, "scope"),
        }
    }
}

pub struct Note {
    pub id: &'static str,
    pub topic: Topic,
    pub title: &'static str,
    pub program: Program,
    /// Console lines, ending with the error message when the snippet fails.
    pub expected: Vec<&'static str>,
}

/// What replaying a note printed.
#[derive(Debug, Clone)]
pub struct Transcript {
    pub output: Vec<String>,
    pub error: Option<ResolveError>,
    pub reads: Vec<Observation>,
}
impl Transcript {
    /// Output lines followed by the error message, as a console would show them.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = self.output.clone();
        if let Some(e) = &self.error {
            lines.push(e.to_string());
        }
        lines
    }
}

impl Note {
    pub fn replay(&self, config: &EvalConfig) -> Transcript {
        let mut interpreter = Interpreter::new(config.clone());
        let error = interpreter.run(&self.program).err();
        Transcript {
            output: interpreter.output().to_vec(),
            error,
            reads: interpreter.reads().to_vec(),
        }
    }

    pub fn matches(&self, transcript: &Transcript) -> bool {
        let lines = transcript.lines();
        lines.len() == self.expected.len()
            && lines.iter().zip(&self.expected).all(|(a, b)| a == b)
    }
}

lazy_static! {
    static ref NOTES: Vec<Note> = {
        let mut notes = hoisting::notes();
        notes.extend(scope::notes());
        notes
    };
}

pub fn catalog() -> &'static [Note] {
    &NOTES
}

pub fn find(id: &str) -> Option<&'static Note> {
    NOTES.iter().find(|n| n.id == id)
}

pub fn by_topic(topic: Topic) -> impl Iterator<Item = &'static Note> {
    NOTES.iter().filter(move |n| n.topic == topic)
}
