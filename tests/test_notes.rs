//! Every bundled note must print exactly its documented transcript.

extern crate hoist;

use hoist::notes::replay::{self, ReplayOptions, ReplayStatus};
use hoist::notes::{self, Note, Topic};
use hoist::program::ast::{ExpressionType as E, Program, StatementType as S};
use hoist::runner::ds::error::ResolveError;
use hoist::runner::EvalConfig;

fn checked() -> ReplayOptions {
    ReplayOptions {
        check: true,
        show_reads: false,
    }
}

fn misdocumented_note() -> Note {
    Note {
        id: "misdocumented",
        topic: Topic::Hoisting,
        title: "Documented output is wrong",
        program: Program::new(vec![S::log_ident("x"), S::var("x", E::int(100))]),
        expected: vec!["100"],
    }
}

#[test]
fn test_every_note_matches_its_transcript() {
    let config = EvalConfig::default();
    for note in notes::catalog() {
        let transcript = note.replay(&config);
        assert!(
            note.matches(&transcript),
            "{}: expected {:?}, got {:?}",
            note.id,
            note.expected,
            transcript.lines()
        );
    }
}

#[test]
fn test_note_ids_are_unique() {
    let catalog = notes::catalog();
    for (i, a) in catalog.iter().enumerate() {
        assert!(
            catalog[i + 1..].iter().all(|b| b.id != a.id),
            "duplicate id {}",
            a.id
        );
    }
}

#[test]
fn test_both_topics_are_covered() {
    assert!(notes::by_topic(Topic::Hoisting).count() >= 7);
    assert_eq!(notes::by_topic(Topic::Scope).count(), 3);
}

#[test]
fn test_duplicate_let_note_fails_statically() {
    let note = notes::find("hoisting-duplicate-let").unwrap();
    let transcript = note.replay(&EvalConfig::default());
    assert!(transcript.output.is_empty());
    assert_eq!(
        transcript.error,
        Some(ResolveError::DuplicateDeclaration("y".to_string()))
    );
}

#[test]
fn test_unknown_note_is_not_found() {
    assert!(notes::find("no-such-note").is_none());
}

#[test]
fn test_checked_run_of_catalog_succeeds() {
    let mut out = Vec::new();
    let status = replay::run(&[], &EvalConfig::default(), checked(), &mut out).unwrap();
    assert_eq!(status, ReplayStatus::Matched);
    assert_eq!(status.exit_code(), 0);
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("SyntaxError: Identifier 'y' has already been declared"));
}

#[test]
fn test_unknown_id_exits_with_two_and_prints_nothing() {
    let ids = vec!["hoisting-var-before-declaration".to_string(), "nope".to_string()];
    let mut out = Vec::new();
    let status = replay::run(&ids, &EvalConfig::default(), checked(), &mut out).unwrap();
    assert_eq!(status, ReplayStatus::UnknownNote("nope".to_string()));
    assert_eq!(status.exit_code(), 2);
    assert!(out.is_empty());
}

#[test]
fn test_check_reports_mismatch_with_exit_one() {
    let note = misdocumented_note();
    let mut out = Vec::new();
    let status = replay::replay_all(&[&note], &EvalConfig::default(), checked(), &mut out).unwrap();
    assert_eq!(status, ReplayStatus::Mismatched(1));
    assert_eq!(status.exit_code(), 1);
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("// expected:\n100\n"));
}

#[test]
fn test_mismatch_ignored_without_check() {
    let note = misdocumented_note();
    let mut out = Vec::new();
    let status = replay::replay_all(
        &[&note],
        &EvalConfig::default(),
        ReplayOptions::default(),
        &mut out,
    )
    .unwrap();
    assert_eq!(status, ReplayStatus::Matched);
    assert!(String::from_utf8(out).unwrap().contains("undefined"));
}

#[test]
fn test_reads_are_printed_on_request() {
    let note = misdocumented_note();
    let options = ReplayOptions {
        check: false,
        show_reads: true,
    };
    let mut out = Vec::new();
    replay::replay_all(&[&note], &EvalConfig::default(), options, &mut out).unwrap();
    assert!(String::from_utf8(out).unwrap().contains(" x = undefined -> "));
}
