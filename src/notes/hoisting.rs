use crate::program::ast::{DeclarationKind, ExpressionType as E, Program, StatementType as S};

use super::{Note, Topic};

pub(super) fn notes() -> Vec<Note> {
    vec![
        Note {
            id: "hoisting-var-before-declaration",
            topic: Topic::Hoisting,
            title: "Using a var before its declaration reads undefined",
            program: Program::new(vec![S::log_ident("x"), S::var("x", E::int(100))]),
            expected: vec!["undefined"],
        },
        Note {
            id: "hoisting-undeclared-assignment",
            topic: Topic::Hoisting,
            title: "Without var nothing is hoisted and the read fails",
            program: Program::new(vec![S::log_ident("x"), S::assign("x", E::int(100))]),
            expected: vec!["ReferenceError: x is not defined"],
        },
        Note {
            id: "hoisting-as-interpreted",
            topic: Topic::Hoisting,
            title: "The same program with the declaration moved to the top",
            program: Program::new(vec![
                S::declare(DeclarationKind::Var, "x", None),
                S::log_ident("x"),
                S::assign("x", E::int(100)),
            ]),
            expected: vec!["undefined"],
        },
        Note {
            id: "hoisting-var-in-function",
            topic: Topic::Hoisting,
            title: "A var inside an untaken branch still shadows the global",
            program: Program::new(vec![
                S::var("x", E::int(100)),
                S::function(
                    "hoist",
                    vec![
                        S::if_(E::boolean(false), vec![S::var("x", E::int(200))]),
                        S::log_ident("x"),
                    ],
                ),
                S::call("hoist"),
            ]),
            expected: vec!["undefined"],
        },
        Note {
            id: "hoisting-let-in-function",
            topic: Topic::Hoisting,
            title: "A let inside a block does not leak out of it",
            program: Program::new(vec![
                S::let_("x", E::boolean(true)),
                S::function(
                    "hoist",
                    vec![
                        S::if_(
                            E::strict_eq(E::int(3), E::int(4)),
                            vec![S::let_("x", E::boolean(false))],
                        ),
                        S::log_ident("x"),
                    ],
                ),
                S::call("hoist"),
            ]),
            expected: vec!["true"],
        },
        Note {
            id: "hoisting-duplicate-var",
            topic: Topic::Hoisting,
            title: "Declaring a var twice overwrites it",
            program: Program::new(vec![
                S::var("x", E::int(1)),
                S::var("x", E::int(2)),
                S::log_ident("x"),
            ]),
            expected: vec!["2"],
        },
        Note {
            id: "hoisting-duplicate-let",
            topic: Topic::Hoisting,
            title: "Declaring a let twice is a syntax error",
            program: Program::new(vec![
                S::let_("y", E::int(1)),
                S::let_("y", E::int(2)),
                S::log_ident("y"),
            ]),
            expected: vec!["SyntaxError: Identifier 'y' has already been declared"],
        },
        Note {
            id: "hoisting-let-before-declaration",
            topic: Topic::Hoisting,
            title: "Using a let before its declaration is an error",
            program: Program::new(vec![S::log_ident("x"), S::let_("x", E::int(100))]),
            expected: vec!["ReferenceError: Cannot access 'x' before initialization"],
        },
    ]
}
