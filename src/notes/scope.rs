use crate::program::ast::{
    subst, text, DeclarationKind, ExpressionType as E, Program, StatementType as S,
};

use super::{Note, Topic};

fn lupin(prefix: &str) -> S {
    S::log(vec![E::template(vec![
        text(format!("{} Lupin is currently a ", prefix)),
        subst("species"),
        text("."),
    ])])
}

fn full_moon(kind: DeclarationKind) -> Program {
    Program::new(vec![
        S::var("fullMoon", E::boolean(true)),
        S::declare(kind, "species", Some(E::string("human"))),
        S::if_(
            E::ident("fullMoon"),
            vec![
                S::declare(kind, "species", Some(E::string("werewolf"))),
                lupin("It is a full moon."),
            ],
        ),
        lupin("It is not a full moon."),
    ])
}

pub(super) fn notes() -> Vec<Note> {
    vec![
        Note {
            id: "scope-var-function",
            topic: Topic::Scope,
            title: "A var inside a function is local to that function",
            program: Program::new(vec![
                S::var("species", E::string("human")),
                S::function(
                    "transform",
                    vec![
                        S::var("species", E::string("werewolf")),
                        S::log_ident("species"),
                    ],
                ),
                S::log_ident("species"),
                S::call("transform"),
                S::log_ident("species"),
            ]),
            expected: vec!["human", "werewolf", "human"],
        },
        Note {
            id: "scope-let-block",
            topic: Topic::Scope,
            title: "A let inside an if block gets its own scope",
            program: full_moon(DeclarationKind::Let),
            expected: vec![
                "It is a full moon. Lupin is currently a werewolf.",
                "It is not a full moon. Lupin is currently a human.",
            ],
        },
        Note {
            id: "scope-var-block",
            topic: Topic::Scope,
            title: "A var inside an if block reassigns the outer variable",
            program: full_moon(DeclarationKind::Var),
            expected: vec![
                "It is a full moon. Lupin is currently a werewolf.",
                "It is not a full moon. Lupin is currently a werewolf.",
            ],
        },
    ]
}
