//! Early errors and declaration scans, run before any statement executes.

use std::collections::HashSet;

use crate::program::ast::{BlockData, DeclarationKind, FunctionData, Program, StatementType};
use crate::runner::ds::error::ResolveError;

/// Names a block declares, split by where they bind.
pub struct Semantics {
    /// `let`/`const` (and, in nested blocks, function) names bound in the block itself.
    pub lexically_declared_names: Vec<String>,
    /// `var` (and, at function level, function) names hoisted to the enclosing function scope.
    pub var_declared_names: Vec<String>,
}
impl Semantics {
    fn of_function_body(body: &BlockData) -> Self {
        let mut var_declared_names = var_scoped_declarations(body);
        var_declared_names.extend(function_declarations(body).map(|f| f.name.clone()));
        Semantics {
            lexically_declared_names: lexically_scoped_declarations(body)
                .into_iter()
                .map(|(name, _)| name)
                .collect(),
            var_declared_names,
        }
    }

    fn of_nested_block(block: &BlockData) -> Self {
        let mut lexically_declared_names: Vec<String> = lexically_scoped_declarations(block)
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        lexically_declared_names.extend(function_declarations(block).map(|f| f.name.clone()));
        Semantics {
            lexically_declared_names,
            var_declared_names: var_scoped_declarations(block),
        }
    }

    fn check(&self) -> Result<(), ResolveError> {
        let vars: HashSet<&String> = self.var_declared_names.iter().collect();
        let mut seen = HashSet::new();
        for name in &self.lexically_declared_names {
            if !seen.insert(name) || vars.contains(name) {
                return Err(ResolveError::DuplicateDeclaration(name.to_string()));
            }
        }
        Ok(())
    }
}

/// `var` names declared anywhere in `block`, nested blocks included but not
/// nested function bodies. First-occurrence order, no repeats.
pub fn var_scoped_declarations(block: &BlockData) -> Vec<String> {
    let mut names = vec![];
    collect_var_names(block, &mut names);
    names
}

fn collect_var_names(block: &BlockData, names: &mut Vec<String>) {
    for stmt in &block.body {
        match stmt {
            StatementType::Declaration {
                kind: DeclarationKind::Var,
                name,
                ..
            } => {
                if !names.contains(name) {
                    names.push(name.to_string());
                }
            }
            StatementType::If {
                consequent,
                alternate,
                ..
            } => {
                collect_var_names(consequent, names);
                if let Some(alternate) = alternate {
                    collect_var_names(alternate, names);
                }
            }
            StatementType::Block(inner) => collect_var_names(inner, names),
            _ => {}
        }
    }
}

/// `let`/`const` declarations directly inside `block`.
pub fn lexically_scoped_declarations(block: &BlockData) -> Vec<(String, DeclarationKind)> {
    block
        .body
        .iter()
        .filter_map(|stmt| match stmt {
            StatementType::Declaration { kind, name, .. } if kind.is_block_scoped() => {
                Some((name.to_string(), *kind))
            }
            _ => None,
        })
        .collect()
}

/// Function declarations directly inside `block`.
pub fn function_declarations(block: &BlockData) -> impl Iterator<Item = &FunctionData> {
    block.body.iter().filter_map(|stmt| match stmt {
        StatementType::FunctionDeclaration(f) => Some(f),
        _ => None,
    })
}

/// Reports the first static error in `program`, if any.
pub fn check_early_errors(program: &Program) -> Result<(), ResolveError> {
    check_function_body(&program.body)
}

fn check_function_body(body: &BlockData) -> Result<(), ResolveError> {
    Semantics::of_function_body(body).check()?;
    check_statements(body)
}

fn check_nested_block(block: &BlockData) -> Result<(), ResolveError> {
    Semantics::of_nested_block(block).check()?;
    check_statements(block)
}

fn check_statements(block: &BlockData) -> Result<(), ResolveError> {
    for stmt in &block.body {
        match stmt {
            StatementType::Declaration {
                kind: DeclarationKind::Const,
                name,
                init: None,
            } => return Err(ResolveError::MissingInitializer(name.to_string())),
            StatementType::If {
                consequent,
                alternate,
                ..
            } => {
                check_nested_block(consequent)?;
                if let Some(alternate) = alternate {
                    check_nested_block(alternate)?;
                }
            }
            StatementType::Block(inner) => check_nested_block(inner)?,
            StatementType::FunctionDeclaration(f) => check_function_body(&f.body)?,
            _ => {}
        }
    }
    Ok(())
}
