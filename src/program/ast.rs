//! Program model for the toy block language.
//!
//! Programs are plain data: nested blocks of statements built directly from
//! Rust values. The helper constructors keep hand-written programs (the notes
//! catalog, tests, benches) close to the source they illustrate.

use std::fmt;
use std::fmt::{Display, Formatter};

/// How a name was declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    /// `var`: function-scoped, hoisted to the top of its function scope.
    Var,
    /// `let`: block-scoped, unusable before its declaration point.
    Let,
    /// `const`: like `let`, but cannot be assigned after initialization.
    Const,
}
impl DeclarationKind {
    pub fn is_block_scoped(&self) -> bool {
        !matches!(self, DeclarationKind::Var)
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            DeclarationKind::Var => "var",
            DeclarationKind::Let => "let",
            DeclarationKind::Const => "const",
        }
    }
}
impl Display for DeclarationKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LiteralType {
    Undefined,
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum TemplatePart {
    Text(String),
    Substitution(ExpressionType),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExpressionType {
    Literal(LiteralType),
    /// A read of a name through the scope chain.
    Identifier(String),
    /// `===` when `negated` is false, `!==` otherwise.
    StrictEquality {
        left: Box<ExpressionType>,
        right: Box<ExpressionType>,
        negated: bool,
    },
    TemplateLiteral(Vec<TemplatePart>),
    /// Zero-argument call of the function bound to `callee`.
    Call { callee: String },
}
impl ExpressionType {
    pub fn ident(name: impl Into<String>) -> Self {
        ExpressionType::Identifier(name.into())
    }

    pub fn undefined() -> Self {
        ExpressionType::Literal(LiteralType::Undefined)
    }

    pub fn null() -> Self {
        ExpressionType::Literal(LiteralType::Null)
    }

    pub fn boolean(b: bool) -> Self {
        ExpressionType::Literal(LiteralType::Boolean(b))
    }

    pub fn int(n: i64) -> Self {
        ExpressionType::Literal(LiteralType::Integer(n))
    }

    pub fn float(n: f64) -> Self {
        ExpressionType::Literal(LiteralType::Float(n))
    }

    pub fn string(s: impl Into<String>) -> Self {
        ExpressionType::Literal(LiteralType::String(s.into()))
    }

    pub fn strict_eq(left: ExpressionType, right: ExpressionType) -> Self {
        ExpressionType::StrictEquality {
            left: Box::new(left),
            right: Box::new(right),
            negated: false,
        }
    }

    pub fn strict_ne(left: ExpressionType, right: ExpressionType) -> Self {
        ExpressionType::StrictEquality {
            left: Box::new(left),
            right: Box::new(right),
            negated: true,
        }
    }

    pub fn template(parts: Vec<TemplatePart>) -> Self {
        ExpressionType::TemplateLiteral(parts)
    }

    pub fn call(callee: impl Into<String>) -> Self {
        ExpressionType::Call {
            callee: callee.into(),
        }
    }
}

/// Shorthand for a literal template segment.
pub fn text(s: impl Into<String>) -> TemplatePart {
    TemplatePart::Text(s.into())
}

/// Shorthand for a `${name}` template segment.
pub fn subst(name: impl Into<String>) -> TemplatePart {
    TemplatePart::Substitution(ExpressionType::ident(name))
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BlockData {
    pub body: Vec<StatementType>,
}
impl BlockData {
    pub fn new(body: Vec<StatementType>) -> Self {
        BlockData { body }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionData {
    pub name: String,
    pub body: BlockData,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StatementType {
    Declaration {
        kind: DeclarationKind,
        name: String,
        init: Option<ExpressionType>,
    },
    Assignment {
        name: String,
        value: ExpressionType,
    },
    /// `console.log(...)`: arguments are formatted and joined with a space.
    Log(Vec<ExpressionType>),
    If {
        test: ExpressionType,
        consequent: BlockData,
        alternate: Option<BlockData>,
    },
    Block(BlockData),
    FunctionDeclaration(FunctionData),
    Expression(ExpressionType),
}
impl StatementType {
    pub fn declare(kind: DeclarationKind, name: impl Into<String>, init: Option<ExpressionType>) -> Self {
        StatementType::Declaration {
            kind,
            name: name.into(),
            init,
        }
    }

    pub fn var(name: impl Into<String>, init: ExpressionType) -> Self {
        Self::declare(DeclarationKind::Var, name, Some(init))
    }

    pub fn let_(name: impl Into<String>, init: ExpressionType) -> Self {
        Self::declare(DeclarationKind::Let, name, Some(init))
    }

    pub fn const_(name: impl Into<String>, init: ExpressionType) -> Self {
        Self::declare(DeclarationKind::Const, name, Some(init))
    }

    pub fn assign(name: impl Into<String>, value: ExpressionType) -> Self {
        StatementType::Assignment {
            name: name.into(),
            value,
        }
    }

    pub fn log(args: Vec<ExpressionType>) -> Self {
        StatementType::Log(args)
    }

    /// `console.log(name)`
    pub fn log_ident(name: impl Into<String>) -> Self {
        StatementType::Log(vec![ExpressionType::ident(name)])
    }

    pub fn if_(test: ExpressionType, consequent: Vec<StatementType>) -> Self {
        StatementType::If {
            test,
            consequent: BlockData::new(consequent),
            alternate: None,
        }
    }

    pub fn if_else(
        test: ExpressionType,
        consequent: Vec<StatementType>,
        alternate: Vec<StatementType>,
    ) -> Self {
        StatementType::If {
            test,
            consequent: BlockData::new(consequent),
            alternate: Some(BlockData::new(alternate)),
        }
    }

    pub fn block(body: Vec<StatementType>) -> Self {
        StatementType::Block(BlockData::new(body))
    }

    pub fn function(name: impl Into<String>, body: Vec<StatementType>) -> Self {
        StatementType::FunctionDeclaration(FunctionData {
            name: name.into(),
            body: BlockData::new(body),
        })
    }

    /// `name();` as a statement.
    pub fn call(callee: impl Into<String>) -> Self {
        StatementType::Expression(ExpressionType::call(callee))
    }
}

/// A whole program: the statements of the global scope.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub body: BlockData,
}
impl Program {
    pub fn new(body: Vec<StatementType>) -> Self {
        Program {
            body: BlockData::new(body),
        }
    }
}
