use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};

/// Console error class a failure is reported under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    SyntaxError,
    ReferenceError,
    TypeError,
    RangeError,
}
impl Display for ErrorClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorClass::SyntaxError => "SyntaxError",
            ErrorClass::ReferenceError => "ReferenceError",
            ErrorClass::TypeError => "TypeError",
            ErrorClass::RangeError => "RangeError",
        };
        write!(f, "{}", s)
    }
}

/// Every way an evaluation can fail. All of them abort the running program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// A block-scoped name declared twice in one scope, or clashing with a
    /// function-scoped declaration of the same name.
    DuplicateDeclaration(String),
    /// `const` without an initializer.
    MissingInitializer(String),
    /// Block-scoped binding read before its declaration executed.
    UninitializedAccess(String),
    /// No binding for the name anywhere on the scope chain.
    UnboundIdentifier(String),
    ImmutableAssignment(String),
    NotCallable(String),
    /// More calls and blocks active at once than the configured limit.
    StackDepthExceeded(usize),
}
impl ResolveError {
    pub fn class(&self) -> ErrorClass {
        match self {
            ResolveError::DuplicateDeclaration(_) | ResolveError::MissingInitializer(_) => {
                ErrorClass::SyntaxError
            }
            ResolveError::UninitializedAccess(_) | ResolveError::UnboundIdentifier(_) => {
                ErrorClass::ReferenceError
            }
            ResolveError::ImmutableAssignment(_) | ResolveError::NotCallable(_) => {
                ErrorClass::TypeError
            }
            ResolveError::StackDepthExceeded(_) => ErrorClass::RangeError,
        }
    }

    /// Static errors are found before any statement of the program runs and
    /// before any of its names is bound.
    pub fn is_static(&self) -> bool {
        self.class() == ErrorClass::SyntaxError
    }
}
impl Display for ResolveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let class = self.class();
        match self {
            ResolveError::DuplicateDeclaration(name) => {
                write!(f, "{}: Identifier '{}' has already been declared", class, name)
            }
            ResolveError::MissingInitializer(name) => {
                write!(f, "{}: Missing initializer in const declaration '{}'", class, name)
            }
            ResolveError::UninitializedAccess(name) => {
                write!(f, "{}: Cannot access '{}' before initialization", class, name)
            }
            ResolveError::UnboundIdentifier(name) => {
                write!(f, "{}: {} is not defined", class, name)
            }
            ResolveError::ImmutableAssignment(name) => {
                write!(f, "{}: Assignment to constant variable '{}'", class, name)
            }
            ResolveError::NotCallable(name) => write!(f, "{}: {} is not a function", class, name),
            ResolveError::StackDepthExceeded(limit) => write!(
                f,
                "{}: Maximum call stack size exceeded (limit {})",
                class, limit
            ),
        }
    }
}
impl Error for ResolveError {}
