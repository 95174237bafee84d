//! Parse and load errors.

use thiserror::Error;

use super::fact::FactKind;
use super::section::Section;
use crate::domain::Namespace;

/// A rejected configuration, located at a 1-based line number.
///
/// Errors detected at end of input carry the number of the last line read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {kind}")]
pub struct ParseError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

/// Reason a configuration was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("missing terminating '.'")]
    MissingTerminator,

    #[error("missing closing ')' in '{fact}' fact")]
    MissingClosingParen { fact: FactKind },

    #[error("missing argument for '{fact}'")]
    MissingArgument { fact: FactKind },

    #[error("unknown fact")]
    UnknownFact,

    #[error("invalid name '{name}' in '{fact}' fact, names must be alphanumeric")]
    InvalidName { fact: FactKind, name: String },

    #[error("name '{name}' is already used as a {existing}")]
    NameCollision { name: String, existing: Namespace },

    #[error(
        "'{fact}' cannot follow section '{after}' (expected order: colon, ressource, deteste, preferences)"
    )]
    OutOfOrder { fact: FactKind, after: Section },

    #[error("wrong argument count for '{fact}': expected {expected}, found {found}")]
    WrongArgumentCount {
        fact: FactKind,
        expected: usize,
        found: usize,
    },

    #[error("colonist '{0}' is not defined")]
    UndefinedColonist(String),

    #[error("resource '{0}' is not defined")]
    UndefinedResource(String),

    #[error("colonist '{0}' is already defined")]
    DuplicateColonist(String),

    #[error("resource '{0}' is already defined")]
    DuplicateResource(String),

    #[error("preferences of colonist '{0}' are already defined")]
    DuplicatePreferences(String),

    #[error("resource '{resource}' appears twice in the preferences of '{colonist}'")]
    DuplicateResourceInPreferences { colonist: String, resource: String },

    #[error("colonist '{0}' cannot be in conflict with itself")]
    SelfConflict(String),

    #[error("no colonist defined before the first resource")]
    NoColonistBeforeResource,

    #[error("colonist count ({colonists}) differs from resource count ({resources})")]
    CountMismatch { colonists: usize, resources: usize },

    #[error("too many colonists, at most {max} are allowed")]
    TooManyColonists { max: usize },

    #[error("preferences of colonist '{0}' are not defined")]
    IncompletePreferences(String),

    #[error("no colonist defined")]
    EmptyDocument,
}

/// Failure to load a configuration from a file or reader.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source could not be read; the I/O message is forwarded as is.
    #[error("read failure: {0}")]
    ReadFailure(#[from] std::io::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),
}
