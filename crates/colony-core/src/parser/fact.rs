//! Recognition and argument splitting of single facts.

use std::fmt;

use super::error::ParseErrorKind;
use super::section::Section;
use crate::domain::is_valid_name;

/// Keyword of a fact line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactKind {
    Colon,
    Ressource,
    Deteste,
    Preferences,
}

impl FactKind {
    const ALL: [FactKind; 4] = [
        FactKind::Colon,
        FactKind::Ressource,
        FactKind::Deteste,
        FactKind::Preferences,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            FactKind::Colon => "colon",
            FactKind::Ressource => "ressource",
            FactKind::Deteste => "deteste",
            FactKind::Preferences => "preferences",
        }
    }

    /// The section this fact belongs to.
    pub fn section(self) -> Section {
        match self {
            FactKind::Colon => Section::Colon,
            FactKind::Ressource => Section::Ressource,
            FactKind::Deteste => Section::Deteste,
            FactKind::Preferences => Section::Preferences,
        }
    }

    /// Detects the fact keyword from a `keyword(` prefix.
    pub(crate) fn detect(body: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| {
            body.strip_prefix(kind.keyword())
                .is_some_and(|rest| rest.starts_with('('))
        })
    }
}

impl fmt::Display for FactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A fact with its arguments split and name-checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Fact<'a> {
    Colon(&'a str),
    Ressource(&'a str),
    Deteste(&'a str, &'a str),
    /// Subject followed by its ranked resources. The count is checked by the
    /// parser since it depends on the registered resources.
    Preferences(Vec<&'a str>),
}

/// Splits the arguments of `body`, a terminator-stripped line starting with
/// `kind`'s keyword.
pub(crate) fn split(body: &str, kind: FactKind) -> Result<Fact<'_>, ParseErrorKind> {
    let open = kind.keyword().len() + 1;
    let rest = &body[open..];
    let close = rest
        .find(')')
        .ok_or(ParseErrorKind::MissingClosingParen { fact: kind })?;
    if !rest[close + 1..].trim().is_empty() {
        return Err(ParseErrorKind::UnknownFact);
    }
    let inner = rest[..close].trim();

    match kind {
        FactKind::Colon | FactKind::Ressource => {
            if inner.is_empty() {
                return Err(ParseErrorKind::MissingArgument { fact: kind });
            }
            let name = checked_name(inner, kind)?;
            Ok(match kind {
                FactKind::Colon => Fact::Colon(name),
                _ => Fact::Ressource(name),
            })
        }
        FactKind::Deteste => {
            let args = comma_separated(inner);
            if args.len() != 2 {
                return Err(ParseErrorKind::WrongArgumentCount {
                    fact: kind,
                    expected: 2,
                    found: args.len(),
                });
            }
            let a = checked_name(args[0], kind)?;
            let b = checked_name(args[1], kind)?;
            Ok(Fact::Deteste(a, b))
        }
        FactKind::Preferences => {
            let args = comma_separated(inner)
                .into_iter()
                .map(|arg| checked_name(arg, kind))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Fact::Preferences(args))
        }
    }
}

fn comma_separated(inner: &str) -> Vec<&str> {
    inner.split(',').map(str::trim).collect()
}

fn checked_name(name: &str, fact: FactKind) -> Result<&str, ParseErrorKind> {
    if is_valid_name(name) {
        Ok(name)
    } else {
        Err(ParseErrorKind::InvalidName {
            fact,
            name: name.to_string(),
        })
    }
}
