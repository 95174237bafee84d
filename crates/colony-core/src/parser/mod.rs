//! Parser for the colony fact format.
//!
//! A configuration is a sequence of lines, one fact per line, each ending
//! with `.`:
//!
//! ```text
//! colon(A).
//! colon(B).
//! ressource(1).
//! ressource(2).
//! deteste(A,B).
//! preferences(A,1,2).
//! preferences(B,2,1).
//! ```
//!
//! Blank lines are ignored. Sections must appear in the order shown; see
//! [`Section`] for the state machine. Parsing is fail-fast: the first error
//! aborts and no partially built [`Document`] is ever returned.
//!
//! Logging levels:
//! - **INFO**: Document accepted, with entity counts
//! - **DEBUG**: Section changes

mod error;
mod fact;
mod section;

#[cfg(test)]
mod tests;

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info};

use crate::domain::{
    ColonistId, ConflictPair, ConflictRegistry, Document, EntityRegistry, PreferenceList,
    PreferenceTable, RegistryError, ResourceId,
};

pub use error::{LoadError, ParseError, ParseErrorKind};
pub use fact::FactKind;
pub use section::Section;

use fact::Fact;
use section::Guard;

/// Default upper bound on the number of colonists in one document.
pub const MAX_COLONISTS: usize = 26;

/// Incremental, line-at-a-time parser.
///
/// Feed lines with [`Parser::feed_line`] and call [`Parser::finish`] once
/// the input is exhausted. After an error the parser must be discarded.
#[derive(Debug)]
pub struct Parser {
    section: Section,
    line: usize,
    max_colonists: usize,
    registry: EntityRegistry,
    conflicts: ConflictRegistry,
    preferences: PreferenceTable,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    pub fn new() -> Self {
        Self {
            section: Section::Start,
            line: 0,
            max_colonists: MAX_COLONISTS,
            registry: EntityRegistry::new(),
            conflicts: ConflictRegistry::new(),
            preferences: PreferenceTable::new(),
        }
    }

    /// Sets the maximum number of colonists a document may define.
    pub fn with_max_colonists(mut self, max: usize) -> Self {
        self.max_colonists = max;
        self
    }

    /// The section reached so far.
    pub fn section(&self) -> Section {
        self.section
    }

    /// Number of lines consumed so far, blank lines included.
    pub fn lines_read(&self) -> usize {
        self.line
    }

    /// Consumes one raw line.
    pub fn feed_line(&mut self, raw: &str) -> Result<(), ParseError> {
        self.line += 1;
        let line = self.line;
        self.process(raw).map_err(|kind| ParseError { line, kind })
    }

    /// Runs the end-of-input checks and returns the document.
    pub fn finish(self) -> Result<Document, ParseError> {
        let line = self.line;
        if self.registry.colonist_count() == 0 {
            return Err(ParseError {
                line,
                kind: ParseErrorKind::EmptyDocument,
            });
        }
        if let Some(missing) = self
            .registry
            .colonists()
            .iter()
            .find(|c| !self.preferences.contains(c.as_str()))
        {
            return Err(ParseError {
                line,
                kind: ParseErrorKind::IncompletePreferences(missing.to_string()),
            });
        }

        info!(
            event = "document_parsed",
            colonists = self.registry.colonist_count() as u64,
            resources = self.registry.resource_count() as u64,
            conflicts = self.conflicts.len() as u64,
            lines = line as u64,
        );

        Ok(Document::from_parts(
            self.registry,
            self.conflicts,
            self.preferences,
        ))
    }

    /// Parses every line of `lines` and finishes.
    pub fn parse_lines<I, S>(mut self, lines: I) -> Result<Document, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.feed_line(line.as_ref())?;
        }
        self.finish()
    }

    /// Parses lines read from `reader`.
    ///
    /// # Errors
    ///
    /// I/O failures are reported as [`LoadError::ReadFailure`], malformed
    /// input as [`LoadError::Parse`].
    pub fn parse_reader<R: BufRead>(mut self, reader: R) -> Result<Document, LoadError> {
        for line in reader.lines() {
            self.feed_line(&line?)?;
        }
        Ok(self.finish()?)
    }

    /// Opens `path` and parses its contents. The file is closed on every
    /// exit path.
    pub fn parse_file(self, path: impl AsRef<Path>) -> Result<Document, LoadError> {
        let file = File::open(path.as_ref())?;
        self.parse_reader(BufReader::new(file))
    }

    fn process(&mut self, raw: &str) -> Result<(), ParseErrorKind> {
        let line = raw.trim();
        if line.is_empty() {
            return Ok(());
        }
        let body = line
            .strip_suffix('.')
            .ok_or(ParseErrorKind::MissingTerminator)?;
        let kind = FactKind::detect(body).ok_or(ParseErrorKind::UnknownFact)?;
        self.enter(kind)?;

        match fact::split(body, kind)? {
            Fact::Colon(name) => self.define_colonist(name),
            Fact::Ressource(name) => self.define_resource(name),
            Fact::Deteste(a, b) => self.define_conflict(a, b),
            Fact::Preferences(args) => self.define_preferences(&args),
        }
    }

    fn enter(&mut self, kind: FactKind) -> Result<(), ParseErrorKind> {
        let target = kind.section();
        let guard = section::guard(self.section, target).ok_or(ParseErrorKind::OutOfOrder {
            fact: kind,
            after: self.section,
        })?;
        self.check(guard)?;

        if self.section != target {
            debug!(
                event = "section_change",
                from = %self.section,
                to = %target,
                line = self.line as u64,
            );
            self.section = target;
        }
        Ok(())
    }

    fn check(&self, guard: Guard) -> Result<(), ParseErrorKind> {
        let colonists = self.registry.colonist_count();
        let resources = self.registry.resource_count();
        match guard {
            Guard::Always => Ok(()),
            Guard::HasColonists if colonists == 0 => Err(ParseErrorKind::NoColonistBeforeResource),
            Guard::CountsMatch if colonists != resources => Err(ParseErrorKind::CountMismatch {
                colonists,
                resources,
            }),
            Guard::HasColonists | Guard::CountsMatch => Ok(()),
        }
    }

    fn define_colonist(&mut self, name: &str) -> Result<(), ParseErrorKind> {
        if self.registry.colonist_count() >= self.max_colonists && !self.registry.is_colonist(name)
        {
            return Err(ParseErrorKind::TooManyColonists {
                max: self.max_colonists,
            });
        }
        self.registry
            .register_colonist(ColonistId::from(name))
            .map_err(registry_error)
    }

    fn define_resource(&mut self, name: &str) -> Result<(), ParseErrorKind> {
        self.registry
            .register_resource(ResourceId::from(name))
            .map_err(registry_error)
    }

    fn define_conflict(&mut self, a: &str, b: &str) -> Result<(), ParseErrorKind> {
        let left = self.known_colonist(a)?;
        let right = self.known_colonist(b)?;
        let pair = ConflictPair::new(left, right)
            .ok_or_else(|| ParseErrorKind::SelfConflict(a.to_string()))?;
        // Repeated pairs collapse into one entry.
        self.conflicts.insert(pair);
        Ok(())
    }

    fn define_preferences(&mut self, args: &[&str]) -> Result<(), ParseErrorKind> {
        let expected = self.registry.resource_count() + 1;
        let wrong_count = ParseErrorKind::WrongArgumentCount {
            fact: FactKind::Preferences,
            expected,
            found: args.len(),
        };
        if args.len() != expected {
            return Err(wrong_count);
        }
        let (name, ranked) = args.split_first().ok_or(wrong_count)?;

        let colonist = self.known_colonist(name)?;
        if self.preferences.contains(name) {
            return Err(ParseErrorKind::DuplicatePreferences(name.to_string()));
        }

        let mut seen = HashSet::with_capacity(ranked.len());
        let mut list = Vec::with_capacity(ranked.len());
        for &resource in ranked {
            let id = self
                .registry
                .resource(resource)
                .cloned()
                .ok_or_else(|| ParseErrorKind::UndefinedResource(resource.to_string()))?;
            if !seen.insert(resource) {
                return Err(ParseErrorKind::DuplicateResourceInPreferences {
                    colonist: name.to_string(),
                    resource: resource.to_string(),
                });
            }
            list.push(id);
        }

        self.preferences
            .insert(colonist, PreferenceList::new(list));
        Ok(())
    }

    fn known_colonist(&self, name: &str) -> Result<ColonistId, ParseErrorKind> {
        self.registry
            .colonist(name)
            .cloned()
            .ok_or_else(|| ParseErrorKind::UndefinedColonist(name.to_string()))
    }
}

fn registry_error(err: RegistryError) -> ParseErrorKind {
    match err {
        RegistryError::DuplicateColonist(id) => ParseErrorKind::DuplicateColonist(id.to_string()),
        RegistryError::DuplicateResource(id) => ParseErrorKind::DuplicateResource(id.to_string()),
        RegistryError::NameCollision { name, existing } => {
            ParseErrorKind::NameCollision { name, existing }
        }
    }
}

/// Parses a configuration from raw lines with the default colonist limit.
pub fn parse_configuration<I, S>(lines: I) -> Result<Document, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Parser::new().parse_lines(lines)
}

/// Parses a configuration held in a string.
pub fn parse_str(text: &str) -> Result<Document, ParseError> {
    parse_configuration(text.lines())
}

/// Parses a configuration from a buffered reader.
pub fn parse_reader<R: BufRead>(reader: R) -> Result<Document, LoadError> {
    Parser::new().parse_reader(reader)
}

/// Parses a configuration file.
///
/// # Errors
///
/// Returns [`LoadError::ReadFailure`] if the file cannot be opened or read
/// and [`LoadError::Parse`] if its contents are malformed.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Document, LoadError> {
    Parser::new().parse_file(path)
}
