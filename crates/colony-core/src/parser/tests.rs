//! Tests for the colony fact parser.

use std::io::{self, Read};

use colony_test::facts::chain;
use colony_test::scenarios::{NAMED, SCENARIO_A, SCENARIO_A_LOOSE, SCENARIO_C};
use colony_test::FactFile;

use super::*;
use crate::domain::Namespace;

fn parse_err(text: &str) -> ParseError {
    parse_str(text).expect_err("configuration should be rejected")
}

fn base() -> FactFile {
    FactFile::new()
        .colonists(&["A", "B", "C"])
        .resources(&["1", "2", "3"])
}

// ============================================================================
// Accepted documents
// ============================================================================

#[test]
fn test_scenario_a_is_parsed() {
    let document = parse_str(SCENARIO_A).unwrap();

    assert_eq!(document.colonists(), ["A", "B", "C"].map(ColonistId::from));
    assert_eq!(document.resources(), ["1", "2", "3"].map(ResourceId::from));
    assert_eq!(document.conflicts().len(), 1);
    assert!(document.conflicts().contains("A", "B"));
    assert!(document.conflicts().contains("B", "A"));
    assert_eq!(
        document.preferences_of("A").unwrap().as_slice(),
        ["2", "1", "3"].map(ResourceId::from)
    );
}

#[test]
fn test_every_parsed_list_is_a_permutation() {
    let chained = chain(8).render();
    for text in [SCENARIO_A, SCENARIO_C, NAMED, chained.as_str()] {
        let document = parse_str(text).unwrap();
        for colonist in document.colonists() {
            let list = document.preferences_of(colonist.as_str()).unwrap();
            assert!(list.is_permutation_of(document.resources()));
        }
        assert!(document.is_complete());
    }
}

#[test]
fn test_blank_lines_and_whitespace_are_tolerated() {
    let loose = parse_str(SCENARIO_A_LOOSE).unwrap();
    let strict = parse_str(SCENARIO_A).unwrap();

    assert_eq!(loose.colonists(), strict.colonists());
    assert_eq!(
        loose.preferences_of("B").unwrap(),
        strict.preferences_of("B").unwrap()
    );
}

#[test]
fn test_names_are_case_sensitive() {
    let text = FactFile::new()
        .colonists(&["a", "A"])
        .resources(&["r", "R"])
        .conflict("a", "A")
        .preferences("a", &["r", "R"])
        .preferences("A", &["R", "r"])
        .render();

    let document = parse_str(&text).unwrap();
    assert_eq!(document.colonists().len(), 2);
}

#[test]
fn test_repeated_conflict_is_stored_once() {
    let text = base()
        .conflict("A", "B")
        .conflict("B", "A")
        .preferences("A", &["1", "2", "3"])
        .preferences("B", &["1", "2", "3"])
        .preferences("C", &["1", "2", "3"])
        .render();

    let document = parse_str(&text).unwrap();
    assert_eq!(document.conflicts().len(), 1);
}

#[test]
fn test_parser_tracks_sections() {
    let mut parser = Parser::new();
    assert_eq!(parser.section(), Section::Start);
    parser.feed_line("colon(A).").unwrap();
    assert_eq!(parser.section(), Section::Colon);
    parser.feed_line("").unwrap();
    parser.feed_line("ressource(1).").unwrap();
    assert_eq!(parser.section(), Section::Ressource);
    assert_eq!(parser.lines_read(), 3);
}

// ============================================================================
// Syntax errors
// ============================================================================

#[test]
fn test_missing_terminator_reports_line() {
    let err = parse_err("colon(A).\n\ncolon(B)\n");
    assert_eq!(err.line, 3);
    assert_eq!(err.kind, ParseErrorKind::MissingTerminator);
}

#[test]
fn test_unknown_fact() {
    let err = parse_err("colon(A).\naime(A,B).\n");
    assert_eq!(err.line, 2);
    assert_eq!(err.kind, ParseErrorKind::UnknownFact);
}

#[test]
fn test_missing_closing_paren() {
    let err = parse_err("colon(A.\n");
    assert_eq!(
        err.kind,
        ParseErrorKind::MissingClosingParen {
            fact: FactKind::Colon
        }
    );
}

#[test]
fn test_invalid_name() {
    let err = parse_err("colon(A).\ncolon(B_2).\n");
    assert_eq!(err.line, 2);
    assert_eq!(
        err.kind,
        ParseErrorKind::InvalidName {
            fact: FactKind::Colon,
            name: "B_2".to_string(),
        }
    );
}

#[test]
fn test_error_display_carries_line() {
    let err = parse_err("colon(A).\ncolon(A).\n");
    assert_eq!(err.to_string(), "line 2: colonist 'A' is already defined");
}

// ============================================================================
// Section ordering
// ============================================================================

#[test]
fn test_resource_before_any_colonist_is_rejected() {
    let err = parse_err("ressource(1).\ncolon(A).\n");
    assert_eq!(err.line, 1);
    assert_eq!(
        err.kind,
        ParseErrorKind::OutOfOrder {
            fact: FactKind::Ressource,
            after: Section::Start,
        }
    );
}

#[test]
fn test_colonist_after_resources_names_prior_section() {
    let err = parse_err("colon(A).\nressource(1).\ncolon(B).\n");
    assert_eq!(err.line, 3);
    assert_eq!(
        err.kind,
        ParseErrorKind::OutOfOrder {
            fact: FactKind::Colon,
            after: Section::Ressource,
        }
    );
}

#[test]
fn test_preferences_cannot_skip_conflict_section() {
    let text = FactFile::new()
        .colonists(&["A"])
        .resources(&["1"])
        .preferences("A", &["1"])
        .render();

    let err = parse_err(&text);
    assert_eq!(
        err.kind,
        ParseErrorKind::OutOfOrder {
            fact: FactKind::Preferences,
            after: Section::Ressource,
        }
    );
}

#[test]
fn test_conflict_after_preferences_is_rejected() {
    let text = base()
        .conflict("A", "B")
        .preferences("A", &["1", "2", "3"])
        .conflict("B", "C")
        .render();

    let err = parse_err(&text);
    assert_eq!(err.line, 9);
    assert_eq!(
        err.kind,
        ParseErrorKind::OutOfOrder {
            fact: FactKind::Deteste,
            after: Section::Preferences,
        }
    );
}

#[test]
fn test_count_mismatch_when_leaving_resources() {
    let text = FactFile::new()
        .colonists(&["A", "B"])
        .resources(&["1"])
        .conflict("A", "B")
        .render();

    let err = parse_err(&text);
    assert_eq!(err.line, 4);
    assert_eq!(
        err.kind,
        ParseErrorKind::CountMismatch {
            colonists: 2,
            resources: 1,
        }
    );
}

// ============================================================================
// Semantic errors
// ============================================================================

#[test]
fn test_duplicate_colonist_rejected_at_second_occurrence() {
    let err = parse_err("colon(A).\ncolon(B).\ncolon(A).\n");
    assert_eq!(err.line, 3);
    assert_eq!(err.kind, ParseErrorKind::DuplicateColonist("A".to_string()));
}

#[test]
fn test_duplicate_resource() {
    let err = parse_err("colon(A).\nressource(1).\nressource(1).\n");
    assert_eq!(err.line, 3);
    assert_eq!(err.kind, ParseErrorKind::DuplicateResource("1".to_string()));
}

#[test]
fn test_resource_cannot_reuse_colonist_name() {
    let err = parse_err("colon(A).\nressource(A).\n");
    assert_eq!(
        err.kind,
        ParseErrorKind::NameCollision {
            name: "A".to_string(),
            existing: Namespace::Colonist,
        }
    );
}

#[test]
fn test_conflict_with_undefined_colonist() {
    let text = base().conflict("A", "Z").render();
    let err = parse_err(&text);
    assert_eq!(err.line, 7);
    assert_eq!(err.kind, ParseErrorKind::UndefinedColonist("Z".to_string()));
}

#[test]
fn test_conflict_needs_exactly_two_names() {
    let text = base().line("deteste(A,B,C).").render();
    let err = parse_err(&text);
    assert_eq!(
        err.kind,
        ParseErrorKind::WrongArgumentCount {
            fact: FactKind::Deteste,
            expected: 2,
            found: 3,
        }
    );
}

#[test]
fn test_self_conflict_is_rejected() {
    let text = base().conflict("B", "B").render();
    let err = parse_err(&text);
    assert_eq!(err.kind, ParseErrorKind::SelfConflict("B".to_string()));
}

#[test]
fn test_short_preference_list_is_rejected() {
    let text = base()
        .conflict("A", "B")
        .preferences("A", &["1", "2"])
        .render();

    let err = parse_err(&text);
    assert_eq!(err.line, 8);
    assert_eq!(
        err.kind,
        ParseErrorKind::WrongArgumentCount {
            fact: FactKind::Preferences,
            expected: 4,
            found: 3,
        }
    );
}

#[test]
fn test_preferences_for_undefined_colonist() {
    let text = base()
        .conflict("A", "B")
        .preferences("Z", &["1", "2", "3"])
        .render();

    let err = parse_err(&text);
    assert_eq!(err.kind, ParseErrorKind::UndefinedColonist("Z".to_string()));
}

#[test]
fn test_preferences_with_undefined_resource() {
    let text = base()
        .conflict("A", "B")
        .preferences("A", &["1", "2", "9"])
        .render();

    let err = parse_err(&text);
    assert_eq!(err.kind, ParseErrorKind::UndefinedResource("9".to_string()));
}

#[test]
fn test_preferences_with_repeated_resource() {
    let text = base()
        .conflict("A", "B")
        .preferences("A", &["1", "2", "1"])
        .render();

    let err = parse_err(&text);
    assert_eq!(
        err.kind,
        ParseErrorKind::DuplicateResourceInPreferences {
            colonist: "A".to_string(),
            resource: "1".to_string(),
        }
    );
}

#[test]
fn test_preferences_defined_twice() {
    let text = base()
        .conflict("A", "B")
        .preferences("A", &["1", "2", "3"])
        .preferences("A", &["3", "2", "1"])
        .render();

    let err = parse_err(&text);
    assert_eq!(err.line, 9);
    assert_eq!(err.kind, ParseErrorKind::DuplicatePreferences("A".to_string()));
}

#[test]
fn test_missing_preferences_at_end_of_input() {
    let text = base()
        .conflict("A", "B")
        .preferences("A", &["1", "2", "3"])
        .preferences("C", &["1", "2", "3"])
        .render();

    let err = parse_err(&text);
    assert_eq!(err.line, 9);
    assert_eq!(
        err.kind,
        ParseErrorKind::IncompletePreferences("B".to_string())
    );
}

#[test]
fn test_empty_input_is_rejected() {
    let err = parse_err("\n\n");
    assert_eq!(err.line, 2);
    assert_eq!(err.kind, ParseErrorKind::EmptyDocument);
}

#[test]
fn test_colonist_limit() {
    let names: Vec<String> = (0..3).map(|i| format!("C{i}")).collect();
    let lines: Vec<String> = names.iter().map(|n| format!("colon({n}).")).collect();

    let err = Parser::new()
        .with_max_colonists(2)
        .parse_lines(&lines)
        .unwrap_err();
    assert_eq!(err.line, 3);
    assert_eq!(err.kind, ParseErrorKind::TooManyColonists { max: 2 });

    let err = parse_err(&chain(MAX_COLONISTS + 1).render());
    assert_eq!(
        err.kind,
        ParseErrorKind::TooManyColonists { max: MAX_COLONISTS }
    );
    assert!(parse_str(&chain(MAX_COLONISTS).render()).is_ok());
}

// ============================================================================
// Readers and files
// ============================================================================

struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::Other, "disk on fire"))
    }
}

#[test]
fn test_read_failure_is_distinct_from_parse_error() {
    let reader = io::BufReader::new(FailingReader);
    match parse_reader(reader) {
        Err(LoadError::ReadFailure(err)) => assert_eq!(err.to_string(), "disk on fire"),
        other => panic!("expected read failure, got {other:?}"),
    }
}

#[test]
fn test_missing_file_is_read_failure() {
    let result = parse_file("/definitely/not/a/colony/file.txt");
    assert!(matches!(result, Err(LoadError::ReadFailure(_))));
}

#[test]
fn test_reader_reports_parse_errors() {
    let reader = io::Cursor::new("colon(A).\nressource(1)\n");
    match parse_reader(reader) {
        Err(LoadError::Parse(err)) => {
            assert_eq!(err.line, 2);
            assert_eq!(err.kind, ParseErrorKind::MissingTerminator);
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}
