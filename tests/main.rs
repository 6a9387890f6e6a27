use std::collections::HashSet;
use std::path::PathBuf;

use assert_matches::assert_matches;
use magritte::{derive::*, ConfigError, ElementFailure, Outcome, ParseError, StrategyError};
use rstest::rstest;

#[derive(Debug, PartialEq, Literal)]
enum Number {
    #[magritte(value = 1)]
    One,
    #[magritte(value = 2)]
    Two,
}

#[derive(Debug, PartialEq, Literal)]
enum Quality {
    Good,
    Bad,
}

#[derive(Debug, Parameters)]
#[magritte(program = "leaf")]
struct Leaf {
    value: i64,
}

#[derive(Debug, Parameters)]
#[magritte(program = "flagged")]
struct Flagged {
    flag: bool,
}

#[derive(Debug, Parameters)]
#[magritte(program = "collector")]
struct Collector {
    items: Vec<i64>,
    other: i64,
}

#[derive(Debug, Parameters)]
#[magritte(program = "offsetter")]
struct Offsetter {
    offset: i64,
    operation: String,
}

#[derive(Debug, Parameters)]
#[magritte(program = "pairing")]
struct Pairing {
    pair: (Number, Quality),
}

#[derive(Debug, Parameters)]
#[magritte(program = "pairings")]
struct Pairings {
    pairs: Vec<(Number, Quality)>,
}

/// Exercises the defaults.
#[derive(Debug, Parameters)]
#[magritte(program = "defaults")]
struct Defaults {
    /// The input file.
    #[magritte(default = "in.txt")]
    input: PathBuf,
    #[magritte(default)]
    tags: HashSet<String>,
    #[magritte(default = None)]
    limit: Option<u64>,
    #[magritte(default = Quality::Good)]
    quality: Quality,
    #[magritte(default = (1, 2.5))]
    scale: (u8, f64),
}

#[derive(Debug, Parameters)]
#[magritte(program = "wide")]
struct Wide {
    #[magritte(default = u64::MAX)]
    unsigned: u64,
    #[magritte(default = i64::MIN)]
    signed: i64,
}

#[derive(Debug, Parameters)]
struct Empty {}

#[derive(Debug, Parameters)]
#[magritte(program = "raw")]
struct Raw {
    r#type: String,
}

#[rstest]
#[case(&["--value", "42"], 42)]
#[case(&["-v", "-3"], -3)]
#[case(&["-value", "0"], 0)]
fn leaf(#[case] tokens: &[&str], #[case] expected: i64) {
    // Execute
    let leaf = Leaf::parse_tokens(tokens).unwrap();

    // Verify
    assert_eq!(leaf.value, expected);
}

#[test]
fn leaf_invalid() {
    // Setup
    let parser = Leaf::command_line_parser().build_parser().unwrap();

    // Execute
    let result = parser.try_parse(&["--value", "abc"]);

    // Verify
    assert_matches!(
        result,
        Err(ParseError::Strategy {
            source: StrategyError::InvalidConversion { type_name: "int", .. },
            ..
        })
    );
    assert_eq!(Leaf::parse_tokens(&["--value", "abc"]).unwrap_err(), 1);
}

#[rstest]
#[case(&["--flag"], true)]
#[case(&["--no-flag"], false)]
#[case(&["--not-flag"], false)]
#[case(&["-flag", "yes"], true)]
#[case(&["-flag", "off"], false)]
fn flag(#[case] tokens: &[&str], #[case] expected: bool) {
    let flagged = Flagged::parse_tokens(tokens).unwrap();

    assert_eq!(flagged.flag, expected);
}

#[test]
fn flag_invalid() {
    let parser = Flagged::command_line_parser().build_parser().unwrap();

    assert_matches!(
        parser.try_parse(&["-flag", "nah"]),
        Err(ParseError::Strategy {
            source: StrategyError::InvalidBool(_),
            ..
        })
    );
}

#[test]
fn list_stops_at_other() {
    // Execute
    let collector =
        Collector::parse_tokens(&["--items", "3", "4", "5", "--other", "1"]).unwrap();

    // Verify
    assert_eq!(collector.items, vec![3, 4, 5]);
    assert_eq!(collector.other, 1);
}

#[test]
fn list_empty() {
    let collector = Collector::parse_tokens(&["--items", "--other", "1"]).unwrap();

    assert_eq!(collector.items, Vec::<i64>::default());
}

#[rstest]
#[case(&["--offset", "1", "--operation", "add"])]
#[case(&["-offset", "1", "-operation", "add"])]
fn shared_initial(#[case] tokens: &[&str]) {
    let offsetter = Offsetter::parse_tokens(tokens).unwrap();

    assert_eq!(offsetter.offset, 1);
    assert_eq!(offsetter.operation, "add");
}

#[test]
fn shared_initial_withdrawn() {
    let parser = Offsetter::command_line_parser().build_parser().unwrap();

    assert_eq!(
        parser.try_parse(&["-o", "1"]),
        Err(ParseError::UnknownToken("-o".to_string()))
    );
}

#[test]
fn missing() {
    // Setup
    let parser = Collector::command_line_parser().build_parser().unwrap();

    // Execute
    let result = parser.try_parse(&["--items", "1"]);

    // Verify
    assert_eq!(result, Err(ParseError::Missing("other".to_string())));
    assert_eq!(Collector::parse_tokens(&["--items", "1"]).unwrap_err(), 1);
}

#[test]
fn tuple_literals() {
    let pairing = Pairing::parse_tokens(&["--pair", "1", "good"]).unwrap();

    assert_eq!(pairing.pair, (Number::One, Quality::Good));
}

#[test]
fn tuple_literals_invalid() {
    // Setup
    let parser = Pairing::command_line_parser().build_parser().unwrap();

    // Execute
    let result = parser.try_parse(&["--pair", "1", "oops"]);

    // Verify
    assert_matches!(
        result,
        Err(ParseError::Strategy {
            source: StrategyError::UnknownLiteral { .. },
            ..
        })
    );
}

#[test]
fn list_of_tuples_truncates() {
    // Setup
    let parser = Pairings::command_line_parser().build_parser().unwrap();

    // Execute
    let arguments = parser.consume(&["--pairs", "1", "good", "2", "oops"]);

    // Verify
    // The repetition stops before '2 oops', leaving '2' to the stream.
    assert_eq!(arguments, Err(ParseError::UnknownToken("2".to_string())));
}

#[test]
fn list_of_tuples_propagates() {
    // Setup
    let parser = Pairings::command_line_parser()
        .element_failure(ElementFailure::Propagate)
        .build_parser()
        .unwrap();

    // Execute
    let arguments = parser.consume(&["--pairs", "1", "good", "2", "oops"]);

    // Verify
    assert_matches!(
        arguments,
        Err(ParseError::Strategy {
            source: StrategyError::UnknownLiteral { .. },
            ..
        })
    );
}

#[test]
fn list_of_tuples() {
    let pairings = Pairings::parse_tokens(&["--pairs", "1", "good", "2", "bad"]).unwrap();

    assert_eq!(
        pairings.pairs,
        vec![(Number::One, Quality::Good), (Number::Two, Quality::Bad)]
    );
}

#[test]
fn defaults() {
    // Execute
    let defaults = Defaults::parse_tokens(&[]).unwrap();

    // Verify
    assert_eq!(defaults.input, PathBuf::from("in.txt"));
    assert!(defaults.tags.is_empty());
    assert_eq!(defaults.limit, None);
    assert_eq!(defaults.quality, Quality::Good);
    assert_eq!(defaults.scale, (1, 2.5));
}

#[test]
fn defaults_overridden() {
    // Execute
    let defaults = Defaults::parse_tokens(&[
        "--input", "out.txt", "--tags", "a", "b", "a", "--limit", "7", "-q", "bad", "-s", "3",
        "0.5",
    ])
    .unwrap();

    // Verify
    assert_eq!(defaults.input, PathBuf::from("out.txt"));
    assert_eq!(
        defaults.tags,
        HashSet::from(["a".to_string(), "b".to_string()])
    );
    assert_eq!(defaults.limit, Some(7));
    assert_eq!(defaults.quality, Quality::Bad);
    assert_eq!(defaults.scale, (3, 0.5));
}

#[test]
fn defaults_help() {
    // Setup
    let parser = Defaults::command_line_parser().build_parser().unwrap();

    // Execute
    let help = parser.help();

    // Verify
    assert!(help.starts_with("defaults:\n    Exercises the defaults.\nArguments:\n"));
    assert!(help.contains("path\n        The input file.\n        Default: in.txt"));
    assert!(help.contains("literal[\"good\", \"bad\"]"));
    assert!(help.contains("int | None"));
}

#[test]
fn wide_integers() {
    // Execute
    let defaulted = Wide::parse_tokens(&[]).unwrap();
    let specified = Wide::parse_tokens(&[
        "--unsigned",
        "18446744073709551614",
        "--signed",
        "-9223372036854775807",
    ])
    .unwrap();

    // Verify
    assert_eq!(defaulted.unsigned, u64::MAX);
    assert_eq!(defaulted.signed, i64::MIN);
    assert_eq!(specified.unsigned, u64::MAX - 1);
    assert_eq!(specified.signed, i64::MIN + 1);
}

#[test]
fn wide_integers_out_of_range() {
    assert_eq!(
        Wide::parse_tokens(&["--unsigned", "18446744073709551616"]).unwrap_err(),
        1
    );
}

#[rstest]
#[case(&["--help"])]
#[case(&["-help", "yes"])]
#[case(&["--items", "1", "--help"])]
fn help(#[case] tokens: &[&str]) {
    // Setup
    let parser = Collector::command_line_parser().build_parser().unwrap();

    // Execute
    let outcome = parser.try_parse(tokens).unwrap();

    // Verify
    assert_eq!(outcome, Outcome::Help);
    assert_eq!(Collector::parse_tokens(tokens).unwrap_err(), 0);
}

#[test]
fn help_declined() {
    let parser = Leaf::command_line_parser().build_parser().unwrap();

    assert_matches!(
        parser.try_parse(&["--no-help", "--value", "1"]),
        Ok(Outcome::Values(_))
    );
}

#[test]
fn duplicate() {
    let parser = Leaf::command_line_parser().build_parser().unwrap();

    assert_eq!(
        parser.try_parse(&["--value", "1", "-v", "2"]),
        Err(ParseError::Duplicate {
            name: "value".to_string(),
            spelling: "-v".to_string(),
        })
    );
}

#[test]
fn empty_parameters() {
    let parser = Empty::command_line_parser().build_parser().unwrap();

    assert_matches!(parser.try_parse(&[]), Ok(Outcome::Values(values)) if values.is_empty());
    assert_eq!(Empty::program(), env!("CARGO_CRATE_NAME"));
}

#[test]
fn raw_identifier() {
    let raw = Raw::parse_tokens(&["--type", "abc"]).unwrap();

    assert_eq!(raw.r#type, "abc");
}

#[test]
fn reserved_name() {
    #[derive(Debug, Parameters)]
    struct Reserved {
        #[allow(dead_code)]
        help: String,
    }

    assert_eq!(
        Reserved::command_line_parser().build_parser().err(),
        Some(ConfigError::ReservedName("help".to_string()))
    );
}
