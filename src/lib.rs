//! `magritte` is a command line parser for Rust, derived from the type shapes of its parameters.
//!
//! Rather than configuring flags one by one, each parameter is described by its Rust type.
//! The *shape* of that type (scalars, lists, sets, tuples, alternatives, literal enumerations) decides how tokens are consumed from the Cli.
//! Specifically, `magritte` attempts to prioritize the following design concerns:
//! * *Type driven parsing*:
//! The user declares the parameter types; `magritte` derives the parsing strategy (and help message) from them.
//! * *Unambiguous spellings*:
//! Every parameter is spelled in several ways (`-n`, `--name`, `-name`), and any spelling shared by two parameters is withdrawn from both.
//! * *Typed results*:
//! The core Api returns a typed result; printing and exiting happen only at the very top.
//!
//! # Usage
//! via [derive Api](./derive/index.html):
//! ```no_run
#![doc = include_str!("../demos/demo_summer_d.rs")]
//! ```
//! or equivalently via builder Api (this page):
//! ```no_run
#![doc = include_str!("../demos/demo_summer_b.rs")]
//! ```
//!
//! Both of these generate the same Cli program:
//! ```console
//! $ summer --help
//! summer:
//!     Sums the items.
//! Arguments:
//!     -i, -items, --items:                    list[int]
//!         The items to sum.
//!     -help, --help, --no-help, --not-help:   bool
//!         Show this help message and exit.
//!         Default: False
//!
//! $ summer -i 1 2 3
//! Sum: 6
//!
//! $ summer
//! Parse error: The parameter 'items' is required.
//!
//! ^
//! <help message>
//!
//! $ summer --items 1 2 --items 3
//! Parse error: The parameter 'items' is specified a second time, via '--items'.
//! --items 1 2 --items 3
//!             ^
//! <help message>
//! ```
//!
//! # Type Shapes
//! Each parameter type implements [`Describe`](./prelude/trait.Describe.html), producing a [`TypeDescriptor`].
//! The descriptor determines the parsing strategy:
//! ```console
//! Rust type           | Descriptor                | Consumes
//! -----------------------------------------------------------------------------
//! i8..i64, u8..usize  | int                       | 1 token
//! f32, f64            | float                     | 1 token
//! String, PathBuf     | str, path                 | 1 token
//! ()                  | None                      | 1 token, exactly "None"
//! bool                | bool                      | 0 tokens via --name/--no-name/--not-name, 1 token via -name
//! Vec<T>              | list[T]                   | greedily, until another parameter's spelling
//! HashSet<T>          | set[T]                    | as list, deduplicated
//! (A, B, ..)          | tuple[A, B, ..]           | each component in turn
//! Option<T>           | T | None                  | the first alternative which parses
//! #[derive(Literal)]  | literal[..]               | 1 token, matching a declared constant
//! ```
//!
//! These compose: `Vec<(String, Option<u32>)>` parses `--pairs a 1 b None`.
//!
//! ### Lists & Sets
//! A repeated structure stops consuming at the first token spelled by a *different* parameter.
//! When an element fails to parse, the repetition stops there and keeps the elements collected so far.
//! The failing token is then left for the stream, where it will typically be reported as unknown.
//! This truncation may be turned into a hard failure via [`CommandLineParser::element_failure`] with [`ElementFailure::Propagate`].
//!
//! ### Tuples & Unions
//! A tuple is all-or-nothing: any failed component fails the whole tuple.
//! A union takes the *first* alternative, in declared order, which parses (even if a later alternative would fit better).
//!
//! # Spellings
//! A parameter `name` is proposed the spellings `-n`, `--name`, and `-name`.
//! A `bool` parameter is instead proposed `-name`, `--name`, `--no-name`, and `--not-name`.
//! Any spelling proposed by two parameters is withdrawn from both; a parameter left with no spelling is a [`ConfigError::NoSpelling`].
//! For example, `offset` and `operation` both lose `-o`, but keep `--offset` and `--operation` respectively.
//!
//! # Builder Api
//! Configure `magritte` by starting with a [`CommandLineParser`] and `add`ing [`Parameter`]s.
//! A parameter may be typed by its Rust type ([`Parameter::typed`]) or directly by a [`TypeDescriptor`] ([`Parameter::new`]).
//! Defaults are given via [`Parameter::default`]; a parameter without a default is required.
//!
//! ```
//! use magritte::{CommandLineParser, Outcome, Parameter, TypeDescriptor, Value};
//!
//! let parser = CommandLineParser::new("organization")
//!     .add(Parameter::typed::<Vec<u32>>("items"))
//!     .add(
//!         Parameter::new("mode", TypeDescriptor::literal([Value::Int(1), Value::Str("two".into())]))
//!             .default(Value::Int(1))
//!             .help("The mode of operation."),
//!     )
//!     .build_parser()
//!     .unwrap();
//!
//! let mut values = match parser.try_parse(&["--items", "1", "2", "-m", "two"]).unwrap() {
//!     Outcome::Values(values) => values,
//!     Outcome::Help => unreachable!(),
//! };
//! let items: Vec<u32> = values.take("items").unwrap();
//! assert_eq!(items, vec![1, 2]);
//! assert_eq!(values.get("mode"), Some(&Value::Str("two".to_string())));
//! ```
//!
//! # Configuration & Parse Errors
//! Configuration errors ([`ConfigError`]) are raised when building the parser, and never depend on the Cli input.
//! Parse errors ([`ParseError`]) depend on the Cli input.
//! [`GeneralParser::parse`] prints the error (with the offending token marked), followed by the help message, and exits with status 1.
//! A help request prints the help message and exits with status 0.
//! The non-exiting variants ([`GeneralParser::parse_tokens`], [`GeneralParser::try_parse`]) return the outcome instead.
//!
//! # Features
//! * `tracing_debug`: emit debug logs of the parser configuration and token consumption via [tracing](https://docs.rs/tracing/latest/tracing/).
//!
//! # Derive Api
//! We recommend the [derive Api](./derive/index.html) for most Cli programs.
pub use magritte_builder::*;

pub mod derive;
