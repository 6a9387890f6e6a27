//! Derive Api for `magritte` configuration.
//!
//! ### Getting Started
//! Use the derive Api by starting with a parameter struct `S` instrumented with `#[derive(Parameters)]`.
//! This implements [`Parameters`](trait@Parameters) for `S`, including `S::parse() -> S` which parses the Cli into `S`.
//! Each named field is a parameter, typed by the field's type.
//!
//! ```no_run
#![doc = include_str!("../demos/demo_shapes.rs")]
//! ```
//!
//! ### Parser Configuration
//! The struct accepts the following attributes:
//! * `#[magritte(program = EXPR)]` sets the program name (defaults to the crate name).
//! * `#[magritte(about = EXPR)]` sets the about message (defaults to the struct's documentation).
//!
//! ### Parameter Configuration
//! Each field accepts the following attributes:
//! * `#[magritte(help = EXPR)]` sets the help message (defaults to the field's documentation).
//! * `#[magritte(default = EXPR)]` sets the default, where `EXPR` is of the field's type.
//! A string literal is converted into the field's type (ex: `default = "out.txt"` for a `PathBuf`).
//! * `#[magritte(default)]` sets the default to the field type's [`Default`].
//!
//! A field without a default is required, including `Option<T>` fields (use `default = None` to make these optional).
//!
//! ### Literal Configuration
//! A fieldless enum instrumented with `#[derive(Literal)]` is a literal parameter type, where each variant is one constant.
//! By default, a variant is spelled by its lowercased name.
//! `#[magritte(value = V)]` instead sets the constant, where `V` is an integer, a string, or `None`.
//!
//! ```
//! use magritte::derive::*;
//!
//! #[derive(Debug, PartialEq, Literal)]
//! enum Level {
//!     Low,
//!     #[magritte(value = 2)]
//!     High,
//! }
//!
//! #[derive(Debug, Parameters)]
//! #[magritte(program = "leveler")]
//! struct Leveler {
//!     level: Level,
//! }
//!
//! let leveler = Leveler::parse_tokens(&["--level", "2"]).unwrap();
//! assert_eq!(leveler.level, Level::High);
//! ```
//!
//! ### Dispatch
//! [`dispatch`](crate::dispatch) parses the Cli into the parameters of a target function, and then invokes it.
//! ```no_run
#![doc = include_str!("../demos/demo_dispatch.rs")]
//! ```
pub use magritte_builder::prelude::*;
pub use magritte_derive::{Literal, Parameters};
