//! Builder module for `magritte`.
//! See [documentation root](https://docs.rs/magritte/latest/magritte/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod constant;
mod matcher;
mod model;
mod parser;
#[allow(missing_docs)]
pub mod prelude;
mod strategy;

pub use api::*;
pub use model::*;
pub use parser::{Arguments, ConfigError, GeneralParser, Outcome, ParseError, Values};
pub use strategy::StrategyError;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
