//! Traits which, typically, may be imported without concern: `use magritte::prelude::*`.
use crate::api::{CommandLineParser, Parameter, ValueError};
use crate::model::{TypeDescriptor, Value};
use crate::parser::Values;

/// Behaviour to describe the parsing shape of a Rust type.
// Needs to be imported in order to implement a custom parameter type.
pub trait Describe {
    /// The type descriptor for `Self`.
    fn describe() -> TypeDescriptor;
}

/// Behaviour to convert a parsed value into a Rust type.
pub trait FromValue: Sized {
    /// Convert the value, or explain why its shape does not fit `Self`.
    fn from_value(value: Value) -> Result<Self, ValueError>;
}

/// Behaviour to convert a Rust value (typically, a default) into a parsed value.
pub trait IntoValue {
    /// Convert into a `Value`.
    fn into_value(self) -> Value;
}

/// A set of named parameters, parsed from the command line as a whole.
///
/// Typically implemented via `#[derive(Parameters)]`.
pub trait Parameters: Sized {
    /// The program name shown in the help message.
    fn program() -> String;

    /// The about message shown in the help message.
    fn about() -> Option<String> {
        None
    }

    /// The parameters, in declaration order.
    fn parameters() -> Vec<Parameter>;

    /// Assemble `Self` from the validated values.
    fn from_values(values: Values) -> Result<Self, ValueError>;

    /// The command line parser for these parameters.
    fn command_line_parser() -> CommandLineParser {
        let mut clp = CommandLineParser::new(Self::program());

        if let Some(about) = Self::about() {
            clp = clp.about(about);
        }

        Self::parameters()
            .into_iter()
            .fold(clp, |clp, parameter| clp.add(parameter))
    }

    /// Parse `Self` from the input tokens (see [`GeneralParser::parse_tokens`](crate::GeneralParser::parse_tokens)).
    fn parse_tokens(tokens: &[&str]) -> Result<Self, i32> {
        Self::command_line_parser().build().parse_tokens_as(tokens)
    }

    /// Parse `Self` from the Cli [`std::env::args`] (see [`GeneralParser::parse`](crate::GeneralParser::parse)).
    fn parse() -> Self {
        Self::command_line_parser().build().parse_as()
    }
}
