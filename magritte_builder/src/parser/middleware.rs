use std::env;

use crate::parser::base::*;
use crate::parser::interface::UserInterface;
use crate::parser::printer::Printer;
use crate::parser::ErrorContext;
use crate::prelude::Parameters;

/// The configured command line parser.
/// Built via `CommandLineParser::build`.
///
/// The parser is immutable, and may be used for any number of parses.
pub struct GeneralParser {
    parser: Parser,
    printer: Printer,
    user_interface: Box<dyn UserInterface>,
}

impl GeneralParser {
    pub(crate) fn new(
        parser: Parser,
        printer: Printer,
        user_interface: Box<dyn UserInterface>,
    ) -> Self {
        Self {
            parser,
            printer,
            user_interface,
        }
    }

    /// Assign the input tokens to the parameters, filling in defaults.
    ///
    /// Unlike the other parse methods, this does not validate that every parameter is set.
    /// Nothing is printed.
    pub fn consume(&self, tokens: &[&str]) -> Result<Arguments, ParseError> {
        self.parser.consume(tokens).map_err(|(_, error)| error)
    }

    /// Run the command line parser against the input tokens, without printing anything.
    pub fn try_parse(&self, tokens: &[&str]) -> Result<Outcome, ParseError> {
        self.parser.parse(tokens).map_err(|(_, error)| error)
    }

    /// The help message.
    pub fn help(&self) -> String {
        self.printer.render().join("\n")
    }

    /// Run the command line parser against the input tokens.
    ///
    /// Parsing happens in two phases:
    /// 1. Stream consumption assigns the tokens to parameters, each parsing its value by its type descriptor.
    /// Parameters which aren't specified take their default.
    /// 2. Validation checks that every parameter has a value.
    ///
    /// If at any point the parser encounters an error (ex: un-matched token, un-parseable value, missing parameter, etc),
    /// it will display the error followed by the help message, and return with `Err(1)`.
    ///
    /// If help is requested (ex: `--help`), the parser will display the help message and return with `Err(0)`.
    /// This skips phase #2 validation.
    pub fn parse_tokens(&self, tokens: &[&str]) -> Result<Values, i32> {
        match self.parser.parse(tokens) {
            Ok(Outcome::Values(values)) => Ok(values),
            Ok(Outcome::Help) => {
                self.printer.print_help(&*self.user_interface);
                Err(0)
            }
            Err((offset, parse_error)) => {
                self.user_interface.print_error(parse_error);
                self.user_interface
                    .print_error_context(ErrorContext::new(offset, tokens));
                self.printer.print_help(&*self.user_interface);
                Err(1)
            }
        }
    }

    /// Run the command line parser against the input tokens, assembling the parameters `P`.
    ///
    /// Behaves as [`GeneralParser::parse_tokens`], additionally returning `Err(1)` when the values cannot bind to `P`.
    pub fn parse_tokens_as<P: Parameters>(&self, tokens: &[&str]) -> Result<P, i32> {
        let values = self.parse_tokens(tokens)?;

        P::from_values(values).map_err(|error| {
            self.user_interface.print_error(ParseError::from(error));
            self.printer.print_help(&*self.user_interface);
            1
        })
    }

    /// Run the command line parser against the Cli [`env::args`].
    ///
    /// Behaves as [`GeneralParser::parse_tokens`], except exiting (via [`std::process::exit`]) instead of returning an error code.
    pub fn parse(&self) -> Values {
        let tokens = cli_tokens();
        exit_on_error(self.parse_tokens(borrow_tokens(&tokens).as_slice()))
    }

    /// Run the command line parser against the Cli [`env::args`], assembling the parameters `P`.
    ///
    /// Behaves as [`GeneralParser::parse_tokens_as`], except exiting (via [`std::process::exit`]) instead of returning an error code.
    pub fn parse_as<P: Parameters>(&self) -> P {
        let tokens = cli_tokens();
        exit_on_error(self.parse_tokens_as(borrow_tokens(&tokens).as_slice()))
    }
}

fn cli_tokens() -> Vec<String> {
    env::args().skip(1).collect()
}

fn borrow_tokens(tokens: &[String]) -> Vec<&str> {
    tokens.iter().map(String::as_str).collect()
}

fn exit_on_error<T>(result: Result<T, i32>) -> T {
    match result {
        Ok(value) => value,
        Err(exit_code) => std::process::exit(exit_code),
    }
}
