use crate::api::Parameter;
use crate::model::ElementFailure;
use crate::parser::{ConfigError, ConsoleInterface, GeneralParser, Parser, Printer, UserInterface};
use crate::prelude::Parameters;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The base command line parser.
///
/// Each parameter is spelled on the Cli by a set of candidate spellings derived from its (lowercased) name:
/// * `-n`, `--name`, and `-name` for non-boolean parameters, where `n` is the first letter.
/// * `-name <truthy/falsy>`, `--name`, `--no-name`, and `--not-name` for boolean parameters.
///
/// A spelling proposed by more than one parameter is removed from all of them.
/// Every parser also owns a boolean `help` parameter.
///
/// ### Example
/// ```
/// # use magritte_builder as magritte;
/// use magritte::{CommandLineParser, Parameter, Value};
///
/// let parser = CommandLineParser::new("program")
///     .add(Parameter::typed::<Vec<i64>>("items"))
///     .add(Parameter::typed::<i64>("other").default(0))
///     .build();
///
/// let values = parser.parse_tokens(vec!["--items", "3", "4", "-o", "1"].as_slice()).unwrap();
///
/// assert_eq!(
///     values.get("items"),
///     Some(&Value::List(vec![Value::Int(3), Value::Int(4)]))
/// );
/// assert_eq!(values.get("other"), Some(&Value::Int(1)));
/// ```
pub struct CommandLineParser {
    program: String,
    about: Option<String>,
    parameters: Vec<Parameter>,
    element_failure: ElementFailure,
}

impl CommandLineParser {
    /// Create a command line parser.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            about: None,
            parameters: Vec::default(),
            element_failure: ElementFailure::default(),
        }
    }

    /// Document the about message for this command line parser.
    /// If repeated, only the final about message will apply.
    pub fn about(mut self, description: impl Into<String>) -> Self {
        self.about.replace(description.into());
        self
    }

    /// Choose how `List`/`Set` parameters react to an element which fails to parse.
    /// Defaults to [`ElementFailure::Truncate`].
    ///
    /// ### Example
    /// ```
    /// # use magritte_builder as magritte;
    /// use magritte::{CommandLineParser, ElementFailure, Parameter};
    ///
    /// let parser = CommandLineParser::new("program")
    ///     .element_failure(ElementFailure::Propagate)
    ///     .add(Parameter::typed::<Vec<i64>>("items"))
    ///     .build();
    ///
    /// assert!(parser.try_parse(vec!["--items", "1", "x"].as_slice()).is_err());
    /// ```
    pub fn element_failure(mut self, policy: ElementFailure) -> Self {
        self.element_failure = policy;
        self
    }

    /// Add a parameter to the command line parser.
    ///
    /// The order of parameters determines the order of the help message, and which missing parameter is reported first.
    pub fn add(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    fn configure(self) -> Result<(Parser, Printer), ConfigError> {
        let CommandLineParser {
            program,
            about,
            parameters,
            element_failure,
        } = self;

        #[cfg(feature = "tracing_debug")]
        {
            debug!(
                "Building '{program}' with {} parameters ({element_failure:?}).",
                parameters.len()
            );
        }

        let parser = Parser::new(parameters, element_failure)?;
        let printer = Printer::terminal(program, about, &parser);
        Ok((parser, printer))
    }

    pub(crate) fn build_with_interface(
        self,
        user_interface: Box<dyn UserInterface>,
    ) -> Result<GeneralParser, ConfigError> {
        let (parser, printer) = self.configure()?;
        Ok(GeneralParser::new(parser, printer, user_interface))
    }

    /// Report a configuration error followed by the help, returning the exit code.
    pub(crate) fn build_or_report(
        self,
        user_interface: Box<dyn UserInterface>,
    ) -> Result<GeneralParser, i32> {
        let fallback = Printer::unresolved(&self.program, self.about.clone(), &self.parameters);

        match self.configure() {
            Ok((parser, printer)) => Ok(GeneralParser::new(parser, printer, user_interface)),
            Err(error) => {
                user_interface.print_config_error(error);
                fallback.print_help(&*user_interface);
                Err(1)
            }
        }
    }

    /// Build the command line parser as a Result.
    /// This finalizes the configuration and checks for errors (ex: a repeated parameter name).
    pub fn build_parser(self) -> Result<GeneralParser, ConfigError> {
        self.build_with_interface(Box::new(ConsoleInterface::default()))
    }

    /// Build the command line parser.
    /// This finalizes the configuration and checks for errors (ex: a repeated parameter name).
    /// If an error is encountered, prints it followed by the help, and exits with error code `1` (via [`std::process::exit`]).
    pub fn build(self) -> GeneralParser {
        match self.build_or_report(Box::new(ConsoleInterface::default())) {
            Ok(gp) => gp,
            Err(exit_code) => std::process::exit(exit_code),
        }
    }
}

/// Parse the Cli [`std::env::args`] into the parameters `P`, and invoke the `target` with them.
///
/// Exits (via [`std::process::exit`]) on a configuration error, a parse error, or when help is requested.
pub fn dispatch<P: Parameters, R>(target: impl FnOnce(P) -> R) -> R {
    target(P::parse())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{TypeDescriptor, Value};
    use crate::parser::util::channel_interface;
    use crate::test::assert_contains;
    use rstest::rstest;

    #[test]
    fn build_empty() {
        // Setup
        let clp = CommandLineParser::new("program");
        let (sender, receiver) = channel_interface();

        // Execute
        let parser = clp.build_with_interface(Box::new(sender)).unwrap();
        let values = parser.parse_tokens(&[]).unwrap();
        drop(parser);

        // Verify
        assert!(values.is_empty());
        let (message, error, error_context) = receiver.consume();
        assert_eq!(message, None);
        assert_eq!(error, None);
        assert_eq!(error_context, None);
    }

    #[rstest]
    #[case(vec!["--offset", "5"], Value::Int(5))]
    #[case(vec!["-offset", "None"], Value::None)]
    #[case(vec![], Value::Int(1))]
    fn build_parse(#[case] tokens: Vec<&str>, #[case] expected: Value) {
        // Setup
        let clp = CommandLineParser::new("program")
            .add(Parameter::typed::<Option<i64>>("offset").default(1))
            .add(Parameter::typed::<String>("operation").default("add"));
        let (sender, receiver) = channel_interface();

        // Execute
        let parser = clp.build_with_interface(Box::new(sender)).unwrap();
        let values = parser.parse_tokens(tokens.as_slice()).unwrap();
        drop(parser);

        // Verify
        assert_eq!(values.get("offset"), Some(&expected));
        assert_eq!(values.get("operation"), Some(&Value::Str("add".to_string())));
        let (message, error, _) = receiver.consume();
        assert_eq!(message, None);
        assert_eq!(error, None);
    }

    #[test]
    fn build_parse_help() {
        // Setup
        let clp = CommandLineParser::new("program")
            .about("Sums the items.")
            .add(Parameter::typed::<Vec<i64>>("items").help("The items to sum."));
        let (sender, receiver) = channel_interface();

        // Execute
        let parser = clp.build_with_interface(Box::new(sender)).unwrap();
        let result = parser.parse_tokens(vec!["--help"].as_slice());
        drop(parser);

        // Verify
        assert_eq!(result.unwrap_err(), 0);
        let (message, error, error_context) = receiver.consume();
        let message = message.unwrap();
        assert_contains!(message, "program");
        assert_contains!(message, "Sums the items.");
        assert_contains!(message, "-i, -items, --items:");
        assert_contains!(message, "The items to sum.");
        assert_eq!(error, None);
        assert_eq!(error_context, None);
    }

    #[test]
    fn build_parse_error() {
        // Setup
        let clp = CommandLineParser::new("program").add(Parameter::typed::<i64>("value"));
        let (sender, receiver) = channel_interface();

        // Execute
        let parser = clp.build_with_interface(Box::new(sender)).unwrap();
        let result = parser.parse_tokens(vec!["--value", "abc"].as_slice());
        drop(parser);

        // Verify
        assert_eq!(result.unwrap_err(), 1);
        let (message, error, error_context) = receiver.consume();
        assert_contains!(message.unwrap(), "Arguments:");
        assert_contains!(error.unwrap(), "'abc' cannot convert to int.");
        assert_eq!(error_context.unwrap().to_string(), "--value abc\n^");
    }

    #[rstest]
    #[case(Parameter::typed::<i64>("Value"), ConfigError::IllegalName("Value".to_string()))]
    #[case(Parameter::typed::<i64>("_value"), ConfigError::IllegalName("_value".to_string()))]
    #[case(Parameter::typed::<i64>(""), ConfigError::IllegalName("".to_string()))]
    #[case(Parameter::typed::<bool>("help"), ConfigError::ReservedName("help".to_string()))]
    #[case(
        Parameter::new("mode", TypeDescriptor::literal([Value::Float(0.5)])),
        ConfigError::UnsupportedLiteral { name: "mode".to_string(), constant: "0.5".to_string() }
    )]
    fn build_invalid(#[case] parameter: Parameter, #[case] expected: ConfigError) {
        let (sender, _receiver) = channel_interface();
        let result = CommandLineParser::new("program")
            .add(parameter)
            .build_with_interface(Box::new(sender));
        assert_eq!(result.err(), Some(expected));
    }

    #[test]
    fn build_or_report() {
        // Setup
        let clp = CommandLineParser::new("program")
            .add(Parameter::typed::<i64>("value"))
            .add(Parameter::typed::<String>("value").help("Another value."));
        let (sender, receiver) = channel_interface();

        // Execute
        let result = clp.build_or_report(Box::new(sender));

        // Verify
        assert_eq!(result.err(), Some(1));
        let (message, error, error_context) = receiver.consume();
        assert_eq!(error.unwrap(), "Cannot duplicate the parameter 'value'.");
        let message = message.unwrap();
        assert!(message.starts_with("program\nArguments:\n"));
        assert_contains!(message, "Another value.");
        assert_eq!(error_context, None);
    }

    #[test]
    fn build_or_report_valid() {
        let (sender, receiver) = channel_interface();

        let parser = CommandLineParser::new("program")
            .add(Parameter::typed::<i64>("value"))
            .build_or_report(Box::new(sender))
            .unwrap();
        drop(parser);

        let (message, error, error_context) = receiver.consume();
        assert_eq!(message, None);
        assert_eq!(error, None);
        assert_eq!(error_context, None);
    }

    #[test]
    fn build_duplicate() {
        let (sender, _receiver) = channel_interface();
        let result = CommandLineParser::new("program")
            .add(Parameter::typed::<i64>("value"))
            .add(Parameter::typed::<String>("value"))
            .build_with_interface(Box::new(sender));
        assert_eq!(
            result.err(),
            Some(ConfigError::DuplicateParameter("value".to_string()))
        );
    }
}
