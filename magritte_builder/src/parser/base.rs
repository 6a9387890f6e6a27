use std::collections::{HashMap, HashSet};
use thiserror::Error;

use crate::api::{Parameter, ValueError};
use crate::constant::*;
use crate::matcher::*;
use crate::model::{ElementFailure, TypeDescriptor, Value};
use crate::prelude::FromValue;
use crate::strategy::{resolve, Strategy, StrategyError, Trigger};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// An error in the configuration of the command line parser.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The parameter name does not start with a lowercase ASCII letter.
    #[error("The parameter name '{0}' must start with a lowercase ASCII letter.")]
    IllegalName(String),

    /// The parameter name is reserved by the parser itself.
    #[error("The parameter name '{0}' is reserved.")]
    ReservedName(String),

    /// The parameter name is declared more than once.
    #[error("Cannot duplicate the parameter '{0}'.")]
    DuplicateParameter(String),

    /// Every candidate spelling of the parameter collides with another parameter.
    #[error("Cannot spell the parameter '{0}': every candidate spelling collides with another parameter.")]
    NoSpelling(String),

    /// The literal constant is not an `int`, `str` or `None`.
    #[error("The parameter '{name}' declares the literal constant '{constant}', but only int, str, and None constants are supported.")]
    UnsupportedLiteral {
        /// The parameter name.
        name: String,
        /// The rendered constant.
        constant: String,
    },
}

/// An error parsing the input tokens.
#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    /// The token is not the spelling of any parameter.
    #[error("Unknown argument '{0}'.")]
    UnknownToken(String),

    /// The parameter was already specified.
    #[error("The parameter '{name}' is specified a second time, via '{spelling}'.")]
    Duplicate {
        /// The parameter name.
        name: String,
        /// The spelling of the second occurrence.
        spelling: String,
    },

    /// The parameter's value failed to parse.
    #[error("Invalid value for '{name}': {source}")]
    Strategy {
        /// The parameter name.
        name: String,
        /// The underlying strategy error.
        source: StrategyError,
    },

    /// The parameter has neither a parsed nor a default value.
    #[error("The parameter '{0}' is required.")]
    Missing(String),

    /// The parsed value cannot bind to the declared Rust type.
    #[error("Invalid value for {0}")]
    Value(#[from] ValueError),
}

/// The result of a single parse.
#[derive(Debug, PartialEq)]
pub enum Outcome {
    /// The parse succeeded, producing these values.
    Values(Values),
    /// Help was requested; validation was skipped.
    Help,
}

/// The consumed tokens, per parameter in declaration order.
///
/// A parameter is 'unset' when it was neither specified nor has a default.
/// This is distinct from having the value `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct Arguments {
    entries: Vec<(String, Option<Value>)>,
}

impl Arguments {
    /// The value of the parameter `name`, when set.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .and_then(|(_, value)| value.as_ref())
    }

    /// Whether the parameter `name` exists and is set.
    pub fn is_set(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterate the parameters in declaration order, alongside their (possibly unset) value.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&Value>)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_ref()))
    }

    /// Check that every parameter is set.
    /// The first (in declaration order) unset parameter is reported as `Missing`.
    pub fn validate(self) -> Result<Values, ParseError> {
        let mut values = HashMap::default();

        for (name, value) in self.entries {
            match value {
                Some(value) => {
                    values.insert(name, value);
                }
                None => return Err(ParseError::Missing(name)),
            }
        }

        Ok(Values { values })
    }

    fn remove(&mut self, name: &str) -> Option<Value> {
        let position = self.entries.iter().position(|(n, _)| n == name)?;
        self.entries.remove(position).1
    }
}

/// The validated values, by parameter name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Values {
    values: HashMap<String, Value>,
}

impl Values {
    /// The value of the parameter `name`.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Remove the value of the parameter `name`, converting it into `T`.
    ///
    /// ### Example
    /// ```
    /// # use magritte_builder as magritte;
    /// use magritte::{CommandLineParser, Parameter};
    ///
    /// let parser = CommandLineParser::new("program")
    ///     .add(Parameter::typed::<Vec<u8>>("items"))
    ///     .build();
    /// let mut values = parser.parse_tokens(vec!["-i", "1", "2"].as_slice()).unwrap();
    ///
    /// let items: Vec<u8> = values.take("items").unwrap();
    /// assert_eq!(items, vec![1, 2]);
    /// ```
    pub fn take<T: FromValue>(&mut self, name: &str) -> Result<T, ValueError> {
        let value = self
            .values
            .remove(name)
            .ok_or_else(|| ValueError::Missing(name.to_string()))?;
        T::from_value(value).map_err(|error| ValueError::Field {
            name: name.to_string(),
            source: Box::new(error),
        })
    }

    /// The number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether there are no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl IntoIterator for Values {
    type Item = (String, Value);
    type IntoIter = std::collections::hash_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

pub(crate) struct Parser {
    parameters: Vec<Parameter>,
    strategies: Vec<Box<dyn Strategy>>,
    positions: HashMap<String, usize>,
    table: SpellingTable,
}

impl std::fmt::Debug for Parser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser{..}").finish()
    }
}

impl Parser {
    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        Self::new(Vec::default(), ElementFailure::default()).unwrap()
    }

    pub(crate) fn new(
        mut parameters: Vec<Parameter>,
        element_failure: ElementFailure,
    ) -> Result<Self, ConfigError> {
        let mut names = HashSet::new();

        for parameter in &parameters {
            let name = parameter.name();

            if !name.starts_with(|c: char| c.is_ascii_lowercase()) {
                return Err(ConfigError::IllegalName(name.to_string()));
            }

            if name == HELP_NAME {
                return Err(ConfigError::ReservedName(name.to_string()));
            }

            if !names.insert(name) {
                return Err(ConfigError::DuplicateParameter(name.to_string()));
            }

            if let Some(constant) = parameter.descriptor().unsupported_literal() {
                return Err(ConfigError::UnsupportedLiteral {
                    name: name.to_string(),
                    constant: constant.to_string(),
                });
            }
        }

        parameters.push(
            Parameter::new(HELP_NAME, TypeDescriptor::bool())
                .default(false)
                .help(HELP_MESSAGE),
        );

        let table = SpellingTable::resolve(
            parameters
                .iter()
                .map(|p| candidates(p.name(), p.descriptor().is_bool()))
                .collect(),
        )
        .map_err(|error| match error {
            FormatError::Unspellable(name) => ConfigError::NoSpelling(name),
        })?;
        let strategies = parameters
            .iter()
            .map(|p| resolve(p.descriptor(), element_failure))
            .collect();
        let positions = parameters
            .iter()
            .enumerate()
            .map(|(i, p)| (p.name().to_string(), i))
            .collect();

        Ok(Self {
            parameters,
            strategies,
            positions,
            table,
        })
    }

    pub(crate) fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub(crate) fn spellings(&self, name: &str) -> Vec<&str> {
        self.table.spellings(name)
    }

    /// Greedily assign the tokens to parameters, and fill in defaults.
    ///
    /// Errors carry the index of the token at fault.
    pub(crate) fn consume(&self, tokens: &[&str]) -> Result<Arguments, (usize, ParseError)> {
        let mut values: Vec<Option<Value>> = vec![None; self.parameters.len()];
        let mut index = 0;

        while let Some(token) = tokens.get(index) {
            let claim = self
                .table
                .claim(token)
                .ok_or_else(|| (index, ParseError::UnknownToken(token.to_string())))?;
            let position = self.positions[claim.name()];

            if values[position].is_some() {
                return Err((
                    index,
                    ParseError::Duplicate {
                        name: claim.name().to_string(),
                        spelling: token.to_string(),
                    },
                ));
            }

            let (consumed, value) = self.strategies[position]
                .consume(Trigger::spelled(claim), &tokens[index + 1..], &self.table)
                .map_err(|source| {
                    (
                        index,
                        ParseError::Strategy {
                            name: claim.name().to_string(),
                            source,
                        },
                    )
                })?;

            #[cfg(feature = "tracing_debug")]
            {
                debug!("'{token}' consumed {consumed} tokens for '{}': {value}.", claim.name());
            }

            values[position] = Some(value);
            index += 1 + consumed;
        }

        let entries = self
            .parameters
            .iter()
            .zip(values)
            .map(|(parameter, value)| {
                let value = value.or_else(|| parameter.default_value().cloned());
                (parameter.name().to_string(), value)
            })
            .collect();

        Ok(Arguments { entries })
    }

    /// Consume the tokens, honour the help request, and validate.
    pub(crate) fn parse(&self, tokens: &[&str]) -> Result<Outcome, (usize, ParseError)> {
        let mut arguments = self.consume(tokens)?;

        if arguments.remove(HELP_NAME) == Some(Value::Bool(true)) {
            return Ok(Outcome::Help);
        }

        let values = arguments.validate().map_err(|error| (tokens.len(), error))?;
        Ok(Outcome::Values(values))
    }
}
