use thiserror::Error;

use crate::matcher::{Claim, Form, SpellingTable};
use crate::model::{ElementFailure, LeafKind, TypeDescriptor, Value};

mod composite;
mod leaf;

pub(crate) use composite::*;
pub(crate) use leaf::*;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// An error while converting tokens into a value.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StrategyError {
    /// The value needs a token, but the input has run out.
    #[error("expected a {type_name} value, but no tokens remain.")]
    Exhausted {
        /// The expected type.
        type_name: &'static str,
    },

    /// The token does not parse as the expected type.
    #[error("'{token}' cannot convert to {type_name}.")]
    InvalidConversion {
        /// The offending token.
        token: String,
        /// The expected type.
        type_name: &'static str,
    },

    /// The token is not in the truthy/falsy vocabulary.
    #[error("'{0}' cannot convert to bool (expected one of y, yes, t, true, on, 1, n, no, f, false, off, 0).")]
    InvalidBool(String),

    /// The token matches none of the literal constants.
    #[error("'{token}' is not one of {choices}.")]
    UnknownLiteral {
        /// The offending token.
        token: String,
        /// The rendered literal type.
        choices: String,
    },

    /// Every alternative of a union failed.
    #[error("'{token}' matches none of the alternatives {alternatives}.")]
    NoAlternative {
        /// The first remaining token (empty when none remain).
        token: String,
        /// The rendered union type.
        alternatives: String,
    },
}

/// How a strategy was invoked.
///
/// At the top level a strategy is triggered by one of its parameter's spellings.
/// Elements of a `List`/`Set` are triggered without a spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Trigger<'a> {
    owner: &'a str,
    form: Option<Form>,
}

impl<'a> Trigger<'a> {
    pub(crate) fn spelled(claim: &'a Claim) -> Self {
        Self {
            owner: claim.name(),
            form: Some(claim.form()),
        }
    }

    pub(crate) fn nested(self) -> Self {
        Self {
            owner: self.owner,
            form: None,
        }
    }

    pub(crate) fn owner(&self) -> &'a str {
        self.owner
    }

    pub(crate) fn form(&self) -> Option<Form> {
        self.form
    }
}

/// Consumes a prefix of the tokens following a spelling, producing a value.
///
/// Strategies are stateless: any progress is local to one `consume` call.
pub(crate) trait Strategy: std::fmt::Debug + Send + Sync {
    /// Returns the number of tokens consumed, alongside the value.
    fn consume(
        &self,
        trigger: Trigger<'_>,
        tokens: &[&str],
        table: &SpellingTable,
    ) -> Result<(usize, Value), StrategyError>;
}

/// Map a type descriptor onto its parsing strategy.
///
/// This never fails; shapes without a parsing strategy fall back to a verbatim string.
/// Literal constants are validated when the parser is built, not here.
pub(crate) fn resolve(
    descriptor: &TypeDescriptor,
    element_failure: ElementFailure,
) -> Box<dyn Strategy> {
    match descriptor {
        TypeDescriptor::Leaf(LeafKind::Int) => Box::new(IntStrategy),
        TypeDescriptor::Leaf(LeafKind::Float) => Box::new(FloatStrategy),
        TypeDescriptor::Leaf(LeafKind::Str) => Box::new(StrStrategy),
        TypeDescriptor::Leaf(LeafKind::Bool) => Box::new(BoolStrategy),
        TypeDescriptor::Leaf(LeafKind::None) => Box::new(NoneStrategy),
        TypeDescriptor::Literal(constants) => {
            Box::new(LiteralStrategy::new(constants.clone(), descriptor.to_string()))
        }
        TypeDescriptor::Container(kind, element) => Box::new(RepeatStrategy::new(
            *kind,
            resolve(element, element_failure),
            element_failure,
        )),
        TypeDescriptor::Tuple(components) => Box::new(TupleStrategy::new(
            components
                .iter()
                .map(|component| resolve(component, element_failure))
                .collect(),
        )),
        TypeDescriptor::Union(alternatives) => Box::new(UnionStrategy::new(
            alternatives
                .iter()
                .map(|alternative| resolve(alternative, element_failure))
                .collect(),
            descriptor.to_string(),
        )),
        TypeDescriptor::Annotated(inner, _) => resolve(inner, element_failure),
        TypeDescriptor::Opaque(_name) => {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("No parsing strategy for '{_name}', falling back to str.");
            }

            Box::new(StrStrategy)
        }
    }
}

/// The first token, or an `Exhausted` error naming the expected type.
pub(crate) fn head<'t>(tokens: &[&'t str], type_name: &'static str) -> Result<&'t str, StrategyError> {
    tokens
        .first()
        .copied()
        .ok_or(StrategyError::Exhausted { type_name })
}
