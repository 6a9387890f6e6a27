use crate::matcher::SpellingTable;
use crate::model::{ContainerKind, ElementFailure, Value};
use crate::strategy::{Strategy, StrategyError, Trigger};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Greedily repeats the element strategy for a `List`/`Set`.
///
/// The repetition ends when:
/// * the tokens run out,
/// * the next token is a spelling of another parameter (it is left for the stream consumer),
/// * an element fails to parse (see [`ElementFailure`]), or
/// * an element consumes no tokens.
#[derive(Debug)]
pub(crate) struct RepeatStrategy {
    kind: ContainerKind,
    element: Box<dyn Strategy>,
    element_failure: ElementFailure,
}

impl RepeatStrategy {
    pub(crate) fn new(
        kind: ContainerKind,
        element: Box<dyn Strategy>,
        element_failure: ElementFailure,
    ) -> Self {
        Self {
            kind,
            element,
            element_failure,
        }
    }
}

impl Strategy for RepeatStrategy {
    fn consume(
        &self,
        trigger: Trigger<'_>,
        tokens: &[&str],
        table: &SpellingTable,
    ) -> Result<(usize, Value), StrategyError> {
        let mut elements = Vec::default();
        let mut consumed = 0;

        while let Some(next) = tokens.get(consumed) {
            if let Some(other) = table.owner(next) {
                if other != trigger.owner() {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("'{next}' starts the parameter '{other}', ending the repetition.");
                    }

                    break;
                }
            }

            match self
                .element
                .consume(trigger.nested(), &tokens[consumed..], table)
            {
                Ok((0, _)) => break,
                Ok((n, value)) => {
                    elements.push(value);
                    consumed += n;
                }
                Err(_error) if self.element_failure == ElementFailure::Truncate => {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!(
                            "Element failed ({_error}), truncating the repetition after {} elements.",
                            elements.len()
                        );
                    }

                    break;
                }
                Err(error) => return Err(error),
            }
        }

        let value = match self.kind {
            ContainerKind::List => Value::List(elements),
            ContainerKind::Set => Value::set(elements),
        };
        Ok((consumed, value))
    }
}

/// Applies each component in order, failing as a whole if any component fails.
#[derive(Debug)]
pub(crate) struct TupleStrategy {
    components: Vec<Box<dyn Strategy>>,
}

impl TupleStrategy {
    pub(crate) fn new(components: Vec<Box<dyn Strategy>>) -> Self {
        Self { components }
    }
}

impl Strategy for TupleStrategy {
    fn consume(
        &self,
        trigger: Trigger<'_>,
        tokens: &[&str],
        table: &SpellingTable,
    ) -> Result<(usize, Value), StrategyError> {
        let mut values = Vec::with_capacity(self.components.len());
        let mut consumed = 0;

        for component in &self.components {
            let remaining = tokens.get(consumed..).unwrap_or_default();
            let (n, value) = component.consume(trigger, remaining, table)?;
            values.push(value);
            consumed += n;
        }

        Ok((consumed, Value::Tuple(values)))
    }
}

/// The first alternative (in declared order) to parse wins.
#[derive(Debug)]
pub(crate) struct UnionStrategy {
    alternatives: Vec<Box<dyn Strategy>>,
    rendered: String,
}

impl UnionStrategy {
    pub(crate) fn new(alternatives: Vec<Box<dyn Strategy>>, rendered: String) -> Self {
        Self {
            alternatives,
            rendered,
        }
    }
}

impl Strategy for UnionStrategy {
    fn consume(
        &self,
        trigger: Trigger<'_>,
        tokens: &[&str],
        table: &SpellingTable,
    ) -> Result<(usize, Value), StrategyError> {
        for alternative in &self.alternatives {
            match alternative.consume(trigger, tokens, table) {
                Ok(result) => return Ok(result),
                Err(_error) => {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Alternative of {} failed: {_error}", self.rendered);
                    }
                }
            }
        }

        Err(StrategyError::NoAlternative {
            token: tokens.first().map(ToString::to_string).unwrap_or_default(),
            alternatives: self.rendered.clone(),
        })
    }
}
