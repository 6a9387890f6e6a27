use crate::constant::{FALSY, NONE_TOKEN, TRUTHY};
use crate::matcher::{Form, SpellingTable};
use crate::model::Value;
use crate::strategy::{head, Strategy, StrategyError, Trigger};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

#[derive(Debug, Default)]
pub(crate) struct IntStrategy;

impl Strategy for IntStrategy {
    fn consume(
        &self,
        _trigger: Trigger<'_>,
        tokens: &[&str],
        _table: &SpellingTable,
    ) -> Result<(usize, Value), StrategyError> {
        let token = head(tokens, "int")?;
        let value = token
            .parse::<i128>()
            .map_err(|_| StrategyError::InvalidConversion {
                token: token.to_string(),
                type_name: "int",
            })?;
        Ok((1, Value::Int(value)))
    }
}

#[derive(Debug, Default)]
pub(crate) struct FloatStrategy;

impl Strategy for FloatStrategy {
    fn consume(
        &self,
        _trigger: Trigger<'_>,
        tokens: &[&str],
        _table: &SpellingTable,
    ) -> Result<(usize, Value), StrategyError> {
        let token = head(tokens, "float")?;
        let value = token
            .parse::<f64>()
            .map_err(|_| StrategyError::InvalidConversion {
                token: token.to_string(),
                type_name: "float",
            })?;
        Ok((1, Value::Float(value)))
    }
}

#[derive(Debug, Default)]
pub(crate) struct StrStrategy;

impl Strategy for StrStrategy {
    fn consume(
        &self,
        _trigger: Trigger<'_>,
        tokens: &[&str],
        _table: &SpellingTable,
    ) -> Result<(usize, Value), StrategyError> {
        let token = head(tokens, "str")?;
        Ok((1, Value::Str(token.to_string())))
    }
}

#[derive(Debug, Default)]
pub(crate) struct NoneStrategy;

impl Strategy for NoneStrategy {
    fn consume(
        &self,
        _trigger: Trigger<'_>,
        tokens: &[&str],
        _table: &SpellingTable,
    ) -> Result<(usize, Value), StrategyError> {
        match head(tokens, "None")? {
            NONE_TOKEN => Ok((1, Value::None)),
            token => Err(StrategyError::InvalidConversion {
                token: token.to_string(),
                type_name: "None",
            }),
        }
    }
}

/// Booleans are flags when spelled `--name` (true) or `--no-name`/`--not-name` (false).
/// Otherwise (`-name`, or as the element of a repetition) they take a truthy/falsy token.
#[derive(Debug, Default)]
pub(crate) struct BoolStrategy;

impl Strategy for BoolStrategy {
    fn consume(
        &self,
        trigger: Trigger<'_>,
        tokens: &[&str],
        _table: &SpellingTable,
    ) -> Result<(usize, Value), StrategyError> {
        match trigger.form() {
            Some(Form::Long) => Ok((0, Value::Bool(true))),
            Some(Form::Negated) => Ok((0, Value::Bool(false))),
            Some(Form::Single) | Some(Form::Short) | None => {
                let token = head(tokens, "bool")?;
                Ok((1, Value::Bool(truthy(token)?)))
            }
        }
    }
}

pub(crate) fn truthy(token: &str) -> Result<bool, StrategyError> {
    if TRUTHY.contains(&token) {
        Ok(true)
    } else if FALSY.contains(&token) {
        Ok(false)
    } else {
        Err(StrategyError::InvalidBool(token.to_string()))
    }
}

#[derive(Debug)]
pub(crate) struct LiteralStrategy {
    constants: Vec<Value>,
    rendered: String,
}

impl LiteralStrategy {
    pub(crate) fn new(constants: Vec<Value>, rendered: String) -> Self {
        Self {
            constants,
            rendered,
        }
    }
}

impl Strategy for LiteralStrategy {
    fn consume(
        &self,
        _trigger: Trigger<'_>,
        tokens: &[&str],
        _table: &SpellingTable,
    ) -> Result<(usize, Value), StrategyError> {
        let token = head(tokens, "literal")?;

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Matching '{token}' against {}.", self.rendered);
        }

        // First match wins; the textual forms need not be distinct.
        match self
            .constants
            .iter()
            .find(|constant| constant.to_string() == token)
        {
            Some(constant) => Ok((1, constant.clone())),
            None => Err(StrategyError::UnknownLiteral {
                token: token.to_string(),
                choices: self.rendered.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TypeDescriptor;
    use crate::strategy::test::{claim, table};
    use rand::{thread_rng, Rng};
    use rstest::rstest;

    fn flag_table() -> SpellingTable {
        table(&[("flag", &TypeDescriptor::bool()), ("value", &TypeDescriptor::int())])
    }

    #[test]
    fn int_random() {
        let table = flag_table();
        let trigger = Trigger::spelled(claim(&table, "--value"));

        for _ in 0..100 {
            let expected: i64 = thread_rng().gen();
            let token = expected.to_string();
            assert_eq!(
                IntStrategy.consume(trigger, &[token.as_str()], &table).unwrap(),
                (1, Value::Int(i128::from(expected)))
            );
        }
    }

    #[rstest]
    #[case("18446744073709551615", 18446744073709551615)]
    #[case("-9223372036854775808", -9223372036854775808)]
    fn int_beyond_i64(#[case] token: &str, #[case] expected: i128) {
        let table = flag_table();
        let trigger = Trigger::spelled(claim(&table, "--value"));

        assert_eq!(
            IntStrategy.consume(trigger, &[token], &table).unwrap(),
            (1, Value::Int(expected))
        );
    }

    #[rstest]
    #[case(vec!["abc"])]
    #[case(vec!["1.5"])]
    #[case(vec![""])]
    fn int_invalid(#[case] tokens: Vec<&str>) {
        let table = flag_table();
        let trigger = Trigger::spelled(claim(&table, "--value"));
        assert_matches!(
            IntStrategy.consume(trigger, tokens.as_slice(), &table),
            Err(StrategyError::InvalidConversion { type_name: "int", .. })
        );
    }

    #[test]
    fn leaf_exhausted() {
        let table = flag_table();
        let trigger = Trigger::spelled(claim(&table, "--value"));
        assert_eq!(
            FloatStrategy.consume(trigger, &[], &table),
            Err(StrategyError::Exhausted { type_name: "float" })
        );
        assert_eq!(
            StrStrategy.consume(trigger, &[], &table),
            Err(StrategyError::Exhausted { type_name: "str" })
        );
    }

    #[rstest]
    #[case("1e3", 1000.0)]
    #[case("-0.25", -0.25)]
    #[case("7", 7.0)]
    fn float(#[case] token: &str, #[case] expected: f64) {
        let table = flag_table();
        let trigger = Trigger::spelled(claim(&table, "--value"));
        assert_eq!(
            FloatStrategy.consume(trigger, &[token], &table).unwrap(),
            (1, Value::Float(expected))
        );
    }

    #[rstest]
    #[case("None", true)]
    #[case("none", false)]
    #[case("null", false)]
    fn none(#[case] token: &str, #[case] ok: bool) {
        let table = flag_table();
        let trigger = Trigger::spelled(claim(&table, "--value"));
        let result = NoneStrategy.consume(trigger, &[token], &table);
        assert_eq!(result.is_ok(), ok);
    }

    #[rstest]
    #[case("--flag", vec![], (0, true))]
    #[case("--flag", vec!["no"], (0, true))]
    #[case("--no-flag", vec![], (0, false))]
    #[case("--not-flag", vec!["yes"], (0, false))]
    #[case("-flag", vec!["yes"], (1, true))]
    #[case("-flag", vec!["off", "1"], (1, false))]
    #[case("-flag", vec!["t"], (1, true))]
    fn bool_spellings(
        #[case] spelling: &str,
        #[case] tokens: Vec<&str>,
        #[case] expected: (usize, bool),
    ) {
        let table = flag_table();
        let trigger = Trigger::spelled(claim(&table, spelling));
        let (consumed, value) = BoolStrategy.consume(trigger, tokens.as_slice(), &table).unwrap();
        assert_eq!((consumed, value), (expected.0, Value::Bool(expected.1)));
    }

    #[test]
    fn bool_invalid() {
        let table = flag_table();
        let trigger = Trigger::spelled(claim(&table, "-flag"));
        assert_eq!(
            BoolStrategy.consume(trigger, &["nah"], &table),
            Err(StrategyError::InvalidBool("nah".to_string()))
        );
        assert_eq!(
            BoolStrategy.consume(trigger, &[], &table),
            Err(StrategyError::Exhausted { type_name: "bool" })
        );
    }

    #[rstest]
    #[case("y", Ok(true))]
    #[case("yes", Ok(true))]
    #[case("t", Ok(true))]
    #[case("true", Ok(true))]
    #[case("on", Ok(true))]
    #[case("1", Ok(true))]
    #[case("n", Ok(false))]
    #[case("no", Ok(false))]
    #[case("f", Ok(false))]
    #[case("false", Ok(false))]
    #[case("off", Ok(false))]
    #[case("0", Ok(false))]
    #[case("True", Err(StrategyError::InvalidBool("True".to_string())))]
    #[case("2", Err(StrategyError::InvalidBool("2".to_string())))]
    fn truthy_vocabulary(#[case] token: &str, #[case] expected: Result<bool, StrategyError>) {
        assert_eq!(truthy(token), expected);
    }

    #[test]
    fn literal() {
        let table = flag_table();
        let trigger = Trigger::spelled(claim(&table, "--value"));
        let strategy = LiteralStrategy::new(
            vec![
                Value::Int(1),
                Value::Str("good".to_string()),
                Value::Str("1".to_string()),
                Value::None,
            ],
            "literal[1, \"good\", \"1\", None]".to_string(),
        );

        assert_eq!(
            strategy.consume(trigger, &["1"], &table).unwrap(),
            (1, Value::Int(1))
        );
        assert_eq!(
            strategy.consume(trigger, &["good", "bad"], &table).unwrap(),
            (1, Value::Str("good".to_string()))
        );
        assert_eq!(
            strategy.consume(trigger, &["None"], &table).unwrap(),
            (1, Value::None)
        );
        assert_eq!(
            strategy.consume(trigger, &["bad"], &table),
            Err(StrategyError::UnknownLiteral {
                token: "bad".to_string(),
                choices: "literal[1, \"good\", \"1\", None]".to_string(),
            })
        );
    }
}
