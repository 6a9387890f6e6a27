use std::collections::HashMap;
use thiserror::Error;

/// The candidate shape a spelling was generated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Form {
    /// `-n`
    Short,
    /// `--name`
    Long,
    /// `-name`
    Single,
    /// `--no-name` or `--not-name`
    Negated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Claim {
    name: String,
    form: Form,
}

impl Claim {
    pub(crate) fn new(name: impl Into<String>, form: Form) -> Self {
        Self {
            name: name.into(),
            form,
        }
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn form(&self) -> Form {
        self.form
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum FormatError {
    #[error("Every spelling of the parameter '{0}' collides with another parameter.")]
    Unspellable(String),
}

pub(crate) type Candidates = (String, Vec<(String, Form)>);

/// Generate the spellings a parameter may be invoked by.
///
/// Booleans deliberately do not get the `-n` short form, because `-name` takes a truthy/falsy value.
pub(crate) fn candidates(name: &str, boolean: bool) -> Candidates {
    let lowered = name.to_lowercase();
    let mut spellings: Vec<(String, Form)> = Vec::default();

    let generated = if boolean {
        vec![
            (format!("-{lowered}"), Form::Single),
            (format!("--{lowered}"), Form::Long),
            (format!("--no-{lowered}"), Form::Negated),
            (format!("--not-{lowered}"), Form::Negated),
        ]
    } else {
        let first: String = lowered.chars().take(1).collect();
        vec![
            (format!("-{first}"), Form::Short),
            (format!("--{lowered}"), Form::Long),
            (format!("-{lowered}"), Form::Single),
        ]
    };

    for (spelling, form) in generated {
        // A single letter name produces the same short and single-dash spelling.
        if !spellings.iter().any(|(s, _)| s == &spelling) {
            spellings.push((spelling, form));
        }
    }

    (name.to_string(), spellings)
}

/// The final, injective, mapping from spelling to parameter.
#[derive(Debug, Default)]
pub(crate) struct SpellingTable {
    claims: HashMap<String, Claim>,
}

impl SpellingTable {
    /// Resolve the candidate spellings of all the parameters.
    ///
    /// Any spelling proposed by more than one parameter is unusable by all of them.
    /// Every parameter must keep at least one spelling.
    pub(crate) fn resolve(candidates: Vec<Candidates>) -> Result<Self, FormatError> {
        let mut proposals: HashMap<&str, usize> = HashMap::default();

        for (_, spellings) in &candidates {
            for (spelling, _) in spellings {
                *proposals.entry(spelling.as_str()).or_insert(0) += 1;
            }
        }

        let mut claims = HashMap::default();

        for (name, spellings) in &candidates {
            let mut kept = 0;

            for (spelling, form) in spellings {
                if proposals.get(spelling.as_str()) == Some(&1) {
                    claims.insert(spelling.clone(), Claim::new(name.clone(), *form));
                    kept += 1;
                }
            }

            if kept == 0 {
                return Err(FormatError::Unspellable(name.clone()));
            }
        }

        Ok(Self { claims })
    }

    pub(crate) fn claim(&self, spelling: &str) -> Option<&Claim> {
        self.claims.get(spelling)
    }

    pub(crate) fn owner(&self, spelling: &str) -> Option<&str> {
        self.claims.get(spelling).map(Claim::name)
    }

    /// The spellings of the parameter `name`, shortest first.
    pub(crate) fn spellings(&self, name: &str) -> Vec<&str> {
        let mut spellings: Vec<&str> = self
            .claims
            .iter()
            .filter(|(_, claim)| claim.name() == name)
            .map(|(spelling, _)| spelling.as_str())
            .collect();
        spellings.sort_by(|a, b| a.len().cmp(&b.len()).then(a.cmp(b)));
        spellings
    }
}
