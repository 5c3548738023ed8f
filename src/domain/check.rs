use std::fmt;

use crate::domain::LookupQuery;

/// What must hold for a check's command output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expectation {
    /// Output contains the substring somewhere. Plain search, not a pattern.
    Contains(String),

    /// The 1-based whitespace-delimited field of the output equals the
    /// value exactly. Used for positional record data such as the SOA
    /// serial number.
    FieldEquals { field: usize, value: String },
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AssertionError {
    #[error("expected output to contain {expected:?}, got:\n{actual}")]
    MissingSubstring { expected: String, actual: String },

    #[error("expected field {field} to be {expected:?}, got {found:?} in:\n{actual}")]
    FieldMismatch {
        field: usize,
        expected: String,
        found: Option<String>,
        actual: String,
    },
}

impl Expectation {
    pub fn check(&self, output: &str) -> Result<(), AssertionError> {
        match self {
            Self::Contains(expected) => {
                if output.contains(expected.as_str()) {
                    Ok(())
                } else {
                    Err(AssertionError::MissingSubstring {
                        expected: expected.clone(),
                        actual: output.to_string(),
                    })
                }
            }
            Self::FieldEquals { field, value } => {
                let found = output.split_whitespace().nth(field.saturating_sub(1));
                if found == Some(value.as_str()) {
                    Ok(())
                } else {
                    Err(AssertionError::FieldMismatch {
                        field: *field,
                        expected: value.clone(),
                        found: found.map(str::to_string),
                        actual: output.to_string(),
                    })
                }
            }
        }
    }
}

impl fmt::Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Contains(s) => write!(f, "contains {:?}", s),
            Self::FieldEquals { field, value } => {
                write!(f, "field {} equals {:?}", field, value)
            }
        }
    }
}

/// A named lookup/expectation pair. Stateless; evaluated once per host.
#[derive(Debug, Clone)]
pub struct Check {
    name: String,
    query: LookupQuery,
    expectation: Expectation,
}

impl Check {
    pub fn new(name: impl Into<String>, query: LookupQuery, expectation: Expectation) -> Self {
        Self {
            name: name.into(),
            query,
            expectation,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn query(&self) -> &LookupQuery {
        &self.query
    }

    pub fn expectation(&self) -> &Expectation {
        &self.expectation
    }

    pub fn command(&self) -> String {
        self.query.command()
    }

    /// Apply the expectation to captured command output.
    pub fn evaluate(&self, output: &str) -> Result<(), AssertionError> {
        self.expectation.check(output)
    }
}
