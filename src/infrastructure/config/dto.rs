//! On-disk DTO for check suites.
//!
//! Decouples the TOML layout from the domain `Check` so deserialization
//! can't bypass validation: record types go through `RecordType`'s
//! parser, and a check must carry exactly one expectation form.

use serde::Deserialize;

use crate::domain::{Check, Expectation, LookupQuery, RecordType};

use super::SuiteError;

#[derive(Debug, Deserialize)]
pub struct SuiteDto {
    #[serde(default, rename = "check")]
    pub checks: Vec<CheckDto>,
}

/// One `[[check]]` table in the suite file. Either `contains` or the
/// `field`/`equals` pair must be present, never both.
#[derive(Debug, Deserialize)]
pub struct CheckDto {
    pub name: String,
    pub record: RecordType,
    pub query: String,
    pub contains: Option<String>,
    pub field: Option<usize>,
    pub equals: Option<String>,
}

impl CheckDto {
    pub fn into_check(self, server: &str) -> Result<Check, SuiteError> {
        let expectation = match (self.contains, self.field, self.equals) {
            (Some(substring), None, None) => Expectation::Contains(substring),
            (None, Some(field), Some(value)) => {
                if field == 0 {
                    return Err(SuiteError::InvalidExpectation {
                        check: self.name,
                        reason: "field is 1-based, got 0".into(),
                    });
                }
                Expectation::FieldEquals { field, value }
            }
            _ => {
                return Err(SuiteError::InvalidExpectation {
                    check: self.name,
                    reason: "set either `contains` or both `field` and `equals`".into(),
                });
            }
        };

        let query = LookupQuery::new(self.record, self.query, server);
        Ok(Check::new(self.name, query, expectation))
    }
}
