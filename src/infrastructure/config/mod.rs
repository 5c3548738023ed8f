mod dto;

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::{Check, Expectation, LookupQuery, RecordType};

use dto::SuiteDto;

#[derive(Debug, Error)]
pub enum SuiteError {
    #[error("Failed to read suite file {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse suite file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid expectation for check '{check}': {reason}")]
    InvalidExpectation { check: String, reason: String },

    #[error("Suite file {path} defines no checks")]
    Empty { path: PathBuf },
}

/// Load a check suite from a TOML file, binding every lookup to the
/// given resolver address.
pub fn load_suite(path: &Path, server: &str) -> Result<Vec<Check>, SuiteError> {
    let content = fs::read_to_string(path).map_err(|source| SuiteError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;

    let dto: SuiteDto = toml::from_str(&content).map_err(|source| SuiteError::ParseError {
        path: path.to_path_buf(),
        source,
    })?;

    if dto.checks.is_empty() {
        return Err(SuiteError::Empty {
            path: path.to_path_buf(),
        });
    }

    dto.checks
        .into_iter()
        .map(|check| check.into_check(server))
        .collect()
}

/// The built-in suite: the record set a freshly provisioned test zone
/// is expected to serve, including a manually pinned SOA serial.
pub fn default_suite(server: &str) -> Vec<Check> {
    vec![
        Check::new(
            "ns-delegation",
            LookupQuery::new(RecordType::Ns, "test.local", server),
            Expectation::Contains("localhost.".into()),
        ),
        Check::new(
            "a-record",
            LookupQuery::new(RecordType::A, "server1.test.local", server),
            Expectation::Contains("192.168.1.1".into()),
        ),
        Check::new(
            "cname-alias",
            LookupQuery::new(RecordType::Cname, "www.test.local", server),
            Expectation::Contains("web-server".into()),
        ),
        Check::new(
            "manual-soa-serial",
            LookupQuery::new(RecordType::Soa, "manual-soa-test.local", server),
            Expectation::FieldEquals {
                field: 7,
                value: "20101010".into(),
            },
        ),
    ]
}
