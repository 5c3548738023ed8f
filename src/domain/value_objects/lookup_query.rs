use std::fmt;

use super::RecordType;

/// A single DNS lookup, rendered to the fixed `dig` argument form the
/// checks run on every host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupQuery {
    record_type: RecordType,
    name: String,
    server: String,
}

impl LookupQuery {
    pub fn new(
        record_type: RecordType,
        name: impl Into<String>,
        server: impl Into<String>,
    ) -> Self {
        Self {
            record_type,
            name: name.into(),
            server: server.into(),
        }
    }

    pub fn record_type(&self) -> RecordType {
        self.record_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The shell command that performs this lookup. `+noall +answer`
    /// keeps the answer section only, so assertions see record data
    /// without dig's chatter.
    pub fn command(&self) -> String {
        format!(
            "dig +noall +answer {} {} @{}",
            self.record_type, self.name, self.server
        )
    }
}

impl fmt::Display for LookupQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.record_type, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_form() {
        let query = LookupQuery::new(RecordType::Ns, "test.local", "localhost");
        assert_eq!(query.command(), "dig +noall +answer NS test.local @localhost");
    }

    #[test]
    fn test_command_with_ip_server() {
        let query = LookupQuery::new(RecordType::A, "server1.test.local", "192.168.1.53");
        assert_eq!(
            query.command(),
            "dig +noall +answer A server1.test.local @192.168.1.53"
        );
    }
}
