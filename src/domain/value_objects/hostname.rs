use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hostname(String);

#[derive(Debug, thiserror::Error)]
pub enum HostnameError {
    #[error("Host name is empty")]
    Empty,

    #[error("Host name contains invalid characters: {0}")]
    InvalidCharacters(String),
}

impl Hostname {
    pub fn new(name: impl Into<String>) -> Result<Self, HostnameError> {
        let name = name.into().to_lowercase();

        if name.is_empty() {
            return Err(HostnameError::Empty);
        }

        // Hostnames, IPv4 dotted quads and bracket-free IPv6 literals
        if !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.' || c == ':')
        {
            return Err(HostnameError::InvalidCharacters(name));
        }

        // Cannot start or end with hyphen or dot
        if name.starts_with('-')
            || name.starts_with('.')
            || name.ends_with('-')
            || name.ends_with('.')
        {
            return Err(HostnameError::InvalidCharacters(name));
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether commands for this host run on the local machine rather
    /// than over SSH.
    pub fn is_local(&self) -> bool {
        matches!(self.0.as_str(), "localhost" | "127.0.0.1" | "::1")
    }
}

impl fmt::Display for Hostname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_hostnames() {
        assert!(Hostname::new("localhost").is_ok());
        assert!(Hostname::new("server1.test.local").is_ok());
        assert!(Hostname::new("192.168.1.1").is_ok());
        assert!(Hostname::new("ns-primary").is_ok());
        assert_eq!(Hostname::new("LOCALHOST").unwrap().as_str(), "localhost"); // Should lowercase
    }

    #[test]
    fn test_invalid_hostnames() {
        assert!(Hostname::new("").is_err());
        assert!(Hostname::new("-server").is_err()); // Starts with hyphen
        assert!(Hostname::new("server-").is_err()); // Ends with hyphen
        assert!(Hostname::new(".local").is_err()); // Starts with dot
        assert!(Hostname::new("host name").is_err()); // Space
        assert!(Hostname::new("host_name").is_err()); // Underscore
    }

    #[test]
    fn test_local_detection() {
        assert!(Hostname::new("localhost").unwrap().is_local());
        assert!(Hostname::new("127.0.0.1").unwrap().is_local());
        assert!(Hostname::new("::1").unwrap().is_local());
        assert!(!Hostname::new("ns1.example.org").unwrap().is_local());
    }
}
