use std::fmt;
use std::str::FromStr;

/// DNS resource record types the checker knows how to query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordType {
    Ns,
    A,
    Cname,
    Soa,
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown record type: {0} (expected NS, A, CNAME or SOA)")]
pub struct RecordTypeError(String);

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ns => "NS",
            Self::A => "A",
            Self::Cname => "CNAME",
            Self::Soa => "SOA",
        }
    }
}

impl FromStr for RecordType {
    type Err = RecordTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "NS" => Ok(Self::Ns),
            "A" => Ok(Self::A),
            "CNAME" => Ok(Self::Cname),
            "SOA" => Ok(Self::Soa),
            other => Err(RecordTypeError(other.to_string())),
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl serde::Serialize for RecordType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::Deserialize<'de> for RecordType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        RecordType::from_str(&s).map_err(serde::de::Error::custom)
    }
}
