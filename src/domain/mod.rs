mod check;
pub mod value_objects;

pub use check::{AssertionError, Check, Expectation};
pub use value_objects::{Hostname, HostnameError, LookupQuery, RecordType, RecordTypeError};
