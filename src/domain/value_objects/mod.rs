mod hostname;
mod lookup_query;
mod record_type;

pub use hostname::{Hostname, HostnameError};
pub use lookup_query::LookupQuery;
pub use record_type::{RecordType, RecordTypeError};
