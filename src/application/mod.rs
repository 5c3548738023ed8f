pub mod verify;

pub use verify::{CheckOutcome, CheckReport, VerifyHost, count_failures};
