pub mod checker;
pub mod expiry;
pub mod report;

pub use checker::{CheckSummary, ExpiryChecker};
pub use expiry::{classify, ExpiryStatus, CRITICAL_DAYS, WARNING_DAYS};
pub use report::StatusReporter;
