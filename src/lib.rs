pub mod cert;
pub mod cli;
pub mod config;
pub mod utils;
pub mod vault;

pub use cert::{CheckSummary, ExpiryChecker, ExpiryStatus};
pub use cli::{args, commands};
pub use config::Settings;
pub use utils::errors;
pub use vault::{auth, client};
