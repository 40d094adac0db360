pub mod settings;
pub mod sources;

pub use settings::Settings;
pub use sources::{EnvSource, ProcessEnv};
