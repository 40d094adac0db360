use std::env;

/// Read access to environment variables
pub trait EnvSource {
    fn var(&self, key: &str) -> Option<String>;
}

/// The real process environment
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }
}

/// One place a setting may come from
#[derive(Debug, Clone, Copy)]
pub enum ValueSource<'a> {
    /// Value given on the command line
    Flag(Option<&'a str>),
    /// Name of an environment variable
    Env(&'static str),
}

impl ValueSource<'_> {
    fn lookup(&self, env: &dyn EnvSource) -> Option<String> {
        match self {
            ValueSource::Flag(value) => value.map(str::to_string),
            ValueSource::Env(key) => env.var(key),
        }
    }
}

/// Consult `sources` in order and return the first non-empty value
pub fn first_non_empty(sources: &[ValueSource<'_>], env: &dyn EnvSource) -> Option<String> {
    sources
        .iter()
        .filter_map(|source| source.lookup(env))
        .find(|value| !value.is_empty())
}
