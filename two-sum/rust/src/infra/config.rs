use std::{
    env,
    fmt::{Debug, Display},
    sync::OnceLock,
};

pub(crate) const DEFAULT_LOG_LEVEL: &str = "warn";

pub(crate) struct Config {
    inner: Box<ConfigInner>,
}

impl Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(&self.inner, f)
    }
}

pub(crate) fn get() -> &'static Config {
    static CELL: OnceLock<Config> = OnceLock::new();

    CELL.get_or_init(|| Config::from_log_level(env::var("RUST_LOG").ok()))
}

impl Config {
    fn from_log_level(log_level: Option<String>) -> Self {
        let log_level = log_level
            .filter(|l| !l.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_owned());

        Config {
            inner: Box::new(ConfigInner { log_level }),
        }
    }

    pub(crate) fn get_log_level(&self) -> &str {
        &self.inner.log_level
    }
}

#[derive(Debug)]
struct ConfigInner {
    log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_warn() {
        assert_eq!(Config::from_log_level(None).get_log_level(), "warn");
        assert_eq!(Config::from_log_level(Some("  ".into())).get_log_level(), "warn");
    }

    #[test]
    fn uses_given_level() {
        let config = Config::from_log_level(Some("two_sum=trace".into()));
        assert_eq!(config.get_log_level(), "two_sum=trace");
        assert!(config.to_string().contains("two_sum=trace"));
    }
}
