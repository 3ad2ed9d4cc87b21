//! Logger setup.
//!
//! Records go to stderr so the game transcript on stdout stays clean.

use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    Handle,
};

use super::error::{Error, Result};

const STDERR_APPENDER: &str = "stderr";
const PATTERN: &str = "{h({l:<5})} {t} - {m}{n}";

/// Build the log4rs configuration for `level`.
pub fn config(level: LevelFilter) -> Result<Config> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build();

    Config::builder()
        .appender(Appender::builder().build(STDERR_APPENDER, Box::new(stderr)))
        .build(Root::builder().appender(STDERR_APPENDER).build(level))
        .map_err(|e| Error::Logging(e.to_string()))
}

/// Install the global logger. Fails if one is already installed.
pub fn init(level: LevelFilter) -> Result<Handle> {
    log4rs::init_config(config(level)?).map_err(|e| Error::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builds() {
        let config = config(LevelFilter::Debug).unwrap();
        assert_eq!(config.root().level(), LevelFilter::Debug);
        assert_eq!(config.appenders().len(), 1);
    }
}
