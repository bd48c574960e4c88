//! Console logging through the `log` facade.
//!
//! The level is read from `RUST_LOG` (`error`, `warn`, `info`, `debug`,
//! `trace`, `off`); anything else falls back to `info`.

use{
    log4rs::{
        append::console::ConsoleAppender,
        config::{Appender, Root},
        encode::pattern::PatternEncoder,
        Config, Handle,
    },
    log::LevelFilter,
    std::str::FromStr,
    crate::error::SimError,
};

// ISO 8601 timestamp, colour coded level tag, target
const LOG_PATTERN: &str = "{d(%Y-%m-%dT%H:%M:%SZ)} {h({l})} {t} - {m}{n}";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

pub fn level_from_env() -> LevelFilter
{
    std::env::var("RUST_LOG")
        .ok()
        .and_then(|v| LevelFilter::from_str(v.trim()).ok())
        .unwrap_or(DEFAULT_LOG_LEVEL)
}

/// Installs the global console logger. Can only succeed once per process.
pub fn init_logging(level: LevelFilter) -> Result<Handle, SimError>
{
    let encoder = Box::new(PatternEncoder::new(LOG_PATTERN));
    let stdout = ConsoleAppender::builder()
        .encoder(encoder)
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(level))
        .map_err(|e| SimError::Logging(e.to_string()))?;

    log4rs::init_config(config)
        .map_err(|e| SimError::Logging(e.to_string()))
}
