//! Logging setup for the analysis binary.
//!
//! Library code only emits records through the `log` facade. The binary installs
//! an `env_logger` backend that prints at [`DEFAULT_LEVEL`] unless `RUST_LOG`
//! names other directives, e.g. `RUST_LOG=chainset=debug` to trace rehashing.

use std::{env, sync::Once};

use env_logger::Builder;
use log::LevelFilter;

/// Level used when `RUST_LOG` is unset
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Info;

/// Environment variable holding filter directives
const FILTER_ENV: &str = "RUST_LOG";

/// Guards logger setup
static INIT: Once = Once::new();

/// Builds a logger printing at [`DEFAULT_LEVEL`], refined by `directives` when given
fn logger_builder(directives: Option<&str>) -> Builder {
    let mut builder = Builder::new();
    builder.filter_level(DEFAULT_LEVEL).format_timestamp_millis();

    if let Some(directives) = directives {
        builder.parse_filters(directives);
    }

    builder
}

/// Installs the `env_logger` backend. Later calls do nothing.
pub fn initialize_logger() {
    INIT.call_once(|| {
        let directives = env::var(FILTER_ENV).ok();

        // a test harness may have installed its own logger
        if let Err(err) = logger_builder(directives.as_deref()).try_init() {
            log::debug!("keeping existing logger: {err}");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level_is_info() {
        let logger = logger_builder(None).build();
        assert_eq!(logger.filter(), LevelFilter::Info);
    }

    #[test]
    fn test_directives_override_default_level() {
        let logger = logger_builder(Some("chainset=debug")).build();
        assert_eq!(logger.filter(), LevelFilter::Debug);

        let logger = logger_builder(Some("warn")).build();
        assert_eq!(logger.filter(), LevelFilter::Warn);
    }

    #[test]
    fn test_initialize_twice_keeps_one_logger() {
        initialize_logger();
        initialize_logger();

        assert!(INIT.is_completed());
        assert_ne!(log::max_level(), LevelFilter::Off);
    }
}
