//! Tracing subscriber setup
//!
//! Per-request lines go to the audit log; the subscriber here only carries
//! application events, so no span lifecycle events are emitted.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, LoggingConfig};

pub fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| level_filter(&config.level));

    match config.format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().json())
                .init();
        }
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().pretty().with_target(true))
                .init();
        }
    }

    tracing::info!("Logging initialized with level: {}", config.level);
}

/// Filter from the configured level; `RUST_LOG` overrides it when set.
fn level_filter(level: &str) -> EnvFilter {
    EnvFilter::new(level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_filter_from_config() {
        let filter = level_filter(&LoggingConfig::default().level);
        assert_eq!(filter.to_string(), "info");

        assert_eq!(level_filter("debug").to_string(), "debug");
    }
}
