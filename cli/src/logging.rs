//! Tracing setup
//!
//! Logs always go to stderr so stdout carries only results.

use crate::config::LoggingConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when RUST_LOG is unset
pub fn default_directive(config: &LoggingConfig, verbose: bool) -> String {
    let level = if verbose { "debug" } else { config.level.as_str() };
    format!("studio_metrics={level},studio_metrics_cli={level}")
}

/// Initialize tracing/logging
pub fn init_tracing(config: &LoggingConfig, verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_directive(config, verbose).into());

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if config.json {
        // JSON logging (better for log aggregation)
        subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        let config = LoggingConfig::default();
        assert_eq!(
            default_directive(&config, false),
            "studio_metrics=warn,studio_metrics_cli=warn"
        );
        assert_eq!(
            default_directive(&config, true),
            "studio_metrics=debug,studio_metrics_cli=debug"
        );
    }
}
