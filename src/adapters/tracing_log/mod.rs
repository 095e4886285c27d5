// Tracing log adapter - Structured logging using tracing crate

use tracing_subscriber::EnvFilter;

use crate::domain::errors::*;

/// Log output shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable text
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Installs the process-wide tracing subscriber
pub struct TracingLogAdapter;

impl TracingLogAdapter {
    /// Initialize logging. `RUST_LOG` wins over `level` when set.
    ///
    /// Calling this twice is harmless; the second subscriber is dropped.
    pub fn init(level: &str, format: LogFormat) -> Result<(), DomainError> {
        let filter = Self::filter(level)?;
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false);

        let _ = match format {
            LogFormat::Text => builder.try_init(),
            LogFormat::Json => builder.json().try_init(),
        };
        Ok(())
    }

    fn filter(level: &str) -> Result<EnvFilter, DomainError> {
        if let Ok(filter) = EnvFilter::try_from_default_env() {
            return Ok(filter);
        }
        EnvFilter::try_new(level)
            .map_err(|e| DomainError::BadArgs(format!("Invalid log level '{}': {}", level, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_levels_accepted() {
        for level in ["error", "warn", "info", "debug", "trace", "hlsprep=debug"] {
            assert!(EnvFilter::try_new(level).is_ok(), "{}", level);
        }
    }

    #[test]
    fn test_init_twice_is_ok() {
        assert!(TracingLogAdapter::init("info", LogFormat::Text).is_ok());
        assert!(TracingLogAdapter::init("debug", LogFormat::Json).is_ok());
    }
}
