//! Structured logging setup
//!
//! Builds tracing filter directives from [`LoggingConfig`] and installs the
//! global subscriber. Routing decisions are logged as structured fields so
//! the audit trail in the log stream lines up with the persisted
//! [`RoutingDecision`](crate::routing::RoutingDecision) records.

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig};

/// Build filter directives string from LoggingConfig.
///
/// Constructs a tracing filter string that includes the base log level and
/// any component-specific log levels, e.g. `"info,leadrouter::routing=debug"`.
pub fn build_filter_directives(config: &LoggingConfig) -> String {
    let mut filter_str = config.level.clone();

    if let Some(component_levels) = &config.component_levels {
        for (component, level) in component_levels {
            filter_str.push_str(&format!(",leadrouter::{}={}", component, level));
        }
    }

    filter_str
}

/// Initialize the global tracing subscriber from the logging config.
///
/// Returns an error string if a subscriber is already installed, which
/// callers embedding this crate may simply ignore.
pub fn init(config: &LoggingConfig) -> Result<(), String> {
    let filter = EnvFilter::try_new(build_filter_directives(config))
        .map_err(|e| format!("Invalid log filter: {}", e))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.try_init(),
    };

    result.map_err(|e| format!("Failed to install subscriber: {}", e))
}
