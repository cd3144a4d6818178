//! Structured logging setup for makegen
//!
//! Logs always go to stderr so that `makegen generate --stdout` and
//! `makegen detect --format json` keep stdout for the actual output.

use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

/// Subscriber settings resolved from the environment and CLI flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Minimum level for `makegen` events
    pub level: Level,

    /// Emit one JSON object per event instead of console lines
    pub use_json: bool,

    /// Include file and line number of the event
    pub include_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            use_json: false,
            include_location: false,
        }
    }
}

impl LoggingConfig {
    /// Reads `MAKEGEN_LOG_LEVEL` and `MAKEGEN_LOG_JSON`; unset or unparsable
    /// values keep their defaults.
    pub fn from_env() -> Self {
        let level = env::var("MAKEGEN_LOG_LEVEL")
            .map(|s| parse_level(&s))
            .unwrap_or(Level::INFO);

        let use_json = env::var("MAKEGEN_LOG_JSON")
            .ok()
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or(false);

        Self {
            level,
            use_json,
            ..Default::default()
        }
    }

    /// Replaces the level when a flag asked for one. Debug runs also get
    /// source locations.
    pub fn with_level_override(mut self, level: Option<Level>) -> Self {
        if let Some(level) = level {
            self.level = level;
        }
        self.include_location = self.level >= Level::DEBUG;
        self
    }
}

/// Parses a log level, case-insensitive.
///
/// ```
/// use makegen::util::logging::parse_level;
/// use tracing::Level;
///
/// assert_eq!(parse_level("debug"), Level::DEBUG);
/// assert_eq!(parse_level("WARN"), Level::WARN);
/// assert_eq!(parse_level("loud"), Level::INFO);
/// ```
pub fn parse_level(level_str: &str) -> Level {
    match level_str.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => {
            eprintln!(
                "Invalid log level '{}', defaulting to INFO. Valid levels: trace, debug, info, warn, error",
                level_str
            );
            Level::INFO
        }
    }
}

/// Installs the global subscriber. Only the first call has an effect;
/// `RUST_LOG` directives apply on top of the configured `makegen` level.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut filter = EnvFilter::from_default_env();
        if let Ok(directive) = format!("makegen={}", config.level).parse() {
            filter = filter.add_directive(directive);
        }

        let layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_file(config.include_location)
            .with_line_number(config.include_location);

        if config.use_json {
            tracing_subscriber::registry()
                .with(filter)
                .with(layer.json())
                .init();
        } else {
            tracing_subscriber::registry().with(filter).with(layer).init();
        }
    });
}
