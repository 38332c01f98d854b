use std::env;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Logging setup shared by the binary and the tests.
pub struct LoggingConfig;

impl LoggingConfig {
    /// Initializes the subscriber. `RUST_LOG` takes precedence; without it
    /// the level depends on whether `DOCKHUB_DEBUG` is set.
    pub fn init() {
        let is_debug = env::var("DOCKHUB_DEBUG").is_ok();

        let env_filter = match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => {
                if is_debug {
                    EnvFilter::new("dockhub=debug,info")
                } else {
                    EnvFilter::new("dockhub=info,warn")
                }
            }
        };

        let fmt_layer = if is_debug {
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
        } else {
            fmt::layer()
                .with_target(false)
                .with_file(false)
                .with_line_number(false)
        };

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .init();
    }

    pub fn init_with_filter(filter: &str) {
        let env_filter = EnvFilter::new(filter);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer())
            .init();
    }

    pub fn is_debug() -> bool {
        env::var("DOCKHUB_DEBUG").is_ok()
    }
}
