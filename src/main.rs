//! MCP Server Entry Point
//!
//! Initializes logging, loads and validates configuration, and serves the
//! Favicon.so tools over the configured transport. Any startup failure exits
//! with a non-zero status.

use anyhow::Result;
use tracing::{Level, debug};
use tracing_subscriber::{EnvFilter, fmt};

use favicon_mcp_server::core::{
    Config, McpServer, TransportService, config::LoggingConfig,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment
    let config = Config::from_env();

    init_logging(&config.logging);

    config.validate()?;

    log_startup(&config);

    let server = McpServer::new(config.clone());

    TransportService::new(config.transport)
        .run(server)
        .await?;

    debug!("Server shutting down");

    Ok(())
}

/// Startup details. Kept at debug so that the transport's ready line is the
/// only startup output at the default level.
fn log_startup(config: &Config) {
    debug!("Starting {} v{}", config.server.name, config.server.version);
    debug!("Favicon API base: {}", config.favicon.base_url);
}

/// Initialize the logging subsystem.
///
/// Logs go to stderr; stdout carries the protocol.
fn init_logging(logging: &LoggingConfig) {
    let level = match logging.level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);

    if logging.with_timestamps {
        builder.init();
    } else {
        builder.without_time().init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn capture(level: Level, f: impl FnOnce()) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = fmt()
            .with_max_level(level)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = captured.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_startup_details_silent_at_info() {
        let config = Config::default();
        assert!(capture(Level::INFO, || log_startup(&config)).is_empty());
    }

    #[test]
    fn test_startup_details_visible_at_debug() {
        let config = Config::default();
        let output = capture(Level::DEBUG, || log_startup(&config));
        assert!(output.contains("Favicon API base: https://favicon.so"));
    }
}
