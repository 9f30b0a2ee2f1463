// ============================================================================
// vlcvideo-cli/src/logging.rs
// ============================================================================
//
// LOGGING: env_logger Setup for the CLI
//
// The application uses the standard `log` crate with `env_logger` as the
// backend. Logs go to stderr so that stdout carries only evaluated values.
//
// USAGE:
// - default: warnings and errors only
// - -v/--verbose: debug output from the CLI and vlcvideo-core
// - RUST_LOG overrides both, e.g. RUST_LOG=vlcvideo_core=trace

use env_logger::{Builder, Env};
use log::LevelFilter;
use std::io::Write;

/// Initializes the global logger. Safe to call more than once.
pub fn init(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let result = Builder::from_env(Env::default().default_filter_or(default_level.as_str()))
        .format(|buf, record| {
            let level_str = match record.level() {
                log::Level::Error => "ERROR",
                log::Level::Warn => "WARN ",
                log::Level::Info => "INFO ",
                log::Level::Debug => "DEBUG",
                log::Level::Trace => "TRACE",
            };
            writeln!(
                buf,
                "{} {} [{}] {}",
                buf.timestamp(),
                level_str,
                record.target(),
                record.args()
            )
        })
        .try_init();

    if result.is_ok() {
        log::debug!("Logger initialized with default level: {}", default_level);
    }
}
