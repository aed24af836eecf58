//! Diagnostic logging setup
//!
//! Library code logs through the `log` facade; binaries call [`init`] once.

use env_logger::Env;

/// Log level implied by the `-v` count
pub fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Initialize `env_logger`, letting `RUST_LOG` override the `-v` level
pub fn init(verbose: u8) {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(level_for(verbose)))
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}
