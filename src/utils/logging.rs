//! Logger setup for both targets.
//!
//! Everything else in the crate logs through the `log` facade.

/// Filter used when neither `RUST_LOG` nor the config file says otherwise.
pub const DEFAULT_FILTER: &str = "info";

/// Initializes `env_logger`. `RUST_LOG` wins over the configured filter.
#[cfg(not(feature = "web"))]
pub fn init(filter: &str) {
    let env = env_logger::Env::default().default_filter_or(filter);
    if let Err(e) = env_logger::Builder::from_env(env).try_init() {
        eprintln!("Logger already initialized: {e}");
    }
}

/// Initializes the browser console logger.
#[cfg(feature = "web")]
pub fn init(filter: &str) {
    let level = parse_level(filter).unwrap_or(log::Level::Info);
    if let Err(e) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("Logger already initialized: {e}").into());
    }
}

/// Maps a plain level name to a `log::Level`. Directive lists are not supported.
pub fn parse_level(filter: &str) -> Option<log::Level> {
    filter.trim().parse().ok()
}
