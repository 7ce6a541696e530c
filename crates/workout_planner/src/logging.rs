//! Tracing setup for binaries and demos that embed the planner.

use tracing_subscriber::EnvFilter;

pub const LOG_LEVEL_ENV: &str = "WORKOUT_PLANNER_LOG_LEVEL";

/// Install a compact stderr subscriber.
///
/// The filter comes from `WORKOUT_PLANNER_LOG_LEVEL`, then `RUST_LOG`, then
/// `info`. Calling this again after a subscriber is installed is a no-op.
pub fn init() {
    let level = std::env::var(LOG_LEVEL_ENV)
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "info".to_string());
    init_with_filter(&level);
}

pub fn init_with_filter(filter: &str) {
    // Keep HTTP client internals quiet unless asked for explicitly.
    let combined = format!("{filter},hyper=warn,reqwest=warn");
    let env_filter = EnvFilter::try_new(&combined).unwrap_or_else(|_| EnvFilter::new("info"));
    let installed = tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(env_filter)
        .try_init()
        .is_ok();
    if installed {
        tracing::debug!("workout_planner: log filter: {}", combined);
    }
}
