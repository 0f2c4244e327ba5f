use log::{debug, error, info};
use std::sync::Once;

static INIT: Once = Once::new();

/// Set up env_logger once per process. Safe to call again; later calls are
/// no-ops, which keeps test binaries from panicking on double init.
pub fn init_logger() {
    INIT.call_once(|| {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .filter_module("yum_lib", log::LevelFilter::Debug)
            .filter_module("diesel", log::LevelFilter::Warn)
            .filter_module("reqwest", log::LevelFilter::Warn)
            .filter_module("tokio", log::LevelFilter::Warn)
            .format_timestamp_secs()
            .format_target(false)
            .format_module_path(false)
            .init();

        info!("Logging system initialized");
    });
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        log::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        log::debug!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        log::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        log::error!($($arg)*)
    };
}

/// Uniform log lines for the events operators grep for.
pub struct LogContext;

impl LogContext {
    /// One line per outbound HTTP call, with the round-trip time.
    pub fn api_call(provider: &str, endpoint: &str, status: &str, duration_ms: Option<u64>) {
        match duration_ms {
            Some(duration) => info!("API: {} {} {} in {}ms", provider, endpoint, status, duration),
            None => debug!("API: Starting {} {}", provider, endpoint),
        }
    }

    /// One line per write to a computed recipe field. A fallback nutrition
    /// score shows up here as a plain 50; the WARN the engine emitted just
    /// before tells it apart from a genuine 50.
    pub fn recompute(field: &str, recipe_id: &uuid::Uuid, value: &str) {
        info!("Recompute: {} for recipe {} -> {}", field, recipe_id, value);
    }

    pub fn error_with_context(error: &dyn std::error::Error, context: &str) {
        error!("{}: {}", context, error);
    }

    /// Operations that exceeded their expected duration.
    pub fn performance_metric(operation: &str, duration_ms: u64, additional_info: Option<&str>) {
        match additional_info {
            Some(info) => info!("Performance: {} took {}ms ({})", operation, duration_ms, info),
            None => info!("Performance: {} took {}ms", operation, duration_ms),
        }
    }
}
