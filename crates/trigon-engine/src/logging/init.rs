use std::sync::Once;

use log::LevelFilter;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "trigon_engine=debug"). When set it wins over `RUST_LOG`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

/// Our crates, logged at [`own_level`] under the default filter.
const OWN_CRATES: &[&str] = &["trigon_engine", "trigon"];

/// Windowing and context crates log every event-loop turn at debug/trace.
/// The render loop pumps them each frame, so they are capped at `warn`.
const WINDOWING_CRATES: &[&str] = &["winit", "glutin", "glutin_winit", "calloop", "sctk"];

/// Level for our own crates when neither the config nor `RUST_LOG` says.
fn own_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Resolves the filter directives: explicit config, then a non-blank
/// `RUST_LOG`, then the built-in default.
pub(crate) fn filter_spec(explicit: Option<&str>, from_env: Option<&str>) -> String {
    if let Some(filter) = explicit {
        return filter.to_string();
    }
    if let Some(filter) = from_env.map(str::trim).filter(|f| !f.is_empty()) {
        return filter.to_string();
    }

    let own = own_level().to_string().to_lowercase();
    let mut spec = String::from("info");
    for name in OWN_CRATES {
        spec.push_str(&format!(",{name}={own}"));
    }
    for name in WINDOWING_CRATES {
        spec.push_str(&format!(",{name}=warn"));
    }
    spec
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// Subsequent calls are ignored. Call early in `main`, before the window opens.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let from_env = std::env::var("RUST_LOG").ok();
        let spec = filter_spec(config.env_filter.as_deref(), from_env.as_deref());

        let mut builder = env_logger::Builder::new();
        builder.parse_filters(&spec);
        builder.write_style(config.write_style);

        // try_init: a test harness may already have installed a logger.
        if builder.try_init().is_ok() {
            log::debug!("logging initialized ({spec})");
        }
    });
}
