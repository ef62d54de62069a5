use std::process;

use trigon_engine::logging::{init_logging, LoggingConfig};
use trigon_engine::window::WindowConfig;

fn main() {
    init_logging(LoggingConfig::default());

    let config = WindowConfig::default();
    log::debug!("starting with {config:?}");

    if let Err(e) = trigon_engine::run(&config) {
        eprintln!("{e}");
        process::exit(-1);
    }
}
