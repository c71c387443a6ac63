// src/logging.rs
// Logger setup. RUST_LOG still takes precedence when it is set.

use log::LevelFilter;

pub fn init_logger(verbose: bool, quiet: bool) {
    let level = level_for(verbose, quiet);

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .init();

    log::debug!("Logger initialized with level: {level:?}");
}

fn level_for(verbose: bool, quiet: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Off
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}
