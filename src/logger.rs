use simplelog::{Config, SimpleLogger, TermLogger, TerminalMode};

/// Installs a terminal logger at `level` and routes panics through it.
///
/// Falls back to a plain `SimpleLogger` when no terminal is attached.
pub fn init_logger(level: log::Level) {
    let level_filter = level.to_level_filter();
    if TermLogger::init(level_filter, Config::default(), TerminalMode::Mixed).is_err() {
        SimpleLogger::init(level_filter, Config::default()).expect("Couldn't initialize logger")
    }

    log_panics::init();
}
