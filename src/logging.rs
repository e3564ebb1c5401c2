use std::io::Write;

fn level_label(level: log::Level) -> &'static str {
    match level {
        log::Level::Error => "ERROR",
        log::Level::Warn => "WARN ",
        log::Level::Info => "INFO ",
        log::Level::Debug => "DEBUG",
        log::Level::Trace => "TRACE",
    }
}

pub fn default_filter(quiet: bool, debug: bool) -> &'static str {
    if debug {
        "debug"
    } else if quiet {
        "warn"
    } else {
        "info"
    }
}

/// Logs to stderr; `RUST_LOG` overrides the flag-derived level.
pub fn init_logging(quiet: bool, debug: bool) {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_filter(quiet, debug)),
    )
    .format(|buf, record| writeln!(buf, "[{}] {}", level_label(record.level()), record.args()))
    .init();
}
