use std::io::Write;

use env_logger::{fmt::Formatter, Builder, Env, Target};
use log::{Level, LevelFilter, SetLoggerError};

/// Compact `LEVEL message` lines on stderr. `RUST_LOG`, when set, overrides
/// the level chosen by `verbose`.
pub fn init_logger(verbose: bool) -> Result<(), SetLoggerError> {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = Builder::new();
    builder
        .filter_level(level)
        .parse_env(Env::default())
        .write_style(env_logger::WriteStyle::Never)
        .format(|buf: &mut Formatter, record| {
            writeln!(buf, "{} {}", level_tag(record.level()), record.args())
        })
        .target(Target::Stderr);

    builder.try_init()
}

fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}
