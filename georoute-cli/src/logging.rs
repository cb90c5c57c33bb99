//! Logger installation for the binary.

use std::io::{self, Write};

use env_logger::{Builder, Target, WriteStyle};
use log::{Level, LevelFilter};

use crate::CliError;

/// Install a stderr logger at `level`.
///
/// Libraries log through the `log` facade; nothing is printed until this
/// runs.
pub(crate) fn init_logger(level: LevelFilter) -> Result<(), CliError> {
    builder(level)
        .try_init()
        .map_err(|err| CliError::Logging(io::Error::other(err)))
}

fn builder(level: LevelFilter) -> Builder {
    let mut builder = Builder::new();
    builder
        .filter_level(level)
        .write_style(WriteStyle::Never)
        .target(Target::Stderr)
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {} [{}] {}",
                buf.timestamp_millis(),
                level_tag(record.level()),
                record.target(),
                record.args()
            )
        });
    builder
}

const fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}
