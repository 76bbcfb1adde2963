use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::SetLoggerError;

/// Initialize logging with fern.
///
/// Logs go to stderr; stdout is reserved for JSON command output.
pub fn initialize(level: cb_config::LogLevel, colored: bool) -> Result<(), SetLoggerError> {
    let dispatch = if colored {
        let colors = ColoredLevelConfig::new()
            .trace(Color::Magenta)
            .debug(Color::Blue)
            .info(Color::Green)
            .warn(Color::Yellow)
            .error(Color::Red);

        Dispatch::new().format(move |out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {message}",
                date = humantime::format_rfc3339(SystemTime::now()),
                level = colors.color(record.level()),
                message = message,
            ))
        })
    } else {
        Dispatch::new().format(|out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {message}",
                date = humantime::format_rfc3339(SystemTime::now()),
                level = record.level(),
                message = message,
            ))
        })
    };

    dispatch.level(*level).chain(std::io::stderr()).apply()
}
