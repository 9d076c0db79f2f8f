use std::{
    io::Write as _,
    sync::{OnceLock, RwLock},
};

use log::{Log, Metadata, Record};

static LOGGER: OnceLock<AppLogger> = OnceLock::new();

pub fn get_logger() -> &'static AppLogger {
    LOGGER.get_or_init(|| AppLogger::new(log::Level::Warn))
}

/// Installs the logger, `verbosity` counts the `-v` flags.
pub fn init(verbosity: u8) {
    let logger = get_logger();
    logger.set_min_level(level_for(verbosity));

    // a second init only changes the level
    if log::set_logger(logger).is_ok() {
        log::set_max_level(log::LevelFilter::Trace);
    }
}

pub fn level_for(verbosity: u8) -> log::Level {
    match verbosity {
        0 => log::Level::Warn,
        1 => log::Level::Debug,
        _ => log::Level::Trace,
    }
}

/// Writes `LEVEL source -> message` lines to stderr.
pub struct AppLogger {
    min_level: RwLock<log::Level>,
}

impl AppLogger {
    fn new(min_level: log::Level) -> Self {
        Self {
            min_level: RwLock::new(min_level),
        }
    }

    pub fn min_level(&self) -> log::Level {
        *self
            .min_level
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn set_min_level(&self, level: log::Level) {
        *self
            .min_level
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = level;
    }

    pub fn format(record: &Record) -> String {
        format!(
            "{:<5} {} -> {}",
            record.level(),
            record.module_path().unwrap_or("unknown"),
            record.args()
        )
    }
}

impl Log for AppLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.min_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let _ = writeln!(std::io::stderr().lock(), "{}", Self::format(record));
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for(0), log::Level::Warn);
        assert_eq!(level_for(1), log::Level::Debug);
        assert_eq!(level_for(5), log::Level::Trace);
    }

    #[test]
    fn filters_by_level() {
        let logger = AppLogger::new(log::Level::Warn);
        let meta = |level| Metadata::builder().level(level).target("labyr").build();
        assert!(logger.enabled(&meta(log::Level::Error)));
        assert!(logger.enabled(&meta(log::Level::Warn)));
        assert!(!logger.enabled(&meta(log::Level::Debug)));

        logger.set_min_level(log::Level::Debug);
        assert!(logger.enabled(&meta(log::Level::Debug)));
        assert!(!logger.enabled(&meta(log::Level::Trace)));
    }

    #[test]
    fn line_format() {
        let line = AppLogger::format(
            &Record::builder()
                .args(format_args!("carved 3 doorways"))
                .level(log::Level::Debug)
                .module_path(Some("clabyr::algorithms"))
                .build(),
        );
        assert_eq!(line, "DEBUG clabyr::algorithms -> carved 3 doorways");
    }
}
