use log::{LevelFilter, Log, Metadata, Record};

/// переменная окружения с уровнем логирования: off, error, warn, info, debug, trace
pub const LOG_ENV: &str = "UCD_LOG";

struct StderrLogger;

impl Log for StderrLogger
{
    fn enabled(&self, metadata: &Metadata) -> bool
    {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record)
    {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// логирование в stderr, по умолчанию - только предупреждения
pub fn init()
{
    let level = std::env::var(LOG_ENV)
        .ok()
        .and_then(|value| value.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Warn);

    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
