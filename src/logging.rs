use log::{Level, LevelFilter, Log, Metadata, Record};

struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let color = match record.level() {
            Level::Error => 31, // Red
            Level::Warn => 93,  // BrightYellow
            Level::Info => 34,  // Blue
            Level::Debug => 32, // Green
            Level::Trace => 90, // BrightBlack
        };
        eprintln!(
            "\u{1B}[{}m[{:>5}] {}\u{1B}[0m",
            color,
            record.level(),
            record.args()
        );
    }

    fn flush(&self) {}
}

/// Installs the console logger. The level comes from the `LOG` environment
/// variable (`error`, `warn`, `info`, `debug`, `trace`); logging is off
/// otherwise. Calling it again is harmless.
pub fn init() {
    static LOGGER: ConsoleLogger = ConsoleLogger;
    if log::set_logger(&LOGGER).is_err() {
        return;
    }
    log::set_max_level(level_filter(std::env::var("LOG").ok().as_deref()));
}

fn level_filter(name: Option<&str>) -> LevelFilter {
    match name.map(|s| s.to_ascii_uppercase()).as_deref() {
        Some("ERROR") => LevelFilter::Error,
        Some("WARN") => LevelFilter::Warn,
        Some("INFO") => LevelFilter::Info,
        Some("DEBUG") => LevelFilter::Debug,
        Some("TRACE") => LevelFilter::Trace,
        _ => LevelFilter::Off,
    }
}

#[test]
fn level_from_env_value() {
    assert_eq!(level_filter(Some("info")), LevelFilter::Info);
    assert_eq!(level_filter(Some("TRACE")), LevelFilter::Trace);
    assert_eq!(level_filter(Some("loud")), LevelFilter::Off);
    assert_eq!(level_filter(None), LevelFilter::Off);
}
