//! Utilities: stderr logging with a process-wide level set from `-v` / `-q`.
//!
//! Key items:
//!   init_logging / derive_level
//!   log_error! / log_debug! / log_trace!

/// Logging helpers.
///
/// Lines go to stderr so help text, greetings and scaffold summaries on
/// stdout stay pipeable. `Info` is the default threshold and has no macro of
/// its own: command output is the info channel.
pub mod logging {
    use std::sync::atomic::{AtomicU8, Ordering};
    use std::time::{SystemTime, UNIX_EPOCH};

    #[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
    pub enum LogLevel {
        Error = 0,
        Info = 1,
        Debug = 2,
        Trace = 3,
    }

    impl LogLevel {
        pub fn label(self) -> &'static str {
            match self {
                LogLevel::Error => "ERROR",
                LogLevel::Info => "INFO",
                LogLevel::Debug => "DEBUG",
                LogLevel::Trace => "TRACE",
            }
        }

        fn from_u8(raw: u8) -> Self {
            match raw {
                0 => LogLevel::Error,
                1 => LogLevel::Info,
                2 => LogLevel::Debug,
                _ => LogLevel::Trace,
            }
        }
    }

    static THRESHOLD: AtomicU8 = AtomicU8::new(LogLevel::Info as u8);

    pub fn init_logging(level: LogLevel) {
        THRESHOLD.store(level as u8, Ordering::Relaxed);
    }

    pub fn threshold() -> LogLevel {
        LogLevel::from_u8(THRESHOLD.load(Ordering::Relaxed))
    }

    /// `-q` wins over any number of `-v`.
    pub fn derive_level(verbose: u8, quiet: bool) -> LogLevel {
        match (quiet, verbose) {
            (true, _) => LogLevel::Error,
            (false, 0) => LogLevel::Info,
            (false, 1) => LogLevel::Debug,
            (false, _) => LogLevel::Trace,
        }
    }

    pub fn format_line(level: LogLevel, msg: &str) -> String {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        format!("[{}][{millis}] {msg}", level.label())
    }

    pub fn log(level: LogLevel, msg: impl AsRef<str>) {
        if level <= threshold() {
            eprintln!("{}", format_line(level, msg.as_ref()));
        }
    }

    #[macro_export]
    macro_rules! log_error {
        ($($t:tt)*) => {
            $crate::utils::logging::log($crate::utils::logging::LogLevel::Error, format!($($t)*))
        };
    }
    #[macro_export]
    macro_rules! log_debug {
        ($($t:tt)*) => {
            $crate::utils::logging::log($crate::utils::logging::LogLevel::Debug, format!($($t)*))
        };
    }
    #[macro_export]
    macro_rules! log_trace {
        ($($t:tt)*) => {
            $crate::utils::logging::log($crate::utils::logging::LogLevel::Trace, format!($($t)*))
        };
    }
}

pub use logging::{derive_level, init_logging};
