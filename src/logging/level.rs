//! Severity levels for log records.

/// Severity of a log record, ascending from `Trace` to `Fatal`.
///
/// Discriminants carry the standard numeric ranks, so deriving `Ord` keeps
/// comparisons aligned with the external numeric-severity convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum LogLevel {
    Trace = 10,
    Debug = 20,
    Info = 30,
    Warn = 40,
    Error = 50,
    Fatal = 60,
}

impl LogLevel {
    /// Get the lowercase tag used in formatted output
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Fatal => "fatal",
        }
    }

    /// Numeric rank of this level
    pub fn rank(&self) -> u8 {
        *self as u8
    }

    /// Map an external numeric rank back to a level
    pub fn from_rank(rank: u8) -> Option<LogLevel> {
        match rank {
            10 => Some(LogLevel::Trace),
            20 => Some(LogLevel::Debug),
            30 => Some(LogLevel::Info),
            40 => Some(LogLevel::Warn),
            50 => Some(LogLevel::Error),
            60 => Some(LogLevel::Fatal),
            _ => None,
        }
    }
}
