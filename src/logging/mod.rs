//! Logging system for extlint
//!
//! Provides named loggers with leveled emission, and a console stream that
//! filters by verbosity, formats records for the terminal, and can capture
//! output for later replay.

mod level;
mod logger;
mod stream;

pub use level::LogLevel;
pub use logger::{create_logger, Logger};
pub use stream::{console, ConsoleStream, LogRecord, MemorySink, Sink, StdoutSink};
