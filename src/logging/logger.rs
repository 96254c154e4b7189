//! Named logger factory
//!
//! Loggers are cheap handles bound to a display name derived from a path-like
//! source identifier. Every emit constructs a record and forwards it to a
//! console stream.

use std::path::Path;
use std::sync::Arc;

use super::level::LogLevel;
use super::stream::{console, ConsoleStream, LogRecord};

/// A named logger bound to a console stream
#[derive(Clone)]
pub struct Logger {
    name: String,
    stream: Arc<ConsoleStream>,
}

/// Create a logger for the given source identifier, bound to the shared
/// console stream
///
/// The display name is the final path segment of the identifier; call sites
/// usually pass `file!()`.
pub fn create_logger(source: &str) -> Logger {
    Logger::attached(source, console())
}

impl Logger {
    /// Create a logger bound to an explicit stream
    ///
    /// Lets tests observe emission without touching the shared instance.
    pub fn attached(source: &str, stream: Arc<ConsoleStream>) -> Self {
        Self {
            name: display_name(source),
            stream,
        }
    }

    /// Display name of this logger
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Emit a record at TRACE level
    pub fn trace(&self, message: impl Into<String>) {
        self.emit(LogLevel::Trace, message);
    }

    /// Emit a record at DEBUG level
    pub fn debug(&self, message: impl Into<String>) {
        self.emit(LogLevel::Debug, message);
    }

    /// Emit a record at INFO level
    pub fn info(&self, message: impl Into<String>) {
        self.emit(LogLevel::Info, message);
    }

    /// Emit a record at WARN level
    pub fn warn(&self, message: impl Into<String>) {
        self.emit(LogLevel::Warn, message);
    }

    /// Emit a record at ERROR level
    pub fn error(&self, message: impl Into<String>) {
        self.emit(LogLevel::Error, message);
    }

    /// Emit a record at FATAL level
    pub fn fatal(&self, message: impl Into<String>) {
        self.emit(LogLevel::Fatal, message);
    }

    fn emit(&self, level: LogLevel, message: impl Into<String>) {
        self.stream
            .write(LogRecord::new(level, self.name.clone(), message));
    }
}

/// Final path segment of a source identifier
///
/// Purely a string transform; the identifier is never checked against the
/// filesystem.
fn display_name(source: &str) -> String {
    Path::new(source)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| source.to_string())
}

#[cfg(test)]
mod tests {
    use super::super::stream::{MemorySink, Sink};
    use super::*;

    fn attached_logger(source: &str) -> (Arc<MemorySink>, Logger) {
        let sink = Arc::new(MemorySink::new());
        let stream = Arc::new(ConsoleStream::new(sink.clone() as Arc<dyn Sink>));
        (sink, Logger::attached(source, stream))
    }

    #[test]
    fn test_name_strips_directories() {
        let (_sink, log) = attached_logger("src/some-file.js");
        assert_eq!(log.name(), "some-file.js");
    }

    #[test]
    fn test_name_keeps_plain_identifiers() {
        let (_sink, log) = attached_logger("manifest.rs");
        assert_eq!(log.name(), "manifest.rs");
    }

    #[test]
    fn test_emit_forwards_to_the_stream() {
        let (sink, log) = attached_logger("src/manifest.rs");
        log.info("hello");
        assert_eq!(sink.chunks(), vec!["hello\n".to_string()]);
    }

    #[test]
    fn test_verbose_emission_carries_name_and_tag() {
        let sink = Arc::new(MemorySink::new());
        let stream = Arc::new(ConsoleStream::new(sink.clone() as Arc<dyn Sink>));
        stream.make_verbose();
        let log = Logger::attached("src/manifest.rs", stream);

        log.warn("careful");
        assert_eq!(sink.chunks(), vec!["[manifest.rs][warn] careful\n".to_string()]);
    }

    #[test]
    fn test_debug_goes_through_the_level_filter() {
        let (sink, log) = attached_logger("src/manifest.rs");
        log.debug("quiet");
        assert!(sink.chunks().is_empty());
        log.error("loud");
        assert_eq!(sink.chunks().len(), 1);
    }
}
