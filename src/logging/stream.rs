//! Console output stream with verbosity filtering and log capture
//!
//! The stream is the single place holding verbosity and capture state.
//! Records are either written straight to the output sink, or buffered while
//! capturing and replayed later by an explicit flush.

use std::collections::VecDeque;
use std::io::Write;
use std::sync::{Arc, Mutex, OnceLock, RwLock};

use super::level::LogLevel;

/// A single log record
#[derive(Debug, Clone)]
pub struct LogRecord {
    /// Display name of the logger that emitted the record
    pub name: String,
    /// Severity level
    pub level: LogLevel,
    /// Log message
    pub message: String,
}

impl LogRecord {
    /// Create a new log record
    pub fn new(level: LogLevel, name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level,
            message: message.into(),
        }
    }
}

/// Destination for formatted log output
///
/// Narrow capability interface so a test (or an embedder) can substitute an
/// in-memory destination for the process's stdout.
pub trait Sink: Send + Sync {
    /// Write one formatted chunk of output
    fn write(&self, text: &str);
}

/// Sink that writes to the process's standard output
pub struct StdoutSink;

impl Sink for StdoutSink {
    fn write(&self, text: &str) {
        let mut stdout = std::io::stdout();
        let _ = stdout.write_all(text.as_bytes());
        let _ = stdout.flush();
    }
}

/// Sink that collects output in memory
#[derive(Default)]
pub struct MemorySink {
    chunks: Mutex<Vec<String>>,
}

impl MemorySink {
    /// Create an empty memory sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Get everything written so far, one entry per write call
    pub fn chunks(&self) -> Vec<String> {
        self.chunks.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl Sink for MemorySink {
    fn write(&self, text: &str) {
        if let Ok(mut chunks) = self.chunks.lock() {
            chunks.push(text.to_string());
        }
    }
}

/// Mutable state carried by a console stream
#[derive(Default)]
struct StreamState {
    /// Verbose output; set once, never cleared
    verbose: bool,
    /// Whether records are currently buffered instead of written
    capturing: bool,
    /// Records buffered while capturing, oldest first
    captured: VecDeque<LogRecord>,
}

/// Stateful console sink shared by all loggers
///
/// Starts out non-verbose, not capturing, with an empty capture queue.
pub struct ConsoleStream {
    sink: Arc<dyn Sink>,
    state: RwLock<StreamState>,
}

impl ConsoleStream {
    /// Create a stream writing to the given sink
    pub fn new(sink: Arc<dyn Sink>) -> Self {
        Self {
            sink,
            state: RwLock::new(StreamState::default()),
        }
    }

    /// Consume a record
    ///
    /// While capturing, the record is appended to the capture queue and
    /// nothing is written. Otherwise it is formatted and written to the sink,
    /// unless the verbosity filter suppresses it.
    pub fn write(&self, record: LogRecord) {
        if let Ok(mut state) = self.state.write() {
            if state.capturing {
                state.captured.push_back(record);
                return;
            }
            if passes_filter(state.verbose, record.level) {
                self.sink.write(&render(state.verbose, &record));
            }
        }
    }

    /// Check whether a record at `level` would be displayed right now
    ///
    /// INFO and above always pass; DEBUG and TRACE only pass in verbose mode,
    /// so user-facing warnings and errors are never silently dropped.
    pub fn should_log(&self, level: LogLevel) -> bool {
        passes_filter(self.is_verbose(), level)
    }

    /// Format a record for the terminal
    pub fn format(&self, record: &LogRecord) -> String {
        render(self.is_verbose(), record)
    }

    /// Turn on verbose output
    ///
    /// One-directional; there is no operation to turn verbosity back off.
    pub fn make_verbose(&self) {
        if let Ok(mut state) = self.state.write() {
            state.verbose = true;
        }
    }

    /// Whether verbose mode is on
    pub fn is_verbose(&self) -> bool {
        self.state.read().map(|s| s.verbose).unwrap_or(false)
    }

    /// Start buffering records instead of writing them
    ///
    /// Records left over from a previous capture session are discarded.
    pub fn start_capturing(&self) {
        if let Ok(mut state) = self.state.write() {
            state.capturing = true;
            state.captured.clear();
        }
    }

    /// Stop buffering records
    ///
    /// Records captured so far stay queued until flushed.
    pub fn stop_capturing(&self) {
        if let Ok(mut state) = self.state.write() {
            state.capturing = false;
        }
    }

    /// Whether records are currently being captured
    pub fn is_capturing(&self) -> bool {
        self.state.read().map(|s| s.capturing).unwrap_or(false)
    }

    /// Write every captured record to the sink, oldest first, and empty the
    /// queue
    ///
    /// Captured records skip the verbosity filter: once a record was accepted
    /// into the queue it is always emitted on flush. Flushing an empty queue
    /// writes nothing.
    pub fn flush_captured_logs(&self) {
        if let Ok(mut state) = self.state.write() {
            let verbose = state.verbose;
            while let Some(record) = state.captured.pop_front() {
                self.sink.write(&render(verbose, &record));
            }
        }
    }
}

/// Level filter: INFO and above always pass, DEBUG and TRACE need verbose
fn passes_filter(verbose: bool, level: LogLevel) -> bool {
    verbose || level >= LogLevel::Info
}

/// Render a record: name and level tag in verbose mode, bare message otherwise
fn render(verbose: bool, record: &LogRecord) -> String {
    if verbose {
        format!(
            "[{}][{}] {}\n",
            record.name,
            record.level.as_str(),
            record.message
        )
    } else {
        format!("{}\n", record.message)
    }
}

/// Process-wide console stream shared by all loggers
///
/// Initialized on first use with a stdout sink; lives for the process
/// lifetime.
static CONSOLE: OnceLock<Arc<ConsoleStream>> = OnceLock::new();

/// Get the shared console stream
pub fn console() -> Arc<ConsoleStream> {
    Arc::clone(CONSOLE.get_or_init(|| Arc::new(ConsoleStream::new(Arc::new(StdoutSink)))))
}
