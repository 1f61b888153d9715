use crate::level::Level;
use crate::record::{Properties, Record};
use parking_lot::Mutex;
use std::io::{self, Write};

/// Concurrency-safe structured logger writing newline-delimited JSON
/// records to a single sink.
///
/// The logger is constructed explicitly with its sink and threshold and is
/// meant to be shared by reference (or behind an `Arc`) across threads. One
/// mutex guards the sink; it is held only while a fully formatted line is
/// written, so no two records ever interleave their bytes.
pub struct Logger<W: Write + Send> {
    out: Mutex<W>,
    min_level: Level,
}

impl<W: Write + Send> Logger<W> {
    pub fn new(out: W, min_level: Level) -> Self {
        Self {
            out: Mutex::new(out),
            min_level,
        }
    }

    /// Logs a message at INFO severity. Returns the number of bytes
    /// written, `Ok(0)` when filtered by the threshold.
    pub fn info(&self, message: &str, properties: Option<Properties>) -> io::Result<usize> {
        self.print(Level::Info, message.to_string(), properties)
    }

    /// Logs an error at ERROR severity with a captured stack trace.
    pub fn error(
        &self,
        err: &(dyn std::error::Error + 'static),
        properties: Option<Properties>,
    ) -> io::Result<usize> {
        self.print(Level::Error, err.to_string(), properties)
    }

    /// Logs an error at FATAL severity, then terminates the process with a
    /// non-zero exit status. Termination is unconditional: it happens after
    /// the write attempt even when FATAL is filtered by the threshold or
    /// the sink rejects the write. Fatal conditions always halt; visibility
    /// of the record is secondary.
    pub fn fatal(
        &self,
        err: &(dyn std::error::Error + 'static),
        properties: Option<Properties>,
    ) -> ! {
        let _ = self.print(Level::Fatal, err.to_string(), properties);
        let _ = self.out.lock().flush();
        std::process::exit(1);
    }

    /// Consumes the logger and returns the sink.
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    fn print(
        &self,
        level: Level,
        message: String,
        properties: Option<Properties>,
    ) -> io::Result<usize> {
        if level < self.min_level {
            return Ok(0);
        }

        // Format outside the lock; only the write is the critical section.
        let line = Record::new(level, message, properties).to_line();

        let mut out = self.out.lock();
        out.write_all(&line)?;
        Ok(line.len())
    }
}

impl Logger<io::Stdout> {
    /// Logger on standard output, the usual process-wide destination.
    pub fn to_stdout(min_level: Level) -> Self {
        Self::new(io::stdout(), min_level)
    }
}

/// Write-sink adapter: a shared logger can be installed anywhere an
/// `io::Write` destination is expected. Every payload handed to it is
/// logged as one ERROR record with no properties.
impl<W: Write + Send> Write for &Logger<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.print(Level::Error, String::from_utf8_lossy(buf).into_owned(), None)?;
        // io::Write requires the consumed count to not exceed buf.len().
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.lock().flush()
    }
}
