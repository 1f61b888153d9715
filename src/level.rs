use clap::ValueEnum;

/// Severity of a log record, ordered by increasing importance.
///
/// `Off` is a threshold-only value: no record is ever constructed at it, so
/// using it as a logger's minimum level silences all output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum Level {
    Info,
    Error,
    Fatal,
    Off,
}

impl Level {
    /// Wire-format name of the level. `Off` has no wire form.
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Error => "ERROR",
            Level::Fatal => "FATAL",
            Level::Off => "",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
