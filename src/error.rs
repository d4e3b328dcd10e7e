use std::io;
use std::path::PathBuf;

/// Errors that can occur during extraction or fixture emission.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SpecExtractError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    /// An example block closed before its `.` separator was seen.
    #[error("example {index}: closing fence at line {line} before the separator")]
    MissingSeparator { index: u32, line: usize },

    /// The document ended inside an example block.
    #[error("example {index}: document ended at line {line} before the closing fence")]
    UnterminatedExample { index: u32, line: usize },

    /// A fixture file did not contain the two expected marker lines.
    #[error("malformed fixture {}: expected two `......` marker lines", path.display())]
    MalformedFixture { path: PathBuf },
}
