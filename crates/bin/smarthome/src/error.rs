//! Control panel errors.

/// Why the interactive loop stopped reading.
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    /// Reading from or writing to the terminal failed.
    #[error("terminal I/O failed")]
    Io(#[from] std::io::Error),
    /// The input stream was closed while an answer was expected.
    #[error("end of input")]
    EndOfInput,
}
