use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum AppError {
    /// Source CSV unreadable or malformed. Fatal for the current pass.
    #[error("Data unavailable: {0}")]
    DataUnavailable(String),

    /// Range bounds outside the table's month sequence, or start after end.
    /// Contract violation: the caller should only offer months the table has.
    #[error("Invalid month range: {0}")]
    InvalidRange(String),

    /// Zero sellers selected, or the filtered row set came out empty.
    /// Recoverable: surfaced as a warning, downstream rendering skipped.
    #[error("Empty selection: {0}")]
    EmptySelection(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
