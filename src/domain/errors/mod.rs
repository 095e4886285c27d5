// Domain errors - Error types for the domain layer

use thiserror::Error;

/// Domain-specific error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Invalid arguments provided
    #[error("Bad arguments: {0}")]
    BadArgs(String),

    /// Variant identifier names a codec missing from the rank table
    #[error("Unknown codec: {0}")]
    UnknownCodec(String),

    /// Variant identifier names a resolution missing from the rank table
    #[error("Unknown resolution: {0}")]
    UnknownResolution(String),

    /// Subtitle file does not follow either accepted naming shape
    #[error(
        "Invalid VTT filename: {0}. Expected format: 'subs-<language>.vtt' or '<language>.vtt' (e.g., 'en.vtt', 'en-us.vtt')"
    )]
    InvalidSubtitleName(String),

    /// Two subtitle files resolve to the same output directory
    #[error("Duplicate subtitle track {output_dir}: {first} and {second}")]
    DuplicateSubtitle {
        output_dir: String,
        first: String,
        second: String,
    },

    /// External tool exited unsuccessfully
    #[error("{command} exited with code {code}")]
    ToolFailed { command: String, code: String },

    /// External probe printed something we cannot read
    #[error("Unexpected output from {tool}: {detail}")]
    ProbeOutput { tool: String, detail: String },

    /// Variant-selection line without a RESOLUTION attribute
    #[error("Stream entry has no RESOLUTION attribute: {0}")]
    MissingResolution(String),

    /// Base manifest contains no variant-selection line
    #[error("Manifest contains no stream entries")]
    NoStreamEntries,

    /// Frame-based timecode could not be parsed
    #[error("Invalid timecode: {0}. Expected HH:MM:SS:FF")]
    InvalidTimecode(String),

    /// Timed-text document is not shaped as expected
    #[error("Malformed timed text: {0}")]
    MalformedTimedText(String),

    /// Configuration failed to load or validate
    #[error("Configuration error: {0}")]
    Config(String),

    /// File system operation failed
    #[error("File system error: {0}")]
    FsFail(String),
}

impl From<std::io::Error> for DomainError {
    fn from(err: std::io::Error) -> Self {
        DomainError::FsFail(err.to_string())
    }
}
