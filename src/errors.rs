use thiserror::Error;

/// Conditions the team parser reports to its caller.
///
/// Malformed blocks and unreadable stat segments are absorbed inside the
/// parser and never show up here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The paste produced zero valid members
    #[error("No Pokémon found in the paste.")]
    NoMembers,
    /// The input could not be read as text at all
    #[error("Invalid paste input: {0}")]
    InvalidInput(String),
}

/// Errors loading a parser configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed config: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// Errors turning a user submission into a storable paste
#[derive(Error, Debug)]
pub enum SubmissionError {
    /// The paste field was blank after trimming
    #[error("Please paste a Pokémon Showdown team.")]
    EmptyPaste,
    #[error("Could not parse your team: {0}")]
    Parse(#[from] ParseError),
    #[error("Could not encode team: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Errors from the paste storage collaborator
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Paste '{0}' not found")]
    NotFound(String),
    #[error("Paste key '{0}' is already in use")]
    SlugTaken(String),
    #[error("Stored team data is corrupted: {0}")]
    Decode(#[source] serde_json::Error),
    /// A writer panicked while holding the store lock
    #[error("Paste store is unavailable")]
    Poisoned,
}

/// Type alias for Results using ParseError
pub type ParseResult<T> = Result<T, ParseError>;

/// Type alias for Results using ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Type alias for Results using SubmissionError
pub type SubmissionResult<T> = Result<T, SubmissionError>;

/// Type alias for Results using StoreError
pub type StoreResult<T> = Result<T, StoreError>;
