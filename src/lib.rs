// In: src/lib.rs

//! Cobblepaste
//!
//! Parses Showdown-style team pastes into structured member records and
//! hands them to a storage collaborator for sharing under a short key.

// --- MODULE DECLARATIONS ---
pub mod config;
pub mod errors;
pub mod parser;
pub mod store;
pub mod submission;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
pub use schema::{sprite_key, MemberRecord, Stat, StatSpread, Team};

// --- From this crate's modules (`src/`) ---
pub use config::{MemberPolicy, ParserConfig, StatVocabulary};
pub use parser::{parse_team, parse_team_bytes, TeamParser};
pub use store::{MemoryStore, PasteStore, StoredPaste};
pub use submission::{PreparedPaste, Submission};

// Crate-specific error and result types.
pub use errors::{
    ConfigError, ConfigResult, ParseError, ParseResult, StoreError, StoreResult, SubmissionError,
    SubmissionResult,
};
