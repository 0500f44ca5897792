// Cobblepaste Schema - Shared record definitions
// This crate contains the team member records produced by the paste parser
// and consumed by storage and display code, plus the sprite key normalizer
// those records depend on.

// Re-export the main types
pub use member::*;
pub use sprite::*;
pub use stats::*;

pub mod member;
pub mod sprite;
pub mod stats;
