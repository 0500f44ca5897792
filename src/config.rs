//! Parser configuration
//!
//! Policies that decide which parsed members count as valid. Loaded from a
//! RON file; every field has a default so partial files are accepted.
//!
//! ```ron
//! (
//!     member_policy: RequireMoves,
//!     stat_vocabulary: Standard,
//! )
//! ```

use crate::errors::ConfigResult;
use schema::Stat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

/// What a member needs in order to be kept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MemberPolicy {
    /// A species is enough; a member without moves is kept.
    #[default]
    SpeciesOnly,
    /// A member also needs at least one move.
    RequireMoves,
}

/// Which stat labels an `EVs:`/`IVs:` segment may use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StatVocabulary {
    /// Any label is accepted as free text.
    #[default]
    Free,
    /// Only `HP`, `Atk`, `Def`, `SpA`, `SpD` and `Spe`; other segments are skipped.
    Standard,
}

impl StatVocabulary {
    pub fn accepts(self, label: &str) -> bool {
        match self {
            StatVocabulary::Free => true,
            StatVocabulary::Standard => Stat::from_label(label).is_some(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParserConfig {
    #[serde(default)]
    pub member_policy: MemberPolicy,
    #[serde(default)]
    pub stat_vocabulary: StatVocabulary,
}

impl ParserConfig {
    pub fn from_ron_str(text: &str) -> ConfigResult<Self> {
        Ok(ron::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_ron_str(&text)
    }

    /// Load a config file, falling back to defaults if it is missing or bad.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("Using default parser config; {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
