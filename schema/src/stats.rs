use std::collections::HashMap;
use strum::{EnumIter, EnumString, IntoStaticStr};

/// Stat label -> value, as written on an `EVs:` or `IVs:` line.
///
/// Labels are free text; a stat that was not listed is simply absent.
pub type StatSpread = HashMap<String, u32>;

/// The six battle stats under their canonical team-paste labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter, IntoStaticStr)]
pub enum Stat {
    HP,
    Atk,
    Def,
    SpA,
    SpD,
    Spe,
}

impl Stat {
    /// Look up a canonical label. Matching is exact, so `"spa"` is not `SpA`.
    pub fn from_label(label: &str) -> Option<Stat> {
        label.parse().ok()
    }
}
