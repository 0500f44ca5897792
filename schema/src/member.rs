use crate::{sprite_key, Stat, StatSpread};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered team, in the order members appeared in the paste.
pub type Team = Vec<MemberRecord>;

/// One team member as parsed from a paste block.
///
/// The sprite key is derived from `species` on demand and is never stored on
/// the record. It is still written out when the record is serialized so that
/// display code reading stored JSON can use it directly.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "MemberWire", into = "MemberWire")]
pub struct MemberRecord {
    pub nickname: Option<String>,
    pub species: String,
    pub item: Option<String>,
    pub ability: Option<String>,
    pub nature: Option<String>,
    pub tera_type: Option<String>,
    pub evs: StatSpread,
    pub ivs: StatSpread,
    pub moves: Vec<String>,
}

impl MemberRecord {
    pub fn new(species: impl Into<String>) -> Self {
        Self {
            species: species.into(),
            ..Self::default()
        }
    }

    /// Asset lookup key for this member's species.
    pub fn sprite_key(&self) -> String {
        sprite_key(&self.species)
    }
}

impl fmt::Display for MemberRecord {
    /// Writes the member back out in paste notation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.nickname {
            Some(nickname) => write!(f, "{} ({})", nickname, self.species)?,
            None => write!(f, "{}", self.species)?,
        }
        if let Some(item) = &self.item {
            write!(f, " @ {}", item)?;
        }
        if let Some(ability) = &self.ability {
            write!(f, "\nAbility: {}", ability)?;
        }
        if let Some(tera_type) = &self.tera_type {
            write!(f, "\nTera Type: {}", tera_type)?;
        }
        if !self.evs.is_empty() {
            write!(f, "\nEVs: {}", format_spread(&self.evs))?;
        }
        if let Some(nature) = &self.nature {
            write!(f, "\n{} Nature", nature)?;
        }
        if !self.ivs.is_empty() {
            write!(f, "\nIVs: {}", format_spread(&self.ivs))?;
        }
        for move_name in &self.moves {
            write!(f, "\n- {}", move_name)?;
        }
        Ok(())
    }
}

// Spreads are unordered. Canonical stats come first in HP..Spe order, then
// any other labels alphabetically, so the output is stable.
fn format_spread(spread: &StatSpread) -> String {
    let mut entries: Vec<(&String, &u32)> = spread.iter().collect();
    let rank = |label: &str| Stat::from_label(label).map_or(u8::MAX, |stat| stat as u8);
    entries.sort_by(|(a, _), (b, _)| rank(a).cmp(&rank(b)).then_with(|| a.cmp(b)));
    entries
        .iter()
        .map(|(label, value)| format!("{} {}", value, label))
        .collect::<Vec<_>>()
        .join(" / ")
}

/// Serialized shape of a member record.
#[derive(Clone, Serialize, Deserialize)]
struct MemberWire {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    nickname: Option<String>,
    species: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    item: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ability: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    nature: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tera_type: Option<String>,
    #[serde(default)]
    evs: StatSpread,
    #[serde(default)]
    ivs: StatSpread,
    #[serde(default)]
    moves: Vec<String>,
    // Output only. Whatever a reader supplies here is recomputed.
    #[serde(default, skip_deserializing)]
    sprite_name: String,
}

impl From<MemberWire> for MemberRecord {
    fn from(wire: MemberWire) -> Self {
        Self {
            nickname: wire.nickname,
            species: wire.species,
            item: wire.item,
            ability: wire.ability,
            nature: wire.nature,
            tera_type: wire.tera_type,
            evs: wire.evs,
            ivs: wire.ivs,
            moves: wire.moves,
        }
    }
}

impl From<MemberRecord> for MemberWire {
    fn from(record: MemberRecord) -> Self {
        let sprite_name = record.sprite_key();
        Self {
            nickname: record.nickname,
            species: record.species,
            item: record.item,
            ability: record.ability,
            nature: record.nature,
            tera_type: record.tera_type,
            evs: record.evs,
            ivs: record.ivs,
            moves: record.moves,
            sprite_name,
        }
    }
}
