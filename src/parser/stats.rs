//! `EVs:` / `IVs:` line parsing.

use crate::config::StatVocabulary;
use regex::Regex;
use schema::StatSpread;
use std::sync::LazyLock;
use tracing::debug;

// A segment is an ASCII digit run, whitespace, then the label (rest of the
// segment). Other scripts' digits do not count as a value.
static STAT_SEGMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)\s+(.+)").expect("valid stat segment regex"));

/// Parse a stat-list line such as `"EVs: 252 SpA / 4 SpD / 252 Spe"`.
///
/// Segments that are not `<digits> <label>` are skipped on their own; the
/// rest of the line is still read. A repeated label keeps its last value.
pub fn parse_stat_list(line: &str, vocabulary: StatVocabulary) -> StatSpread {
    let mut spread = StatSpread::new();
    let Some((_, values)) = line.split_once(':') else {
        return spread;
    };

    for segment in values.split('/').map(str::trim).filter(|s| !s.is_empty()) {
        let Some(caps) = STAT_SEGMENT_RE.captures(segment) else {
            debug!("Skipping unreadable stat segment {:?}", segment);
            continue;
        };
        let label = &caps[2];
        let Ok(value) = caps[1].parse::<u32>() else {
            debug!("Skipping out-of-range stat value in {:?}", segment);
            continue;
        };
        if !vocabulary.accepts(label) {
            debug!("Skipping unknown stat label {:?}", label);
            continue;
        }
        spread.insert(label.to_string(), value);
    }

    spread
}
