//! Turns one member block into a `MemberRecord`.

use super::stats::parse_stat_list;
use crate::config::StatVocabulary;
use schema::MemberRecord;
use tracing::debug;

/// Command prefixes that may lead a header line and are stripped from it.
const HEADER_COMMAND_PREFIXES: [&str; 3] = [".rs ", ".rv ", ".s "];

/// What a single body line of a member block contributes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Ability(&'a str),
    Evs(&'a str),
    Ivs(&'a str),
    TeraType(&'a str),
    Nature(&'a str),
    Move(&'a str),
    Other,
}

/// Classify a trimmed body line. Rules are tried in order; first match wins.
pub fn classify_line(line: &str) -> LineKind<'_> {
    if line.starts_with("Ability:") {
        LineKind::Ability(after_colon(line))
    } else if line.starts_with("EVs:") {
        LineKind::Evs(line)
    } else if line.starts_with("IVs:") {
        LineKind::Ivs(line)
    } else if line.starts_with("Tera Type:") {
        LineKind::TeraType(after_colon(line))
    } else if let Some(nature) = line.strip_suffix("Nature") {
        LineKind::Nature(nature.trim())
    } else if let Some(move_name) = line.strip_prefix("- ") {
        LineKind::Move(move_name.trim())
    } else {
        LineKind::Other
    }
}

fn after_colon(line: &str) -> &str {
    line.split_once(':').map_or("", |(_, rest)| rest.trim())
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Strip a recognised command prefix from a header line.
///
/// Returns `None` when the header starts with `.` but is not one of the
/// known prefixes; such a block is not member data.
pub fn strip_header_command(header: &str) -> Option<&str> {
    if !header.starts_with('.') {
        return Some(header);
    }
    HEADER_COMMAND_PREFIXES.iter().find_map(|prefix| {
        header
            .get(..prefix.len())
            .filter(|head| head.eq_ignore_ascii_case(prefix))
            .map(|_| header[prefix.len()..].trim_start())
    })
}

/// Split a header into `(nickname, species, item)`.
///
/// `Nick (Species) @ Item`, `Species @ Item`, `Nick (Species)` and `Species`
/// are all accepted. Empty parts come back as `None` or an empty species.
pub fn split_header(header: &str) -> (Option<String>, String, Option<String>) {
    let (left, item) = match header.split_once('@') {
        Some((left, item)) => (left.trim(), non_empty(item.trim())),
        None => (header.trim(), None),
    };

    match left.find('(') {
        Some(open) if left.ends_with(')') => {
            let nickname = non_empty(left[..open].trim());
            let species = left[open + 1..left.len() - 1].trim().to_string();
            (nickname, species, item)
        }
        _ => (None, left.to_string(), item),
    }
}

/// Extract a member from one block.
///
/// Returns `None` if the block has no usable header. The record may still
/// have an empty species; deciding whether to keep it is up to the caller.
pub fn extract_member(block: &str, vocabulary: StatVocabulary) -> Option<MemberRecord> {
    let mut lines = block.lines().map(str::trim).filter(|line| !line.is_empty());
    let raw_header = lines.next()?;
    let Some(header) = strip_header_command(raw_header) else {
        debug!("Rejecting block with unknown header command {:?}", raw_header);
        return None;
    };

    let (nickname, species, item) = split_header(header);
    let mut record = MemberRecord {
        nickname,
        species,
        item,
        ..MemberRecord::default()
    };

    for line in lines {
        match classify_line(line) {
            LineKind::Ability(ability) => record.ability = non_empty(ability),
            LineKind::Evs(line) => record.evs = parse_stat_list(line, vocabulary),
            LineKind::Ivs(line) => record.ivs = parse_stat_list(line, vocabulary),
            LineKind::TeraType(tera_type) => record.tera_type = non_empty(tera_type),
            LineKind::Nature(nature) => record.nature = non_empty(nature),
            LineKind::Move(move_name) => record.moves.push(move_name.to_string()),
            LineKind::Other => {}
        }
    }

    Some(record)
}
