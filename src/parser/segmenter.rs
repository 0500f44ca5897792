//! Splits a raw paste into candidate member blocks.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

// One or more blank (or whitespace-only) lines between blocks.
static BLOCK_SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("valid block separator regex"));

/// Markers that show a block describes a member at all.
const MEMBER_MARKERS: [&str; 3] = ["@", "Ability:", "Nature"];

/// A stray control line such as `.RS` or `.s`: one short `.`-leading token.
pub fn is_bare_command(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with('.')
        && !trimmed.contains(char::is_whitespace)
        && trimmed.chars().count() <= 4
}

/// Split a paste into the blocks that look like team members, in input order.
///
/// Each returned block keeps its internal line structure.
pub fn split_blocks(text: &str) -> Vec<String> {
    let cleaned = text
        .lines()
        .filter(|line| !is_bare_command(line))
        .collect::<Vec<_>>()
        .join("\n");

    BLOCK_SEPARATOR_RE
        .split(cleaned.trim())
        .filter(|block| is_member_block(block))
        .map(str::to_string)
        .collect()
}

fn is_member_block(block: &str) -> bool {
    let first_line = block.trim().lines().next().unwrap_or("").trim();
    if first_line.starts_with('.') {
        debug!("Dropping command block {:?}", first_line);
        return false;
    }
    if !MEMBER_MARKERS.iter().any(|marker| block.contains(marker)) {
        if !block.trim().is_empty() {
            debug!("Dropping block without member markers {:?}", first_line);
        }
        return false;
    }
    true
}
