//! Team paste parser
//!
//! Converts a Showdown-style team paste into an ordered list of
//! [`MemberRecord`]s. Parsing runs in two stages: the segmenter cuts the
//! paste into candidate member blocks, and the extractor reads each block's
//! header and body lines. Anything unreadable below the block level is
//! skipped rather than reported.
//!
//! # Empty results
//!
//! [`TeamParser::members`] returns whatever survived, possibly nothing.
//! [`TeamParser::parse`] and [`parse_team`] treat an empty result as
//! [`ParseError::NoMembers`], which callers show as "no Pokémon found".
//! Non-text input is the only internal fault ([`ParseError::InvalidInput`]).

pub mod extractor;
pub mod segmenter;
pub mod stats;

#[cfg(test)]
mod tests;

use crate::config::{MemberPolicy, ParserConfig};
use crate::errors::{ParseError, ParseResult};
use schema::{MemberRecord, Team};
use tracing::{debug, info};

pub use extractor::extract_member;
pub use segmenter::split_blocks;
pub use stats::parse_stat_list;

#[derive(Debug, Clone, Copy, Default)]
pub struct TeamParser {
    config: ParserConfig,
}

impl TeamParser {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Whether a member passes the configured validity policy.
    pub fn is_valid(&self, member: &MemberRecord) -> bool {
        if member.species.is_empty() {
            return false;
        }
        match self.config.member_policy {
            MemberPolicy::SpeciesOnly => true,
            MemberPolicy::RequireMoves => !member.moves.is_empty(),
        }
    }

    /// All valid members in the paste, in order. May be empty.
    pub fn members(&self, text: &str) -> Team {
        split_blocks(text)
            .iter()
            .filter_map(|block| extract_member(block, self.config.stat_vocabulary))
            .filter(|member| {
                let valid = self.is_valid(member);
                if !valid {
                    debug!("Discarding invalid member {:?}", member.species);
                }
                valid
            })
            .collect()
    }

    /// Parse a paste, failing with `NoMembers` if nothing valid was found.
    pub fn parse(&self, text: &str) -> ParseResult<Team> {
        let team = self.members(text);
        info!("Parsed {} team member(s) from {} byte paste", team.len(), text.len());
        if team.is_empty() {
            return Err(ParseError::NoMembers);
        }
        Ok(team)
    }

    /// Parse raw bytes, rejecting anything that is not UTF-8 text.
    pub fn parse_bytes(&self, bytes: &[u8]) -> ParseResult<Team> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| ParseError::InvalidInput(format!("paste is not UTF-8 text ({})", e)))?;
        self.parse(text)
    }
}

/// Parse a team paste with the default configuration.
pub fn parse_team(text: &str) -> ParseResult<Team> {
    TeamParser::default().parse(text)
}

/// Parse a team paste from raw bytes with the default configuration.
pub fn parse_team_bytes(bytes: &[u8]) -> ParseResult<Team> {
    TeamParser::default().parse_bytes(bytes)
}
