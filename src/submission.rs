use crate::errors::{SubmissionError, SubmissionResult};
use crate::parser::TeamParser;
use crate::store::StoredPaste;
use chrono::Utc;
use schema::Team;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TITLE: &str = "Untitled team";
pub const DEFAULT_AUTHOR: &str = "Anonymous";

/// A paste as submitted through the web form or the JSON API.
///
/// Every field may be missing; blanks are filled in by [`Submission::prepare`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Submission {
    pub title: String,
    pub author: String,
    pub notes: String,
    pub paste: String,
    pub competitive_mode: bool,
}

/// A submission whose paste parsed into at least one member
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedPaste {
    pub title: String,
    pub author: String,
    pub notes: Option<String>,
    pub raw_paste: String,
    pub team: Team,
    pub competitive_mode: bool,
}

impl Submission {
    pub fn new(paste: impl Into<String>) -> Self {
        Self {
            paste: paste.into(),
            ..Self::default()
        }
    }

    /// Trim and default the metadata, then parse the paste.
    pub fn prepare(&self, parser: &TeamParser) -> SubmissionResult<PreparedPaste> {
        let raw_paste = self.paste.trim();
        if raw_paste.is_empty() {
            return Err(SubmissionError::EmptyPaste);
        }
        let team = parser.parse(raw_paste)?;

        Ok(PreparedPaste {
            title: or_default(&self.title, DEFAULT_TITLE),
            author: or_default(&self.author, DEFAULT_AUTHOR),
            notes: Some(self.notes.trim())
                .filter(|notes| !notes.is_empty())
                .map(str::to_string),
            raw_paste: raw_paste.to_string(),
            team,
            competitive_mode: self.competitive_mode,
        })
    }
}

fn or_default(value: &str, default: &str) -> String {
    match value.trim() {
        "" => default.to_string(),
        trimmed => trimmed.to_string(),
    }
}

impl PreparedPaste {
    /// Encode the team for the storage collaborator, stamped with the current time.
    pub fn to_stored(&self) -> SubmissionResult<StoredPaste> {
        let team_json = serde_json::to_string(&self.team).map_err(SubmissionError::Encode)?;
        Ok(StoredPaste {
            title: self.title.clone(),
            author: self.author.clone(),
            notes: self.notes.clone(),
            raw_paste: self.raw_paste.clone(),
            team_json,
            competitive_mode: self.competitive_mode,
            created_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ParseError;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_fill_blank_metadata() {
        let submission = Submission {
            title: "   ".to_string(),
            notes: " \n".to_string(),
            ..Submission::new("  Pikachu @ Light Ball\n- Thunderbolt\n\n")
        };
        let prepared = submission.prepare(&TeamParser::default()).unwrap();

        assert_eq!(prepared.title, DEFAULT_TITLE);
        assert_eq!(prepared.author, DEFAULT_AUTHOR);
        assert_eq!(prepared.notes, None);
        assert_eq!(prepared.raw_paste, "Pikachu @ Light Ball\n- Thunderbolt");
        assert_eq!(prepared.team.len(), 1);
        assert!(!prepared.competitive_mode);
    }

    #[test]
    fn test_metadata_is_trimmed() {
        let submission = Submission {
            title: " Cool Team ".to_string(),
            author: "BotUser".to_string(),
            notes: " Uploaded via API ".to_string(),
            competitive_mode: true,
            ..Submission::new("Eevee @ Leftovers")
        };
        let prepared = submission.prepare(&TeamParser::default()).unwrap();
        assert_eq!(prepared.title, "Cool Team");
        assert_eq!(prepared.author, "BotUser");
        assert_eq!(prepared.notes.as_deref(), Some("Uploaded via API"));
        assert!(prepared.competitive_mode);
    }

    #[test]
    fn test_empty_paste_is_rejected() {
        let result = Submission::new(" \n ").prepare(&TeamParser::default());
        assert!(matches!(result, Err(SubmissionError::EmptyPaste)));
    }

    #[test]
    fn test_paste_without_members_is_rejected() {
        let result = Submission::new("just some words").prepare(&TeamParser::default());
        assert!(matches!(
            result,
            Err(SubmissionError::Parse(ParseError::NoMembers))
        ));
    }

    #[test]
    fn test_api_payload() {
        let payload = r#"{
            "title": "Cool Team",
            "author": "BotUser",
            "paste": "Pikachu @ Light Ball\nAbility: Static\n- Thunderbolt\n- Volt Tackle\n",
            "competitive_mode": true
        }"#;
        let submission: Submission = serde_json::from_str(payload).unwrap();
        assert_eq!(submission.notes, "");

        let stored = submission
            .prepare(&TeamParser::default())
            .unwrap()
            .to_stored()
            .unwrap();
        let team = stored.team().unwrap();
        assert_eq!(team[0].moves, vec!["Thunderbolt", "Volt Tackle"]);
        assert_eq!(team[0].ability.as_deref(), Some("Static"));
    }
}
