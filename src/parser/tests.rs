use super::*;
use crate::config::StatVocabulary;
use pretty_assertions::assert_eq;
use schema::StatSpread;

const SAMPLE_TEAM: &str = "\
.RS
Sparky (Pikachu) @ Light Ball
Ability: Static
Tera Type: Electric
EVs: 252 SpA / 4 SpD / 252 Spe
Timid Nature
- Thunderbolt
- Volt Tackle

Nidoran♀ @ Eviolite
Ability: Poison Point
Bold Nature
IVs: 0 Atk

.rs Veil Team

Mr. Mime @ Focus Sash
Ability: Filter
- Psychic
- Barrier
";

fn spread(entries: &[(&str, u32)]) -> StatSpread {
    entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

#[test]
fn test_end_to_end_single_member() {
    let text = "Pikachu @ Light Ball\n\
                Ability: Static\n\
                EVs: 252 SpA / 4 SpD / 252 Spe\n\
                Timid Nature\n\
                - Thunderbolt\n\
                - Volt Tackle";
    let team = parse_team(text).unwrap();
    assert_eq!(team.len(), 1);

    let mut expected = MemberRecord::new("Pikachu");
    expected.item = Some("Light Ball".to_string());
    expected.ability = Some("Static".to_string());
    expected.nature = Some("Timid".to_string());
    expected.evs = spread(&[("SpA", 252), ("SpD", 4), ("Spe", 252)]);
    expected.moves = vec!["Thunderbolt".to_string(), "Volt Tackle".to_string()];

    assert_eq!(team[0], expected);
    assert_eq!(team[0].sprite_key(), "pikachu");
}

#[test]
fn test_members_keep_paste_order() {
    let team = parse_team(SAMPLE_TEAM).unwrap();
    let species: Vec<&str> = team.iter().map(|m| m.species.as_str()).collect();
    assert_eq!(species, vec!["Pikachu", "Nidoran♀", "Mr. Mime"]);

    let sprites: Vec<String> = team.iter().map(MemberRecord::sprite_key).collect();
    assert_eq!(sprites, vec!["pikachu", "nidoran-f", "mr-mime"]);

    assert_eq!(team[0].nickname.as_deref(), Some("Sparky"));
    assert_eq!(team[1].ivs, spread(&[("Atk", 0)]));
    assert!(team[1].moves.is_empty());
}

#[test]
fn test_command_header_block_yields_nothing() {
    let text = ".RS Team 1\nPikachu @ Light Ball\nAbility: Static";
    assert_eq!(TeamParser::default().members(text), Vec::<MemberRecord>::new());
    assert_eq!(parse_team(text), Err(ParseError::NoMembers));
}

#[test]
fn test_empty_input_is_no_members() {
    assert_eq!(parse_team(""), Err(ParseError::NoMembers));
    assert_eq!(parse_team(" \n\n\t"), Err(ParseError::NoMembers));
    assert!(TeamParser::default().members("").is_empty());
}

#[test]
fn test_non_utf8_is_invalid_input() {
    let result = parse_team_bytes(&[0x50, 0xff, 0xfe]);
    assert!(matches!(result, Err(ParseError::InvalidInput(_))));
}

#[test]
fn test_bytes_entry_point_parses_text() {
    let team = parse_team_bytes("Eevee @ Leftovers".as_bytes()).unwrap();
    assert_eq!(team[0].species, "Eevee");
}

#[test]
fn test_member_without_species_is_dropped() {
    let text = "@ Leftovers\n- Tackle\n\nEevee @ Leftovers";
    let team = parse_team(text).unwrap();
    assert_eq!(team.len(), 1);
    assert_eq!(team[0].species, "Eevee");
}

#[test]
fn test_require_moves_policy() {
    let parser = TeamParser::new(ParserConfig {
        member_policy: MemberPolicy::RequireMoves,
        ..ParserConfig::default()
    });
    let team = parser.parse(SAMPLE_TEAM).unwrap();
    let species: Vec<&str> = team.iter().map(|m| m.species.as_str()).collect();
    assert_eq!(species, vec!["Pikachu", "Mr. Mime"]);

    assert_eq!(
        parser.parse("Snorlax @ Leftovers\nAbility: Thick Fat"),
        Err(ParseError::NoMembers)
    );
}

#[test]
fn test_standard_stat_vocabulary() {
    let parser = TeamParser::new(ParserConfig {
        stat_vocabulary: StatVocabulary::Standard,
        ..ParserConfig::default()
    });
    let team = parser
        .parse("Eevee @ Leftovers\nEVs: 252 HP / 4 Sp. Atk / 252 Spe")
        .unwrap();
    assert_eq!(team[0].evs, spread(&[("HP", 252), ("Spe", 252)]));
}

#[test]
fn test_team_json_round_trip() {
    let team = parse_team(SAMPLE_TEAM).unwrap();
    let text = serde_json::to_string(&team).unwrap();
    let back: Team = serde_json::from_str(&text).unwrap();
    assert_eq!(back, team);
    assert_eq!(back[2].moves, vec!["Psychic", "Barrier"]);
    assert_eq!(back[1].item.as_deref(), Some("Eviolite"));
    assert_eq!(back[2].nickname, None);
}

#[test]
fn test_paste_notation_reparses_to_same_team() {
    let team = parse_team(SAMPLE_TEAM).unwrap();
    let normalised = team
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n\n");
    assert_eq!(parse_team(&normalised).unwrap(), team);
}
