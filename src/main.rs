//! Command-line front end for the team paste parser.
//!
//! ```bash
//! cobblepaste parse team.txt --pretty
//! cobblepaste parse team.txt --format paste
//! cat team.txt | cobblepaste parse --require-moves
//! cobblepaste sprite "Mr. Mime"
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use cobblepaste::{sprite_key, MemberPolicy, ParserConfig, StatVocabulary, Team, TeamParser};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;

#[derive(Parser)]
#[command(name = "cobblepaste")]
#[command(about = "Parse Showdown team pastes into structured JSON")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log parser decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Structured JSON, one object per member
    Json,
    /// Normalised team paste notation
    Paste,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a paste and print the team as JSON
    Parse {
        /// Paste file (reads stdin if omitted)
        file: Option<PathBuf>,

        /// RON parser config
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Drop members that have no moves
        #[arg(long)]
        require_moves: bool,

        /// Only accept HP/Atk/Def/SpA/SpD/Spe stat labels
        #[arg(long)]
        standard_stats: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: OutputFormat,

        /// Indent the JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Print the sprite key for a species name
    Sprite { species: String },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Commands::Parse {
            file,
            config,
            require_moves,
            standard_stats,
            format,
            pretty,
        } => {
            let mut parser_config = config
                .map(ParserConfig::load_or_default)
                .unwrap_or_default();
            if require_moves {
                parser_config.member_policy = MemberPolicy::RequireMoves;
            }
            if standard_stats {
                parser_config.stat_vocabulary = StatVocabulary::Standard;
            }

            match run_parse(file, TeamParser::new(parser_config), format, pretty) {
                Ok(output) => {
                    println!("{}", output);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Could not parse your team: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Commands::Sprite { species } => {
            println!("{}", sprite_key(&species));
            ExitCode::SUCCESS
        }
    }
}

fn run_parse(
    file: Option<PathBuf>,
    parser: TeamParser,
    format: OutputFormat,
    pretty: bool,
) -> Result<String, Box<dyn std::error::Error>> {
    let bytes = match file {
        Some(path) => fs::read(path)?,
        None => {
            let mut buffer = Vec::new();
            io::stdin().read_to_end(&mut buffer)?;
            buffer
        }
    };

    let team = parser.parse_bytes(&bytes)?;
    let output = match format {
        OutputFormat::Json if pretty => serde_json::to_string_pretty(&team)?,
        OutputFormat::Json => serde_json::to_string(&team)?,
        OutputFormat::Paste => format_paste(&team),
    };
    Ok(output)
}

fn format_paste(team: &Team) -> String {
    team.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n\n")
}
