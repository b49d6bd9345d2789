mod app;
mod commands;
mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use runku_lib::{Familiarity, StudyMode};

#[derive(Parser)]
#[command(name = "runku-cli", about = "Vocabulary spaced repetition CLI", version)]
struct Cli {
    /// Directory holding learning data (overrides config and RUNKU_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Config file (default: platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum ModeArg {
    Due,
    New,
    All,
}

impl From<ModeArg> for StudyMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Due => StudyMode::Due,
            ModeArg::New => StudyMode::New,
            ModeArg::All => StudyMode::All,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Rate how well you recalled a word and schedule its next review
    Rate {
        /// English headword
        word: String,
        /// 0-4 or unknown, hard, good, easy, perfect
        #[arg(value_parser = parse_rating)]
        rating: Familiarity,
    },

    /// List words due for review
    Due,

    /// Show mastery bands and recent activity
    Stats {
        /// Word list used to count words never studied
        #[arg(long)]
        vocabulary: Option<PathBuf>,
    },

    /// Show the interval each rating would give a word
    Preview {
        /// English headword
        word: String,
    },

    /// List words to study from the word list
    Study {
        #[arg(long, value_enum, default_value = "due")]
        mode: ModeArg,
        /// Word list (defaults to `vocabulary_path` in config)
        #[arg(long)]
        vocabulary: Option<PathBuf>,
        /// Maximum words to list
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Record a speaking practice session
    Practice,

    /// Export all learning data to a JSON file
    Export {
        /// Output path (default: runku-backup-YYYY-MM-DD.json)
        path: Option<PathBuf>,
    },

    /// Import learning data from a JSON backup
    Import {
        path: PathBuf,
    },

    /// Delete all learning data
    Clear {
        /// Confirm deletion
        #[arg(long)]
        yes: bool,
    },
}

/// Accept a rating as its number or its name
fn parse_rating(value: &str) -> Result<Familiarity, String> {
    let by_number = value.parse::<i32>().ok().and_then(Familiarity::from_value);
    let by_name = Familiarity::ALL
        .into_iter()
        .find(|level| level.label().eq_ignore_ascii_case(value));

    by_number.or(by_name).ok_or_else(|| {
        format!(
            "invalid rating '{}': expected 0-4 or one of unknown, hard, good, easy, perfect",
            value
        )
    })
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let use_color = !cli.no_color && atty_check();
    let app = app::App::new(cli.data_dir.as_deref(), cli.config.as_deref())?;

    match cli.command {
        Command::Rate { word, rating } => {
            commands::rate::run(&app, &word, rating, &cli.format, use_color)?;
        }
        Command::Due => {
            commands::due::run(&app, &cli.format, use_color)?;
        }
        Command::Stats { vocabulary } => {
            commands::stats::run(&app, vocabulary.as_deref(), &cli.format, use_color)?;
        }
        Command::Preview { word } => {
            commands::preview::run(&app, &word, &cli.format, use_color)?;
        }
        Command::Study { mode, vocabulary, limit } => {
            commands::study::run(&app, mode.into(), vocabulary.as_deref(), limit, &cli.format, use_color)?;
        }
        Command::Practice => {
            commands::practice::run(&app, &cli.format)?;
        }
        Command::Export { path } => {
            commands::backup::run_export(&app, path, &cli.format)?;
        }
        Command::Import { path } => {
            commands::backup::run_import(&app, &path, &cli.format)?;
        }
        Command::Clear { yes } => {
            commands::backup::run_clear(&app, yes)?;
        }
    }

    Ok(())
}

/// Check if stdout is a terminal (for color support)
fn atty_check() -> bool {
    use std::io::IsTerminal;
    std::io::stdout().is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rating() {
        assert_eq!(parse_rating("2"), Ok(Familiarity::Good));
        assert_eq!(parse_rating("Perfect"), Ok(Familiarity::Perfect));
        assert_eq!(parse_rating("hard"), Ok(Familiarity::Hard));
        assert!(parse_rating("5").is_err());
        assert!(parse_rating("meh").is_err());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
