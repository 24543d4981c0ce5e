use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crib_advisor::commands::{self, OutputOptions};
use crib_advisor::config::{AdvisorConfig, OutputFormat};
use crib_advisor::logging::init_logging;
use crib_core::discard::CribOwner;

/// Cribbage hand scorer and discard advisor.
#[derive(Debug, Parser)]
#[command(
    name = "crib-advisor",
    author,
    version,
    about = "Score cribbage hands and pick the best two cards to throw"
)]
struct Cli {
    /// Path to an optional YAML configuration file.
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Print JSON instead of text (overrides output.format).
    #[arg(long, global = true)]
    json: bool,

    /// Show the candidates kept by every pruning stage.
    #[arg(long, global = true)]
    explain: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Recommend which two of six dealt cards to throw to the crib.
    Discard {
        /// Six cards such as 5/H 10/S J/D.
        #[arg(value_name = "CARD", required = true)]
        cards: Vec<String>,

        /// Whose crib the discards go to.
        #[arg(long, value_enum, default_value_t = CribArg::Mine)]
        crib: CribArg,
    },
    /// Score four cards, or five with the last one as the cut.
    Score {
        #[arg(value_name = "CARD", required = true)]
        cards: Vec<String>,

        /// Cut card to score alongside four hand cards.
        #[arg(long, value_name = "CARD")]
        cut: Option<String>,
    },
    /// Deal six cards from a shuffled deck and recommend a discard.
    Deal {
        /// Shuffle seed; a random one is drawn and printed when omitted.
        #[arg(long, value_name = "SEED")]
        seed: Option<u64>,

        #[arg(long, value_enum, default_value_t = CribArg::Mine)]
        crib: CribArg,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum CribArg {
    Mine,
    Theirs,
}

impl From<CribArg> for CribOwner {
    fn from(arg: CribArg) -> Self {
        CribOwner::from_is_mine(matches!(arg, CribArg::Mine))
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = match cli.config.as_ref() {
        Some(path) => AdvisorConfig::from_path(path)?,
        None => AdvisorConfig::default(),
    };

    let output = OutputOptions {
        format: if cli.json {
            OutputFormat::Json
        } else {
            config.output.format
        },
        explain: cli.explain || config.output.explain,
    };

    let _logging_guard = init_logging(&config.logging)?;

    let rendered = match cli.command {
        Command::Discard { cards, crib } => commands::discard(&cards, crib.into(), output)?,
        Command::Score { cards, cut } => commands::score(&cards, cut.as_deref(), output)?,
        Command::Deal { seed, crib } => {
            let seed = seed.unwrap_or_else(rand::random);
            commands::deal(seed, crib.into(), output)?
        }
    };

    print!("{rendered}");
    if !rendered.ends_with('\n') {
        println!();
    }
    Ok(())
}
