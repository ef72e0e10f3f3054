use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use uma_affinity::affinity::types::CharacterId;
use uma_affinity::affinity::{AncestryTree, ParentSlot};
use uma_affinity::{cli, config};

#[derive(Parser)]
#[command(
    name = "uma-affinity",
    version,
    about = "Breeding affinity calculator based on shared relationship groups"
)]
struct Cli {
    /// Config file (defaults to ~/.uma-affinity/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Relationship data JSON, overriding the configured path
    #[arg(long, global = true)]
    data: Option<String>,

    /// Second data region laid over the base data
    #[arg(long, global = true)]
    overlay: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct Lineage {
    /// First parent
    p1: CharacterId,
    /// Second parent
    p2: CharacterId,
    /// Parent 1's first grandparent
    #[arg(long)]
    p1_gp1: Option<CharacterId>,
    /// Parent 1's second grandparent
    #[arg(long)]
    p1_gp2: Option<CharacterId>,
    /// Parent 2's first grandparent
    #[arg(long)]
    p2_gp1: Option<CharacterId>,
    /// Parent 2's second grandparent
    #[arg(long)]
    p2_gp2: Option<CharacterId>,
}

impl Lineage {
    fn slots(&self) -> (ParentSlot, ParentSlot) {
        (
            ParentSlot::new(self.p1, self.p1_gp1, self.p1_gp2),
            ParentSlot::new(self.p2, self.p2_gp1, self.p2_gp2),
        )
    }
}

#[derive(Subcommand)]
enum Command {
    /// Score a trainee against its parents and grandparents
    Score {
        /// The character being trained
        trainee: CharacterId,
        #[command(flatten)]
        lineage: Lineage,
        /// Print the breakdown as JSON
        #[arg(long)]
        json: bool,
    },
    /// Score the groups shared by 2 or 3 characters
    Group {
        #[arg(num_args = 2..=3, required = true)]
        ids: Vec<CharacterId>,
    },
    /// Rank trainees for a parent pair
    Suggest {
        #[command(flatten)]
        lineage: Lineage,
        /// Number of suggestions (defaults to [suggest] limit)
        #[arg(long)]
        limit: Option<usize>,
        #[arg(long)]
        json: bool,
    },
    /// Show one character's relationship groups
    Inspect { id: CharacterId },
    /// Find characters by name
    Search { term: String },
    /// Show relationship data statistics
    Stats {
        #[arg(long)]
        json: bool,
    },
    /// Check the relationship data for gaps
    Doctor,
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let mut config = match &args.config {
        Some(path) => config::AffinityConfig::load_from(path)?,
        None => config::AffinityConfig::load()?,
    };
    if let Some(data) = args.data {
        config.data.path = data;
    }
    if let Some(overlay) = args.overlay {
        config.data.overlay = Some(overlay);
    }

    // Log to stderr so stdout carries only reports.
    let filter = EnvFilter::try_new(&config.logging.log_level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Command::Score {
            trainee,
            lineage,
            json,
        } => {
            let (p1, p2) = lineage.slots();
            cli::score::score(&config, &AncestryTree::new(trainee, p1, p2), json)?;
        }
        Command::Group { ids } => cli::group::group(&config, &ids)?,
        Command::Suggest {
            lineage,
            limit,
            json,
        } => {
            let (p1, p2) = lineage.slots();
            cli::suggest::suggest(&config, &p1, &p2, limit, json)?;
        }
        Command::Inspect { id } => cli::inspect::inspect(&config, id)?,
        Command::Search { term } => cli::search::search(&config, &term)?,
        Command::Stats { json } => cli::stats::stats(&config, json)?,
        Command::Doctor => cli::doctor::doctor(&config)?,
    }

    Ok(())
}
