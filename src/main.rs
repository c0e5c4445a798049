mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// dietplan - Daily meal plans from your profile and history
#[derive(Parser)]
#[command(name = "dietplan")]
#[command(about = "Personalized daily meal plan recommender", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a meal plan for today
    Generate {
        #[command(flatten)]
        profile: cli::generate::ProfileArgs,

        /// Seed for reproducible plans (overrides config file)
        #[arg(long)]
        seed: Option<u64>,

        /// Also write the plan as text to this file
        #[arg(long)]
        export: Option<PathBuf>,

        /// Do not append the plan to the history log
        #[arg(long)]
        no_history: bool,
    },
    /// List previously generated plans
    History {
        /// Only show the most recent entries
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Fit the linear calorie model on the built-in training set
    TrainModel {
        /// Model file to write (defaults to the configured model path)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// List the food catalog
    Catalog,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = dietplan::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    dietplan::observability::init_observability(&config.logging.level)?;

    match cli.command {
        Commands::Generate {
            profile,
            seed,
            export,
            no_history,
        } => cli::generate::generate(config, profile, seed, export, no_history),
        Commands::History { limit } => cli::history::history(config, limit),
        Commands::TrainModel { output } => cli::model::train_model(config, output),
        Commands::Catalog => cli::catalog::catalog(config),
    }
}
