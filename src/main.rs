//! palate CLI: cuisine rule mining and song recommendations.

use clap::{Parser, Subcommand};
use palate::config::PalateConfig;
use palate::cuisine::{RecipeBook, RecipeStats};
use palate::songs::{
    explore_columns, read_json_lines, write_recommendations, SongCatalog, SongRecommender,
};
use palate::{report, session, PalateError, Result};
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "palate")]
#[command(about = "Ingredient association rules and content-based song recommendations")]
#[command(version)]
struct Cli {
    /// Log level when RUST_LOG is unset (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Explore recipes and mine ingredient rules per cuisine
    Cuisine {
        /// Recipes file (JSON array of {cuisine, ingredients})
        recipes: PathBuf,

        /// Fixed support threshold (default: one recipe of the cuisine)
        #[arg(long)]
        min_support: Option<f64>,

        /// Minimum rule confidence
        #[arg(long)]
        min_confidence: Option<f64>,

        /// Minimum rule lift
        #[arg(long)]
        min_lift: Option<f64>,

        /// Longest ingredient combination to explore
        #[arg(long)]
        max_length: Option<usize>,

        /// Skip the statistics report
        #[arg(long)]
        no_stats: bool,
    },

    /// Explore song metadata and recommend similar songs
    Songs {
        /// Metadata file (JSON lines, optionally gzipped)
        metadata: PathBuf,

        /// CSV file for the first song's recommendations
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Recommendations per query
        #[arg(short = 'k', long)]
        top_k: Option<usize>,

        /// Skip the column exploration table
        #[arg(long)]
        no_summary: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.log_level);
    if !io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => PalateConfig::load(path)?,
        None => PalateConfig::default(),
    };

    match cli.command {
        Commands::Cuisine {
            recipes,
            min_support,
            min_confidence,
            min_lift,
            max_length,
            no_stats,
        } => {
            let mining = &mut config.mining;
            if min_support.is_some() {
                mining.min_support = min_support;
            }
            if let Some(confidence) = min_confidence {
                mining.min_confidence = confidence;
            }
            if let Some(lift) = min_lift {
                mining.min_lift = lift;
            }
            if max_length.is_some() {
                mining.max_length = max_length;
            }
            config.validate()?;
            cmd_cuisine(&recipes, &config, no_stats)
        }
        Commands::Songs {
            metadata,
            output,
            top_k,
            no_summary,
        } => {
            if let Some(output) = output {
                config.recommender.output = output;
            }
            if let Some(k) = top_k {
                config.recommender.top_k = k;
            }
            config.validate()?;
            cmd_songs(&metadata, &config, no_summary)
        }
    }
}

fn cmd_cuisine(path: &Path, config: &PalateConfig, no_stats: bool) -> Result<()> {
    let book = RecipeBook::load(path)?;
    let stdout = io::stdout();

    if !no_stats {
        let stats = RecipeStats::compute(&book, config.mining.top_ingredients);
        report::write_recipe_stats(&mut stdout.lock(), &stats)?;
        println!();
    }

    session::run_cuisine_session(&book, &config.mining, io::stdin().lock(), stdout.lock())
}

fn cmd_songs(path: &Path, config: &PalateConfig, no_summary: bool) -> Result<()> {
    let rows = read_json_lines(path)?;
    let stdout = io::stdout();

    if !no_summary {
        report::write_column_summary(&mut stdout.lock(), &explore_columns(&rows))?;
    }

    let catalog = SongCatalog::from_rows(&rows, path)?;
    drop(rows);
    let recommender = SongRecommender::fit(&catalog)?;

    let top_k = config.recommender.top_k;
    let first = catalog
        .first_title()
        .ok_or_else(|| PalateError::EmptyInput("no song has a title, brand and asin".into()))?;
    let recommendations = recommender.recommend(first, top_k).unwrap_or_default();
    write_recommendations(&config.recommender.output, &recommendations)?;
    info!(first, "startup recommendations written");

    report::write_song_overview(
        &mut stdout.lock(),
        catalog.len(),
        first,
        &recommendations,
        &config.recommender.output,
    )?;
    println!();

    session::run_song_session(&recommender, top_k, io::stdin().lock(), stdout.lock())
}
