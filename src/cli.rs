use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Find recipes for the ingredients you have on hand", long_about = None)]
pub struct Cli {
    /// Directory where saved recipes are kept (overrides RECIPE_FINDER_DATA_DIR)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Simulated generation latency in milliseconds (overrides RECIPE_FINDER_DELAY_MS)
    #[arg(long, global = true)]
    pub delay_ms: Option<u64>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the ingredient catalog, grouped by category
    Ingredients {
        /// Only show ingredients whose name contains this text
        #[arg(short, long)]
        search: Option<String>,
        /// Load the catalog from a CSV file with id,name,category columns
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
    /// Generate recipes from the given ingredients
    Generate {
        /// An ingredient name; repeat for more
        #[arg(short, long = "ingredient", required = true)]
        ingredients: Vec<String>,
        /// Save every generated recipe
        #[arg(long)]
        save: bool,
        /// Print recipes as JSON
        #[arg(long)]
        json: bool,
    },
    /// List saved recipes
    Saved {
        /// Only show recipes whose title or cuisine contains this text
        #[arg(short, long)]
        search: Option<String>,
        /// Print recipes as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one saved recipe in full
    Show {
        id: String,
    },
    /// Remove a recipe from the saved list
    Remove {
        id: String,
    },
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
