// Command-line interface
pub mod commands;

use crate::matcher::Normalization;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ingredient-match")]
#[command(about = "Find recipes that contain every ingredient you have", long_about = None)]
pub struct Cli {
    /// Runs the demonstration when no command is given
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search the built-in recipes for "tomato, pasta, garlic"
    Demo,

    /// Find recipes containing every listed ingredient
    Search {
        /// Delimited ingredient list, e.g. "tomato, garlic"
        query: String,

        /// YAML recipe catalog to search instead of the built-in recipes
        #[arg(short, long)]
        recipes: Option<PathBuf>,

        /// How recipe ingredients are normalized (literal or symmetric)
        #[arg(short, long)]
        normalization: Option<Normalization>,

        /// Single character separating ingredients in the query
        #[arg(short, long)]
        delimiter: Option<String>,

        /// Print matches as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single recipe
    Show {
        /// Recipe ID
        id: i64,

        /// YAML recipe catalog
        #[arg(short, long)]
        recipes: Option<PathBuf>,

        /// Print the recipe as JSON
        #[arg(long)]
        json: bool,
    },

    /// List recipes, optionally those using an ingredient
    List {
        /// Keep recipes with an ingredient containing this text
        #[arg(short, long)]
        ingredient: Option<String>,

        /// YAML recipe catalog
        #[arg(short, long)]
        recipes: Option<PathBuf>,
    },

    /// Validate a recipe catalog file
    Validate {
        /// Path to the YAML catalog
        path: PathBuf,
    },
}
