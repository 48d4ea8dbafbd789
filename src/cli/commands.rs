use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// `scriptsmith` - restaurant reviews written in the voice of a reference corpus.
#[derive(Parser, Debug)]
#[command(name = "scriptsmith")]
#[command(version)]
#[command(
    about = "Extract a writing style from reference scripts and write new reviews in it.",
    long_about = None
)]
pub struct Cli {
    /// Config file (default: ~/.scriptsmith/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Reference script CSV, overrides `corpus_path` from the config
    #[arg(long, global = true, value_name = "PATH")]
    pub corpus: Option<PathBuf>,

    /// Debug logging, including rendered prompts
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract the style profile, then write a review for one restaurant
    Generate {
        #[command(flatten)]
        fields: RequestFields,

        /// Never prompt; omitted fields are left empty
        #[arg(long)]
        no_input: bool,

        /// Print the profile and review as one JSON object
        #[arg(long)]
        json: bool,
    },

    /// Run style extraction only and print the profile
    Style,

    /// Show the loaded reference corpus
    Corpus {
        /// Also print the rendered style extraction prompt
        #[arg(long)]
        prompt: bool,
    },
}

/// Review fields accepted on the command line.
#[derive(Args, Debug, Default, Clone)]
pub struct RequestFields {
    /// Restaurant name
    #[arg(long)]
    pub restaurant: Option<String>,

    /// Cuisine type
    #[arg(long)]
    pub cuisine: Option<String>,

    /// Location
    #[arg(long)]
    pub location: Option<String>,

    /// Special feature (rooftop, live music, ...)
    #[arg(long)]
    pub feature: Option<String>,

    /// Dishes eaten
    #[arg(long)]
    pub dishes: Option<String>,

    /// Additional notes for the writer
    #[arg(long)]
    pub notes: Option<String>,
}
