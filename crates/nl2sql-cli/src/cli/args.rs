use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "nl2sql",
    version,
    about = "Generate SQL from natural-language questions and score it against references"
)]
pub struct Cli {
    /// Defaults to `demo` when omitted
    #[command(subcommand)]
    pub cmd: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the built-in three-question demonstration
    Demo(GenerateArgs),
    /// Evaluate the questions of a suite file
    Run(RunArgs),
    /// Write a sample suite file
    Init(InitArgs),
    Version,
}

#[derive(clap::Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Inference endpoint (overrides NL2SQL_API_URL)
    #[arg(long)]
    pub api_url: Option<String>,

    /// Retries while the model is loading (overrides NL2SQL_MAX_RETRIES)
    #[arg(long)]
    pub max_retries: Option<u32>,

    /// Scoring metric: loose|exact
    #[arg(long, default_value = "loose")]
    pub metric: String,

    /// Print the run as JSON instead of the text report
    #[arg(long)]
    pub json: bool,
}

impl Default for GenerateArgs {
    fn default() -> Self {
        Self {
            api_url: None,
            max_retries: None,
            metric: "loose".to_string(),
            json: false,
        }
    }
}

#[derive(clap::Args, Debug, Clone)]
pub struct RunArgs {
    #[arg(long, default_value = "nl2sql.yaml")]
    pub suite: PathBuf,

    #[command(flatten)]
    pub generate: GenerateArgs,
}

#[derive(clap::Args, Debug, Clone)]
pub struct InitArgs {
    #[arg(long, default_value = "nl2sql.yaml")]
    pub suite: PathBuf,
}
