use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kcoder", version)]
#[command(about = "Interactive ffmpeg transcode queue", long_about = None)]
pub struct Cli {
    /// Directory to pick input files from (defaults to current directory)
    #[arg(value_name = "DIRECTORY")]
    pub directory: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print ffmpeg commands on [E]ncode instead of running them
    #[arg(long)]
    pub dry_run: bool,

    /// Don't clear the terminal between screens (overrides config)
    #[arg(long)]
    pub no_clear: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check if ffmpeg is installed
    CheckFfmpeg,

    /// Show the ffmpeg command for one file using default settings
    DryRun {
        /// Input file name
        file: String,

        /// CRF rating
        #[arg(long, default_value_t = 30)]
        crf: u32,
    },

    /// Show config status and location, or create default config if missing
    InitConfig,
}

pub fn parse() -> Cli {
    Cli::parse()
}
