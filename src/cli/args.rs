use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "doctrans")]
#[command(about = "Document translation CLI for the doctrans service")]
#[command(version)]
pub struct Args {
    /// Base URL of the translation service API
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Upload a PDF and translate it, monitoring progress until done
    Translate {
        /// The PDF file to translate
        file: PathBuf,

        /// Target language code (ISO 639-1, e.g., es, ja, de)
        #[arg(short = 't', long = "to")]
        to: Option<String>,

        /// Source language code (omit for auto-detect)
        #[arg(short = 'f', long = "from")]
        from: Option<String>,
    },
    /// Show the current status of a job
    Status {
        /// Job identifier returned at creation
        job_id: String,

        /// Keep polling until the job reaches a terminal status
        #[arg(short = 'w', long)]
        watch: bool,
    },
    /// Request cancellation of a running job
    Cancel {
        /// Job identifier returned at creation
        job_id: String,
    },
    /// List supported language codes
    Languages,
}
