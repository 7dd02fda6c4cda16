use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use doctrans_cli::cli::commands::{cancel, status, translate};
use doctrans_cli::cli::{Args, Command};
use doctrans_cli::language::print_languages;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match args.command {
        Command::Translate { file, to, from } => {
            let options = translate::TranslateOptions {
                file,
                to,
                from,
                api_url: args.api_url,
            };
            translate::run_translate(options).await?;
        }
        Command::Status { job_id, watch } => {
            let options = status::StatusOptions {
                job_id,
                watch,
                api_url: args.api_url,
            };
            status::run_status(options).await?;
        }
        Command::Cancel { job_id } => {
            let options = cancel::CancelOptions {
                job_id,
                api_url: args.api_url,
            };
            cancel::run_cancel(options).await?;
        }
        Command::Languages => {
            print_languages();
        }
    }

    Ok(())
}
