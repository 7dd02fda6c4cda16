use anyhow::{Result, bail};
use std::sync::Arc;

use crate::api::{Job, JobApi, JobStatus, TranslationApi};
use crate::config::{ConfigManager, resolve_api_url};
use crate::poller::Poller;
use crate::ui::{JobProgressBar, Style};

pub struct StatusOptions {
    pub job_id: String,
    pub watch: bool,
    pub api_url: Option<String>,
}

pub async fn run_status(options: StatusOptions) -> Result<()> {
    let config = ConfigManager::new()?.load().unwrap_or_default();
    let api = Arc::new(TranslationApi::new(resolve_api_url(
        options.api_url.as_deref(),
        &config,
    )));

    if options.watch {
        watch_job(api, &options.job_id).await
    } else {
        let job = api.get_job(&options.job_id).await?;
        print_job(&job);
        Ok(())
    }
}

/// Polls the job until it reaches a terminal status, rendering progress.
/// Ctrl+C simply exits; the stop handle is for embedders, the terminal
/// user just kills the process.
async fn watch_job(api: Arc<TranslationApi>, job_id: &str) -> Result<()> {
    let poller = Poller::new(api, job_id);

    let bar = JobProgressBar::new();
    let last = poller.run(|job| bar.update(job)).await;
    bar.finish();

    match last {
        Some(job) => {
            print_job(&job);
            Ok(())
        }
        // run() only returns None when stopped externally; watch never does.
        None => bail!("polling stopped before the job finished"),
    }
}

fn print_job(job: &Job) {
    println!("{}", Style::header(format!("Job {}", job.id)));
    println!("  {} {}", Style::label("file:    "), Style::value(&job.filename));
    println!(
        "  {} {}",
        Style::label("language:"),
        Style::code(format!(
            "{} -> {}",
            job.source_language.as_deref().unwrap_or("auto"),
            job.target_language
        ))
    );
    println!(
        "  {} {} ({:.0}%)",
        Style::label("status:  "),
        status_style(job),
        job.progress_percent
    );
    if job.total_pages > 0 {
        println!(
            "  {} {}/{}",
            Style::label("pages:   "),
            job.current_page,
            job.total_pages
        );
    }
    if let Some(seconds) = job.processing_time {
        println!("  {} {seconds:.1}s", Style::label("duration:"));
    }
    if let Some(message) = &job.error_message {
        println!("  {} {}", Style::label("error:   "), Style::error(message));
    }
    if let Some(url) = &job.download_url {
        println!("  {} {url}", Style::label("download:"));
    }
}

fn status_style(job: &Job) -> String {
    match job.status {
        JobStatus::Completed => Style::success(job.stage_label()),
        JobStatus::Failed => Style::error(job.stage_label()),
        JobStatus::Cancelled => Style::warning(job.stage_label()),
        _ => Style::value(job.stage_label()),
    }
}
