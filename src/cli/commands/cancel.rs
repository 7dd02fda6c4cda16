use anyhow::Result;
use std::sync::Arc;

use crate::api::{JobApi, TranslationApi};
use crate::config::{ConfigManager, resolve_api_url};
use crate::ui::Style;

pub struct CancelOptions {
    pub job_id: String,
    pub api_url: Option<String>,
}

pub async fn run_cancel(options: CancelOptions) -> Result<()> {
    let config = ConfigManager::new()?.load().unwrap_or_default();
    let api = Arc::new(TranslationApi::new(resolve_api_url(
        options.api_url.as_deref(),
        &config,
    )));

    // Cancellation is asynchronous: the backend acknowledges the request and
    // the job transitions to `cancelled` on a later snapshot.
    let ack = api.cancel_job(&options.job_id).await?;

    eprintln!("{} {}", Style::success("✓"), ack.message);
    eprintln!(
        "{}",
        Style::hint(format!(
            "Run 'doctrans status {}' to confirm the cancellation.",
            ack.job_id
        ))
    );

    Ok(())
}
