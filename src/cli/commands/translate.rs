use anyhow::{Context, Result, bail};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::api::TranslationApi;
use crate::config::{ConfigManager, resolve_api_url};
use crate::language::validate_language;
use crate::session::{Outcome, SelectedFile, SessionController, SessionState};
use crate::ui::{JobProgressBar, Style};

/// Largest document the service accepts.
const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024; // 100MB

pub struct TranslateOptions {
    pub file: PathBuf,
    pub to: Option<String>,
    pub from: Option<String>,
    pub api_url: Option<String>,
}

pub async fn run_translate(options: TranslateOptions) -> Result<()> {
    let config = ConfigManager::new()?.load().unwrap_or_default();

    let to = options.to.or_else(|| config.to.clone()).ok_or_else(|| {
        anyhow::anyhow!(
            "Missing required configuration: 'to' (target language)\n\n\
             Please provide it via:\n  \
             - CLI option: doctrans translate --to <lang> <file>\n  \
             - Config file: ~/.config/doctrans/config.toml"
        )
    })?;
    validate_language(&to)?;

    let from = options.from.or_else(|| config.from.clone());
    if let Some(lang) = &from {
        validate_language(lang)?;
    }

    let file = load_selected_file(&options.file)?;
    let api_url = resolve_api_url(options.api_url.as_deref(), &config);

    let api = Arc::new(TranslationApi::new(api_url));
    let mut session = SessionController::new(api);
    session.select_file(file);
    session.set_source_language(from);
    session.set_target_language(&to);

    eprintln!(
        "{} {} {} {}",
        Style::label("Translating"),
        Style::value(options.file.display()),
        Style::label("to"),
        Style::code(&to),
    );

    let bar = JobProgressBar::new();
    let state = session.start_translation(|job| bar.update(job)).await;
    bar.finish();

    match state {
        SessionState::Terminal(Outcome::Completed) => {
            report_completed(&session);
            Ok(())
        }
        SessionState::Terminal(Outcome::Cancelled) => {
            eprintln!("{}", Style::warning("Translation was cancelled."));
            Ok(())
        }
        _ => {
            let message = session.error().unwrap_or("translation failed");
            bail!("{message}")
        }
    }
}

fn report_completed<C: crate::api::JobApi + ?Sized + 'static>(session: &SessionController<C>) {
    eprintln!("{}", Style::success("✓ Translation completed"));

    let Some(job) = session.job() else { return };
    if let Some(seconds) = job.processing_time {
        eprintln!("  {} {seconds:.1}s", Style::label("processing time"));
    }
    match &job.download_url {
        // Download URL goes to stdout so it can be piped.
        Some(url) => println!("{url}"),
        None => eprintln!(
            "{}",
            Style::warning("The service did not report a download URL.")
        ),
    }
}

/// Reads the document into memory, applying the validations the service
/// would reject on anyway: PDF extension and the size cap.
fn load_selected_file(path: &Path) -> Result<SelectedFile> {
    if path.extension().is_none_or(|ext| !ext.eq_ignore_ascii_case("pdf")) {
        bail!(
            "Error: Only PDF documents are supported: {}",
            path.display()
        );
    }

    let metadata = fs::metadata(path)
        .with_context(|| format!("Failed to access file: {}", path.display()))?;

    if metadata.len() > MAX_FILE_SIZE {
        bail!(
            "Error: File size ({:.1} MB) exceeds maximum allowed size (100 MB).",
            metadata.len() as f64 / 1024.0 / 1024.0
        );
    }

    let bytes =
        fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;

    let name = path
        .file_name()
        .map_or_else(|| "document.pdf".to_string(), |n| n.to_string_lossy().into_owned());

    Ok(SelectedFile {
        name,
        size: metadata.len(),
        bytes,
    })
}
