//! Session state machine for one upload/translate/monitor flow.
//!
//! The controller sequences the API calls for a user-initiated translation
//! (upload -> create -> start -> poll) and exposes the lifecycle to the
//! presentation layer: current state, latest job snapshot, error slot and
//! processing flag. It owns at most one active poller at a time.
//!
//! Overlapping submissions are not deduplicated here; callers gate them via
//! [`SessionController::is_processing`]. The same goes for file validation
//! (type, maximum size), which happens before a file is selected.

use std::sync::Arc;
use std::time::Duration;

use crate::api::{ApiError, Job, JobApi, JobCreate, JobStatus};
use crate::poller::{DEFAULT_POLL_INTERVAL, Poller, StopHandle};

/// How a finished session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    Failed,
    Cancelled,
}

/// Lifecycle state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No file selected.
    Idle,
    /// A file is selected; ready to submit once a target language is set.
    FileSelected,
    /// The upload/create/start sequence is running.
    Submitting,
    /// A poller is delivering snapshots.
    Monitoring,
    /// The job reached a terminal status; the poller has stopped.
    Terminal(Outcome),
}

/// A file chosen by the user, held in memory until submission.
#[derive(Debug, Clone)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
    pub bytes: Vec<u8>,
}

/// Drives one translation request end to end.
pub struct SessionController<C: JobApi + ?Sized> {
    client: Arc<C>,
    poll_interval: Duration,
    state: SessionState,
    file: Option<SelectedFile>,
    source_language: Option<String>,
    target_language: Option<String>,
    job: Option<Job>,
    processing: bool,
    error: Option<String>,
    poll_stop: Option<StopHandle>,
}

impl<C: JobApi + ?Sized + 'static> SessionController<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self {
            client,
            poll_interval: DEFAULT_POLL_INTERVAL,
            state: SessionState::Idle,
            file: None,
            source_language: None,
            target_language: None,
            job: None,
            processing: false,
            error: None,
            poll_stop: None,
        }
    }

    #[must_use]
    pub const fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Latest job snapshot observed, if any.
    pub const fn job(&self) -> Option<&Job> {
        self.job.as_ref()
    }

    pub const fn file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub const fn is_processing(&self) -> bool {
        self.processing
    }

    /// Handle for cancelling the active poller, while one is running.
    pub fn poll_stop_handle(&self) -> Option<StopHandle> {
        self.poll_stop.clone()
    }

    /// Selects a new file, discarding any previous flow first. Language
    /// selections survive; everything else starts fresh.
    pub fn select_file(&mut self, file: SelectedFile) {
        self.stop_polling();
        self.job = None;
        self.processing = false;
        self.error = None;
        self.file = Some(file);
        self.state = SessionState::FileSelected;
    }

    pub fn set_source_language(&mut self, language: Option<String>) {
        self.source_language = language;
    }

    pub fn set_target_language(&mut self, language: impl Into<String>) {
        self.target_language = Some(language.into());
    }

    /// Runs the whole flow: upload -> create -> start -> poll to a terminal
    /// snapshot. Each delivered snapshot is passed to `on_update` after the
    /// session has absorbed it, so the callback always sees state and
    /// snapshot in agreement.
    ///
    /// On a submission failure the file selection is kept and the session
    /// returns to [`SessionState::FileSelected`], so the user can retry
    /// without re-choosing the file. The failure message lands in the error
    /// slot.
    pub async fn start_translation<F>(&mut self, mut on_update: F) -> SessionState
    where
        F: FnMut(&Job),
    {
        let Some(file) = self.file.clone() else {
            self.error = Some("no file selected".to_string());
            return self.state;
        };
        let Some(target_language) = self.target_language.clone() else {
            self.error = Some("no target language selected".to_string());
            return self.state;
        };

        self.processing = true;
        self.error = None;
        self.state = SessionState::Submitting;

        let poller = match self.submit(&file, &target_language).await {
            Ok(poller) => poller,
            Err(err) => {
                self.processing = false;
                self.error = Some(err.to_string());
                self.state = SessionState::FileSelected;
                return self.state;
            }
        };

        self.poll_stop = Some(poller.stop_handle());

        let state = &mut self.state;
        let job_slot = &mut self.job;
        let last = poller
            .run(|job| {
                *job_slot = Some(job.clone());
                if *state == SessionState::Submitting {
                    *state = SessionState::Monitoring;
                }
                on_update(job);
            })
            .await;

        self.processing = false;
        self.poll_stop = None;

        if let Some(job) = last {
            let outcome = match job.status {
                JobStatus::Failed => {
                    self.error = Some(
                        job.error_message
                            .clone()
                            .unwrap_or_else(|| "translation failed".to_string()),
                    );
                    Outcome::Failed
                }
                JobStatus::Cancelled => Outcome::Cancelled,
                _ => Outcome::Completed,
            };
            self.state = SessionState::Terminal(outcome);
        }

        self.state
    }

    /// The strictly ordered submission sequence. Any failure aborts it and
    /// propagates without issuing the remaining calls.
    async fn submit(
        &mut self,
        file: &SelectedFile,
        target_language: &str,
    ) -> Result<Poller<C>, ApiError> {
        let artifact = self
            .client
            .upload_file(&file.name, file.bytes.clone())
            .await?;

        let request = JobCreate {
            filename: file.name.clone(),
            file_size: file.size,
            source_language: self.source_language.clone(),
            target_language: target_language.to_string(),
            options: Some(serde_json::json!({ "file_key": artifact.file_key })),
        };
        let job = self.client.create_job(&request).await?;
        let job_id = job.id.clone();
        self.job = Some(job);

        self.client.start_job(&job_id).await?;

        Ok(Poller::new(Arc::clone(&self.client), job_id).with_interval(self.poll_interval))
    }

    /// Returns the session to its initial empty state, from any state.
    /// Stops the active poller first; no intermediate state is observable.
    pub fn reset(&mut self) {
        self.stop_polling();
        self.file = None;
        self.source_language = None;
        self.target_language = None;
        self.job = None;
        self.processing = false;
        self.error = None;
        self.state = SessionState::Idle;
    }

    fn stop_polling(&mut self) {
        if let Some(handle) = self.poll_stop.take() {
            handle.stop();
        }
    }
}
