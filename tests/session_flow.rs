#![allow(clippy::unwrap_used)]
//! End-to-end session scenarios against the public library API, with a
//! scripted backend standing in for the translation service.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use doctrans_cli::api::{ApiError, Job, JobAck, JobApi, JobCreate, JobStatus, UploadArtifact};
use doctrans_cli::poller::Poller;
use doctrans_cli::session::{Outcome, SelectedFile, SessionController, SessionState};

fn snapshot(status: JobStatus, progress: f32) -> Job {
    Job {
        id: "job-1".to_string(),
        filename: "a.pdf".to_string(),
        file_size: Some(1000),
        source_language: None,
        target_language: "es".to_string(),
        status,
        progress_percent: progress,
        current_stage: None,
        current_page: 0,
        total_pages: 0,
        download_url: None,
        error_message: None,
        processing_time: None,
        created_at: "2025-05-01T10:00:00".to_string(),
        completed_at: None,
    }
}

/// A scripted translation service: answers the submission calls and then
/// serves a fixed sequence of snapshots, recording every call it receives.
struct ScriptedBackend {
    calls: Mutex<Vec<String>>,
    start_error: Mutex<Option<ApiError>>,
    polls: Mutex<VecDeque<Job>>,
}

impl ScriptedBackend {
    fn new(polls: Vec<Job>) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            start_error: Mutex::new(None),
            polls: Mutex::new(polls.into()),
        })
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl JobApi for ScriptedBackend {
    async fn upload_file(&self, _: &str, _: Vec<u8>) -> Result<UploadArtifact, ApiError> {
        self.calls.lock().unwrap().push("upload".to_string());
        Ok(UploadArtifact {
            file_key: "key-123".to_string(),
            file_size: 1000,
        })
    }

    async fn create_job(&self, request: &JobCreate) -> Result<Job, ApiError> {
        self.calls.lock().unwrap().push("create".to_string());
        assert_eq!(request.target_language, "es");
        Ok(snapshot(JobStatus::Pending, 0.0))
    }

    async fn start_job(&self, _: &str) -> Result<JobAck, ApiError> {
        self.calls.lock().unwrap().push("start".to_string());
        if let Some(err) = self.start_error.lock().unwrap().take() {
            return Err(err);
        }
        Ok(JobAck {
            message: "started".to_string(),
            job_id: "job-1".to_string(),
        })
    }

    async fn cancel_job(&self, _: &str) -> Result<JobAck, ApiError> {
        self.calls.lock().unwrap().push("cancel".to_string());
        Ok(JobAck {
            message: "cancellation requested".to_string(),
            job_id: "job-1".to_string(),
        })
    }

    async fn get_job(&self, _: &str) -> Result<Job, ApiError> {
        self.calls.lock().unwrap().push("get".to_string());
        let job = self.polls.lock().unwrap().pop_front();
        Ok(job.unwrap_or_else(|| snapshot(JobStatus::Completed, 100.0)))
    }
}

fn pdf_file() -> SelectedFile {
    SelectedFile {
        name: "a.pdf".to_string(),
        size: 1000,
        bytes: b"%PDF-1.7".to_vec(),
    }
}

/// Full lifecycle: create with target `es`, first poll `translating` at
/// 40%, second poll `completed` at 100% with a download URL. The session
/// moves Submitting -> Monitoring -> Terminal(Completed) and the poller
/// never issues a third fetch.
#[tokio::test(start_paused = true)]
async fn scenario_pending_to_completed() {
    let mut completed = snapshot(JobStatus::Completed, 100.0);
    completed.download_url = Some("https://x/y".to_string());

    let backend = ScriptedBackend::new(vec![snapshot(JobStatus::Translating, 40.0), completed]);
    let mut session = SessionController::new(Arc::clone(&backend))
        .with_poll_interval(Duration::from_millis(10));

    session.select_file(pdf_file());
    session.set_target_language("es");

    let mut states_seen = Vec::new();
    let final_state = session
        .start_translation(|_| states_seen.push(()))
        .await;

    assert_eq!(backend.calls(), vec!["upload", "create", "start", "get", "get"]);
    assert_eq!(final_state, SessionState::Terminal(Outcome::Completed));
    assert_eq!(states_seen.len(), 2);
    assert_eq!(
        session.job().unwrap().download_url.as_deref(),
        Some("https://x/y")
    );
}

/// `startJob` fails with "quota exceeded": the session returns to
/// FileSelected with that message and the selected file intact.
#[tokio::test(start_paused = true)]
async fn scenario_start_rejected_keeps_file() {
    let backend = ScriptedBackend::new(vec![]);
    *backend.start_error.lock().unwrap() = Some(ApiError::RequestFailed {
        status: 429,
        message: "quota exceeded".to_string(),
    });
    let mut session = SessionController::new(Arc::clone(&backend))
        .with_poll_interval(Duration::from_millis(10));

    session.select_file(pdf_file());
    session.set_target_language("es");
    let final_state = session.start_translation(|_| {}).await;

    assert_eq!(backend.calls(), vec!["upload", "create", "start"]);
    assert_eq!(final_state, SessionState::FileSelected);
    assert_eq!(session.error(), Some("quota exceeded"));
    assert_eq!(session.file().unwrap().name, "a.pdf");

    // The user can retry without re-choosing the file.
    let retry_state = session.start_translation(|_| {}).await;
    assert_eq!(retry_state, SessionState::Terminal(Outcome::Completed));
}

/// A poller constructed for an already-terminal job stops after exactly one
/// fetch/callback cycle.
#[tokio::test(start_paused = true)]
async fn scenario_poller_stops_on_already_terminal_job() {
    let backend = ScriptedBackend::new(vec![snapshot(JobStatus::Failed, 30.0)]);
    let poller = Poller::new(Arc::clone(&backend), "job-1")
        .with_interval(Duration::from_millis(10));

    let mut callbacks = 0;
    let last = poller.run(|_| callbacks += 1).await;

    assert_eq!(callbacks, 1);
    assert_eq!(
        backend.calls().iter().filter(|c| *c == "get").count(),
        1
    );
    assert_eq!(last.unwrap().status, JobStatus::Failed);
}

/// Once the stop handle fires, no further callbacks are delivered.
#[tokio::test(start_paused = true)]
async fn scenario_stop_handle_silences_poller() {
    let backend = ScriptedBackend::new(vec![
        snapshot(JobStatus::Translating, 10.0),
        snapshot(JobStatus::Translating, 20.0),
        snapshot(JobStatus::Translating, 30.0),
    ]);
    let poller = Poller::new(Arc::clone(&backend), "job-1")
        .with_interval(Duration::from_millis(10));
    let handle = poller.stop_handle();

    let mut callbacks = 0;
    let last = poller
        .run(|_| {
            callbacks += 1;
            if callbacks == 2 {
                handle.stop();
            }
        })
        .await;

    assert_eq!(callbacks, 2);
    assert!(last.is_none());
}

/// Reset always lands in an empty Idle state, wherever it is called from.
#[tokio::test(start_paused = true)]
async fn scenario_reset_returns_to_idle() {
    let backend = ScriptedBackend::new(vec![snapshot(JobStatus::Completed, 100.0)]);
    let mut session = SessionController::new(Arc::clone(&backend))
        .with_poll_interval(Duration::from_millis(10));

    session.select_file(pdf_file());
    session.set_target_language("es");
    session.start_translation(|_| {}).await;

    session.reset();

    assert_eq!(session.state(), SessionState::Idle);
    assert!(session.file().is_none());
    assert!(session.job().is_none());
    assert!(session.error().is_none());
    assert!(session.poll_stop_handle().is_none());
    assert!(!session.is_processing());
}
