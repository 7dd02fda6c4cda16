//! # doctrans - Document Translation CLI
//!
//! `doctrans` is a command-line client for an asynchronous document-translation
//! service. It uploads a PDF, creates and starts a translation job, and tracks
//! the job's progress by polling until it completes, fails or is cancelled.
//!
//! ## Quick Start
//!
//! ```bash
//! # Translate a document to Spanish
//! doctrans translate ./report.pdf --to es
//!
//! # Check on a job later
//! doctrans status 3f2a9c1e --watch
//!
//! # Give up on a job
//! doctrans cancel 3f2a9c1e
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/doctrans/config.toml`:
//!
//! ```toml
//! api_url = "https://translate.example.com/api/v1"
//! to = "es"
//! ```
//!
//! The `DOCTRANS_API_URL` environment variable overrides the config file.
//!
//! ## Library layout
//!
//! The job-lifecycle client is usable as a library: [`api`] holds the typed
//! HTTP client behind the [`api::JobApi`] trait, [`poller`] the cancellable
//! status-polling loop, and [`session`] the state machine that sequences one
//! upload/translate/monitor flow.

/// Typed HTTP client for the translation service API.
pub mod api;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and API URL resolution.
pub mod config;

/// Language code validation and the supported language list.
pub mod language;

/// Fixed-interval job polling with cancellation.
pub mod poller;

/// Session state machine driving one translation request.
pub mod session;

/// Terminal UI components (progress bar, colors).
pub mod ui;
