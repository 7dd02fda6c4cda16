//! Subcommand implementations.

/// Cancel command handler.
pub mod cancel;

/// Status command handler.
pub mod status;

/// Translation command handler.
pub mod translate;
