//! Error types for Blueprint operations.
//!
//! This module provides the main error type [`BlueprintError`] which wraps
//! the error conditions that can occur while building and rendering diagrams.
//! Icon download failures never surface here; the fetcher swallows them.

use std::io;

use thiserror::Error;

use blueprint_core::DiagramError;

/// The main error type for Blueprint operations.
#[derive(Debug, Error)]
pub enum BlueprintError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Diagram error: {0}")]
    Diagram(#[from] DiagramError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Layout error: {0}")]
    Layout(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error + Send + Sync>),
}
