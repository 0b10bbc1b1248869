//! Error adapter for converting BlueprintError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI. Blueprint errors
//! carry no source spans, so each error becomes a single report with a stable
//! code and, where one applies, a help message.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use blueprint::BlueprintError;

/// Adapter for a [`BlueprintError`].
pub struct ErrorAdapter<'a>(pub &'a BlueprintError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            BlueprintError::Io(_) => "blueprint::io",
            BlueprintError::Diagram(_) => "blueprint::diagram",
            BlueprintError::Config(_) => "blueprint::config",
            BlueprintError::Layout(_) => "blueprint::layout",
            BlueprintError::Export(_) => "blueprint::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            BlueprintError::Config(_) => "check the configuration file passed with --config",
            BlueprintError::Export(_) => {
                "the graphviz backend needs the `dot` executable on PATH; \
                 set `render.backend = \"native\"` to render SVG without it"
            }
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// Convert a [`BlueprintError`] into a reportable error.
pub fn to_reportable(err: &BlueprintError) -> ErrorAdapter<'_> {
    ErrorAdapter(err)
}
