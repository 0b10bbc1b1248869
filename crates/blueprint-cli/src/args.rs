//! Command-line argument definitions for the Blueprint CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the diagrams to render and control the
//! output directory, icon handling, configuration file and log verbosity.

use std::path::PathBuf;

use clap::Parser;

use blueprint::catalog::DiagramKind;

/// Command-line arguments for the Blueprint diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Diagrams to render (architecture, use-case); all when omitted
    #[arg(value_name = "DIAGRAM")]
    pub diagrams: Vec<DiagramKind>,

    /// Directory the rendered images are written to
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory icons are cached in, overriding `icons.directory`
    #[arg(long, value_name = "DIR")]
    pub icons: Option<PathBuf>,

    /// Never download icons; use those already cached
    #[arg(long)]
    pub offline: bool,

    /// Also write the DOT source next to each image
    #[arg(long)]
    pub emit_dot: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// The diagrams to render, in a stable order and without repeats.
    pub fn selected_diagrams(&self) -> Vec<DiagramKind> {
        if self.diagrams.is_empty() {
            return DiagramKind::ALL.to_vec();
        }

        DiagramKind::ALL
            .into_iter()
            .filter(|kind| self.diagrams.contains(kind))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["blueprint"]).unwrap();
        assert!(args.diagrams.is_empty());
        assert_eq!(args.output_dir, PathBuf::from("."));
        assert!(args.config.is_none());
        assert!(args.icons.is_none());
        assert!(!args.offline);
        assert!(!args.emit_dot);
        assert_eq!(args.log_level, "info");
        assert_eq!(args.selected_diagrams(), DiagramKind::ALL);
    }

    #[test]
    fn test_diagram_selection() {
        let args =
            Args::try_parse_from(["blueprint", "use-case", "architecture", "use-case"]).unwrap();
        assert_eq!(
            args.selected_diagrams(),
            [DiagramKind::Architecture, DiagramKind::UseCase]
        );

        let args = Args::try_parse_from(["blueprint", "usecase"]).unwrap();
        assert_eq!(args.selected_diagrams(), [DiagramKind::UseCase]);
    }

    #[test]
    fn test_unknown_diagram_rejected() {
        assert!(Args::try_parse_from(["blueprint", "sequence"]).is_err());
    }

    #[test]
    fn test_flags() {
        let args = Args::try_parse_from([
            "blueprint",
            "-o",
            "docs",
            "--icons",
            "assets",
            "--offline",
            "--emit-dot",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(args.output_dir, PathBuf::from("docs"));
        assert_eq!(args.icons, Some(PathBuf::from("assets")));
        assert!(args.offline);
        assert!(args.emit_dot);
        assert_eq!(args.log_level, "debug");
    }
}
