//! The Fix Citizen diagrams.
//!
//! Each submodule declares one diagram as literal data:
//!
//! - [`architecture`] - system architecture (users, frontend, Supabase backend)
//! - [`use_case`] - UML use cases for citizens, administrators, moderators and guests
//!
//! [`DiagramKind`] names them for the CLI, and [`ICONS`] lists the remote
//! icons the architecture diagram can use.

pub mod architecture;
pub mod use_case;

use std::{fmt, path::Path, str::FromStr};

use blueprint_core::{DiagramError, color::Color, diagram::Diagram};

use crate::icons::Icon;

pub const SUPABASE_ICON: Icon = Icon::new(
    "supabase",
    "https://supabase.com/favicon.ico",
    "supabase.png",
);

pub const GEOAPIFY_ICON: Icon = Icon::new(
    "geoapify",
    "https://www.geoapify.com/favicon.ico",
    "geoapify.png",
);

pub const LEAFLET_ICON: Icon = Icon::new(
    "leaflet",
    "https://leafletjs.com/docs/images/logo.png",
    "leaflet.png",
);

/// Every icon fetched before rendering.
pub const ICONS: [Icon; 3] = [SUPABASE_ICON, GEOAPIFY_ICON, LEAFLET_ICON];

/// The diagrams this crate can build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagramKind {
    Architecture,
    UseCase,
}

impl DiagramKind {
    pub const ALL: [DiagramKind; 2] = [DiagramKind::Architecture, DiagramKind::UseCase];

    /// Whether the diagram references downloaded icons.
    pub fn uses_icons(self) -> bool {
        matches!(self, Self::Architecture)
    }

    /// Builds the diagram, reading icons from `icon_dir`.
    ///
    /// # Errors
    ///
    /// Returns a [`DiagramError`] if a declaration is inconsistent.
    pub fn build(self, icon_dir: &Path) -> Result<Diagram, DiagramError> {
        match self {
            Self::Architecture => architecture::diagram(icon_dir),
            Self::UseCase => use_case::diagram(),
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Architecture => "architecture",
            Self::UseCase => "use-case",
        }
    }
}

impl FromStr for DiagramKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "architecture" => Ok(Self::Architecture),
            "use-case" | "usecase" => Ok(Self::UseCase),
            _ => Err(format!(
                "unknown diagram `{s}`, valid values: architecture, use-case"
            )),
        }
    }
}

impl fmt::Display for DiagramKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn color(name: &str) -> Result<Color, DiagramError> {
    Color::new(name).map_err(DiagramError::InvalidColor)
}
