//! Configuration types for Blueprint diagram rendering.
//!
//! This module provides configuration structures that control how diagrams
//! are rendered, where icons are cached, and how they are styled. All types
//! implement [`serde::Deserialize`] and every field has a default, so a
//! partial TOML file only overrides what it names.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining the sections below.
//! - [`RenderConfig`] - Selects the rendering [`Backend`].
//! - [`IconConfig`] - Icon cache directory and whether to download missing icons.
//! - [`StyleConfig`] - Fonts and colors written into the DOT graph.
//!
//! # Example
//!
//! ```
//! # use blueprint::config::{AppConfig, Backend};
//! let config = AppConfig::default();
//! assert_eq!(config.render().backend(), Backend::default());
//! assert!(config.icons().fetch());
//! assert!(config.style().edge_color().is_ok());
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use blueprint_core::color::Color;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Rendering section.
    #[serde(default)]
    render: RenderConfig,

    /// Icon cache section.
    #[serde(default)]
    icons: IconConfig,

    /// Style section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Returns the render configuration.
    pub fn render(&self) -> &RenderConfig {
        &self.render
    }

    /// Returns the render configuration for modification.
    pub fn render_mut(&mut self) -> &mut RenderConfig {
        &mut self.render
    }

    /// Returns the icon configuration.
    pub fn icons(&self) -> &IconConfig {
        &self.icons
    }

    /// Returns the icon configuration for modification.
    pub fn icons_mut(&mut self) -> &mut IconConfig {
        &mut self.icons
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Rendering backends.
///
/// The names match external configuration strings (snake_case). The default
/// is [`Backend::Graphviz`] when the `graphviz` feature is compiled in and
/// [`Backend::Native`] otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Backend {
    /// Pure-Rust layout producing SVG, without clusters
    Native,
    /// The Graphviz `dot` executable producing PNG
    Graphviz,
}

impl Default for Backend {
    fn default() -> Self {
        if cfg!(feature = "graphviz") {
            Self::Graphviz
        } else {
            Self::Native
        }
    }
}

impl Backend {
    /// File extension of the images this backend produces.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Native => "svg",
            Self::Graphviz => "png",
        }
    }
}

/// Rendering configuration.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct RenderConfig {
    #[serde(default)]
    backend: Backend,

    /// Also write the DOT source next to each image.
    #[serde(default)]
    emit_dot: bool,
}

impl RenderConfig {
    /// Returns the selected [`Backend`].
    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// Returns whether DOT sources are written alongside images.
    pub fn emit_dot(&self) -> bool {
        self.emit_dot
    }

    pub fn set_backend(&mut self, backend: Backend) {
        self.backend = backend;
    }

    pub fn set_emit_dot(&mut self, emit_dot: bool) {
        self.emit_dot = emit_dot;
    }
}

/// Icon cache configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    /// Directory icons are read from and downloaded into.
    directory: PathBuf,

    /// Download icons that are missing from `directory`.
    fetch: bool,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            fetch: true,
        }
    }
}

impl IconConfig {
    /// Returns the icon directory.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Returns whether missing icons are downloaded.
    pub fn fetch(&self) -> bool {
        self.fetch
    }

    pub fn set_directory(&mut self, directory: impl Into<PathBuf>) {
        self.directory = directory.into();
    }

    pub fn set_fetch(&mut self, fetch: bool) {
        self.fetch = fetch;
    }
}

/// Visual styling written into the DOT graph.
///
/// Colors are kept as strings and parsed on access, so an invalid color is
/// reported when a diagram is rendered with it.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    background_color: Option<String>,
    font_name: String,
    font_size: u32,
    font_color: String,
    edge_color: String,
    cluster_border_color: String,
    /// Cluster backgrounds, indexed by nesting depth and cycled.
    cluster_colors: Vec<String>,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: None,
            font_name: "Sans-Serif".to_string(),
            font_size: 15,
            font_color: "#2D3436".to_string(),
            edge_color: "#7B8894".to_string(),
            cluster_border_color: "#AEB6BE".to_string(),
            cluster_colors: ["#E5F5FD", "#EBF3E7", "#ECE8F6", "#FDF7E3"]
                .map(String::from)
                .to_vec(),
        }
    }
}

impl StyleConfig {
    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_deref()
            .map(Color::new)
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    pub fn font_name(&self) -> &str {
        &self.font_name
    }

    /// Graph title font size; node and cluster labels are drawn smaller.
    pub fn font_size(&self) -> u32 {
        self.font_size
    }

    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn font_color(&self) -> Result<Color, String> {
        Color::new(&self.font_color).map_err(|err| format!("Invalid font color in config: {err}"))
    }

    /// Color of edges that do not set their own.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn edge_color(&self) -> Result<Color, String> {
        Color::new(&self.edge_color).map_err(|err| format!("Invalid edge color in config: {err}"))
    }

    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn cluster_border_color(&self) -> Result<Color, String> {
        Color::new(&self.cluster_border_color)
            .map_err(|err| format!("Invalid cluster border color in config: {err}"))
    }

    /// Background color for a cluster at `depth`, or `None` when the palette is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the selected color string cannot be parsed.
    pub fn cluster_color(&self, depth: usize) -> Result<Option<Color>, String> {
        if self.cluster_colors.is_empty() {
            return Ok(None);
        }
        let color = &self.cluster_colors[depth % self.cluster_colors.len()];
        Color::new(color)
            .map(Some)
            .map_err(|err| format!("Invalid cluster color in config: {err}"))
    }
}
