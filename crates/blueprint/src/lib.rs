//! Blueprint - architecture and use-case diagrams for Fix Citizen.
//!
//! Diagrams are declared as data ([`catalog`]), exported to Graphviz DOT
//! ([`export::dot`]) and rendered to an image by the configured backend.
//! Optional node icons are downloaded once by [`icons::IconFetcher`].

pub mod catalog;
pub mod config;
pub mod export;
pub mod icons;

mod error;

pub use blueprint_core::{DiagramError, color, diagram, identifier, stroke};

pub use error::BlueprintError;

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{debug, info};

use config::AppConfig;
use diagram::Diagram;

/// Renders diagrams according to an [`AppConfig`].
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::Path;
///
/// use blueprint::{Renderer, catalog::DiagramKind, config::AppConfig};
///
/// let diagram = DiagramKind::UseCase
///     .build(Path::new("."))
///     .expect("Failed to build diagram");
///
/// let renderer = Renderer::new(AppConfig::default());
/// let path = renderer
///     .render_to_dir(&diagram, Path::new("."))
///     .expect("Failed to render diagram");
/// println!("wrote {}", path.display());
/// ```
#[derive(Debug, Default)]
pub struct Renderer {
    config: AppConfig,
}

impl Renderer {
    /// Create a new renderer with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this renderer uses.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns the DOT source for `diagram`.
    ///
    /// # Errors
    ///
    /// Returns [`BlueprintError::Config`] if a style color cannot be parsed.
    pub fn to_dot(&self, diagram: &Diagram) -> Result<String, BlueprintError> {
        export::dot::to_dot_string(diagram, self.config.style())
    }

    /// Renders `diagram` and returns the encoded image.
    ///
    /// # Errors
    ///
    /// Returns [`BlueprintError`] for style, layout or backend failures.
    pub fn render(&self, diagram: &Diagram) -> Result<Vec<u8>, BlueprintError> {
        info!(title = diagram.title(); "Rendering diagram");
        export::render(
            diagram,
            self.config.style(),
            self.config.render().backend(),
        )
    }

    /// Path of the image [`render_to_dir`](Self::render_to_dir) writes for `diagram`.
    pub fn output_path(&self, diagram: &Diagram, dir: &Path) -> PathBuf {
        let extension = self.config.render().backend().extension();
        dir.join(format!("{}.{extension}", diagram.file_stem()))
    }

    /// Renders `diagram` into `dir` and returns the image path.
    ///
    /// Writes exactly one image, plus the DOT source when `render.emit_dot`
    /// is enabled. Existing files are overwritten.
    ///
    /// # Errors
    ///
    /// Returns [`BlueprintError`] for rendering failures or if the files
    /// cannot be written.
    pub fn render_to_dir(&self, diagram: &Diagram, dir: &Path) -> Result<PathBuf, BlueprintError> {
        let image = self.render(diagram)?;

        fs::create_dir_all(dir)?;
        let path = self.output_path(diagram, dir);
        fs::write(&path, image)?;
        info!(path = path.display().to_string(); "Diagram written");

        if self.config.render().emit_dot() {
            let dot_path = path.with_extension("dot");
            fs::write(&dot_path, self.to_dot(diagram)?)?;
            debug!(path = dot_path.display().to_string(); "DOT source written");
        }

        Ok(path)
    }
}
