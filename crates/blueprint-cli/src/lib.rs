//! CLI logic for the Blueprint diagram tool.
//!
//! [`run`] loads the configuration, fetches missing icons when a selected
//! diagram uses them, then builds and renders each selected diagram.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use log::{info, warn};

use blueprint::{
    BlueprintError, Renderer,
    catalog::ICONS,
    config::AppConfig,
    icons::{HttpIconSource, IconFetcher},
};

/// Run the Blueprint CLI application
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `BlueprintError` for:
/// - Configuration loading errors
/// - Diagram declaration errors
/// - Layout and rendering errors
/// - File I/O errors
///
/// Icon download failures are logged and never returned.
pub fn run(args: &Args) -> Result<(), BlueprintError> {
    let diagrams = args.selected_diagrams();
    info!(
        diagrams:? = diagrams,
        output_dir = args.output_dir.display().to_string();
        "Rendering diagrams"
    );

    let mut app_config = config::load_config(args.config.as_ref())?;
    apply_overrides(&mut app_config, args);

    let icon_dir = app_config.icons().directory().to_path_buf();
    if diagrams.iter().any(|kind| kind.uses_icons()) {
        fetch_icons(&app_config);
    }

    let renderer = Renderer::new(app_config);
    info!(backend:? = renderer.config().render().backend(); "Renderer ready");
    for kind in diagrams {
        info!(diagram:% = kind; "Building diagram");
        let diagram = kind.build(&icon_dir)?;
        let path = renderer.render_to_dir(&diagram, &args.output_dir)?;
        info!(diagram:% = kind, output_file = path.display().to_string(); "Diagram exported successfully");
    }

    Ok(())
}

fn apply_overrides(config: &mut AppConfig, args: &Args) {
    if let Some(dir) = &args.icons {
        config.icons_mut().set_directory(dir.clone());
    }
    if args.offline {
        config.icons_mut().set_fetch(false);
    }
    if args.emit_dot {
        config.render_mut().set_emit_dot(true);
    }
}

fn fetch_icons(config: &AppConfig) {
    if !config.icons().fetch() {
        info!("Icon download disabled, using cached icons only");
        return;
    }

    let source = match HttpIconSource::new() {
        Ok(source) => source,
        Err(err) => {
            warn!(error:% = err; "Could not create HTTP client, skipping icon download");
            return;
        }
    };

    let fetcher = IconFetcher::new(source, config.icons().directory());
    let available = fetcher.ensure_all(&ICONS);
    info!(
        available,
        total = ICONS.len(),
        directory = fetcher.directory().display().to_string();
        "Icons ready"
    );
}
