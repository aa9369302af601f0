//! CLI logic for the Freebody diagram tool.
//!
//! This module contains the core CLI logic: analyze a problem statement,
//! render the free-body diagram, and write the SVG and the formula panel.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::{info, warn};

use freebody::{
    FreebodyBuilder, FreebodyError, JsonScene, MockAnalysis, RenderOutcome, SceneSource,
    geometry::Size,
};

/// Run the Freebody CLI application
///
/// The problem statement is analyzed (with the built-in mock, or by replaying
/// the recorded response given with `--scene`), the diagram is drawn and
/// exported to the output SVG, and the formula panel is written to
/// `--formulas` or printed to stdout.
///
/// # Errors
///
/// Returns `FreebodyError` for:
/// - An empty problem statement
/// - File I/O errors
/// - Configuration loading errors
/// - Scene parsing errors
/// - Render and export errors
pub fn run(args: &Args) -> Result<(), FreebodyError> {
    info!(
        scene_path:? = args.scene,
        output_path = args.output;
        "Processing problem"
    );

    let size = surface_size(args.width, args.height)?;
    let app_config = config::load_config(args.config.as_ref())?;

    let source: Box<dyn SceneSource> = match &args.scene {
        Some(path) => Box::new(JsonScene::new(fs::read_to_string(path)?)),
        None => Box::new(MockAnalysis),
    };

    let builder = FreebodyBuilder::new(app_config);
    let mut stage = builder.stage(size)?;
    let outcome = stage.generate(&args.problem, source.as_ref())?;

    if outcome == RenderOutcome::Unsupported {
        warn!(
            environment = stage.last_scene().map_or("none", |scene| scene.environment().kind());
            "Scene type is not drawable, exporting an empty diagram"
        );
    }

    let diagram = builder.export(&stage, outcome)?;

    fs::write(&args.output, diagram.svg())
        .map_err(|err| FreebodyError::Export(format!("cannot write {}: {err}", args.output)))?;
    info!(output_file = args.output; "SVG exported successfully");

    match &args.formulas {
        Some(path) => {
            fs::write(path, diagram.output().as_str())?;
            info!(formulas_file = path; "Formula panel written");
        }
        None => println!("{}", diagram.output()),
    }

    Ok(())
}

fn surface_size(width: f32, height: f32) -> Result<Size, FreebodyError> {
    if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
        return Err(FreebodyError::Config(format!(
            "surface size must be positive, got {width}x{height}"
        )));
    }
    Ok(Size::new(width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_size() {
        assert_eq!(surface_size(800.0, 600.0).unwrap(), Size::new(800.0, 600.0));
        assert!(surface_size(0.0, 600.0).is_err());
        assert!(surface_size(800.0, f32::NAN).is_err());
    }
}
