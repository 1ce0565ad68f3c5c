//! Multi-panel figures of reconstruction scenes
//!
//! A [`Scene`] collects point sets and cameras, [`Figure::compose`] projects
//! it into a 3D view plus XZ, YZ and XY views with fitted viewports, and a
//! [`FigureRenderer`] draws the result:
//! - [`SvgFileRenderer`] writes an SVG file
//! - [`SvgStringRenderer`] keeps the SVG in memory

pub mod error;
pub mod figure;
pub mod options;
pub mod renderer;
pub mod scene;
pub mod style;

pub use error::*;
pub use figure::*;
pub use options::*;
pub use renderer::*;
pub use scene::*;
pub use style::*;

use std::path::Path;

/// Compose a scene and render it to an SVG string
pub fn render_svg_string(scene: &Scene, options: &FigureOptions) -> Result<String> {
    let figure = Figure::compose(scene, options)?;
    let mut renderer = SvgStringRenderer::new();
    renderer.render(&figure)?;
    Ok(renderer.into_string())
}

/// Compose a scene and save it; the file extension must be `.svg`
pub fn save_figure(scene: &Scene, options: &FigureOptions, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());
    match extension.as_deref() {
        Some("svg") => {
            let figure = Figure::compose(scene, options)?;
            SvgFileRenderer::new(path).render(&figure)
        }
        _ => Err(VisualizationError::UnsupportedFormat(path.display().to_string())),
    }
}
