//! Figure configuration

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Viewpoint of the 3D panel, angles in radians
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewAngle {
    pub pitch: f64,
    pub yaw: f64,
    pub scale: f64,
}

impl Default for ViewAngle {
    fn default() -> Self {
        Self {
            pitch: 0.5,
            yaw: 0.8,
            scale: 0.9,
        }
    }
}

/// Options controlling how a scene is laid out as a figure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FigureOptions {
    /// Output width in pixels
    pub width: u32,

    /// Output height in pixels
    pub height: u32,

    /// Fraction of each data extent added on both sides when auto-fitting
    pub margin: f64,

    /// Give the 2D projections an equal aspect ratio
    pub equal_aspect_projections: bool,

    /// Flip the vertical axis of the XY view so that y grows downwards
    pub invert_xy_vertical: bool,

    /// Draw grid lines on the 2D projections
    pub grid: bool,

    /// Draw titles, axis descriptions and tick labels
    pub show_text: bool,

    /// Marker size in pixels
    pub marker_size: u32,

    /// Viewpoint of the 3D panel
    pub view: ViewAngle,
}

impl Default for FigureOptions {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            margin: 0.05,
            equal_aspect_projections: false,
            invert_xy_vertical: false,
            grid: true,
            show_text: true,
            marker_size: 4,
            view: ViewAngle::default(),
        }
    }
}

impl FigureOptions {
    /// Layout for a stereo pair: image-style XY view, free aspect on projections
    pub fn stereo() -> Self {
        Self {
            invert_xy_vertical: true,
            ..Self::default()
        }
    }

    /// Layout for comparing reconstructed and true points: equal aspect everywhere
    pub fn comparison() -> Self {
        Self {
            equal_aspect_projections: true,
            ..Self::default()
        }
    }

    /// Parse options from JSON; missing fields take their default values
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load options from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Serialize options as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VisualizationError;

    #[test]
    fn test_presets() {
        assert!(FigureOptions::stereo().invert_xy_vertical);
        assert!(!FigureOptions::stereo().equal_aspect_projections);
        assert!(FigureOptions::comparison().equal_aspect_projections);
        assert!(!FigureOptions::comparison().invert_xy_vertical);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let options = FigureOptions::from_json(r#"{ "width": 640, "grid": false }"#).unwrap();
        assert_eq!(options.width, 640);
        assert!(!options.grid);
        assert_eq!(options.height, FigureOptions::default().height);
    }

    #[test]
    fn test_json_round_trip() {
        let options = FigureOptions::comparison();
        let parsed = FigureOptions::from_json(&options.to_json().unwrap()).unwrap();
        assert_eq!(parsed, options);
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            FigureOptions::from_json("{ width: }"),
            Err(VisualizationError::Config(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            FigureOptions::load("/nonexistent/scenescope/options.json"),
            Err(VisualizationError::Io(_))
        ));
    }
}
