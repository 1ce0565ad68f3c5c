//! Colors and marker styles for figure series

use serde::{Deserialize, Serialize};

/// An sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    /// Default color for plain point clouds
    pub const STEEL_BLUE: Color = Color::rgb(31, 119, 180);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Marker shape used for point series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Marker {
    /// Small filled dot
    Dot,
    /// Larger filled circle, used for camera centers
    Circle,
    /// Eight-armed asterisk
    Star,
    /// Diagonal cross
    Cross,
}

/// How a series is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeriesStyle {
    Markers { marker: Marker, color: Color },
    Line { color: Color },
}

impl SeriesStyle {
    pub fn markers(marker: Marker, color: Color) -> Self {
        SeriesStyle::Markers { marker, color }
    }

    pub fn line(color: Color) -> Self {
        SeriesStyle::Line { color }
    }

    pub fn color(&self) -> Color {
        match *self {
            SeriesStyle::Markers { color, .. } | SeriesStyle::Line { color } => color,
        }
    }
}
