//! 2D projection planes used by the side panels of a figure

use crate::point::{Point2d, Point3d, AXIS_LABELS, AXIS_X, AXIS_Y, AXIS_Z};
use serde::{Deserialize, Serialize};

/// A 2D view obtained by dropping one world coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewPlane {
    /// Horizontal x, vertical z (y dropped)
    Xz,
    /// Horizontal y, vertical z (x dropped)
    Yz,
    /// Horizontal x, vertical y (z dropped)
    Xy,
}

impl ViewPlane {
    /// The three planes in figure panel order
    pub const ALL: [ViewPlane; 3] = [ViewPlane::Xz, ViewPlane::Yz, ViewPlane::Xy];

    /// World axis indices shown horizontally and vertically
    pub fn axes(self) -> (usize, usize) {
        match self {
            ViewPlane::Xz => (AXIS_X, AXIS_Z),
            ViewPlane::Yz => (AXIS_Y, AXIS_Z),
            ViewPlane::Xy => (AXIS_X, AXIS_Y),
        }
    }

    /// Axis labels, horizontal first
    pub fn labels(self) -> (&'static str, &'static str) {
        let (h, v) = self.axes();
        (AXIS_LABELS[h], AXIS_LABELS[v])
    }

    /// Panel title, e.g. `XZ-view`
    pub fn title(self) -> &'static str {
        match self {
            ViewPlane::Xz => "XZ-view",
            ViewPlane::Yz => "YZ-view",
            ViewPlane::Xy => "XY-view",
        }
    }

    /// Drop the coordinate this plane does not show
    pub fn project(self, point: &Point3d) -> Point2d {
        let (h, v) = self.axes();
        Point2d::new(point[h], point[v])
    }
}
