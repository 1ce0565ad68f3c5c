//! Point types and the fixed axis convention

use nalgebra::{Point2, Point3, Vector3};

/// A world-frame 3D point
pub type Point3d = Point3<f64>;

/// A 3D vector in world or camera frame
pub type Vector3d = Vector3<f64>;

/// A point in one of the 2D projection planes
pub type Point2d = Point2<f64>;

/// Index of the x coordinate
pub const AXIS_X: usize = 0;
/// Index of the y coordinate
pub const AXIS_Y: usize = 1;
/// Index of the z coordinate
pub const AXIS_Z: usize = 2;

/// Axis labels in coordinate order
pub const AXIS_LABELS: [&str; 3] = ["x", "y", "z"];
