//! Core geometry for scenescope
//!
//! This crate holds the data a diagnostic plot of a reconstruction scene is
//! built from, and the two pieces of geometry such a plot needs:
//! - [`normalize`]: turn an auto-fitted 3D viewport into an equal-scale cube
//! - [`build_ray`]: a segment along a camera's optical axis for overlays
//!
//! Everything here is a pure function over in-memory values. Drawing lives in
//! `scenescope-visualization`.

pub mod bounds;
pub mod camera;
pub mod error;
pub mod point;
pub mod point_set;
pub mod projection;
pub mod ray;
pub mod traits;

pub use bounds::*;
pub use camera::*;
pub use error::*;
pub use point::*;
pub use point_set::*;
pub use projection::*;
pub use ray::*;
pub use traits::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{DMatrix, Matrix3, Matrix3xX, UnitQuaternion};
