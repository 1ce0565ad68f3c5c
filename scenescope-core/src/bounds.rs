//! Axis-aligned plotting viewports and equal-scale normalization
//!
//! A plotting library auto-fits a viewport to whatever data it draws, which
//! stretches each axis independently. [`normalize`] turns such a box into a
//! cube around the same center so that distances look the same along every
//! axis. The algorithm is written once for any number of axes: [`AxisBounds`]
//! is the 3D viewport and [`PlaneBounds`] the 2D one used by projection
//! panels that ask for an equal aspect ratio.

use crate::error::{Error, Result};
use crate::point::Point3d;

/// A closed interval `[min, max]` along one axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    /// Create an interval. No ordering check is made here, see [`Bounds::validate`].
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// A degenerate interval holding a single value
    pub fn point(value: f64) -> Self {
        Self { min: value, max: value }
    }

    /// Midpoint of the interval
    pub fn center(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// Length of the interval
    pub fn extent(&self) -> f64 {
        self.max - self.min
    }

    /// `false` when `min > max` or either end is NaN
    pub fn is_ordered(&self) -> bool {
        self.min <= self.max
    }

    /// Check whether `other` lies entirely inside this interval
    pub fn contains(&self, other: &Interval) -> bool {
        self.min <= other.min && other.max <= self.max
    }

    /// Smallest interval covering both
    pub fn union(&self, other: &Interval) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Grow the interval so that it covers `value`
    pub fn include(&mut self, value: f64) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    /// Pad both ends by `fraction` of the current extent
    pub fn with_margin(&self, fraction: f64) -> Self {
        let pad = self.extent() * fraction.max(0.0);
        Self {
            min: self.min - pad,
            max: self.max + pad,
        }
    }
}

impl From<(f64, f64)> for Interval {
    fn from((min, max): (f64, f64)) -> Self {
        Self::new(min, max)
    }
}

/// An axis-aligned box made of one [`Interval`] per axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds<const N: usize> {
    pub axes: [Interval; N],
}

/// Viewport of a 3D panel, axes in x, y, z order
pub type AxisBounds = Bounds<3>;

/// Viewport of a 2D projection panel
pub type PlaneBounds = Bounds<2>;

impl<const N: usize> Bounds<N> {
    /// Create bounds from per-axis intervals
    pub fn new(axes: [Interval; N]) -> Self {
        Self { axes }
    }

    /// Create bounds from `(min, max)` pairs
    pub fn from_pairs(pairs: [(f64, f64); N]) -> Self {
        Self {
            axes: pairs.map(Interval::from),
        }
    }

    /// Degenerate bounds around a single point
    pub fn around(point: [f64; N]) -> Self {
        Self {
            axes: point.map(Interval::point),
        }
    }

    /// `[0, 1]` on every axis, the viewport used when nothing is plotted
    pub fn unit() -> Self {
        Self {
            axes: [Interval::new(0.0, 1.0); N],
        }
    }

    /// Tightest bounds around a sequence of coordinates, `None` if it is empty
    pub fn from_coords<I>(coords: I) -> Option<Self>
    where
        I: IntoIterator<Item = [f64; N]>,
    {
        let mut iter = coords.into_iter();
        let mut bounds = Self::around(iter.next()?);
        for coord in iter {
            bounds.include(coord);
        }
        Some(bounds)
    }

    /// Interval along axis `index`
    pub fn axis(&self, index: usize) -> Interval {
        self.axes[index]
    }

    /// Fail with [`Error::MalformedBounds`] on the first axis whose min exceeds its max
    pub fn validate(&self) -> Result<()> {
        for (axis, interval) in self.axes.iter().enumerate() {
            if !interval.is_ordered() {
                return Err(Error::MalformedBounds {
                    axis,
                    min: interval.min,
                    max: interval.max,
                });
            }
        }
        Ok(())
    }

    /// Per-axis midpoint
    pub fn center(&self) -> [f64; N] {
        self.axes.map(|interval| interval.center())
    }

    /// Per-axis length
    pub fn extents(&self) -> [f64; N] {
        self.axes.map(|interval| interval.extent())
    }

    /// Half of the largest side
    pub fn radius(&self) -> f64 {
        0.5 * self
            .extents()
            .iter()
            .fold(0.0_f64, |largest, &extent| largest.max(extent))
    }

    /// Equal-scale version of these bounds
    ///
    /// Every axis keeps its center and gets the half-width of the largest
    /// side, so the result is a cube containing the original box. A box that
    /// is already cubic comes back unchanged and a single point stays a
    /// single point.
    pub fn normalized(&self) -> Result<Self> {
        self.validate()?;
        let radius = self.radius();
        Ok(Self {
            axes: self.axes.map(|interval| {
                let origin = interval.center();
                Interval::new(origin - radius, origin + radius)
            }),
        })
    }

    /// In-place form of [`Bounds::normalized`]; `self` is untouched on error
    pub fn normalize_in_place(&mut self) -> Result<()> {
        *self = self.normalized()?;
        Ok(())
    }

    /// Smallest bounds covering both
    pub fn union(&self, other: &Self) -> Self {
        let mut axes = self.axes;
        for (axis, interval) in axes.iter_mut().zip(other.axes.iter()) {
            *axis = axis.union(interval);
        }
        Self { axes }
    }

    /// Grow the bounds so that they cover `coord`
    pub fn include(&mut self, coord: [f64; N]) {
        for (interval, value) in self.axes.iter_mut().zip(coord) {
            interval.include(value);
        }
    }

    /// Pad every axis by `fraction` of its own extent on both sides
    pub fn with_margin(&self, fraction: f64) -> Self {
        Self {
            axes: self.axes.map(|interval| interval.with_margin(fraction)),
        }
    }

    /// Check whether `other` lies entirely inside these bounds
    pub fn contains(&self, other: &Self) -> bool {
        self.axes
            .iter()
            .zip(other.axes.iter())
            .all(|(outer, inner)| outer.contains(inner))
    }

    /// Check whether every side has the same length, up to `epsilon`
    pub fn is_cubic(&self, epsilon: f64) -> bool {
        let extents = self.extents();
        let largest = extents.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let smallest = extents.iter().cloned().fold(f64::INFINITY, f64::min);
        largest - smallest <= epsilon
    }
}

impl<const N: usize> Default for Bounds<N> {
    fn default() -> Self {
        Self::unit()
    }
}

impl AxisBounds {
    /// Tightest bounds around a set of world points
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point3d>,
    {
        Self::from_coords(points.into_iter().map(|p| [p.x, p.y, p.z]))
    }
}

/// Equal-scale normalization of a 3D viewport
///
/// Fails with [`Error::MalformedBounds`] if any axis has `min > max`.
pub fn normalize(bounds: AxisBounds) -> Result<AxisBounds> {
    bounds.normalized()
}
