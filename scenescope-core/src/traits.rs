//! Core traits for scenescope

use crate::bounds::AxisBounds;
use crate::camera::Camera;
use crate::point_set::PointSet;
use crate::ray::ViewingRay;

/// Anything that occupies a region of world space when drawn
pub trait Bounded {
    /// Tightest axis-aligned bounds, `None` when there is nothing to draw
    fn bounds(&self) -> Option<AxisBounds>;
}

impl Bounded for PointSet {
    fn bounds(&self) -> Option<AxisBounds> {
        PointSet::bounds(self)
    }
}

impl Bounded for ViewingRay {
    fn bounds(&self) -> Option<AxisBounds> {
        AxisBounds::from_points(&self.endpoints())
    }
}

impl Bounded for Camera {
    fn bounds(&self) -> Option<AxisBounds> {
        AxisBounds::from_points(std::iter::once(self.center()))
    }
}

/// Union of the bounds of several items, skipping empty ones
pub fn combined_bounds<'a, I>(items: I) -> Option<AxisBounds>
where
    I: IntoIterator<Item = &'a dyn Bounded>,
{
    items
        .into_iter()
        .filter_map(|item| item.bounds())
        .reduce(|acc, bounds| acc.union(&bounds))
}
