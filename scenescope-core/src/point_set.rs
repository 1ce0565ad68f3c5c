//! World-frame point sets

use crate::bounds::AxisBounds;
use crate::error::{Error, Result};
use crate::point::{Point2d, Point3d};
use crate::projection::ViewPlane;
use nalgebra::{DMatrix, Matrix3xX};
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// A set of 3D points in the world frame
///
/// Coordinates are always in x, y, z order. The set can be built from and
/// exported to the 3×N column layout reconstruction pipelines produce.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PointSet {
    points: Vec<Point3d>,
}

impl PointSet {
    /// Create an empty point set
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Create a point set from a vector of points
    pub fn from_points(points: Vec<Point3d>) -> Self {
        Self { points }
    }

    /// Create a point set from a 3×N matrix whose columns are points
    pub fn from_matrix(matrix: &Matrix3xX<f64>) -> Self {
        matrix
            .column_iter()
            .map(|column| Point3d::new(column[0], column[1], column[2]))
            .collect()
    }

    /// Create a point set from a dynamically shaped matrix, which must have 3 rows
    pub fn from_dynamic(matrix: &DMatrix<f64>) -> Result<Self> {
        if matrix.nrows() != 3 {
            return Err(Error::invalid_argument(format!(
                "point array must be 3xN, got {}x{}",
                matrix.nrows(),
                matrix.ncols()
            )));
        }
        Ok(matrix
            .column_iter()
            .map(|column| Point3d::new(column[0], column[1], column[2]))
            .collect())
    }

    /// Create a point set from separate x, y and z coordinate rows
    pub fn from_rows(xs: &[f64], ys: &[f64], zs: &[f64]) -> Result<Self> {
        if xs.len() != ys.len() || xs.len() != zs.len() {
            return Err(Error::invalid_argument(format!(
                "coordinate rows differ in length: {}, {}, {}",
                xs.len(),
                ys.len(),
                zs.len()
            )));
        }
        Ok(xs
            .iter()
            .zip(ys)
            .zip(zs)
            .map(|((&x, &y), &z)| Point3d::new(x, y, z))
            .collect())
    }

    /// Export as a 3×N matrix
    pub fn to_matrix(&self) -> Matrix3xX<f64> {
        Matrix3xX::from_fn(self.points.len(), |row, col| self.points[col][row])
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Add a point to the set
    pub fn push(&mut self, point: Point3d) {
        self.points.push(point);
    }

    /// Borrow the points
    pub fn points(&self) -> &[Point3d] {
        &self.points
    }

    /// Iterate over the points
    pub fn iter(&self) -> std::slice::Iter<'_, Point3d> {
        self.points.iter()
    }

    /// All coordinates along one axis (0 = x, 1 = y, 2 = z)
    pub fn axis(&self, axis: usize) -> Vec<f64> {
        self.points.iter().map(|p| p[axis]).collect()
    }

    /// Tightest bounds around the points, `None` if the set is empty
    pub fn bounds(&self) -> Option<AxisBounds> {
        AxisBounds::from_points(&self.points)
    }

    /// Project every point onto one of the 2D view planes
    pub fn project(&self, plane: ViewPlane) -> Vec<Point2d> {
        self.points.iter().map(|p| plane.project(p)).collect()
    }

    /// Euclidean distance between corresponding points of two equally sized sets
    pub fn point_errors(&self, other: &PointSet) -> Result<Vec<f64>> {
        if self.len() != other.len() {
            return Err(Error::invalid_argument(format!(
                "cannot compare point sets of {} and {} points",
                self.len(),
                other.len()
            )));
        }
        Ok(self
            .points
            .iter()
            .zip(other.points.iter())
            .map(|(a, b)| (a - b).norm())
            .collect())
    }

    /// Root mean square of [`PointSet::point_errors`]; zero for two empty sets
    pub fn rms_error(&self, other: &PointSet) -> Result<f64> {
        let errors = self.point_errors(other)?;
        if errors.is_empty() {
            return Ok(0.0);
        }
        let sum_sq: f64 = errors.iter().map(|e| e * e).sum();
        Ok((sum_sq / errors.len() as f64).sqrt())
    }
}

impl Index<usize> for PointSet {
    type Output = Point3d;

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl IntoIterator for PointSet {
    type Item = Point3d;
    type IntoIter = std::vec::IntoIter<Point3d>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point3d;
    type IntoIter = std::slice::Iter<'a, Point3d>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl Extend<Point3d> for PointSet {
    fn extend<I: IntoIterator<Item = Point3d>>(&mut self, iter: I) {
        self.points.extend(iter);
    }
}

impl FromIterator<Point3d> for PointSet {
    fn from_iter<I: IntoIterator<Item = Point3d>>(iter: I) -> Self {
        Self {
            points: Vec::from_iter(iter),
        }
    }
}

impl From<Vec<Point3d>> for PointSet {
    fn from(points: Vec<Point3d>) -> Self {
        Self::from_points(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample() -> PointSet {
        PointSet::from_points(vec![
            Point3d::new(1.0, 2.0, 3.0),
            Point3d::new(-1.0, 0.0, 5.0),
        ])
    }

    #[test]
    fn test_matrix_layout_is_columns() {
        let matrix = sample().to_matrix();
        assert_eq!(matrix.ncols(), 2);
        assert_eq!(matrix[(0, 0)], 1.0);
        assert_eq!(matrix[(2, 0)], 3.0);
        assert_eq!(matrix[(0, 1)], -1.0);
        assert_eq!(PointSet::from_matrix(&matrix), sample());
    }

    #[test]
    fn test_from_dynamic_requires_three_rows() {
        let good = DMatrix::from_row_slice(3, 2, &[1.0, -1.0, 2.0, 0.0, 3.0, 5.0]);
        assert_eq!(PointSet::from_dynamic(&good).unwrap(), sample());

        let bad = DMatrix::<f64>::zeros(2, 4);
        assert!(matches!(
            PointSet::from_dynamic(&bad),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_from_rows() {
        let set = PointSet::from_rows(&[1.0, -1.0], &[2.0, 0.0], &[3.0, 5.0]).unwrap();
        assert_eq!(set, sample());
        assert!(PointSet::from_rows(&[1.0], &[2.0, 0.0], &[3.0]).is_err());
    }

    #[test]
    fn test_axis_and_projection() {
        let set = sample();
        assert_eq!(set.axis(2), vec![3.0, 5.0]);
        let xz = set.project(ViewPlane::Xz);
        assert_eq!(xz[1], Point2d::new(-1.0, 5.0));
    }

    #[test]
    fn test_bounds() {
        let bounds = sample().bounds().unwrap();
        assert_eq!(
            bounds,
            AxisBounds::from_pairs([(-1.0, 1.0), (0.0, 2.0), (3.0, 5.0)])
        );
        assert!(PointSet::new().bounds().is_none());
    }

    #[test]
    fn test_rms_error() {
        let truth = sample();
        let shifted: PointSet = truth
            .iter()
            .map(|p| Point3d::new(p.x + 3.0, p.y + 4.0, p.z))
            .collect();
        assert_eq!(truth.point_errors(&shifted).unwrap(), vec![5.0, 5.0]);
        assert_relative_eq!(truth.rms_error(&shifted).unwrap(), 5.0);
        assert_eq!(PointSet::new().rms_error(&PointSet::new()).unwrap(), 0.0);
    }

    #[test]
    fn test_comparison_requires_equal_sizes() {
        let mut other = sample();
        other.push(Point3d::origin());
        assert!(matches!(
            sample().point_errors(&other),
            Err(Error::InvalidArgument(_))
        ));
    }
}
