//! Viewing rays along camera optical axes

use crate::camera::Camera;
use crate::error::{Error, Result};
use crate::point::{Point2d, Point3d, Vector3d};
use crate::projection::ViewPlane;
use nalgebra::Matrix3x2;

/// A segment from a camera center along its optical axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewingRay {
    pub start: Point3d,
    pub end: Point3d,
}

impl ViewingRay {
    /// The two endpoints as columns of a 3×2 matrix
    pub fn to_matrix(&self) -> Matrix3x2<f64> {
        Matrix3x2::from_columns(&[self.start.coords, self.end.coords])
    }

    /// Endpoints, start first
    pub fn endpoints(&self) -> [Point3d; 2] {
        [self.start, self.end]
    }

    /// Vector from start to end
    pub fn direction(&self) -> Vector3d {
        self.end - self.start
    }

    /// Length of the segment
    pub fn length(&self) -> f64 {
        self.direction().norm()
    }

    /// Project both endpoints onto a view plane
    pub fn project(&self, plane: ViewPlane) -> [Point2d; 2] {
        [plane.project(&self.start), plane.project(&self.end)]
    }
}

/// Segment from the camera center to the point `length` units ahead on its local +Z axis
///
/// `length` must be positive and finite. There is no default: the right value
/// depends on the scale of the scene being displayed.
pub fn build_ray(camera: &Camera, length: f64) -> Result<ViewingRay> {
    if !(length > 0.0) || !length.is_finite() {
        return Err(Error::invalid_argument(format!(
            "viewing ray length must be positive, got {}",
            length
        )));
    }
    let local = Vector3d::new(0.0, 0.0, length);
    let start = *camera.center();
    let end = start + camera.rotation() * local;
    Ok(ViewingRay { start, end })
}

/// One ray per camera, in the same order as `cameras`
pub fn build_rays<'a, I>(cameras: I, length: f64) -> Result<Vec<ViewingRay>>
where
    I: IntoIterator<Item = &'a Camera>,
{
    cameras
        .into_iter()
        .map(|camera| build_ray(camera, length))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Matrix3;

    #[test]
    fn test_identity_camera() {
        let ray = build_ray(&Camera::default(), 5.0).unwrap();
        assert_eq!(ray.start, Point3d::new(0.0, 0.0, 0.0));
        assert_eq!(ray.end, Point3d::new(0.0, 0.0, 5.0));
    }

    #[test]
    fn test_rotation_about_y() {
        let theta = std::f64::consts::FRAC_PI_2;
        let (s, c) = theta.sin_cos();
        #[rustfmt::skip]
        let rotation = Matrix3::new(
            c,   0.0, s,
            0.0, 1.0, 0.0,
            -s,  0.0, c,
        );
        let camera = Camera::new(rotation, Point3d::new(1.0, 2.0, 3.0));
        let ray = build_ray(&camera, 2.0).unwrap();

        assert_eq!(ray.start, Point3d::new(1.0, 2.0, 3.0));
        let expected = *camera.center() + rotation * Vector3d::new(0.0, 0.0, 2.0);
        assert_relative_eq!(ray.end, expected);
        assert_relative_eq!(ray.end, Point3d::new(3.0, 2.0, 3.0), epsilon = 1e-12);
    }

    #[test]
    fn test_rejects_non_positive_length() {
        for length in [-1.0, 0.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                build_ray(&Camera::default(), length),
                Err(Error::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn test_matrix_and_projection() {
        let camera = Camera::at(Point3d::new(1.0, 2.0, 3.0));
        let ray = build_ray(&camera, 4.0).unwrap();

        let matrix = ray.to_matrix();
        assert_eq!(matrix.column(0).into_owned(), Vector3d::new(1.0, 2.0, 3.0));
        assert_eq!(matrix.column(1).into_owned(), Vector3d::new(1.0, 2.0, 7.0));
        assert_relative_eq!(ray.length(), 4.0);

        let [a, b] = ray.project(ViewPlane::Yz);
        assert_eq!(a, Point2d::new(2.0, 3.0));
        assert_eq!(b, Point2d::new(2.0, 7.0));
    }

    #[test]
    fn test_build_rays_preserves_order() {
        let cameras: Vec<Camera> = (0..4)
            .map(|i| Camera::at(Point3d::new(i as f64, 0.0, 0.0)))
            .collect();
        let rays = build_rays(&cameras, 6.0).unwrap();
        assert_eq!(rays.len(), cameras.len());
        for (camera, ray) in cameras.iter().zip(&rays) {
            assert_eq!(ray.start, *camera.center());
        }
        assert!(build_rays(&cameras, 0.0).is_err());
    }
}
