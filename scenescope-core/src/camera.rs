//! Camera extrinsics as consumed from a reconstruction pipeline

use crate::error::{Error, Result};
use crate::point::{Point3d, Vector3d};
use nalgebra::{DMatrix, Matrix3, UnitQuaternion};
use serde::{Deserialize, Serialize};

/// Position and orientation of a camera in the world frame
///
/// `rotation` maps camera-frame directions to world-frame directions and
/// `center` is the camera center in world coordinates. The camera looks along
/// its local +Z axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    rotation: Matrix3<f64>,
    center: Point3d,
}

impl Camera {
    /// Create a camera from a camera-to-world rotation and a world position
    pub fn new(rotation: Matrix3<f64>, center: Point3d) -> Self {
        Self { rotation, center }
    }

    /// Camera at `center` whose frame is aligned with the world frame
    pub fn at(center: Point3d) -> Self {
        Self::new(Matrix3::identity(), center)
    }

    /// Create a camera from a unit quaternion orientation
    pub fn from_rotation(rotation: UnitQuaternion<f64>, center: Point3d) -> Self {
        Self::new(rotation.to_rotation_matrix().into_inner(), center)
    }

    /// Camera at `center` looking at `target`
    ///
    /// The camera frame is right-handed with +Z towards the target and +Y
    /// pointing opposite to `up` (image rows grow downwards).
    pub fn look_at(center: Point3d, target: Point3d, up: Vector3d) -> Result<Self> {
        let forward = target - center;
        if forward.norm() <= f64::EPSILON {
            return Err(Error::invalid_argument(
                "look_at target coincides with the camera center",
            ));
        }
        let z = forward.normalize();
        let y = -up;
        let x = y.cross(&z);
        if x.norm() <= f64::EPSILON {
            return Err(Error::invalid_argument(
                "look_at up vector is parallel to the viewing direction",
            ));
        }
        let x = x.normalize();
        let y = z.cross(&x);
        Ok(Self::new(Matrix3::from_columns(&[x, y, z]), center))
    }

    /// Build a camera from dynamically shaped arrays
    ///
    /// `rotation` must be 3×3 and `center` must hold exactly three values
    /// (3×1 or 1×3); anything else is an [`Error::InvalidArgument`].
    pub fn from_dynamic(rotation: &DMatrix<f64>, center: &DMatrix<f64>) -> Result<Self> {
        if rotation.shape() != (3, 3) {
            return Err(Error::invalid_argument(format!(
                "camera rotation must be 3x3, got {}x{}",
                rotation.nrows(),
                rotation.ncols()
            )));
        }
        if !matches!(center.shape(), (3, 1) | (1, 3)) {
            return Err(Error::invalid_argument(format!(
                "camera position must be 3x1, got {}x{}",
                center.nrows(),
                center.ncols()
            )));
        }
        let rotation = Matrix3::from_iterator(rotation.iter().cloned());
        let center = Point3d::new(center[0], center[1], center[2]);
        Ok(Self::new(rotation, center))
    }

    /// Build a camera from a row-major rotation of nine values and a position of three
    pub fn from_row_slices(rotation: &[f64], center: &[f64]) -> Result<Self> {
        if rotation.len() != 9 {
            return Err(Error::invalid_argument(format!(
                "camera rotation must have 9 entries, got {}",
                rotation.len()
            )));
        }
        if center.len() != 3 {
            return Err(Error::invalid_argument(format!(
                "camera position must have 3 entries, got {}",
                center.len()
            )));
        }
        Ok(Self::new(
            Matrix3::from_row_slice(rotation),
            Point3d::new(center[0], center[1], center[2]),
        ))
    }

    /// Camera-to-world rotation
    pub fn rotation(&self) -> &Matrix3<f64> {
        &self.rotation
    }

    /// Camera center in world coordinates
    pub fn center(&self) -> &Point3d {
        &self.center
    }

    /// Unit optical axis in world coordinates
    pub fn forward(&self) -> Vector3d {
        self.rotation.column(2).normalize()
    }

    /// Express a world point in the camera frame
    pub fn world_to_camera(&self, point: &Point3d) -> Point3d {
        Point3d::from(self.rotation.transpose() * (point - self.center))
    }

    /// Express a camera-frame point in the world frame
    pub fn camera_to_world(&self, point: &Point3d) -> Point3d {
        self.center + self.rotation * point.coords
    }

    /// Check whether the rotation is orthonormal with determinant +1
    pub fn is_orthonormal(&self, epsilon: f64) -> bool {
        let gram = self.rotation.transpose() * self.rotation;
        (gram - Matrix3::identity()).norm() <= epsilon
            && (self.rotation.determinant() - 1.0).abs() <= epsilon
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::at(Point3d::origin())
    }
}
