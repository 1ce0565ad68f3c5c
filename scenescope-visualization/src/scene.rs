//! Scene description: what goes into a figure

use crate::error::Result;
use crate::style::{Color, Marker, SeriesStyle};
use scenescope_core::{build_ray, combined_bounds, AxisBounds, Bounded, Camera, PointSet, ViewingRay};

const ORTHONORMAL_TOLERANCE: f64 = 1e-6;

/// A point set drawn with one marker style
#[derive(Debug, Clone, PartialEq)]
pub struct PointLayer {
    pub label: String,
    pub points: PointSet,
    pub style: SeriesStyle,
}

/// A camera center together with its viewing ray
#[derive(Debug, Clone, PartialEq)]
pub struct CameraOverlay {
    pub camera: Camera,
    pub ray: ViewingRay,
    pub color: Color,
}

/// Everything a figure shows, in drawing order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    layers: Vec<PointLayer>,
    cameras: Vec<CameraOverlay>,
}

impl Scene {
    /// Create an empty scene
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a point layer
    pub fn add_points(
        &mut self,
        label: impl Into<String>,
        points: PointSet,
        marker: Marker,
        color: Color,
    ) -> &mut Self {
        self.layers.push(PointLayer {
            label: label.into(),
            points,
            style: SeriesStyle::markers(marker, color),
        });
        self
    }

    /// Add a camera and a viewing ray of `look_length` world units
    pub fn add_camera(&mut self, camera: Camera, look_length: f64, color: Color) -> Result<&mut Self> {
        let ray = build_ray(&camera, look_length)?;
        if !camera.is_orthonormal(ORTHONORMAL_TOLERANCE) {
            log::warn!(
                "camera at {:?} has a non-orthonormal rotation, its viewing ray may be skewed",
                camera.center()
            );
        }
        self.cameras.push(CameraOverlay { camera, ray, color });
        Ok(self)
    }

    /// Point layers in drawing order
    pub fn layers(&self) -> &[PointLayer] {
        &self.layers
    }

    /// Camera overlays in the order they were added
    pub fn cameras(&self) -> &[CameraOverlay] {
        &self.cameras
    }

    /// Check whether the scene has nothing to draw
    pub fn is_empty(&self) -> bool {
        self.cameras.is_empty() && self.layers.iter().all(|layer| layer.points.is_empty())
    }

    /// A stereo pair with its triangulated points
    ///
    /// Points are drawn as dots, the left camera in blue and the right one in red.
    pub fn stereo(left: &Camera, right: &Camera, points: &PointSet, look_length: f64) -> Result<Self> {
        let mut scene = Self::new();
        scene
            .add_points("points", points.clone(), Marker::Dot, Color::STEEL_BLUE)
            .add_camera(*left, look_length, Color::BLUE)?
            .add_camera(*right, look_length, Color::RED)?;
        Ok(scene)
    }

    /// Reconstructed points against ground truth, seen from several cameras
    ///
    /// Ground truth is drawn as blue stars, the reconstruction and all
    /// cameras in red.
    pub fn reconstruction_comparison(
        cameras: &[Camera],
        recovered: &PointSet,
        truth: &PointSet,
        look_length: f64,
    ) -> Result<Self> {
        let mut scene = Self::new();
        scene
            .add_points("ground truth", truth.clone(), Marker::Star, Color::BLUE)
            .add_points("reconstructed", recovered.clone(), Marker::Cross, Color::RED);
        for camera in cameras {
            scene.add_camera(*camera, look_length, Color::RED)?;
        }

        match recovered.rms_error(truth) {
            Ok(rms) => log::info!(
                "reconstruction of {} points, RMS error {:.6} against ground truth",
                recovered.len(),
                rms
            ),
            Err(_) => log::debug!(
                "reconstructed ({}) and ground truth ({}) point counts differ, skipping error summary",
                recovered.len(),
                truth.len()
            ),
        }
        Ok(scene)
    }
}

impl Bounded for Scene {
    /// Bounds of every point layer, camera center and viewing ray
    fn bounds(&self) -> Option<AxisBounds> {
        let layers = self.layers.iter().map(|layer| &layer.points as &dyn Bounded);
        let cameras = self
            .cameras
            .iter()
            .flat_map(|overlay| [&overlay.camera as &dyn Bounded, &overlay.ray]);
        combined_bounds(layers.chain(cameras))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VisualizationError;
    use scenescope_core::{Error, Point3d};

    fn points() -> PointSet {
        PointSet::from_points(vec![Point3d::new(0.0, 0.0, 10.0), Point3d::new(1.0, 1.0, 12.0)])
    }

    #[test]
    fn test_stereo_scene() {
        let left = Camera::at(Point3d::new(-1.0, 0.0, 0.0));
        let right = Camera::at(Point3d::new(1.0, 0.0, 0.0));
        let scene = Scene::stereo(&left, &right, &points(), 20.0).unwrap();

        assert_eq!(scene.layers().len(), 1);
        assert_eq!(scene.cameras().len(), 2);
        assert_eq!(scene.cameras()[0].color, Color::BLUE);
        assert_eq!(scene.cameras()[1].color, Color::RED);
        assert_eq!(scene.cameras()[1].ray.end, Point3d::new(1.0, 0.0, 20.0));
    }

    #[test]
    fn test_comparison_scene_keeps_camera_order() {
        let cameras: Vec<Camera> = (0..3)
            .map(|i| Camera::at(Point3d::new(i as f64, 0.0, 0.0)))
            .collect();
        let scene = Scene::reconstruction_comparison(&cameras, &points(), &points(), 6.0).unwrap();

        assert_eq!(scene.layers()[0].label, "ground truth");
        assert_eq!(scene.layers()[1].label, "reconstructed");
        for (camera, overlay) in cameras.iter().zip(scene.cameras()) {
            assert_eq!(overlay.camera, *camera);
            assert_eq!(overlay.ray.start, *camera.center());
        }
    }

    #[test]
    fn test_comparison_accepts_different_point_counts() {
        let mut truth = points();
        truth.push(Point3d::origin());
        let scene = Scene::reconstruction_comparison(&[], &points(), &truth, 6.0).unwrap();
        assert_eq!(scene.layers()[0].points.len(), 3);
    }

    #[test]
    fn test_invalid_look_length() {
        let mut scene = Scene::new();
        let result = scene.add_camera(Camera::default(), 0.0, Color::RED);
        assert!(matches!(
            result,
            Err(VisualizationError::Geometry(Error::InvalidArgument(_)))
        ));
        assert!(scene.cameras().is_empty());
    }

    #[test]
    fn test_scene_bounds_cover_layers_cameras_and_rays() {
        let mut scene = Scene::new();
        assert!(scene.bounds().is_none());

        scene.add_points("points", points(), Marker::Dot, Color::BLACK);
        scene
            .add_camera(Camera::at(Point3d::new(-3.0, 0.0, 0.0)), 20.0, Color::RED)
            .unwrap();
        assert_eq!(
            scene.bounds(),
            Some(AxisBounds::from_pairs([(-3.0, 1.0), (0.0, 1.0), (0.0, 20.0)]))
        );
    }

    #[test]
    fn test_is_empty() {
        let mut scene = Scene::new();
        assert!(scene.is_empty());
        scene.add_points("none", PointSet::new(), Marker::Dot, Color::BLACK);
        assert!(scene.is_empty());
        scene.add_camera(Camera::default(), 1.0, Color::BLACK).unwrap();
        assert!(!scene.is_empty());
    }
}
