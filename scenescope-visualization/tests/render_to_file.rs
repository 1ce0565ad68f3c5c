//! Integration tests for composing and writing figures

use scenescope_core::{Camera, Point3d, PointSet, UnitQuaternion, ViewPlane};
use scenescope_visualization::*;
use tempfile::TempDir;

/// Cameras on a circle around the origin, all looking at it
fn ring_of_cameras(count: usize, radius: f64) -> Vec<Camera> {
    (0..count)
        .map(|i| {
            let angle = i as f64 * std::f64::consts::TAU / count as f64;
            let center = Point3d::new(radius * angle.cos(), radius * angle.sin(), 1.0);
            Camera::look_at(center, Point3d::origin(), nalgebra::Vector3::z()).unwrap()
        })
        .collect()
}

fn cube_corners() -> PointSet {
    let mut points = PointSet::new();
    for x in [-1.0, 1.0] {
        for y in [-1.0, 1.0] {
            for z in [-1.0, 1.0] {
                points.push(Point3d::new(x, y, z));
            }
        }
    }
    points
}

#[test]
fn comparison_figure_round_trip_through_file() {
    let truth = cube_corners();
    let recovered: PointSet = truth
        .iter()
        .map(|p| Point3d::new(p.x * 1.01, p.y, p.z - 0.02))
        .collect();
    let cameras = ring_of_cameras(5, 8.0);
    let scene = Scene::reconstruction_comparison(&cameras, &recovered, &truth, 6.0).unwrap();

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("comparison.svg");
    save_figure(&scene, &FigureOptions::comparison(), &path).unwrap();

    let svg = std::fs::read_to_string(&path).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("XY-view"));
}

#[test]
fn camera_rays_point_at_the_scene_center() {
    let cameras = ring_of_cameras(4, 8.0);
    let scene = Scene::reconstruction_comparison(&cameras, &cube_corners(), &cube_corners(), 6.0).unwrap();
    let figure = Figure::compose(&scene, &FigureOptions::comparison()).unwrap();

    let panel = figure.scene_panel().unwrap();
    // two point layers, then (center, ray) per camera
    assert_eq!(panel.series.len(), 2 + 2 * cameras.len());
    for (i, camera) in cameras.iter().enumerate() {
        let ray = &panel.series[2 + 2 * i + 1].points;
        let start = nalgebra::Vector3::from(ray[0]);
        let end = nalgebra::Vector3::from(ray[1]);
        assert!((start - camera.center().coords).norm() < 1e-12);
        // moving along the ray brings the camera closer to the origin
        assert!(end.norm() < start.norm());
    }
    assert!(panel.bounds.is_cubic(1e-9));
}

#[test]
fn projections_share_camera_order() {
    let cameras = vec![
        Camera::from_rotation(UnitQuaternion::identity(), Point3d::new(0.0, 0.0, -4.0)),
        Camera::from_rotation(
            UnitQuaternion::from_euler_angles(0.0, std::f64::consts::FRAC_PI_2, 0.0),
            Point3d::new(-4.0, 0.0, 0.0),
        ),
    ];
    let scene = Scene::reconstruction_comparison(&cameras, &cube_corners(), &cube_corners(), 2.0).unwrap();
    let figure = Figure::compose(&scene, &FigureOptions::default()).unwrap();

    for plane in ViewPlane::ALL {
        let panel = figure.projection(plane).unwrap();
        for (i, camera) in cameras.iter().enumerate() {
            let projected = plane.project(camera.center());
            assert_eq!(panel.series[2 + 2 * i].points, vec![[projected.x, projected.y]]);
        }
    }
}

#[test]
fn unsupported_extension_is_rejected() {
    let dir = TempDir::new().unwrap();
    let result = save_figure(&Scene::new(), &FigureOptions::default(), dir.path().join("figure.bmp"));
    assert!(matches!(result, Err(VisualizationError::UnsupportedFormat(_))));
}

#[test]
fn svg_string_for_empty_scene() {
    let svg = render_svg_string(&Scene::new(), &FigureOptions::default()).unwrap();
    assert!(svg.contains("scene 3D view"));
}
