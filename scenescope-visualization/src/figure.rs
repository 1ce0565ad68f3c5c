//! Figure composition: one 3D panel and three 2D projections
//!
//! [`Figure::compose`] is the only place where scene content is projected
//! and fitted into panels. Every panel goes through the same overlay routine,
//! so the 3D view and the XZ, YZ and XY views always show the same layers
//! and cameras in the same order. The result is plain data for a
//! [`FigureRenderer`](crate::FigureRenderer).

use crate::error::Result;
use crate::options::{FigureOptions, ViewAngle};
use crate::scene::Scene;
use crate::style::{Marker, SeriesStyle};
use scenescope_core::{AxisBounds, Bounded, Bounds, PlaneBounds, Point3d, ViewPlane, AXIS_LABELS};

/// Title of the 3D panel
pub const SCENE_TITLE: &str = "scene 3D view";

/// Coordinates drawn with one style
#[derive(Debug, Clone, PartialEq)]
pub struct Series<const N: usize> {
    pub label: Option<String>,
    pub style: SeriesStyle,
    pub points: Vec<[f64; N]>,
}

/// The 3D panel, coordinates in world x, y, z order
#[derive(Debug, Clone, PartialEq)]
pub struct Panel3d {
    pub title: String,
    pub labels: [&'static str; 3],
    pub bounds: AxisBounds,
    pub series: Vec<Series<3>>,
}

/// A 2D projection panel, coordinates as (horizontal, vertical)
#[derive(Debug, Clone, PartialEq)]
pub struct Panel2d {
    pub plane: ViewPlane,
    pub title: String,
    pub labels: (&'static str, &'static str),
    pub bounds: PlaneBounds,
    pub grid: bool,
    pub invert_vertical: bool,
    /// Draw with the same number of pixels per unit on both axes
    pub equal_aspect: bool,
    pub series: Vec<Series<2>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Panel {
    Scene3d(Panel3d),
    Projection(Panel2d),
}

/// A laid out figure ready to be drawn
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub width: u32,
    pub height: u32,
    pub marker_size: u32,
    pub show_text: bool,
    pub view: ViewAngle,
    /// 3D view first, then XZ, YZ and XY
    pub panels: Vec<Panel>,
}

impl Figure {
    /// Project a scene into the four panels and fit their viewports
    ///
    /// The 3D viewport is always made equal-scale. Projection viewports are
    /// made equal-aspect when `options.equal_aspect_projections` is set.
    pub fn compose(scene: &Scene, options: &FigureOptions) -> Result<Self> {
        let mut panels = Vec::with_capacity(1 + ViewPlane::ALL.len());

        let series = overlay(scene, |p| [p.x, p.y, p.z]);
        let bounds = scene
            .bounds()
            .unwrap_or_else(AxisBounds::unit)
            .with_margin(options.margin)
            .normalized()?;
        log::debug!("3D panel: {} series, bounds {:?}", series.len(), bounds);
        panels.push(Panel::Scene3d(Panel3d {
            title: SCENE_TITLE.to_string(),
            labels: AXIS_LABELS,
            bounds,
            series,
        }));

        for plane in ViewPlane::ALL {
            let series = overlay(scene, |p| {
                let q = plane.project(p);
                [q.x, q.y]
            });
            let mut bounds = fit(&series, options.margin);
            if options.equal_aspect_projections {
                bounds.normalize_in_place()?;
            }
            log::debug!("{} panel: {} series, bounds {:?}", plane.title(), series.len(), bounds);
            panels.push(Panel::Projection(Panel2d {
                plane,
                title: plane.title().to_string(),
                labels: plane.labels(),
                bounds,
                grid: options.grid,
                invert_vertical: options.invert_xy_vertical && plane == ViewPlane::Xy,
                equal_aspect: options.equal_aspect_projections,
                series,
            }));
        }

        Ok(Self {
            width: options.width,
            height: options.height,
            marker_size: options.marker_size,
            show_text: options.show_text,
            view: options.view,
            panels,
        })
    }

    /// The 3D panel
    pub fn scene_panel(&self) -> Option<&Panel3d> {
        self.panels.iter().find_map(|panel| match panel {
            Panel::Scene3d(panel) => Some(panel),
            Panel::Projection(_) => None,
        })
    }

    /// The projection panel for `plane`
    pub fn projection(&self, plane: ViewPlane) -> Option<&Panel2d> {
        self.panels.iter().find_map(|panel| match panel {
            Panel::Projection(panel) if panel.plane == plane => Some(panel),
            _ => None,
        })
    }
}

/// Point layers, then for each camera its center marker followed by its ray
fn overlay<const N: usize, F>(scene: &Scene, project: F) -> Vec<Series<N>>
where
    F: Fn(&Point3d) -> [f64; N],
{
    let mut series = Vec::with_capacity(scene.layers().len() + 2 * scene.cameras().len());

    for layer in scene.layers() {
        series.push(Series {
            label: Some(layer.label.clone()),
            style: layer.style,
            points: layer.points.iter().map(&project).collect(),
        });
    }

    for camera in scene.cameras() {
        series.push(Series {
            label: None,
            style: SeriesStyle::markers(Marker::Circle, camera.color),
            points: vec![project(camera.camera.center())],
        });
        series.push(Series {
            label: None,
            style: SeriesStyle::line(camera.color),
            points: camera.ray.endpoints().iter().map(&project).collect(),
        });
    }

    series
}

/// Auto-fit bounds around all series, padded by `margin`
fn fit<const N: usize>(series: &[Series<N>], margin: f64) -> Bounds<N> {
    Bounds::from_coords(series.iter().flat_map(|s| s.points.iter().copied()))
        .unwrap_or_else(Bounds::unit)
        .with_margin(margin)
}
