//! Drawing figures with plotters
//!
//! The figure is laid out as a 2×2 grid: the 3D view top left, then the XZ,
//! YZ and XY projections. Output is SVG, either to a file or to a string.

use crate::error::{Result, VisualizationError};
use crate::figure::{Figure, Panel, Panel2d, Panel3d};
use crate::style::{self, Marker, SeriesStyle};
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;
use scenescope_core::Interval;
use std::ops::Range;
use std::path::{Path, PathBuf};

const CAPTION_FONT: (&str, u32) = ("sans-serif", 16);
const AXIS_LABEL_FONT: (&str, u32) = ("sans-serif", 14);

type ProjectionChart<'a, DB> = ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

/// Something that can draw a composed [`Figure`]
pub trait FigureRenderer {
    fn render(&mut self, figure: &Figure) -> Result<()>;
}

/// Writes figures as SVG files
#[derive(Debug, Clone)]
pub struct SvgFileRenderer {
    path: PathBuf,
}

impl SvgFileRenderer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FigureRenderer for SvgFileRenderer {
    fn render(&mut self, figure: &Figure) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let root = SVGBackend::new(&self.path, (figure.width, figure.height)).into_drawing_area();
        draw_figure(&root, figure)?;
        log::info!("wrote figure to {}", self.path.display());
        Ok(())
    }
}

/// Renders figures to an in-memory SVG document
#[derive(Debug, Clone, Default)]
pub struct SvgStringRenderer {
    svg: String,
}

impl SvgStringRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The document produced by the last successful render
    pub fn svg(&self) -> &str {
        &self.svg
    }

    pub fn into_string(self) -> String {
        self.svg
    }
}

impl FigureRenderer for SvgStringRenderer {
    fn render(&mut self, figure: &Figure) -> Result<()> {
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (figure.width, figure.height))
                .into_drawing_area();
            draw_figure(&root, figure)?;
        }
        self.svg = svg;
        Ok(())
    }
}

fn render_err<E: std::fmt::Display>(error: E) -> VisualizationError {
    VisualizationError::Render(error.to_string())
}

fn rgb(color: style::Color) -> RGBColor {
    RGBColor(color.r, color.g, color.b)
}

/// Plot range for an interval; zero-width intervals are widened to one unit
fn drawable_range(interval: Interval) -> Range<f64> {
    let center = interval.center();
    if interval.extent() > f64::EPSILON * center.abs().max(1.0) {
        interval.min..interval.max
    } else {
        (center - 0.5)..(center + 0.5)
    }
}

/// Widen one of the ranges so both get the same number of pixels per unit
///
/// `pixels` is the plotting area as (width, height). Ranges keep their centers.
fn equal_scale_ranges(
    horizontal: Range<f64>,
    vertical: Range<f64>,
    pixels: (u32, u32),
) -> (Range<f64>, Range<f64>) {
    let (width, height) = (f64::from(pixels.0), f64::from(pixels.1));
    if width == 0.0 || height == 0.0 {
        return (horizontal, vertical);
    }
    let units_per_pixel =
        ((horizontal.end - horizontal.start) / width).max((vertical.end - vertical.start) / height);
    (
        widen(horizontal, units_per_pixel * width),
        widen(vertical, units_per_pixel * height),
    )
}

fn widen(range: Range<f64>, extent: f64) -> Range<f64> {
    let center = (range.start + range.end) / 2.0;
    (center - extent / 2.0)..(center + extent / 2.0)
}

/// Tick label, without a sign on zero
fn format_tick(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{:.2}", rounded)
}

/// Far end of each world axis in chart coordinates, which are (x, z, y)
fn axis_label_anchors(x: &Range<f64>, y: &Range<f64>, z: &Range<f64>) -> [(f64, f64, f64); 3] {
    [
        (x.end, z.start, y.start),
        (x.start, z.start, y.end),
        (x.start, z.end, y.start),
    ]
}

macro_rules! draw_markers {
    ($chart:expr, $coords:expr, $marker:expr, $color:expr, $size:expr) => {{
        let size: i32 = $size;
        let style = ShapeStyle::from(&$color);
        match $marker {
            Marker::Dot => $chart.draw_series(
                $coords.map(|c| Circle::new(c, (size / 2).max(1), style.filled())),
            ),
            Marker::Circle => {
                $chart.draw_series($coords.map(|c| Circle::new(c, size, style.filled())))
            }
            Marker::Cross => $chart.draw_series($coords.map(|c| Cross::new(c, size, style))),
            Marker::Star => $chart.draw_series($coords.map(|c| {
                EmptyElement::at(c)
                    + Cross::new((0, 0), size, style)
                    + PathElement::new(vec![(0, -size), (0, size)], style)
                    + PathElement::new(vec![(-size, 0), (size, 0)], style)
            })),
        }
        .map(|_| ())
        .map_err(render_err)
    }};
}

fn draw_figure<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>, figure: &Figure) -> Result<()> {
    root.fill(&WHITE).map_err(render_err)?;
    let areas = root.split_evenly((2, 2));
    for (area, panel) in areas.iter().zip(&figure.panels) {
        match panel {
            Panel::Scene3d(panel) => draw_scene_panel(area, panel, figure)?,
            Panel::Projection(panel) => draw_projection_panel(area, panel, figure)?,
        }
    }
    root.present().map_err(render_err)?;
    Ok(())
}

fn draw_scene_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    panel: &Panel3d,
    figure: &Figure,
) -> Result<()> {
    let [x, y, z] = panel.bounds.axes.map(drawable_range);
    let anchors = axis_label_anchors(&x, &y, &z);

    let mut builder = ChartBuilder::on(area);
    builder.margin(10);
    if figure.show_text {
        builder.caption(&panel.title, CAPTION_FONT);
    }
    // plotters points its second axis up, which is where world z belongs
    let mut chart = builder.build_cartesian_3d(x, z, y).map_err(render_err)?;
    let view = figure.view;
    chart.with_projection(|mut projection| {
        projection.pitch = view.pitch;
        projection.yaw = view.yaw;
        projection.scale = view.scale;
        projection.into_matrix()
    });

    {
        let mut axes = chart.configure_axes();
        if !figure.show_text {
            axes.x_labels(0).y_labels(0).z_labels(0);
        }
        axes.draw().map_err(render_err)?;
    }
    if figure.show_text {
        chart
            .draw_series(
                panel
                    .labels
                    .iter()
                    .zip(anchors)
                    .map(|(label, anchor)| Text::new(*label, anchor, AXIS_LABEL_FONT)),
            )
            .map_err(render_err)?;
    }

    let size = figure.marker_size as i32;
    for series in &panel.series {
        let coords = series.points.iter().map(|p| (p[0], p[2], p[1]));
        match series.style {
            SeriesStyle::Line { color } => {
                chart
                    .draw_series(LineSeries::new(coords, rgb(color).stroke_width(2)))
                    .map_err(render_err)?;
            }
            SeriesStyle::Markers { marker, color } => {
                draw_markers!(chart, coords, marker, rgb(color), size)?;
            }
        }
    }
    Ok(())
}

fn draw_projection_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    panel: &Panel2d,
    figure: &Figure,
) -> Result<()> {
    let area = if figure.show_text {
        area.titled(&panel.title, CAPTION_FONT).map_err(render_err)?
    } else {
        area.clone()
    };
    let mut chart = projection_chart(&area, panel, figure.show_text)?;

    // an inverted vertical axis is drawn by negating y and un-negating tick labels
    let sign = if panel.invert_vertical { -1.0 } else { 1.0 };
    let format_horizontal = |v: &f64| format_tick(*v);
    let format_vertical = |v: &f64| format_tick(sign * v);
    {
        let mut mesh = chart.configure_mesh();
        if !panel.grid {
            mesh.disable_mesh();
        }
        if figure.show_text {
            mesh.x_desc(panel.labels.0)
                .y_desc(panel.labels.1)
                .x_label_formatter(&format_horizontal)
                .y_label_formatter(&format_vertical);
        }
        mesh.draw().map_err(render_err)?;
    }

    let size = figure.marker_size as i32;
    for series in &panel.series {
        let coords = series.points.iter().map(|p| (p[0], sign * p[1]));
        match series.style {
            SeriesStyle::Line { color } => {
                chart
                    .draw_series(LineSeries::new(coords, rgb(color).stroke_width(2)))
                    .map_err(render_err)?;
            }
            SeriesStyle::Markers { marker, color } => {
                draw_markers!(chart, coords, marker, rgb(color), size)?;
            }
        }
    }
    Ok(())
}

/// Chart for a projection panel, with equal pixel scale when the panel asks for it
fn projection_chart<'a, DB: DrawingBackend>(
    area: &'a DrawingArea<DB, Shift>,
    panel: &Panel2d,
    show_text: bool,
) -> Result<ProjectionChart<'a, DB>> {
    let horizontal = drawable_range(panel.bounds.axis(0));
    let vertical = drawable_range(panel.bounds.axis(1));
    let vertical = if panel.invert_vertical {
        -vertical.end..-vertical.start
    } else {
        vertical
    };

    let chart = build_projection_chart(area, show_text, horizontal.clone(), vertical.clone())?;
    if !panel.equal_aspect {
        return Ok(chart);
    }
    let pixels = chart.plotting_area().dim_in_pixel();
    let (horizontal, vertical) = equal_scale_ranges(horizontal, vertical, pixels);
    build_projection_chart(area, show_text, horizontal, vertical)
}

fn build_projection_chart<'a, DB: DrawingBackend>(
    area: &'a DrawingArea<DB, Shift>,
    show_text: bool,
    horizontal: Range<f64>,
    vertical: Range<f64>,
) -> Result<ProjectionChart<'a, DB>> {
    let mut builder = ChartBuilder::on(area);
    builder.margin(10);
    if show_text {
        builder.x_label_area_size(30).y_label_area_size(40);
    }
    builder
        .build_cartesian_2d(horizontal, vertical)
        .map_err(render_err)
}
