//! Stereo pair demo
//!
//! Two slightly converging cameras look at a cloud of points in front of
//! them. The figure shows the 3D scene, the cameras' viewing rays and the
//! XZ, YZ and XY projections.

use anyhow::{Context, Result};
use clap::Parser;
use nalgebra::Vector3;
use rand::{rngs::StdRng, Rng, SeedableRng};
use scenescope_core::{Camera, Point3d, PointSet};
use scenescope_visualization::{save_figure, FigureOptions, Scene};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Render a stereo pair and its triangulated points")]
struct Args {
    /// Output SVG file
    #[arg(short, long, default_value = "stereo_scene.svg")]
    output: PathBuf,

    /// Length of the viewing rays in world units
    #[arg(long, default_value_t = 20.0)]
    look_length: f64,

    /// Distance between the two camera centers
    #[arg(long, default_value_t = 4.0)]
    baseline: f64,

    /// Number of scene points
    #[arg(long, default_value_t = 200)]
    points: usize,

    /// Seed for the point generator
    #[arg(long, default_value_t = 7)]
    seed: u64,

    /// JSON file overriding the stereo figure options
    #[arg(long)]
    options: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let options = match &args.options {
        Some(path) => FigureOptions::load(path)
            .with_context(|| format!("failed to load figure options from {}", path.display()))?,
        None => FigureOptions::stereo(),
    };

    let target = Point3d::new(0.0, 0.0, 15.0);
    let up = Vector3::new(0.0, 1.0, 0.0);
    let half = args.baseline / 2.0;
    let left = Camera::look_at(Point3d::new(-half, 0.0, 0.0), target, up)?;
    let right = Camera::look_at(Point3d::new(half, 0.0, 0.0), target, up)?;

    let mut rng = StdRng::seed_from_u64(args.seed);
    let points: PointSet = (0..args.points)
        .map(|_| {
            Point3d::new(
                rng.gen_range(-4.0..4.0),
                rng.gen_range(-3.0..3.0),
                rng.gen_range(10.0..20.0),
            )
        })
        .collect();
    log::info!("generated {} scene points", points.len());

    let scene = Scene::stereo(&left, &right, &points, args.look_length)?;
    save_figure(&scene, &options, &args.output)?;
    println!("Saved stereo scene to {}", args.output.display());
    Ok(())
}
