//! Reconstruction comparison demo
//!
//! A ring of cameras surrounds a set of ground-truth points. A noisy copy of
//! the points stands in for a reconstruction, and both are drawn together so
//! that the error is visible in every view. Red is the reconstruction.

use anyhow::{Context, Result};
use clap::Parser;
use nalgebra::Vector3;
use rand::{rngs::StdRng, Rng, SeedableRng};
use scenescope_core::{Camera, Point3d, PointSet};
use scenescope_visualization::{save_figure, FigureOptions, Scene};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Compare reconstructed points against ground truth")]
struct Args {
    /// Output SVG file
    #[arg(short, long, default_value = "reconstruction_comparison.svg")]
    output: PathBuf,

    /// Length of the viewing rays in world units
    #[arg(long, default_value_t = 6.0)]
    look_length: f64,

    /// Number of cameras on the ring
    #[arg(long, default_value_t = 6)]
    cameras: usize,

    /// Radius of the camera ring
    #[arg(long, default_value_t = 10.0)]
    radius: f64,

    /// Number of ground-truth points
    #[arg(long, default_value_t = 50)]
    points: usize,

    /// Largest per-coordinate reconstruction error
    #[arg(long, default_value_t = 0.1)]
    noise: f64,

    /// Seed for the point generator
    #[arg(long, default_value_t = 7)]
    seed: u64,

    /// JSON file overriding the comparison figure options
    #[arg(long)]
    options: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let options = match &args.options {
        Some(path) => FigureOptions::load(path)
            .with_context(|| format!("failed to load figure options from {}", path.display()))?,
        None => FigureOptions::comparison(),
    };

    let up = Vector3::new(0.0, 0.0, 1.0);
    let cameras = (0..args.cameras)
        .map(|i| {
            let angle = i as f64 * std::f64::consts::TAU / args.cameras as f64;
            let center = Point3d::new(args.radius * angle.cos(), args.radius * angle.sin(), 2.0);
            Camera::look_at(center, Point3d::origin(), up)
        })
        .collect::<scenescope_core::Result<Vec<_>>>()?;

    let mut rng = StdRng::seed_from_u64(args.seed);
    let truth: PointSet = (0..args.points)
        .map(|_| {
            Point3d::new(
                rng.gen_range(-2.0..2.0),
                rng.gen_range(-2.0..2.0),
                rng.gen_range(-2.0..2.0),
            )
        })
        .collect();
    let noise = args.noise.abs();
    let recovered: PointSet = truth
        .iter()
        .map(|p| {
            let offset = Vector3::from_fn(|_, _| {
                if noise > 0.0 {
                    rng.gen_range(-noise..noise)
                } else {
                    0.0
                }
            });
            *p + offset
        })
        .collect();

    let rms = recovered.rms_error(&truth)?;
    let scene = Scene::reconstruction_comparison(&cameras, &recovered, &truth, args.look_length)?;
    save_figure(&scene, &options, &args.output)?;
    println!("Saved comparison to {}", args.output.display());
    println!("RMS reconstruction error: {:.4}", rms);
    println!("Legend: blue stars are ground truth, red crosses are reconstructed");
    Ok(())
}
