use std::time::Instant;

use log::{info, warn, Level};
use voxstrip::prelude::*;

const USAGE: &str = "usage: voxstrip [mesh.obj] [--width W] [--scale S]";

struct Args {
    mesh: Option<String>,
    width: f64,
    scale: f64,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        mesh: None,
        width: 1.0,
        scale: 1.0,
    };
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--width" | "--scale" => {
                let value = iter
                    .next()
                    .ok_or_else(|| format!("missing value for {arg}\n{USAGE}"))?
                    .parse::<f64>()
                    .map_err(|e| format!("bad value for {arg}: {e}"))?;
                if arg == "--width" {
                    args.width = value;
                } else {
                    args.scale = value;
                }
            }
            "-h" | "--help" => return Err(USAGE.to_string()),
            _ if args.mesh.is_none() => args.mesh = Some(arg),
            _ => return Err(format!("unexpected argument {arg}\n{USAGE}")),
        }
    }
    Ok(args)
}

/// Circular contours stacked along z, with the point count changing from
/// one slice to the next so both strip and fan triangles show up.
fn synthetic_slices(scale: f64) -> Vec<Vec<Vec3>> {
    (0..8)
        .map(|k| {
            let z = k as f64 * 4.0;
            let radius = 20.0 + 3.0 * k as f64;
            let count = 24 + 4 * (k % 3);
            (0..count)
                .map(|i| {
                    let angle = i as f64 / count as f64 * std::f64::consts::TAU;
                    Vec3::new(radius * angle.cos(), radius * angle.sin(), z) * scale
                })
                .collect()
        })
        .collect()
}

fn main() -> Result<(), String> {
    simple_logger::init_with_level(Level::Info).map_err(|e| e.to_string())?;
    let args = parse_args()?;

    let config = RasterConfig::new(args.width)
        .map_err(|e| e.to_string())?
        .with_degenerate_policy(DegeneratePolicy::Skip);
    let rasterizer = SurfaceRasterizer::new(config);
    info!(
        "Rasterizing with width {} (degenerate triangles: {})",
        config.width(),
        config.degenerate_policy()
    );

    let triangles: Vec<Triangle> = match &args.mesh {
        Some(path) => {
            let meshes = Mesh::load_all_from_obj(path).map_err(|e| e.to_string())?;
            if meshes.is_empty() {
                warn!("{path} contains no objects");
            }
            meshes
                .into_iter()
                .flat_map(|mesh| {
                    info!("Mesh '{}': {} faces", mesh.name(), mesh.faces().len());
                    mesh.scaled(args.scale).triangles().collect::<Vec<_>>()
                })
                .collect()
        }
        None => {
            let slices = synthetic_slices(args.scale);
            info!("No mesh given, using {} synthetic slices", slices.len());
            build_triangles(&slices)
        }
    };

    let start = Instant::now();
    let mut voxels = rasterize_all(&rasterizer, &triangles).map_err(|e| e.to_string())?;
    let elapsed = start.elapsed();
    let total = voxels.len();
    voxels.dedup();

    info!(
        "{} triangles -> {} voxels ({} unique) in {:.2?}",
        triangles.len(),
        total,
        voxels.len(),
        elapsed
    );
    if let Some((min, max)) = voxels.bounds() {
        info!("Voxel bounds: {min:?} .. {max:?}");
    }
    Ok(())
}
