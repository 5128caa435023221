//! Headless surface driver: animates the wave field for a fixed number of
//! frames and reports timing and height statistics.

use std::time::Instant;

use clap::Parser;
use log::info;

use swellgrid::host::{BufferMesh, HostMesh};
use swellgrid::params::{GridConfig, WaveField};
use swellgrid::surface::WaveSurface;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "swellgrid")]
#[command(about = "Animated Gerstner wave surface, headless", long_about = None)]
struct Args {
    /// Number of frames to simulate
    #[arg(long, value_name = "FRAMES", default_value = "600")]
    frames: u32,

    /// Simulated frame rate (frames per second)
    #[arg(long, value_name = "FPS", default_value = "60")]
    fps: u32,

    /// Vertices per grid side
    #[arg(long, value_name = "COUNT", default_value = "100")]
    grid_verts: usize,

    /// Grid extent per side (world units)
    #[arg(long, value_name = "UNITS", default_value = "200")]
    grid_size: f32,

    /// Rotate the wave field to this heading (degrees) halfway through
    #[arg(long, value_name = "DEGREES")]
    turn: Option<f32>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let config = GridConfig {
        width_verts: args.grid_verts,
        length_verts: args.grid_verts,
        width: args.grid_size,
        length: args.grid_size,
    };

    let mut surface = match WaveSurface::new(&config, WaveField::default()) {
        Ok(surface) => surface,
        Err(err) => {
            eprintln!("invalid surface configuration: {err}");
            std::process::exit(1);
        }
    };

    let mut mesh = BufferMesh::new();
    surface.attach(&mut mesh);

    let packed = mesh.packed_vertices();
    let upload: &[u8] = bytemuck::cast_slice(&packed);
    info!(
        "attached: {} vertices, {} triangles, {} byte vertex buffer",
        mesh.vertices().len(),
        mesh.indices().len() / 3,
        upload.len()
    );

    let dt = 1.0 / args.fps.max(1) as f32;
    let started = Instant::now();
    let mut peak = f32::MIN;
    let mut trough = f32::MAX;

    for frame in 0..args.frames {
        if let Some(heading) = args.turn {
            if frame == args.frames / 2 {
                info!("turning wave field to {heading} degrees");
                surface.field_mut().set_direction(heading);
            }
        }

        surface.update(&mut mesh, frame as f32 * dt);

        for vertex in mesh.vertices() {
            peak = peak.max(vertex.y);
            trough = trough.min(vertex.y);
        }
    }

    let elapsed = started.elapsed();
    let per_frame_ms = elapsed.as_secs_f64() * 1e3 / f64::from(args.frames.max(1));
    println!(
        "{} frames over {:.2?} ({per_frame_ms:.3} ms/frame)",
        args.frames, elapsed
    );
    println!("surface height range: {trough:.3} .. {peak:.3}");

    let mut sum = 0.0f64;
    let mut count = 0u32;
    surface.draw_markers(|vertex| {
        sum += f64::from(vertex.y);
        count += 1;
    });
    println!("mean vertex height: {:.3}", sum / f64::from(count.max(1)));
}
