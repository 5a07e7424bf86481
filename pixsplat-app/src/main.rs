//! Pixsplat
//!
//! Converts a 2D image (optionally paired with a per-pixel depth map) into
//! an unoptimized 3D Gaussian splat scene: one splat per pixel, written as
//! a binary PLY file compatible with real-time radiance-field renderers.
//! Without a depth map, adjacent same-color splats are coalesced to reduce
//! the vertex count.

mod errors;
mod pipeline;

use clap::Parser;
use std::path::PathBuf;

/// Pixsplat - one unoptimized Gaussian splat per image pixel
#[derive(Parser, Debug)]
#[command(name = "pixsplat")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the input image
    image: PathBuf,

    /// Optional depth map; must match the image dimensions exactly
    depth: Option<PathBuf>,

    /// Output .ply path (defaults to a scratch file under the temp dir)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt::init();

    // Argument errors exit with status 1 (not clap's default 2) to match
    // the documented contract; help and version still exit 0.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            std::process::exit(if e.use_stderr() { 1 } else { 0 });
        }
    };

    let output = match args.output {
        Some(path) => path,
        None => match default_output_path() {
            Ok(path) => path,
            Err(e) => {
                eprintln!("Failed to prepare scratch directory: {}", e);
                std::process::exit(1);
            }
        },
    };

    if let Err(e) = pipeline::run(&args.image, args.depth.as_deref(), &output) {
        eprintln!("Conversion failed: {}", e);
        std::process::exit(1);
    }
}

/// Fixed scratch location used when no -o/--output is given. The scratch
/// directory is created here; an explicit output path is used as-is.
fn default_output_path() -> std::io::Result<PathBuf> {
    let dir = std::env::temp_dir().join("splatting");
    std::fs::create_dir_all(&dir)?;
    Ok(dir.join("scene.ply"))
}
