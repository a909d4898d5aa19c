//! quadrs CLI - merge near-right triangle pairs of an STL mesh into quads.
//!
//! Usage: quadrs [OPTIONS] <INPUT>
//!
//! Set `RUST_LOG=debug` to see per-stage counts.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use log::info;

use quadrs::float_types::Real;
use quadrs::io::{obj, stl::TriangleMesh};
use quadrs::{Quadifier, QuadifierParams};

#[derive(Parser)]
#[command(name = "quadrs")]
#[command(author, version, about = "Quadify triangle meshes for cloth simulation", long_about = None)]
struct Cli {
    /// Input STL file
    input: PathBuf,

    /// Write the mixed triangle/quad mesh as OBJ
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Apex angle (degrees) a triangle's longest edge has to face to be a diagonal
    #[arg(long)]
    diagonal_angle: Option<Real>,

    /// Largest |cos| of an interior angle a merged quad may have
    #[arg(long)]
    max_quad_cosine: Option<Real>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let mut params = QuadifierParams::default();
    if let Some(degrees) = cli.diagonal_angle {
        params = params.with_diagonal_angle_degrees(degrees);
    }
    if let Some(cosine) = cli.max_quad_cosine {
        params = params.with_max_quad_cosine(cosine);
    }

    let mesh = TriangleMesh::from_stl(&fs::read(&cli.input)?)?;
    info!(
        "Loaded {}: {} points, {} triangles",
        cli.input.display(),
        mesh.points.len(),
        mesh.triangles.len()
    );

    let start = Instant::now();
    let mut quadifier = Quadifier::with_params(params);
    quadifier.quadify(&mesh.descriptor())?;
    info!("Quadified in {:.2?}", start.elapsed());
    println!("{}", quadifier.stats());

    if let Some(output) = cli.output {
        let name = output
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("quadrs");
        let mut file = fs::File::create(&output)?;
        obj::write_obj(&quadifier.descriptor(), name, &mut file)?;
        info!("Wrote {}", output.display());
    }

    Ok(())
}
