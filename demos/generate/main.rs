//! Generates the reference notch mesh and writes it as a keyword file.
//!
//! Usage:
//! ```text
//! cargo run --example generate                  # writes output.k
//! cargo run --example generate -- fine.inc      # custom output path
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use notchmesh::domain::DomainSpec;
use notchmesh::mesh::GenerateMesh;

fn main() -> ExitCode {
    // Default: WARN for everything, INFO for notchmesh.
    // Override with RUST_LOG env var (e.g. RUST_LOG=notchmesh=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("notchmesh=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let output = std::env::args_os()
        .nth(1)
        .map_or_else(|| PathBuf::from("output.k"), PathBuf::from);

    let spec = DomainSpec::default();
    match GenerateMesh::new(&spec).write_to(&output) {
        Ok(mesh) => {
            let (surrounding, embedded) = mesh.material_counts();
            println!(
                "{} nodes, {} elements ({surrounding} surrounding, {embedded} embedded)",
                mesh.nodes.len(),
                mesh.elements.len(),
            );
            println!("Mesh written to {}.", output.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
