//! Parses a keyword mesh file and exports `nodes.csv` and `elements.csv`.
//!
//! Usage:
//! ```text
//! cargo run --example parse -- fine.inc          # tables next to the input
//! cargo run --example parse -- fine.inc out/     # tables in out/
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use notchmesh::codec::{export_tables, read_mesh_file};

fn main() -> ExitCode {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("notchmesh=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut args = std::env::args_os().skip(1);
    let Some(input) = args.next().map(PathBuf::from) else {
        eprintln!("usage: parse <mesh file> [output dir]");
        return ExitCode::FAILURE;
    };
    let out_dir = args.next().map_or_else(
        || input.parent().map_or_else(|| PathBuf::from("."), Path::to_path_buf),
        PathBuf::from,
    );

    let result = read_mesh_file(&input).and_then(|tables| {
        export_tables(&out_dir, &tables)?;
        Ok(tables)
    });
    match result {
        Ok(tables) => {
            println!(
                "{} nodes, {} elements exported to {}",
                tables.nodes.len(),
                tables.elements.len(),
                out_dir.display()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
