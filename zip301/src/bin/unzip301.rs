use std::{path::PathBuf, time::Instant};

use clap::Parser;
use log::info;
use zip301::decompress_file;

/// Restores a file compressed by zip301.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Archive to decompress
    archive: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let started = Instant::now();
    let args = Args::parse();

    let restored = decompress_file(&args.archive)?;

    println!("Decompression completed: {}", restored.display());
    info!(
        "decompressed {} in {:?}",
        args.archive.display(),
        started.elapsed()
    );
    Ok(())
}
