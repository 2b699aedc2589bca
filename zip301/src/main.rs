use std::{path::PathBuf, time::Instant};

use clap::Parser;
use log::info;
use zip301::{compress_file, paths::DEFAULT_EXTENSION};

/// Compresses a file with static Huffman coding.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File to compress
    source: PathBuf,
    /// The archive is written as `<basename>.<extension>301`
    #[arg(short, long, default_value = DEFAULT_EXTENSION)]
    extension: String,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let started = Instant::now();
    let args = Args::parse();

    let archive = compress_file(&args.source, &args.extension)?;

    println!("Zip301 Generated: {}", archive.display());
    info!("compressed {} in {:?}", args.source.display(), started.elapsed());
    Ok(())
}
