use std::path::{Path, PathBuf};

use clap::Parser;
use serde::Deserialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use perlin_core::{NoiseGrid, Seed};

#[derive(Parser)]
#[command(name = "perlin-field")]
#[command(about = "Generate a deterministic 2D Perlin-noise field")]
struct Args {
    /// Seed for reproducible output; numeric strings are taken as integer
    /// seeds, anything else as a text seed. Omit for OS entropy.
    #[arg(long)]
    seed: Option<String>,

    #[arg(long, default_value_t = 512)]
    width: u32,

    #[arg(long, default_value_t = 256)]
    height: u32,

    /// Number of blended noise layers; higher means smoother output.
    #[arg(long, default_value_t = 10)]
    octaves: u32,

    /// Where to write the grayscale PNG.
    #[arg(long, default_value = "noise.png")]
    output: PathBuf,

    /// JSON preset file; explicit flags override its values.
    #[arg(long)]
    preset: Option<PathBuf>,

    /// Print min/max/mean of the generated field.
    #[arg(long)]
    stats: bool,
}

/// Subset of options loadable from a JSON preset file.
#[derive(Debug, Default, Deserialize)]
struct Preset {
    seed: Option<String>,
    width: Option<u32>,
    height: Option<u32>,
    octaves: Option<u32>,
}

fn parse_seed(raw: &str) -> Seed {
    match raw.parse::<u64>() {
        Ok(v) => Seed::Int(v),
        Err(_) => Seed::Text(raw.to_string()),
    }
}

/// Fold preset values under the command line: a flag left at its default
/// yields to the preset, an explicit flag wins.
fn apply_preset(args: &mut Args, preset: Preset, matches: &clap::ArgMatches) {
    let defaulted = |id: &str| {
        matches.value_source(id) != Some(clap::parser::ValueSource::CommandLine)
    };

    if args.seed.is_none() {
        args.seed = preset.seed;
    }
    if defaulted("width") {
        if let Some(width) = preset.width {
            args.width = width;
        }
    }
    if defaulted("height") {
        if let Some(height) = preset.height {
            args.height = height;
        }
    }
    if defaulted("octaves") {
        if let Some(octaves) = preset.octaves {
            args.octaves = octaves;
        }
    }
}

fn write_png(grid: &NoiseGrid, path: &Path) -> Result<(), image::ImageError> {
    let img = image::GrayImage::from_fn(grid.width(), grid.height(), |x, y| {
        image::Luma([(grid.get(x, y) * 255.0).round() as u8])
    });
    img.save(path)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let matches = <Args as clap::CommandFactory>::command().get_matches();
    let mut args = <Args as clap::FromArgMatches>::from_arg_matches(&matches)?;

    if let Some(path) = args.preset.clone() {
        let raw = std::fs::read_to_string(&path)?;
        let preset: Preset = serde_json::from_str(&raw)?;
        apply_preset(&mut args, preset, &matches);
    }

    let seed = args.seed.as_deref().map(parse_seed);
    info!(
        width = args.width,
        height = args.height,
        octaves = args.octaves,
        seeded = seed.is_some(),
        "generating field"
    );

    let grid = perlin_core::generate(seed, args.width, args.height, args.octaves)?;

    if args.stats {
        let cells = grid.as_slice();
        let min = cells.iter().copied().fold(f32::INFINITY, f32::min);
        let max = cells.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        let mean = cells.iter().sum::<f32>() / cells.len() as f32;
        println!("min={min:.6} max={max:.6} mean={mean:.6}");
    }

    write_png(&grid, &args.output)?;
    info!(path = %args.output.display(), "wrote field");

    Ok(())
}
