//! hueforge CLI - image to relief STL
//!
//! Converts an image into a height field and writes a watertight ASCII STL
//! relief ready for slicing.

use anyhow::{bail, Context, Result};
use clap::Parser;
use hueforge::{ReliefParams, DEFAULT_SOLID_NAME};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod config;
mod heightmap;

use config::Config;
use heightmap::PreprocessOptions;

#[derive(Parser, Debug)]
#[command(name = "hueforge")]
#[command(about = "Convert an image into a watertight relief STL", long_about = None)]
struct Cli {
    /// Input image path
    input: PathBuf,

    /// Output STL file path
    #[arg(short, long, default_value = "out.stl")]
    out: PathBuf,

    /// Max image dimension in px [default: 300]
    #[arg(long)]
    max_dim: Option<u32>,

    /// Contrast about the mean, 1.0 = unchanged [default: 1.0]
    #[arg(long)]
    contrast: Option<f32>,

    /// Gaussian blur sigma, 0 = off [default: 0.0]
    #[arg(long)]
    blur: Option<f32>,

    /// Make dark pixels high
    #[arg(long)]
    invert: bool,

    /// mm per pixel in X/Y [default: 0.5]
    #[arg(long)]
    scale_xy: Option<f64>,

    /// mm of height for value 1.0 [default: 10.0]
    #[arg(long, allow_hyphen_values = true)]
    z_scale: Option<f64>,

    /// Base thickness in mm [default: 2.0]
    #[arg(long, allow_hyphen_values = true)]
    base_thickness: Option<f64>,

    /// Solid name written to the STL header [default: hueforge_model]
    #[arg(long)]
    name: Option<String>,

    /// TOML settings file; flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Read the written file back and check its facet count
    #[arg(long)]
    verify: bool,

    /// Log more (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Layer flags over the config file.
    fn resolve(&self, config: Config) -> (PreprocessOptions, ReliefParams, String) {
        let mut opts = config.preprocess;
        if let Some(v) = self.max_dim {
            opts.max_dim = v;
        }
        if let Some(v) = self.contrast {
            opts.contrast = v;
        }
        if let Some(v) = self.blur {
            opts.blur = v;
        }
        opts.invert |= self.invert;

        let mut params = config.relief;
        if let Some(v) = self.scale_xy {
            params.scale_xy = v;
        }
        if let Some(v) = self.z_scale {
            params.z_scale = v;
        }
        if let Some(v) = self.base_thickness {
            params.base_thickness = v;
        }

        let name = self
            .name
            .clone()
            .or(config.name)
            .unwrap_or_else(|| DEFAULT_SOLID_NAME.to_string());

        (opts, params, name)
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    run(&cli)?;
    println!("Wrote: {}", cli.out.display());
    Ok(())
}

/// Image in, STL out. Returns the number of facets written.
fn run(cli: &Cli) -> Result<usize> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let (opts, params, name) = cli.resolve(config);

    let img = heightmap::load_image(&cli.input)?;
    let gray = heightmap::image_to_heightmap(&img, &opts)?;
    let field = heightmap::heightmap_to_field(&gray)
        .with_context(|| format!("{} cannot be meshed", cli.input.display()))?;

    let mesh = hueforge::export_watertight_stl(&field, &params, &name, &cli.out)
        .with_context(|| format!("failed to write {}", cli.out.display()))?;

    if cli.verify {
        let solid = hueforge::load_ascii_stl(&cli.out)
            .with_context(|| format!("failed to read back {}", cli.out.display()))?;
        if solid.mesh.len() != mesh.len() {
            bail!(
                "{} has {} facets, expected {}",
                cli.out.display(),
                solid.mesh.len(),
                mesh.len()
            );
        }
    }

    Ok(mesh.len())
}
