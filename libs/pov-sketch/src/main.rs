use anyhow::{Context, Result};
use clap::Parser;
use config::constants::DEFAULT_TEMPLATE_PATH;
use log::{error, info};
use pov_image::{encoder, sketch};
use std::{
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
    time::Instant,
};

mod scene;

use scene::Scene;

#[derive(Parser, Debug, Clone)]
#[command(name = "pov-sketch", version)]
struct Args {
    /// JSON scene description to render.
    scene: PathBuf,

    /// Program template appended after the image array.
    #[arg(long, default_value = DEFAULT_TEMPLATE_PATH)]
    template: PathBuf,

    /// Sketch name; writes <output-dir>/<name>/<name>.ino. Defaults to the scene file stem.
    #[arg(long)]
    name: Option<String>,

    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Print the image array literal instead of writing a sketch.
    #[arg(long, default_value_t = false)]
    print: bool,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn sketch_name(args: &Args) -> Result<String> {
    if let Some(name) = &args.name {
        return Ok(name.clone());
    }
    args.scene
        .file_stem()
        .and_then(|stem| stem.to_str())
        .map(str::to_string)
        .with_context(|| format!("cannot derive a sketch name from {}", args.scene.display()))
}

fn read(path: &Path, what: &str) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("reading {what} {}", path.display()))
}

fn run(args: &Args) -> Result<()> {
    let started = Instant::now();
    let scene = Scene::from_json(&read(&args.scene, "scene")?)?;
    info!(
        "Rendering {} shapes from {}",
        scene.shapes.len(),
        args.scene.display()
    );

    let grid = scene.render()?;
    info!(
        "Rendered {} lit voxels in {:.2?}",
        grid.lit_count(),
        started.elapsed()
    );

    let literal = encoder::serialize_volume(&grid)?;
    if args.print {
        print!("{literal}");
        return Ok(());
    }

    let template = read(&args.template, "template")?;
    let name = sketch_name(args)?;
    let program = encoder::assemble_program(&literal, &template);
    let path = sketch::write_program(&program, &args.output_dir, &name)?;
    println!("Wrote sketch to {}", path.display());
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
