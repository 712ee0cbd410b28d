use std::{path::PathBuf, time::Instant};

use anyhow::Context;
use clap::Parser;
use log::{info, LevelFilter};

use lucent::{scene::Scene, scenes};

#[derive(Parser)]
#[command(name = "lucent", about = "Brute-force recursive ray tracer")]
struct Args {
    /// Scene to render
    scene: String,

    /// Worker thread count
    #[arg(long, default_value_t = 12, value_parser = clap::value_parser!(u16).range(1..1024))]
    threads: u16,

    /// Output image path
    #[arg(short, long, default_value = "render.png")]
    output: PathBuf,

    /// Record a per-surface incidence trace (very verbose)
    #[arg(long)]
    trace: bool,
}

fn scene_listing() -> String {
    let names: Vec<_> = scenes::generators()
        .iter()
        .map(|(name, _)| format!("  {name}"))
        .collect();
    format!("available scenes:\n{}", names.join("\n"))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if args.trace {
            LevelFilter::Trace
        } else {
            LevelFilter::Info
        })
        .init();

    let generator = scenes::by_name(&args.scene)
        .map_err(|err| anyhow::anyhow!("{err}\n{}", scene_listing()))?;

    let mut scene = Scene::default();
    let camera = generator(&mut scene);
    scene.finalize();

    let start = Instant::now();
    let framebuffer = camera.snap(&scene, args.threads as usize, args.trace)?;
    info!("rendered in {:.2}s", start.elapsed().as_secs_f64());

    framebuffer
        .save(&args.output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    info!("wrote {}", args.output.display());

    Ok(())
}
