use std::path::PathBuf;

use anyhow::{ensure, Context, Result};
use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;
use surfacelab_materials::{resolve_preset_with, MaterialKind, DEFAULT_RESOLUTION};

#[derive(Args)]
pub struct SynthArgs {
    /// Material kind (wood, metal, glass, plastic)
    #[arg(short, long)]
    pub kind: MaterialKind,

    /// Texture width and height in pixels
    #[arg(short, long, default_value_t = DEFAULT_RESOLUTION)]
    pub resolution: u32,

    /// Seed for reproducible textures
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output PNG path
    #[arg(short, long)]
    pub output: PathBuf,
}

pub fn run(args: &SynthArgs) -> Result<()> {
    ensure!(args.resolution > 0, "resolution must be positive");

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let preset = resolve_preset_with(args.kind, args.resolution, &mut rng);
    preset
        .pixels()
        .save_png(&args.output)
        .with_context(|| format!("writing {}", args.output.display()))?;

    let shading = preset.shading();
    println!("Kind:         {}", preset.kind());
    println!("Resolution:   {}x{}", args.resolution, args.resolution);
    println!("Roughness:    {}", shading.roughness);
    println!("Metalness:    {}", shading.metalness);
    println!("Opacity:      {}", shading.opacity);
    println!("Transparent:  {}", shading.transparent);
    println!("Double sided: {}", shading.double_sided);
    println!("Written:      {}", args.output.display());

    Ok(())
}
