use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use clap::Args;
use surfacelab_materials::MaterialKind;
use surfacelab_viewer::{
    BackgroundLoader, FileMeshLoader, HeadlessRenderer, SliderChannel, ViewerConfig,
    ViewerController, ViewerEvent,
};

#[derive(Args)]
pub struct ViewArgs {
    /// Viewer configuration (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Model name from the configuration, or a mesh path
    #[arg(short, long)]
    pub model: String,

    /// Material preset applied after loading
    #[arg(short, long)]
    pub preset: Option<MaterialKind>,

    /// Transparency slider in [0, 1]
    #[arg(long)]
    pub transparency: Option<f32>,

    /// Shadow slider in [0, 1]
    #[arg(long)]
    pub shadow: Option<f32>,

    /// Reflexivity slider in [0, 1]
    #[arg(long)]
    pub reflexivity: Option<f32>,

    /// Seed for reproducible textures
    #[arg(long)]
    pub seed: Option<u64>,

    /// Give up waiting for the model after this many seconds
    #[arg(long, default_value = "30")]
    pub timeout: u64,
}

pub fn run(args: &ViewArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => ViewerConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ViewerConfig::default(),
    };
    if !config.models.contains_key(&args.model) {
        // Allow a bare mesh path without a config entry
        let path = PathBuf::from(&args.model);
        if path.exists() {
            config.add_model(args.model.clone(), path);
        }
    }

    let mut controller = ViewerController::with_renderer(HeadlessRenderer::new(), config);
    if let Some(seed) = args.seed {
        controller = controller.with_seed(seed);
    }
    let loader = BackgroundLoader::new(FileMeshLoader);

    controller.request_model(&args.model, &loader)?;
    let deadline = Instant::now() + Duration::from_secs(args.timeout);
    while controller.is_loading() {
        if Instant::now() > deadline {
            bail!("timed out loading '{}'", args.model);
        }
        if let Some(message) = loader.recv_timeout(Duration::from_millis(100)) {
            controller.apply_message(message);
            controller.poll(&loader);
        }
    }

    let Some(model) = controller.model().cloned() else {
        bail!("model '{}' could not be loaded", args.model);
    };

    if let Some(kind) = args.preset {
        controller.handle_event(ViewerEvent::PresetSelected(kind))?;
    }
    let sliders = [
        (SliderChannel::Transparency, args.transparency),
        (SliderChannel::Shadow, args.shadow),
        (SliderChannel::Reflexivity, args.reflexivity),
    ];
    for (channel, value) in sliders {
        if let Some(value) = value {
            controller.handle_event(ViewerEvent::SliderChanged(channel, value))?;
        }
    }

    let renderer = controller.renderer();
    println!(
        "Model:           {} ({} vertices, {} faces)",
        model.name, model.vertex_count, model.face_count
    );
    println!("Size:            {:?}", model.frame.size.as_slice());
    println!("Recenter offset: {:?}", model.frame.recenter_offset.as_slice());
    println!("Camera position: {:?}", controller.camera().position.coords.as_slice());
    println!("Camera target:   {:?}", controller.camera().target.coords.as_slice());

    if let Some(material) = renderer.material() {
        let s = material.shading;
        println!(
            "Material:        {} ({}x{})",
            material.kind, material.resolution, material.resolution
        );
        println!("Roughness:       {}", s.roughness);
        println!("Metalness:       {}", s.metalness);
        println!("Opacity:         {}", s.opacity);
        println!("Transparent:     {}", s.transparent);
        println!("Key light:       {}", s.light_intensity);
    }
    println!("Released:        {} material(s)", renderer.released().len());

    Ok(())
}
