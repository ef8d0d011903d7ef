use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use surfacelab_core::{Bounded, FramingPolicy};

#[derive(Args)]
pub struct FrameArgs {
    /// Mesh file (OBJ)
    pub file: PathBuf,

    /// Camera distance per unit of the largest dimension
    #[arg(long)]
    pub distance_factor: Option<f32>,

    /// Camera height offset per unit of the largest dimension
    #[arg(long)]
    pub elevation_factor: Option<f32>,
}

pub fn run(args: &FrameArgs) -> Result<()> {
    let mesh = surfacelab_io::read_mesh(&args.file)
        .with_context(|| format!("reading {}", args.file.display()))?;

    let mut policy = FramingPolicy::default();
    if let Some(f) = args.distance_factor {
        policy.distance_factor = f;
    }
    if let Some(f) = args.elevation_factor {
        policy.elevation_factor = f;
    }

    let extent = mesh.extent();
    let frame = policy.frame(&extent);

    println!("File:            {}", args.file.display());
    println!("Vertices:        {}", mesh.vertex_count());
    println!("Faces:           {}", mesh.face_count());
    println!("Extent min:      {:?}", extent.min.coords.as_slice());
    println!("Extent max:      {:?}", extent.max.coords.as_slice());
    println!("Center:          {:?}", frame.center.coords.as_slice());
    println!("Size:            {:?}", frame.size.as_slice());
    println!("Recenter offset: {:?}", frame.recenter_offset.as_slice());
    println!("Camera position: {:?}", frame.camera_position.coords.as_slice());
    println!("Camera target:   {:?}", frame.camera_target.coords.as_slice());
    println!("Camera distance: {:.4}", frame.camera_distance());

    Ok(())
}
