//! I/O operations for meshes
//!
//! This crate reads and writes the mesh files the viewer loads. Format
//! detection is by file extension; OBJ is the supported format.

pub mod obj;
pub mod progress;
pub mod error;

pub use error::*;
pub use progress::ProgressReader;

use std::path::Path;
use surfacelab_core::{Result, TriangleMesh};

/// Trait for reading meshes from files
pub trait MeshReader {
    fn read_mesh<P: AsRef<Path>>(path: P) -> Result<TriangleMesh>;
}

/// Trait for writing meshes to files
pub trait MeshWriter {
    fn write_mesh<P: AsRef<Path>>(mesh: &TriangleMesh, path: P) -> Result<()>;
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_ascii_lowercase())
}

/// Auto-detect format and read mesh
pub fn read_mesh<P: AsRef<Path>>(path: P) -> Result<TriangleMesh> {
    read_mesh_with_progress(path, &mut |_| {})
}

/// Auto-detect format and read mesh, reporting the fraction of bytes consumed
pub fn read_mesh_with_progress<P: AsRef<Path>>(
    path: P,
    progress: &mut dyn FnMut(f32),
) -> Result<TriangleMesh> {
    let path = path.as_ref();
    match extension(path).as_deref() {
        Some("obj") => obj::ObjReader::read_mesh_with_progress(path, progress),
        _ => Err(IoError::InvalidFormat {
            format: format!("{:?} ({})", path.extension(), path.display()),
        }
        .into()),
    }
}

/// Auto-detect format and write mesh
pub fn write_mesh<P: AsRef<Path>>(mesh: &TriangleMesh, path: P) -> Result<()> {
    let path = path.as_ref();
    match extension(path).as_deref() {
        Some("obj") => obj::ObjWriter::write_mesh(mesh, path),
        _ => Err(IoError::InvalidFormat {
            format: format!("{:?} ({})", path.extension(), path.display()),
        }
        .into()),
    }
}
