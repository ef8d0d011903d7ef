//! Core data structures and traits for surfacelab
//!
//! This crate provides the geometry side of the viewer: points and vectors,
//! triangle meshes, axis-aligned extents, and the auto-framing computation
//! that recentres a model and places the camera from its size.

pub mod point;
pub mod mesh;
pub mod extent;
pub mod framing;
pub mod traits;
pub mod transform;
pub mod error;

pub use point::*;
pub use mesh::*;
pub use extent::*;
pub use framing::*;
pub use traits::*;
pub use transform::*;
pub use error::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Point3, Vector3, Matrix4};
