//! # surfacelab materials
//!
//! Procedural surface materials for the viewer:
//! - `MaterialKind`: the selectable material looks
//! - `Canvas`: a small straight-alpha raster used by the pattern generators
//! - `synth`: per-kind texture generators producing a `PixelBuffer`
//! - `preset`: the shading parameter table and `resolve_preset`

pub mod kind;
pub mod canvas;
pub mod pixel_buffer;
pub mod synth;
pub mod preset;

// Re-export commonly used items
pub use kind::*;
pub use canvas::{Canvas, Rgba};
pub use pixel_buffer::*;
pub use synth::{synthesize, synthesize_with, DEFAULT_RESOLUTION};
pub use preset::*;
