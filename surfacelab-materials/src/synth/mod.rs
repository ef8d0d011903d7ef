//! Procedural texture synthesis
//!
//! Each material kind has its own generator painting onto a [`Canvas`].
//! Generators draw every random parameter from the RNG they are handed, so a
//! seeded RNG reproduces a texture exactly while the default entry point
//! produces fresh grain on every call.

mod glass;
mod metal;
mod plastic;
mod wood;

use crate::canvas::Canvas;
use crate::kind::MaterialKind;
use crate::pixel_buffer::PixelBuffer;
use rand::Rng;

/// Texture resolution used by presets
pub const DEFAULT_RESOLUTION: u32 = 256;

/// Synthesize a texture for `kind` using a fresh thread-local RNG
pub fn synthesize(kind: MaterialKind, resolution: u32) -> PixelBuffer {
    synthesize_with(kind, resolution, &mut rand::thread_rng())
}

/// Synthesize a texture for `kind`, drawing randomness from `rng`
///
/// # Arguments
/// * `kind` - Which pattern to paint
/// * `resolution` - Width and height of the output in pixels
/// * `rng` - Source of the per-call random parameters
pub fn synthesize_with<R: Rng + ?Sized>(
    kind: MaterialKind,
    resolution: u32,
    rng: &mut R,
) -> PixelBuffer {
    let mut canvas = Canvas::new(resolution);
    match kind {
        MaterialKind::Wood => wood::paint(&mut canvas, rng),
        MaterialKind::Metal => metal::paint(&mut canvas, rng),
        MaterialKind::Glass => glass::paint(&mut canvas, rng),
        MaterialKind::Plastic => plastic::paint(&mut canvas, rng),
    }
    log::debug!("synthesized {} texture at {}x{}", kind, resolution, resolution);
    canvas.to_pixel_buffer()
}
