//! Material presets: a synthesized texture plus the kind's shading parameters

use crate::kind::{MaterialKind, ShadingParams};
use crate::pixel_buffer::PixelBuffer;
use crate::synth::{synthesize_with, DEFAULT_RESOLUTION};
use rand::Rng;

/// One selectable material look, ready for a renderer.
///
/// A preset is never modified after creation; changing material means
/// resolving a new preset and dropping this one together with its pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialPreset {
    kind: MaterialKind,
    pixels: PixelBuffer,
    shading: ShadingParams,
}

impl MaterialPreset {
    pub fn kind(&self) -> MaterialKind {
        self.kind
    }

    pub fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }

    pub fn shading(&self) -> ShadingParams {
        self.shading
    }

    pub fn roughness(&self) -> f32 {
        self.shading.roughness
    }

    pub fn metalness(&self) -> f32 {
        self.shading.metalness
    }

    pub fn opacity(&self) -> f32 {
        self.shading.opacity
    }

    pub fn is_transparent(&self) -> bool {
        self.shading.transparent
    }

    pub fn double_sided(&self) -> bool {
        self.shading.double_sided
    }

    /// Give up the preset, returning its texture
    pub fn into_pixels(self) -> PixelBuffer {
        self.pixels
    }
}

/// Resolve a preset at the default resolution with fresh randomness
pub fn resolve_preset(kind: MaterialKind) -> MaterialPreset {
    resolve_preset_with(kind, DEFAULT_RESOLUTION, &mut rand::thread_rng())
}

/// Resolve a preset at `resolution`, drawing texture randomness from `rng`
pub fn resolve_preset_with<R: Rng + ?Sized>(
    kind: MaterialKind,
    resolution: u32,
    rng: &mut R,
) -> MaterialPreset {
    MaterialPreset {
        kind,
        pixels: synthesize_with(kind, resolution, rng),
        shading: kind.shading(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_preset_uses_default_resolution() {
        let preset = resolve_preset(MaterialKind::Wood);
        assert_eq!(preset.pixels().resolution(), DEFAULT_RESOLUTION);
        assert_eq!(preset.kind(), MaterialKind::Wood);
    }

    #[test]
    fn test_seeded_presets_match() {
        let a = resolve_preset_with(MaterialKind::Glass, 32, &mut StdRng::seed_from_u64(9));
        let b = resolve_preset_with(MaterialKind::Glass, 32, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
        assert_eq!(a.into_pixels().resolution(), 32);
    }
}
