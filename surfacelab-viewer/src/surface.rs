//! Active surface state and the slider-to-shading mapping

use crate::renderer::EnvironmentId;
use surfacelab_core::{Error, Result};
use surfacelab_materials::{MaterialKind, MaterialPreset, PixelBuffer};

/// Light intensity reached by the shadow slider at its maximum
pub const MAX_LIGHT_INTENSITY: f32 = 2.0;

/// The three user-facing sliders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SliderChannel {
    Transparency,
    Shadow,
    Reflexivity,
}

impl SliderChannel {
    pub fn name(self) -> &'static str {
        match self {
            SliderChannel::Transparency => "transparency",
            SliderChannel::Shadow => "shadow",
            SliderChannel::Reflexivity => "reflexivity",
        }
    }
}

/// Shading values derived from slider positions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadingOverlay {
    pub opacity: f32,
    pub transparent: bool,
    pub light_intensity: f32,
    pub metalness: f32,
}

/// Map the transparency, shadow and reflexivity factors to shading values.
///
/// Each output depends on exactly one input, so applying the sliders in any
/// order, or more than once, gives the same result.
pub fn map_sliders(transparency: f32, shadow: f32, reflexivity: f32) -> ShadingOverlay {
    let opacity = 1.0 - transparency;
    ShadingOverlay {
        opacity,
        transparent: opacity < 1.0,
        light_intensity: shadow * MAX_LIGHT_INTENSITY,
        metalness: reflexivity,
    }
}

/// Slider positions in [0, 1]; `None` until the user moves a slider
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SliderSettings {
    pub transparency: Option<f32>,
    pub shadow: Option<f32>,
    pub reflexivity: Option<f32>,
}

impl SliderSettings {
    pub fn get(&self, channel: SliderChannel) -> Option<f32> {
        match channel {
            SliderChannel::Transparency => self.transparency,
            SliderChannel::Shadow => self.shadow,
            SliderChannel::Reflexivity => self.reflexivity,
        }
    }

    /// Store a slider value, clamped to [0, 1]. Non-finite values are rejected.
    pub fn set(&mut self, channel: SliderChannel, value: f32) -> Result<f32> {
        if !value.is_finite() {
            return Err(Error::InvalidData(format!(
                "{} slider value must be finite, got {}",
                channel.name(),
                value
            )));
        }
        let value = value.clamp(0.0, 1.0);
        let slot = match channel {
            SliderChannel::Transparency => &mut self.transparency,
            SliderChannel::Shadow => &mut self.shadow,
            SliderChannel::Reflexivity => &mut self.reflexivity,
        };
        *slot = Some(value);
        Ok(value)
    }
}

/// Final shading pushed to the renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectiveShading {
    pub roughness: f32,
    pub metalness: f32,
    pub opacity: f32,
    pub transparent: bool,
    pub double_sided: bool,
    pub light_intensity: f32,
}

/// A material as handed to the renderer: the preset's texture, the shading
/// after sliders, and the environment map it reflects.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceMaterial {
    preset: MaterialPreset,
    shading: EffectiveShading,
    environment: Option<EnvironmentId>,
}

impl SurfaceMaterial {
    pub fn kind(&self) -> MaterialKind {
        self.preset.kind()
    }

    pub fn pixels(&self) -> &PixelBuffer {
        self.preset.pixels()
    }

    pub fn shading(&self) -> EffectiveShading {
        self.shading
    }

    pub fn environment(&self) -> Option<EnvironmentId> {
        self.environment
    }

    /// Give up the material, returning its texture
    pub fn into_pixels(self) -> PixelBuffer {
        self.preset.into_pixels()
    }
}

/// The material currently shown on the loaded mesh
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveSurfaceState {
    material: SurfaceMaterial,
    sliders: SliderSettings,
    default_light: f32,
}

impl ActiveSurfaceState {
    /// Build a surface from a preset, carrying over slider positions
    pub fn new(
        preset: MaterialPreset,
        sliders: SliderSettings,
        environment: Option<EnvironmentId>,
        default_light: f32,
    ) -> Self {
        let shading = effective_shading(&preset, &sliders, default_light);
        Self {
            material: SurfaceMaterial {
                preset,
                shading,
                environment,
            },
            sliders,
            default_light,
        }
    }

    pub fn kind(&self) -> MaterialKind {
        self.material.kind()
    }

    pub fn sliders(&self) -> SliderSettings {
        self.sliders
    }

    pub fn transparency(&self) -> Option<f32> {
        self.sliders.transparency
    }

    pub fn shadow(&self) -> Option<f32> {
        self.sliders.shadow
    }

    pub fn reflexivity(&self) -> Option<f32> {
        self.sliders.reflexivity
    }

    pub fn effective(&self) -> EffectiveShading {
        self.material.shading
    }

    pub fn material(&self) -> &SurfaceMaterial {
        &self.material
    }

    pub fn environment(&self) -> Option<EnvironmentId> {
        self.material.environment
    }

    /// Move one slider and recompute the shading in place
    pub fn set_slider(&mut self, channel: SliderChannel, value: f32) -> Result<EffectiveShading> {
        self.sliders.set(channel, value)?;
        self.material.shading =
            effective_shading(&self.material.preset, &self.sliders, self.default_light);
        Ok(self.material.shading)
    }

    /// Hand the material back for release
    pub fn into_material(self) -> SurfaceMaterial {
        self.material
    }
}

fn effective_shading(
    preset: &MaterialPreset,
    sliders: &SliderSettings,
    default_light: f32,
) -> EffectiveShading {
    let base = preset.shading();
    let overlay = map_sliders(
        sliders.transparency.unwrap_or(0.0),
        sliders.shadow.unwrap_or(0.0),
        sliders.reflexivity.unwrap_or(0.0),
    );

    let (opacity, transparent) = match sliders.transparency {
        Some(_) => (overlay.opacity, overlay.transparent),
        None => (base.opacity, base.transparent),
    };

    EffectiveShading {
        roughness: base.roughness,
        metalness: sliders.reflexivity.map_or(base.metalness, |_| overlay.metalness),
        opacity,
        transparent,
        double_sided: base.double_sided,
        light_intensity: sliders.shadow.map_or(default_light, |_| overlay.light_intensity),
    }
}
