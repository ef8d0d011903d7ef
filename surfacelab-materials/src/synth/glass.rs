//! Glass: translucent tint with refraction bands and faint ripples

use crate::canvas::{Canvas, Rgba};
use rand::Rng;

const BAND_COUNT: u32 = 8;
const BAND_JITTER: f32 = 10.0;
const BASE_ALPHA: f32 = 0.35;

pub(super) fn base_color() -> Rgba {
    Rgba::rgb8(190, 215, 235).with_alpha(BASE_ALPHA)
}

pub(super) fn paint<R: Rng + ?Sized>(canvas: &mut Canvas, rng: &mut R) {
    let size = canvas.size() as f32;
    canvas.fill(base_color());

    let tint = Rgba::rgb8(215, 235, 250);
    let spacing = size / BAND_COUNT as f32;
    let band_width = spacing / 2.0;
    for i in 0..BAND_COUNT {
        let x = (i as f32 + 0.5) * spacing + rng.gen_range(-BAND_JITTER..=BAND_JITTER);
        canvas.fill_band(
            x - band_width / 2.0,
            x + band_width / 2.0,
            &[
                (0.0, tint.with_alpha(0.0)),
                (0.5, tint.with_alpha(0.18)),
                (1.0, tint.with_alpha(0.0)),
            ],
        );
    }

    let ripple = Rgba::rgb8(235, 245, 255).with_alpha(0.08);
    let mut y = rng.gen_range(0.0f32..30.0);
    while y < size {
        let period = rng.gen_range(30.0f32..=50.0);
        let phase = rng.gen_range(0.0f32..std::f32::consts::TAU);
        canvas.stroke_wave(y, 1.0, 2.5, std::f32::consts::TAU / period, phase, ripple);
        y += period;
    }
}
