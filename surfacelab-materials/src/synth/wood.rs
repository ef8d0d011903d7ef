//! Wood: grain lines over a warm base with a single knot

use crate::canvas::{Canvas, Rgba};
use rand::Rng;

const GRAIN_AMPLITUDE: f32 = 3.0;
const GRAIN_FREQUENCY: f32 = 0.05;

pub(super) fn base_color() -> Rgba {
    Rgba::rgb8(150, 100, 55)
}

pub(super) fn paint<R: Rng + ?Sized>(canvas: &mut Canvas, rng: &mut R) {
    let size = canvas.size() as f32;
    canvas.fill(base_color());

    let grain = Rgba::rgb8(95, 60, 30);
    let mut y = rng.gen_range(0.0f32..6.0);
    while y < size + GRAIN_AMPLITUDE {
        let width = rng.gen_range(0.6f32..2.2);
        let alpha = rng.gen_range(0.15f32..0.45);
        let phase = rng.gen_range(0.0f32..std::f32::consts::TAU);
        let color = grain.with_alpha(alpha);
        canvas.stroke_wave(y, width, GRAIN_AMPLITUDE, GRAIN_FREQUENCY, phase, color);
        y += rng.gen_range(6.0f32..=14.0);
    }

    // knot: faint halo, then a denser core
    let center = (size * 0.3, size * 0.6);
    let halo = Rgba::rgb8(110, 70, 38).with_alpha(0.45);
    canvas.fill_ellipse(center, (size * 0.07, size * 0.045), halo);
    let core = Rgba::rgb8(70, 42, 20).with_alpha(0.7);
    canvas.fill_ellipse(center, (size * 0.035, size * 0.022), core);
}
