//! Brushed metal: banded sheen, scanline streaks and a soft specular stripe

use crate::canvas::{Canvas, Rgba};
use rand::Rng;

const SPECULAR_PEAK_ALPHA: f32 = 0.12;
const SPECULAR_HALF_WIDTH: f32 = 0.18;

pub(super) fn paint<R: Rng + ?Sized>(canvas: &mut Canvas, rng: &mut R) {
    let size = canvas.size() as f32;

    let stops = [
        (0.0, Rgba::rgb8(96, 96, 101)),
        (0.25, Rgba::rgb8(200, 200, 205)),
        (0.5, Rgba::rgb8(150, 150, 155)),
        (0.75, Rgba::rgb8(205, 205, 210)),
        (1.0, Rgba::rgb8(90, 90, 95)),
    ];
    canvas.fill_linear_gradient((0.0, 0.0), (size, 0.0), &stops);

    for y in (0..canvas.size()).step_by(2) {
        let v = rng.gen_range(140..=250u8);
        let alpha = rng.gen_range(0.03f32..0.08);
        canvas.fill_rect(0, y, canvas.size(), 1, Rgba::rgb8(v, v, v).with_alpha(alpha));
    }

    let center = size * rng.gen_range(0.4f32..=0.6);
    let half = size * SPECULAR_HALF_WIDTH;
    let clear = Rgba::WHITE.with_alpha(0.0);
    canvas.fill_band(
        center - half,
        center + half,
        &[(0.0, clear), (0.5, Rgba::WHITE.with_alpha(SPECULAR_PEAK_ALPHA)), (1.0, clear)],
    );
}
