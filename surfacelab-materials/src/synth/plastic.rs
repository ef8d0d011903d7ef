//! Plastic: glossy single-hue gradient with fine speckle

use crate::canvas::{Canvas, Rgba};
use rand::Rng;

const SPECKLE_COUNT: usize = 600;

pub(super) fn paint<R: Rng + ?Sized>(canvas: &mut Canvas, rng: &mut R) {
    let size = canvas.size() as f32;

    canvas.fill_linear_gradient(
        (0.0, 0.0),
        (size, size),
        &[
            (0.0, Rgba::rgb8(235, 85, 70)),
            (0.5, Rgba::rgb8(205, 55, 45)),
            (1.0, Rgba::rgb8(160, 35, 30)),
        ],
    );

    canvas.fill_radial_gradient(
        (size * 0.35, size * 0.25),
        size * 0.55,
        &[(0.0, Rgba::WHITE.with_alpha(0.55)), (1.0, Rgba::WHITE.with_alpha(0.0))],
    );

    if canvas.size() == 0 {
        return;
    }
    for _ in 0..SPECKLE_COUNT {
        let x = rng.gen_range(0..canvas.size());
        let y = rng.gen_range(0..canvas.size());
        let base = if rng.gen_bool(0.5) { Rgba::WHITE } else { Rgba::BLACK };
        canvas.blend_pixel(x as i64, y as i64, base.with_alpha(rng.gen_range(0.04f32..0.14)));
    }
}
