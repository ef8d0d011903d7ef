//! Structural tests for the texture generators
//!
//! Output is random per call, so these check palette families, alpha and the
//! layout of each pattern rather than exact pixels.

use rand::rngs::StdRng;
use rand::SeedableRng;
use surfacelab_materials::*;

fn seeded(kind: MaterialKind, resolution: u32, seed: u64) -> PixelBuffer {
    synthesize_with(kind, resolution, &mut StdRng::seed_from_u64(seed))
}

fn luminance(p: &[u8; 4]) -> f32 {
    0.2126 * p[0] as f32 + 0.7152 * p[1] as f32 + 0.0722 * p[2] as f32
}

fn column_mean(buf: &PixelBuffer, x: u32) -> f32 {
    let sum: f32 = buf.column(x).map(luminance).sum();
    sum / buf.resolution() as f32
}

#[test]
fn test_every_kind_fills_the_requested_resolution() {
    for kind in MaterialKind::ALL {
        for resolution in [1, 7, 64, 256] {
            let buf = synthesize(kind, resolution);
            assert_eq!(buf.resolution(), resolution);
            assert_eq!(buf.len(), (resolution * resolution) as usize, "{} at {}", kind, resolution);
        }
    }
}

#[test]
fn test_zero_resolution_is_empty() {
    for kind in MaterialKind::ALL {
        assert!(synthesize(kind, 0).is_empty());
    }
}

#[test]
fn test_same_seed_same_texture() {
    for kind in MaterialKind::ALL {
        assert_eq!(seeded(kind, 64, 42), seeded(kind, 64, 42));
    }
}

#[test]
fn test_fresh_grain_per_call() {
    for kind in MaterialKind::ALL {
        assert_ne!(seeded(kind, 128, 1), seeded(kind, 128, 2), "{}", kind);
    }
}

#[test]
fn test_wood_palette_and_pattern() {
    for seed in 0..5 {
        let buf = seeded(MaterialKind::Wood, 256, seed);
        for p in buf.pixels() {
            assert_eq!(p[3], 255);
            assert!(p[0] >= p[1] && p[1] >= p[2], "not a wood tone: {:?}", p);
        }

        // untouched base between grain lines
        assert!(buf.pixels().iter().any(|p| *p == [150, 100, 55, 255]));

        // grain makes rows differ
        let row_means: Vec<f32> = (0..256)
            .map(|y| buf.row(y).map(luminance).sum::<f32>() / 256.0)
            .collect();
        let mean = row_means.iter().sum::<f32>() / row_means.len() as f32;
        let var = row_means.iter().map(|m| (m - mean).powi(2)).sum::<f32>()
            / row_means.len() as f32;
        assert!(var > 0.25, "grain too faint: variance {}", var);

        // knot core at (30%, 60%)
        let knot = buf.pixel((256.0 * 0.3) as u32, (256.0 * 0.6) as u32).unwrap();
        assert!(knot[0] < 110, "knot missing: {:?}", knot);
    }
}

#[test]
fn test_metal_palette_and_sheen() {
    for seed in 0..5 {
        let buf = seeded(MaterialKind::Metal, 256, seed);
        for p in buf.pixels() {
            assert_eq!(p[3], 255);
            assert_eq!(p[0], p[1], "metal must stay neutral: {:?}", p);
            assert!(p[2] >= p[0] && p[2] - p[0] <= 8, "metal tint off: {:?}", p);
        }

        // dark edges, light at the quarter stops, darker middle
        let edge = column_mean(&buf, 0);
        let quarter = column_mean(&buf, 64);
        let middle = column_mean(&buf, 128);
        let right_edge = column_mean(&buf, 255);
        assert!(edge + 40.0 < quarter, "edge {} quarter {}", edge, quarter);
        assert!(right_edge + 40.0 < column_mean(&buf, 192));
        assert!(middle < quarter);
    }
}

#[test]
fn test_metal_streaks_on_alternate_scanlines() {
    let buf = seeded(MaterialKind::Metal, 64, 3);
    // the odd rows carry no streak, so they are identical to each other
    let row1: Vec<[u8; 4]> = buf.row(1).copied().collect();
    let row3: Vec<[u8; 4]> = buf.row(3).copied().collect();
    assert_eq!(row1, row3);
}

#[test]
fn test_glass_is_translucent_and_banded() {
    for seed in 0..5 {
        let buf = seeded(MaterialKind::Glass, 256, seed);
        for p in buf.pixels() {
            assert!(p[3] > 0 && p[3] < 255, "glass alpha out of range: {:?}", p);
            assert!(p[2] >= p[0], "glass should lean blue: {:?}", p);
        }

        let base_alpha = (0.35f32 * 255.0).round();
        let banded = (0..256)
            .filter(|&x| {
                let mean = buf.column(x).map(|p| p[3] as f32).sum::<f32>() / 256.0;
                mean > base_alpha + 12.0
            })
            .count();
        assert!(banded >= 8, "expected refraction bands, got {} bright columns", banded);
        assert!(banded < 200);
    }
}

#[test]
fn test_plastic_palette_and_gloss() {
    for seed in 0..5 {
        let buf = seeded(MaterialKind::Plastic, 256, seed);
        for p in buf.pixels() {
            assert_eq!(p[3], 255);
            assert!(p[0] >= p[1] && p[0] >= p[2], "plastic should be red: {:?}", p);
        }

        let quadrant_mean = |x0: u32, y0: u32| {
            let mut sum = 0.0;
            for y in y0..y0 + 128 {
                for x in x0..x0 + 128 {
                    sum += luminance(&buf.pixel(x, y).unwrap());
                }
            }
            sum / (128.0 * 128.0)
        };
        assert!(quadrant_mean(0, 0) > quadrant_mean(128, 128) + 20.0);

        // highlight near the gloss centre lifts the green channel
        let (gx, gy) = ((256.0 * 0.35) as u32, (256.0 * 0.25) as u32);
        let brightest = (gy - 1..=gy + 1)
            .flat_map(|y| (gx - 1..=gx + 1).map(move |x| (x, y)))
            .map(|(x, y)| buf.pixel(x, y).unwrap()[1])
            .max()
            .unwrap();
        assert!(brightest > 150, "gloss missing: {}", brightest);
    }
}
