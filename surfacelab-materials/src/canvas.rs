//! Straight-alpha RGBA raster with the drawing primitives used by the generators
//!
//! All drawing composites with the source-over operator. Every output colour
//! is a convex combination of the source and destination colours, so a
//! pattern painted only with colours from one palette family stays in it.

use crate::pixel_buffer::PixelBuffer;

/// A colour with components in `[0, 1]` and non-premultiplied alpha
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0.0, 0.0, 0.0, 0.0);
    pub const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Rgba = Rgba::new(0.0, 0.0, 0.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque colour from 8-bit channels
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0)
    }

    /// Same colour with a different alpha
    pub const fn with_alpha(self, a: f32) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Component-wise linear interpolation
    pub fn lerp(self, other: Rgba, t: f32) -> Rgba {
        let s = 1.0 - t;
        Rgba::new(
            self.r * s + other.r * t,
            self.g * s + other.g * t,
            self.b * s + other.b * t,
            self.a * s + other.a * t,
        )
    }

    fn to_rgba8(self) -> [u8; 4] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }
}

/// A gradient colour stop: offset in `[0, 1]` and colour
pub type ColorStop = (f32, Rgba);

/// Sample a stop list at `t`. Stops must be sorted by offset.
pub fn sample_stops(stops: &[ColorStop], t: f32) -> Rgba {
    let (first, last) = match (stops.first(), stops.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Rgba::TRANSPARENT,
    };
    if t <= first.0 {
        return first.1;
    }
    if t >= last.0 {
        return last.1;
    }
    for pair in stops.windows(2) {
        let (t0, c0) = pair[0];
        let (t1, c1) = pair[1];
        if t >= t0 && t <= t1 {
            let span = t1 - t0;
            let local = if span > 0.0 { (t - t0) / span } else { 0.0 };
            return c0.lerp(c1, local);
        }
    }
    last.1
}

/// A square drawing surface
#[derive(Debug, Clone)]
pub struct Canvas {
    size: u32,
    data: Vec<Rgba>,
}

impl Canvas {
    /// Create a fully transparent canvas of `size × size` pixels
    pub fn new(size: u32) -> Self {
        let n = size as usize * size as usize;
        Self {
            size,
            data: vec![Rgba::TRANSPARENT; n],
        }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Current colour at a pixel, `None` outside the canvas
    pub fn get(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.size || y >= self.size {
            return None;
        }
        Some(self.data[y as usize * self.size as usize + x as usize])
    }

    /// Composite `src` over the pixel at `(x, y)`. Out-of-bounds writes are ignored.
    pub fn blend_pixel(&mut self, x: i64, y: i64, src: Rgba) {
        if src.a <= 0.0 || x < 0 || y < 0 || x >= self.size as i64 || y >= self.size as i64 {
            return;
        }
        let idx = (y as usize) * self.size as usize + x as usize;
        let dst = self.data[idx];

        let sa = src.a.min(1.0);
        let keep = dst.a * (1.0 - sa);
        let out_a = if dst.a >= 1.0 { 1.0 } else { (sa + keep).min(1.0) };
        if out_a <= 0.0 {
            self.data[idx] = Rgba::TRANSPARENT;
            return;
        }

        let mix = |s: f32, d: f32| (s * sa + d * keep) / out_a;
        self.data[idx] = Rgba::new(mix(src.r, dst.r), mix(src.g, dst.g), mix(src.b, dst.b), out_a);
    }

    /// Composite a colour over every pixel
    pub fn fill(&mut self, color: Rgba) {
        self.fill_rect(0, 0, self.size, self.size, color);
    }

    /// Composite a colour over an axis-aligned rectangle
    pub fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, color: Rgba) {
        let x_end = x.saturating_add(width).min(self.size);
        let y_end = y.saturating_add(height).min(self.size);
        for py in y..y_end {
            for px in x..x_end {
                self.blend_pixel(px as i64, py as i64, color);
            }
        }
    }

    /// Fill the canvas with a linear gradient running from `start` to `end`.
    ///
    /// Pixels are sampled at their centres and projected onto the gradient axis;
    /// beyond either end the nearest stop colour is used.
    pub fn fill_linear_gradient(
        &mut self,
        start: (f32, f32),
        end: (f32, f32),
        stops: &[ColorStop],
    ) {
        let (dx, dy) = (end.0 - start.0, end.1 - start.1);
        let len_sq = dx * dx + dy * dy;
        for py in 0..self.size {
            for px in 0..self.size {
                let cx = px as f32 + 0.5 - start.0;
                let cy = py as f32 + 0.5 - start.1;
                let t = if len_sq > 0.0 {
                    ((cx * dx + cy * dy) / len_sq).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                self.blend_pixel(px as i64, py as i64, sample_stops(stops, t));
            }
        }
    }

    /// Horizontal gradient restricted to the columns in `[x_start, x_end)`
    pub fn fill_band(&mut self, x_start: f32, x_end: f32, stops: &[ColorStop]) {
        let width = x_end - x_start;
        if width <= 0.0 {
            return;
        }
        let first = x_start.floor().max(0.0) as i64;
        let last = x_end.ceil().min(self.size as f32) as i64;
        for px in first..last {
            let t = (px as f32 + 0.5 - x_start) / width;
            if !(0.0..1.0).contains(&t) {
                continue;
            }
            let color = sample_stops(stops, t);
            for py in 0..self.size as i64 {
                self.blend_pixel(px, py, color);
            }
        }
    }

    /// Radial gradient centred at `center`; stop 1.0 sits at `radius`
    pub fn fill_radial_gradient(&mut self, center: (f32, f32), radius: f32, stops: &[ColorStop]) {
        if radius <= 0.0 {
            return;
        }
        for py in 0..self.size {
            for px in 0..self.size {
                let dx = px as f32 + 0.5 - center.0;
                let dy = py as f32 + 0.5 - center.1;
                let t = (dx * dx + dy * dy).sqrt() / radius;
                self.blend_pixel(px as i64, py as i64, sample_stops(stops, t.min(1.0)));
            }
        }
    }

    /// Fill an axis-aligned ellipse
    pub fn fill_ellipse(&mut self, center: (f32, f32), radii: (f32, f32), color: Rgba) {
        let (rx, ry) = radii;
        if rx <= 0.0 || ry <= 0.0 {
            return;
        }
        let x0 = (center.0 - rx).floor() as i64;
        let x1 = (center.0 + rx).ceil() as i64;
        let y0 = (center.1 - ry).floor() as i64;
        let y1 = (center.1 + ry).ceil() as i64;
        for py in y0..=y1 {
            for px in x0..=x1 {
                let nx = (px as f32 + 0.5 - center.0) / rx;
                let ny = (py as f32 + 0.5 - center.1) / ry;
                if nx * nx + ny * ny <= 1.0 {
                    self.blend_pixel(px, py, color);
                }
            }
        }
    }

    /// Stroke a horizontal line of the given width whose centre follows
    /// `y + amplitude * sin(frequency * x + phase)`.
    ///
    /// Each column is covered proportionally to its overlap with the stroke,
    /// which softens the edges of thin lines.
    pub fn stroke_wave(
        &mut self,
        y: f32,
        width: f32,
        amplitude: f32,
        frequency: f32,
        phase: f32,
        color: Rgba,
    ) {
        if width <= 0.0 {
            return;
        }
        let half = width / 2.0;
        for px in 0..self.size {
            let center = y + amplitude * (frequency * px as f32 + phase).sin();
            let top = center - half;
            let bottom = center + half;
            for py in top.floor() as i64..bottom.ceil() as i64 {
                let coverage = (bottom.min(py as f32 + 1.0) - top.max(py as f32)).clamp(0.0, 1.0);
                if coverage > 0.0 {
                    self.blend_pixel(px as i64, py, color.with_alpha(color.a * coverage));
                }
            }
        }
    }

    /// Quantize to 8-bit RGBA
    pub fn to_pixel_buffer(&self) -> PixelBuffer {
        let pixels = self.data.iter().map(|c| c.to_rgba8()).collect();
        PixelBuffer::from_raw_parts(self.size, pixels)
    }
}
