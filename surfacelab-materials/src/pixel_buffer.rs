//! Square RGBA8 pixel buffers produced by texture synthesis

use std::path::Path;
use surfacelab_core::{Error, Result};

/// A square grid of RGBA samples, row-major, top row first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    resolution: u32,
    pixels: Vec<[u8; 4]>,
}

impl PixelBuffer {
    /// Wrap existing pixels; the length must be `resolution²`
    pub fn from_pixels(resolution: u32, pixels: Vec<[u8; 4]>) -> Result<Self> {
        let expected = resolution as usize * resolution as usize;
        if pixels.len() != expected {
            return Err(Error::InvalidData(format!(
                "pixel buffer of resolution {} needs {} pixels, got {}",
                resolution,
                expected,
                pixels.len()
            )));
        }
        Ok(Self { resolution, pixels })
    }

    /// Wrap pixels whose length the caller already guarantees
    pub(crate) fn from_raw_parts(resolution: u32, pixels: Vec<[u8; 4]>) -> Self {
        debug_assert_eq!(pixels.len(), resolution as usize * resolution as usize);
        Self { resolution, pixels }
    }

    /// Width (and height) in pixels
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Number of pixels
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Pixel at `(x, y)`, `None` outside the buffer
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.resolution || y >= self.resolution {
            return None;
        }
        Some(self.pixels[y as usize * self.resolution as usize + x as usize])
    }

    pub fn pixels(&self) -> &[[u8; 4]] {
        &self.pixels
    }

    /// Iterate over one row
    pub fn row(&self, y: u32) -> impl Iterator<Item = &[u8; 4]> + '_ {
        let n = self.resolution as usize;
        let start = (y as usize * n).min(self.pixels.len());
        let end = (start + n).min(self.pixels.len());
        self.pixels[start..end].iter()
    }

    /// Iterate over one column
    pub fn column(&self, x: u32) -> impl Iterator<Item = &[u8; 4]> + '_ {
        let n = self.resolution as usize;
        let skip = if x < self.resolution { x as usize } else { self.pixels.len() };
        self.pixels.iter().skip(skip).step_by(n.max(1))
    }

    /// Raw bytes in RGBA order, suitable for a texture upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Copy into an `image` buffer
    pub fn to_image(&self) -> image::RgbaImage {
        let mut img = image::RgbaImage::new(self.resolution, self.resolution);
        for (dst, src) in img.pixels_mut().zip(self.pixels.iter()) {
            *dst = image::Rgba(*src);
        }
        img
    }

    /// Write the buffer as a PNG file
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        self.to_image()
            .save_with_format(path, image::ImageFormat::Png)
            .map_err(|e| Error::Image(format!("failed to write {}: {}", path.display(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PixelBuffer {
        let pixels = (0..9u8).map(|i| [i, i * 2, i * 3, 255]).collect();
        PixelBuffer::from_pixels(3, pixels).unwrap()
    }

    #[test]
    fn test_from_pixels_validates_length() {
        assert!(PixelBuffer::from_pixels(2, vec![[0; 4]; 3]).is_err());
        assert!(PixelBuffer::from_pixels(0, Vec::new()).unwrap().is_empty());
    }

    #[test]
    fn test_rows_and_columns() {
        let buf = sample();
        assert_eq!(buf.pixel(1, 2), Some([7, 14, 21, 255]));
        assert_eq!(buf.pixel(3, 0), None);
        let row: Vec<u8> = buf.row(1).map(|p| p[0]).collect();
        assert_eq!(row, vec![3, 4, 5]);
        let col: Vec<u8> = buf.column(2).map(|p| p[0]).collect();
        assert_eq!(col, vec![2, 5, 8]);
        assert_eq!(buf.column(5).count(), 0);
    }

    #[test]
    fn test_pixel_at_far_corner() {
        let n = 300u32;
        let pixels = (0..n * n).map(|i| [(i % 251) as u8, 0, 0, 255]).collect();
        let buf = PixelBuffer::from_raw_parts(n, pixels);
        let last = n * n - 1;
        assert_eq!(buf.pixel(n - 1, n - 1), Some([(last % 251) as u8, 0, 0, 255]));
        assert_eq!(buf.pixel(0, n), None);
    }

    #[test]
    fn test_bytes_and_image() {
        let buf = sample();
        assert_eq!(buf.as_bytes().len(), 9 * 4);
        assert_eq!(&buf.as_bytes()[4..8], &[1, 2, 3, 255]);
        let img = buf.to_image();
        assert_eq!(img.dimensions(), (3, 3));
        assert_eq!(img.get_pixel(2, 0).0, [2, 4, 6, 255]);
    }

    #[test]
    fn test_save_png() {
        let path = std::env::temp_dir().join("surfacelab_pixel_buffer_test.png");
        sample().save_png(&path).unwrap();
        let loaded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(loaded.get_pixel(1, 1).0, [4, 8, 12, 255]);
        let _ = std::fs::remove_file(&path);
    }
}
