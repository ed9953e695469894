use crate::domain::color::Color;
use crate::domain::error::DomainError;
use crate::domain::position::Position;

pub const CHANNELS: usize = 4;

/// Row-major RGBA8 raster. `pixels.len() == width * height * 4` always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl RasterImage {
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, DomainError> {
        if width == 0 || height == 0 {
            return Err(DomainError::invalid(format!(
                "image dimensions must be positive, got {}x{}",
                width, height
            )));
        }
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(CHANNELS))
            .ok_or_else(|| DomainError::invalid("image dimensions overflow"))?;
        if pixels.len() != expected {
            return Err(DomainError::invalid(format!(
                "pixel buffer holds {} bytes, expected {} for {}x{}",
                pixels.len(),
                expected,
                width,
                height
            )));
        }
        Ok(Self { width, height, pixels })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Converts a caller coordinate into in-bounds indices.
    pub fn locate(&self, position: Position) -> Result<(usize, usize), DomainError> {
        let in_x = position.x >= 0 && position.x < i64::from(self.width);
        let in_y = position.y >= 0 && position.y < i64::from(self.height);
        if !(in_x && in_y) {
            return Err(DomainError::invalid(format!(
                "seed ({}, {}) is outside the {}x{} image",
                position.x, position.y, self.width, self.height
            )));
        }
        Ok((position.x as usize, position.y as usize))
    }

    pub(crate) fn rgb_at(&self, x: usize, y: usize) -> [u8; 3] {
        let i = self.offset(x, y);
        [self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]]
    }

    pub(crate) fn paint(&mut self, x: usize, y: usize, color: Color) {
        let i = self.offset(x, y);
        self.pixels[i..i + CHANNELS].copy_from_slice(&[color.r, color.g, color.b, 255]);
    }

    fn offset(&self, x: usize, y: usize) -> usize {
        (y * self.width as usize + x) * CHANNELS
    }
}

#[cfg(test)]
impl RasterImage {
    /// Image of the given size where every pixel is `color` with the given alpha.
    pub fn filled(width: u32, height: u32, color: Color, alpha: u8) -> Result<Self, DomainError> {
        let count = (width as usize).saturating_mul(height as usize);
        let pixels = [color.r, color.g, color.b, alpha].repeat(count);
        Self::new(width, height, pixels)
    }

    /// RGBA of the pixel at `(x, y)`. Panics when out of bounds.
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        let i = self.offset(x, y);
        [self.pixels[i], self.pixels[i + 1], self.pixels[i + 2], self.pixels[i + 3]]
    }
}
