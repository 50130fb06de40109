//! Particle sprite masks.
//!
//! Each particle is drawn as a textured billboard; the texture is a
//! single-channel alpha mask that shapes the point. Masks load from PNG or
//! JPEG files, and a procedural soft disc stands in when no asset is
//! available, so a missing file degrades to a plain round particle rather
//! than failing the viewer.

use std::path::Path;

use crate::error::SpriteError;

/// Single-channel alpha mask, one byte per pixel.
#[derive(Debug, Clone)]
pub struct SpriteMask {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl SpriteMask {
    /// Build a mask from raw single-channel data.
    ///
    /// # Panics
    ///
    /// Panics if `data.len() != width * height`.
    pub fn from_alpha(data: Vec<u8>, width: u32, height: u32) -> Self {
        assert_eq!(
            data.len(),
            (width * height) as usize,
            "alpha data size mismatch"
        );
        Self {
            data,
            width,
            height,
        }
    }

    /// Load a mask from an image file, using the image's luma as alpha.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SpriteError> {
        let img = image::open(path.as_ref())?.into_luma8();
        let (width, height) = img.dimensions();
        Ok(Self {
            data: img.into_raw(),
            width,
            height,
        })
    }

    /// Load a mask from a file, falling back to [`SpriteMask::soft_disc`]
    /// if the asset is missing or unreadable.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::from_file(path.as_ref()) {
            Ok(mask) => mask,
            Err(err) => {
                log::warn!(
                    "sprite '{}' unavailable ({}); using procedural disc",
                    path.as_ref().display(),
                    err
                );
                Self::soft_disc(64)
            }
        }
    }

    /// A procedurally generated disc with a soft radial falloff.
    pub fn soft_disc(size: u32) -> Self {
        let size = size.max(2);
        let mut data = Vec::with_capacity((size * size) as usize);
        let center = (size - 1) as f32 / 2.0;
        let radius = size as f32 / 2.0;

        for y in 0..size {
            for x in 0..size {
                let dx = x as f32 - center;
                let dy = y as f32 - center;
                let dist = (dx * dx + dy * dy).sqrt() / radius;
                let alpha = (1.0 - dist).clamp(0.0, 1.0);
                // Square the falloff for a softer edge.
                data.push((alpha * alpha * 255.0).round() as u8);
            }
        }

        Self {
            data,
            width: size,
            height: size,
        }
    }

    /// Raw mask bytes, row-major.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mask width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Mask height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }
}

impl Default for SpriteMask {
    fn default() -> Self {
        Self::soft_disc(64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_soft_disc_dimensions() {
        let mask = SpriteMask::soft_disc(64);
        assert_eq!(mask.width(), 64);
        assert_eq!(mask.height(), 64);
        assert_eq!(mask.data().len(), 64 * 64);
    }

    #[test]
    fn test_soft_disc_bright_center_dark_corner() {
        let mask = SpriteMask::soft_disc(64);
        let center = mask.data()[(32 * 64 + 32) as usize];
        let corner = mask.data()[0];
        assert!(center > 200);
        assert_eq!(corner, 0);
    }

    #[test]
    fn test_from_alpha_roundtrip() {
        let mask = SpriteMask::from_alpha(vec![0, 128, 255, 64], 2, 2);
        assert_eq!(mask.data(), &[0, 128, 255, 64]);
    }

    #[test]
    #[should_panic(expected = "alpha data size mismatch")]
    fn test_from_alpha_rejects_bad_length() {
        SpriteMask::from_alpha(vec![0, 1, 2], 2, 2);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let mask = SpriteMask::load_or_default("does/not/exist.png");
        assert_eq!(mask.width(), 64);
    }
}
