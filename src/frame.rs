use ndarray::Array2;

use crate::error::{Result, StitchError};

/// A single luminance plane produced by the Grayscale Projector or a
/// Pyramid level. Shape is `(height, width)`, values in `[0, 255]`.
pub type GrayPlane = Array2<f32>;

/// An immutable rectangular 8-bit pixel buffer, always stored as 4-channel
/// RGBA row-major bytes internally (a 3-channel RGB input is widened to
/// opaque RGBA on ingest, per §3/§6). This is the same layout
/// `image::RgbaImage` uses, so conversion at the crate boundary never
/// touches individual pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl Frame {
    /// Build a `Frame` from an already-interleaved RGBA byte buffer.
    pub fn from_rgba(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self> {
        let expected = (width as usize) * (height as usize) * 4;
        if rgba.len() != expected {
            return Err(StitchError::InvalidDimensions {
                width,
                height,
                len: rgba.len(),
            });
        }
        Ok(Self {
            width,
            height,
            rgba,
        })
    }

    /// Build a `Frame` from an interleaved RGB byte buffer, widening to
    /// opaque RGBA (alpha = 255 for every pixel).
    pub fn from_rgb(width: u32, height: u32, rgb: &[u8]) -> Result<Self> {
        let expected = (width as usize) * (height as usize) * 3;
        if rgb.len() != expected {
            return Err(StitchError::InvalidDimensions {
                width,
                height,
                len: rgb.len(),
            });
        }
        let mut rgba = Vec::with_capacity(rgb.len() / 3 * 4);
        for chunk in rgb.chunks_exact(3) {
            rgba.extend_from_slice(chunk);
            rgba.push(255);
        }
        Ok(Self {
            width,
            height,
            rgba,
        })
    }

    pub fn from_image(img: &image::RgbaImage) -> Self {
        Self {
            width: img.width(),
            height: img.height(),
            rgba: img.as_raw().clone(),
        }
    }

    pub fn to_image(&self) -> image::RgbaImage {
        image::RgbaImage::from_raw(self.width, self.height, self.rgba.clone())
            .expect("buffer length was validated at construction")
    }

    pub fn into_image(self) -> image::RgbaImage {
        image::RgbaImage::from_raw(self.width, self.height, self.rgba)
            .expect("buffer length was validated at construction")
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn as_rgba(&self) -> &[u8] {
        &self.rgba
    }

    /// Bytes of row `y` (length `width * 4`).
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        let w = self.width as usize;
        let start = y as usize * w * 4;
        &self.rgba[start..start + w * 4]
    }

    /// The four RGBA channel bytes at `(x, y)`.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        [
            self.rgba[idx],
            self.rgba[idx + 1],
            self.rgba[idx + 2],
            self.rgba[idx + 3],
        ]
    }
}

/// Result of the Offset Estimator for a single pair of frames (§3).
///
/// Sign convention: a positive `offset_px` means the content scrolled *up*
/// between `prev` and `next` — row `y` of `prev` corresponds to row
/// `y - offset_px` of `next`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OffsetResult {
    pub offset_px: i64,
    pub confidence: f64,
}

impl OffsetResult {
    pub fn undefined() -> Self {
        Self {
            offset_px: 0,
            confidence: crate::consts::ZNCC_UNDEFINED,
        }
    }
}

/// Output of [`crate::stitch`]: the composited panorama plus one
/// [`OffsetResult`] per join.
#[derive(Clone, Debug)]
pub struct StitchResult {
    pub image: Frame,
    pub offsets: Vec<OffsetResult>,
}
