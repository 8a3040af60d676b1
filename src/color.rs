//! Grayscale Projector (§4.1): Rec. 601 luminance from an RGBA `Frame`.

use ndarray::Array2;

use crate::frame::{Frame, GrayPlane};

/// Project a `Frame` to a [`GrayPlane`] using Rec. 601 weights
/// (0.299 R + 0.587 G + 0.114 B). Alpha is ignored. Pure, idempotent.
pub fn to_grayscale(frame: &Frame) -> GrayPlane {
    let w = frame.width() as usize;
    let h = frame.height() as usize;
    let mut plane = Array2::<f32>::zeros((h, w));
    let rgba = frame.as_rgba();

    for y in 0..h {
        let row = &rgba[y * w * 4..(y + 1) * w * 4];
        for x in 0..w {
            let px = &row[x * 4..x * 4 + 4];
            let lum = 0.299 * px[0] as f32 + 0.587 * px[1] as f32 + 0.114 * px[2] as f32;
            plane[[y, x]] = lum;
        }
    }

    plane
}

/// Extract a vertical band `[top, height - bottom)` of a `Frame`, returning
/// an owned RGBA buffer for the cropped region. Used by the estimator to
/// honor `crop_top_px`/`crop_bottom_px` before alignment (§4.4).
pub fn crop_vertical(frame: &Frame, top: u32, bottom: u32) -> Frame {
    let w = frame.width();
    let h = frame.height();
    let new_h = h - top - bottom;
    let row_bytes = w as usize * 4;
    let start = top as usize * row_bytes;
    let end = start + new_h as usize * row_bytes;
    Frame::from_rgba(w, new_h, frame.as_rgba()[start..end].to_vec())
        .expect("crop preserves row length invariant")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_pixel_projects_to_255() {
        let frame = Frame::from_rgba(1, 1, vec![255, 255, 255, 255]).unwrap();
        let gray = to_grayscale(&frame);
        assert!((gray[[0, 0]] - 255.0).abs() < 1e-4);
    }

    #[test]
    fn alpha_is_ignored() {
        let a = Frame::from_rgba(1, 1, vec![100, 150, 200, 0]).unwrap();
        let b = Frame::from_rgba(1, 1, vec![100, 150, 200, 255]).unwrap();
        assert_eq!(to_grayscale(&a), to_grayscale(&b));
    }

    #[test]
    fn rec601_weights_applied_per_channel() {
        let red = Frame::from_rgba(1, 1, vec![255, 0, 0, 255]).unwrap();
        let green = Frame::from_rgba(1, 1, vec![0, 255, 0, 255]).unwrap();
        let blue = Frame::from_rgba(1, 1, vec![0, 0, 255, 255]).unwrap();
        assert!((to_grayscale(&red)[[0, 0]] - 0.299 * 255.0).abs() < 1e-3);
        assert!((to_grayscale(&green)[[0, 0]] - 0.587 * 255.0).abs() < 1e-3);
        assert!((to_grayscale(&blue)[[0, 0]] - 0.114 * 255.0).abs() < 1e-3);
    }

    #[test]
    fn crop_vertical_trims_both_edges() {
        let mut rgba = Vec::new();
        for row in 0..5u8 {
            for _ in 0..2 {
                rgba.extend_from_slice(&[row, row, row, 255]);
            }
        }
        let frame = Frame::from_rgba(2, 5, rgba).unwrap();
        let cropped = crop_vertical(&frame, 1, 1);
        assert_eq!(cropped.height(), 3);
        assert_eq!(cropped.pixel(0, 0), [1, 1, 1, 255]);
        assert_eq!(cropped.pixel(0, 2), [3, 3, 3, 255]);
    }
}
