//! Pyramid Builder (§4.2): a coarse-to-fine stack of grayscale planes.
//!
//! Grounded on `jupiter-core/src/align/pyramid.rs::{build_pyramid,
//! downsample_2x}` — same coarse-to-fine shape (push level 0, then halve
//! repeatedly) — but the halving filter is an area average (falling back to
//! bilinear sampling when a dimension is odd) rather than point sampling,
//! per §4.2's requirement that a shift of `d` at level `k` correspond to
//! `2d` at level `k-1` within ±1 px.

use crate::frame::GrayPlane;

/// Build a pyramid of `levels` [`GrayPlane`]s. Level 0 is `finest` itself;
/// level `levels - 1` is the coarsest. `levels` is clamped to at least 1.
pub fn build_pyramid(finest: &GrayPlane, levels: u32) -> Vec<GrayPlane> {
    let levels = levels.max(1) as usize;
    let mut pyramid = Vec::with_capacity(levels);
    pyramid.push(finest.clone());

    for _ in 1..levels {
        let prev = pyramid.last().expect("pyramid always has level 0");
        pyramid.push(downsample_half(prev));
    }

    pyramid
}

/// Halve both dimensions of `plane` (minimum 1 each). Uses a 2x2 box
/// average when both dimensions are even; otherwise falls back to
/// bilinear sampling at the coarser grid.
fn downsample_half(plane: &GrayPlane) -> GrayPlane {
    let (h, w) = plane.dim();
    let new_h = (h / 2).max(1);
    let new_w = (w / 2).max(1);

    if h % 2 == 0 && w % 2 == 0 && new_h * 2 == h && new_w * 2 == w {
        box_average_2x(plane, new_h, new_w)
    } else {
        bilinear_resample(plane, new_h, new_w)
    }
}

fn box_average_2x(plane: &GrayPlane, new_h: usize, new_w: usize) -> GrayPlane {
    let mut out = GrayPlane::zeros((new_h, new_w));
    for r in 0..new_h {
        for c in 0..new_w {
            let sum = plane[[2 * r, 2 * c]]
                + plane[[2 * r, 2 * c + 1]]
                + plane[[2 * r + 1, 2 * c]]
                + plane[[2 * r + 1, 2 * c + 1]];
            out[[r, c]] = sum * 0.25;
        }
    }
    out
}

/// Bilinear sample `plane` onto a `new_h x new_w` grid spanning the same
/// extent (used when a dimension does not halve cleanly).
fn bilinear_resample(plane: &GrayPlane, new_h: usize, new_w: usize) -> GrayPlane {
    let (h, w) = plane.dim();
    let mut out = GrayPlane::zeros((new_h, new_w));

    let scale_y = if new_h > 1 {
        (h - 1) as f64 / (new_h - 1) as f64
    } else {
        0.0
    };
    let scale_x = if new_w > 1 {
        (w - 1) as f64 / (new_w - 1) as f64
    } else {
        0.0
    };

    for r in 0..new_h {
        let sy = r as f64 * scale_y;
        let y0 = sy.floor() as usize;
        let y1 = (y0 + 1).min(h - 1);
        let fy = (sy - y0 as f64) as f32;

        for c in 0..new_w {
            let sx = c as f64 * scale_x;
            let x0 = sx.floor() as usize;
            let x1 = (x0 + 1).min(w - 1);
            let fx = (sx - x0 as f64) as f32;

            let top = plane[[y0, x0]] * (1.0 - fx) + plane[[y0, x1]] * fx;
            let bottom = plane[[y1, x0]] * (1.0 - fx) + plane[[y1, x1]] * fx;
            out[[r, c]] = top * (1.0 - fy) + bottom * fy;
        }
    }

    out
}
