//! Panorama Compositor (§4.7): grows the running panorama by one frame.
//!
//! Grounded on `itsharex-lovshot/src-tauri/src/commands/scroll.rs`'s
//! `stitch_scroll_image` — allocate a fresh output buffer per join, copy
//! the previous panorama in, then either append or blend the next frame —
//! generalized here to the explicit band/seam/tail geometry the spec
//! requires instead of a single fixed crop line.

pub mod blend;
pub mod seam;

use crate::frame::{Frame, OffsetResult};
use crate::pipeline::config::StitchOptions;

/// Grow `panorama` by joining `next` at the estimated `offset`. Allocates
/// and returns a new [`Frame`]; never mutates its inputs.
pub fn join(panorama: &Frame, next: &Frame, offset: &OffsetResult, options: &StitchOptions) -> Frame {
    if offset.confidence <= crate::consts::ZNCC_UNDEFINED {
        // No candidate offset produced a defined correlation; trust no
        // seam and fall back to a plain append (§4.8 failure handling).
        return append_without_overlap(panorama, next);
    }

    let w = panorama.width();
    let h_p = panorama.height();
    let h = next.height();

    // Clamped to [-h, h], not [-(h-1), h-1]: the inclusive bound lets
    // `offset_px == h` (or less than `-h`) reach `overlap_h == 0` exactly,
    // which is what drives the no-overlap fallback below (§8 boundary
    // behavior: "offset >= height triggers the no-overlap branch").
    let bound = h as i64;
    let off = offset.offset_px.clamp(-bound, bound);

    let overlap_h_signed = if off >= 0 { h as i64 - off } else { h as i64 + off };
    let overlap_h = overlap_h_signed.clamp(0, h.min(h_p) as i64) as u32;

    if overlap_h == 0 {
        return append_without_overlap(panorama, next);
    }

    let align_top = h_p - overlap_h;
    let seam_row = seam::find_seam(panorama, next, align_top, overlap_h);

    let band = options.blend_band_px;
    // The band can never reach above `align_top`: there is no `N` row to
    // blend with a `P` row that predates the overlap.
    let seam_start = (align_top as i64 + seam_row as i64 - band as i64 / 2)
        .clamp(align_top as i64, h_p as i64) as u32;
    let seam_end = (seam_start + band).min(h_p);

    let new_height = h_p.max(align_top + h);

    let row_bytes = w as usize * 4;
    let mut rgba = vec![0u8; row_bytes * new_height as usize];
    rgba[..row_bytes * h_p as usize].copy_from_slice(panorama.as_rgba());

    for y in 0..(seam_end - seam_start) {
        let alpha = if band <= 1 {
            1.0
        } else {
            y as f64 / (band as f64 - 1.0)
        };
        let p_row = seam_start + y;
        let n_row = p_row - align_top;
        let out_start = p_row as usize * row_bytes;
        blend::blend_row(
            panorama.row(p_row),
            next.row(n_row),
            alpha,
            &mut rgba[out_start..out_start + row_bytes],
        );
    }

    // Capped to `overlap_h`: rows at or beyond the overlap are brand-new
    // content with no panorama counterpart, so the tail copy must reach
    // them regardless of how wide the blend band is — otherwise a band
    // wider than the overlap leaves `[H_P, new_height)` zeroed.
    let tail_start_in_next =
        (seam_row as i64 + (band as i64 + 1) / 2).clamp(0, overlap_h as i64) as u32;
    let dest_start_row = align_top + tail_start_in_next;
    let avail = new_height.saturating_sub(dest_start_row);
    let copy_rows = (h - tail_start_in_next).min(avail);
    if copy_rows > 0 {
        let src_start = tail_start_in_next as usize * row_bytes;
        let src_end = src_start + copy_rows as usize * row_bytes;
        let dst_start = dest_start_row as usize * row_bytes;
        let dst_end = dst_start + copy_rows as usize * row_bytes;
        rgba[dst_start..dst_end].copy_from_slice(&next.as_rgba()[src_start..src_end]);
    }

    Frame::from_rgba(w, new_height, rgba).expect("row-major buffer sized by construction")
}

fn append_without_overlap(panorama: &Frame, next: &Frame) -> Frame {
    let w = panorama.width();
    let new_height = panorama.height() + next.height();
    let mut rgba = Vec::with_capacity(w as usize * new_height as usize * 4);
    rgba.extend_from_slice(panorama.as_rgba());
    rgba.extend_from_slice(next.as_rgba());
    Frame::from_rgba(w, new_height, rgba).expect("row-major buffer sized by construction")
}
