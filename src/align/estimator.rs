//! Offset Estimator (§4.4): coarse-to-fine vertical offset search.
//!
//! Grounded on `jupiter-core/src/align/pyramid.rs::compute_offset_pyramid`
//! for the overall coarsest-to-finest loop shape (build both pyramids,
//! carry a `guess` that doubles per level, evaluate a residual/search
//! window around it) and on `corrmatch-rs/src/search/coarse.rs`'s
//! `coarse_search_level_par` for the gated Rayon fan-out over candidate
//! offsets, re-ordered afterwards so the argmax tie-break matches the
//! scalar scan regardless of which path ran.

use rayon::prelude::*;

use crate::align::pyramid::build_pyramid;
use crate::align::score::zncc;
use crate::color::{crop_vertical, to_grayscale};
use crate::consts::{MIN_EFFECTIVE_HEIGHT, PARALLEL_CANDIDATE_THRESHOLD};
use crate::error::{Result, StitchError};
use crate::frame::{Frame, OffsetResult};
use crate::pipeline::config::StitchOptions;

/// Estimate the vertical scroll offset between `prev` and `next`, both
/// already validated to share the same width. Offsets are computed in the
/// coordinate system of the effective (post-crop) band (§4.4).
pub fn estimate_offset(prev: &Frame, next: &Frame, options: &StitchOptions) -> Result<OffsetResult> {
    let effective_height = prev.height() as i64 - options.crop_top_px as i64 - options.crop_bottom_px as i64;
    // Inclusive floor: a frame cropped down to exactly MIN_EFFECTIVE_HEIGHT
    // rows is still alignable (see DESIGN.md's "effective height floor"
    // note) — only a band strictly shorter than that is rejected.
    if effective_height < MIN_EFFECTIVE_HEIGHT {
        return Err(StitchError::EffectiveHeightTooSmall {
            index: 0,
            effective_height,
        });
    }

    let prev_cropped = crop_vertical(prev, options.crop_top_px, options.crop_bottom_px);
    let next_cropped = crop_vertical(next, options.crop_top_px, options.crop_bottom_px);

    let prev_gray = to_grayscale(&prev_cropped);
    let next_gray = to_grayscale(&next_cropped);

    let levels = options.pyramid_levels.max(1);
    let prev_pyramid = build_pyramid(&prev_gray, levels);
    let next_pyramid = build_pyramid(&next_gray, levels);
    let n = prev_pyramid.len();

    let mut guess: i64 = 0;
    let mut best_score = crate::consts::ZNCC_UNDEFINED;

    for level in (0..n).rev() {
        let plane_prev = &prev_pyramid[level];
        let plane_next = &next_pyramid[level];
        let (h_l, _w_l) = plane_prev.dim();
        let h_l = h_l as i64;

        let is_coarsest = level == n - 1;
        let range = if is_coarsest {
            (h_l as f64 * options.max_search_percent).round() as i64
        } else {
            options.refine_window_px as i64
        }
        .max(1);

        let coarse = if is_coarsest { guess } else { guess * 2 };
        let from = (-(h_l - 1)).max(coarse - range);
        let to = (h_l - 1).min(coarse + range);

        let offsets: Vec<i64> = (from..=to).collect();
        let work_estimate = offsets.len() * plane_prev.len();

        let scores: Vec<f64> = if work_estimate >= PARALLEL_CANDIDATE_THRESHOLD {
            offsets
                .par_iter()
                .map(|&off| zncc(plane_prev, plane_next, off, options.sample_x_step, options.sample_y_step))
                .collect()
        } else {
            offsets
                .iter()
                .map(|&off| zncc(plane_prev, plane_next, off, options.sample_x_step, options.sample_y_step))
                .collect()
        };

        let mut best_idx = 0;
        let mut level_best = scores[0];
        for (i, &s) in scores.iter().enumerate().skip(1) {
            if s > level_best {
                level_best = s;
                best_idx = i;
            }
        }

        // A level is only informative if at least one candidate produced a
        // defined score; an all-degenerate coarse level (common for tiny
        // coarsest planes) leaves `guess` untouched rather than adopting
        // `offsets[0]` (the most-negative candidate), which would bias the
        // search window at every finer level that follows.
        if level_best > crate::consts::ZNCC_UNDEFINED {
            guess = offsets[best_idx];
        }
        best_score = level_best;
    }

    // Every candidate at the finest level was degenerate (flat/near-flat
    // overlap): report the neutral offset rather than an arbitrary
    // first-scanned candidate, so the compositor can fall back to a plain
    // append instead of trusting a meaningless seam.
    let mut offset_px = if best_score <= crate::consts::ZNCC_UNDEFINED {
        0
    } else {
        guess
    };

    if options.clamp_offset_to_range {
        let bound = effective_height - 1;
        offset_px = offset_px.clamp(-bound, bound);
    }

    Ok(OffsetResult {
        offset_px,
        confidence: best_score,
    })
}
