//! ZNCC Scorer (§4.3).
//!
//! Computes zero-mean normalized cross-correlation between two equal-size
//! grayscale planes at a hypothesized vertical shift. Grounded on the
//! `Metric::Zncc` dispatch in `corrmatch-rs/src/search/coarse.rs` (the
//! pack's only other ZNCC-named metric) and on the mean/variance-from-sums
//! idiom in `Merge-Images-Web/engine/src/overlap.rs::template_variance`;
//! there is no direct teacher counterpart since `jupiter-core`'s alignment
//! is FFT phase correlation, not a spatial-domain scorer.

use crate::consts::{ZNCC_MIN_OVERLAP_ROWS, ZNCC_MIN_VARIANCE_PRODUCT, ZNCC_UNDEFINED};
use crate::frame::GrayPlane;

/// Compute the ZNCC score for hypothesized vertical shift `off` between
/// equal-size planes `a` and `b`. Returns [`crate::consts::ZNCC_UNDEFINED`]
/// for every degenerate case enumerated in §4.3; otherwise a value in
/// `[-1.0, 1.0]`. Pure: never mutates its inputs.
pub fn zncc(a: &GrayPlane, b: &GrayPlane, off: i64, sample_x_step: u32, sample_y_step: u32) -> f64 {
    debug_assert_eq!(a.dim(), b.dim());
    let (h, w) = a.dim();
    let h = h as i64;

    let (a_start, b_start, overlap_h) = if off >= 0 {
        (0i64, off, h - off)
    } else {
        (-off, 0i64, h + off)
    };

    if overlap_h <= ZNCC_MIN_OVERLAP_ROWS {
        return ZNCC_UNDEFINED;
    }

    let sx = sample_x_step.max(1) as usize;
    let sy = (sample_y_step.max(1) as i64).max(1);

    let mut sum_a = 0.0f64;
    let mut sum_b = 0.0f64;
    let mut sum_aa = 0.0f64;
    let mut sum_bb = 0.0f64;
    let mut sum_ab = 0.0f64;
    let mut n: u64 = 0;

    let mut y = 0i64;
    while y < overlap_h {
        let ar = (a_start + y) as usize;
        let br = (b_start + y) as usize;
        let mut x = 0usize;
        while x < w {
            let av = a[[ar, x]] as f64;
            let bv = b[[br, x]] as f64;
            sum_a += av;
            sum_b += bv;
            sum_aa += av * av;
            sum_bb += bv * bv;
            sum_ab += av * bv;
            n += 1;
            x += sx;
        }
        y += sy;
    }

    if n == 0 {
        return ZNCC_UNDEFINED;
    }

    let n_f = n as f64;
    let mean_a = sum_a / n_f;
    let mean_b = sum_b / n_f;
    let var_a = sum_aa / n_f - mean_a * mean_a;
    let var_b = sum_bb / n_f - mean_b * mean_b;
    // Authoritative covariance formula (§9): sum_ab/N - mean_a*mean_b, not
    // the sum_ab/N - mean_a^2 - mean_b^2 + mean_a*mean_b form an earlier
    // revision of this scorer used.
    let cov = sum_ab / n_f - mean_a * mean_b;

    let var_product = var_a * var_b;
    if var_product <= ZNCC_MIN_VARIANCE_PRODUCT {
        return ZNCC_UNDEFINED;
    }

    (cov / var_product.sqrt()).clamp(-1.0, 1.0)
}
