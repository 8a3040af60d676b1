//! Stitch options (§3, §7): a flat, serializable configuration surface.
//!
//! Grounded on `jupiter-core/src/pipeline/config.rs::PipelineConfig` — a
//! flat struct of primitives, each field `#[serde(default = "...")]` so a
//! host can deserialize a partial profile, plus a `Default` impl that
//! mirrors the same constants used by the per-field defaults.

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_BLEND_BAND_PX, DEFAULT_MAX_SEARCH_PERCENT, DEFAULT_MIN_CONFIDENCE,
    DEFAULT_PYRAMID_LEVELS, DEFAULT_REFINE_WINDOW_PX,
};
use crate::error::{Result, StitchError};

/// Tunable parameters for [`crate::stitch`] and
/// [`crate::align::estimate_offset`] (§3). Every field has a default
/// exercised by the test suite; see [`StitchOptions::default`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StitchOptions {
    /// Number of pyramid levels; coarsest search runs at level `n - 1`.
    #[serde(default = "default_pyramid_levels")]
    pub pyramid_levels: u32,
    /// At the coarsest level, search range is `±round(h_coarse * p)`.
    #[serde(default = "default_max_search_percent")]
    pub max_search_percent: f64,
    /// At each finer level, search range is `±refine_window_px`.
    #[serde(default = "default_refine_window_px")]
    pub refine_window_px: u32,
    /// Horizontal sampling stride used by the ZNCC scorer.
    #[serde(default = "default_sample_step")]
    pub sample_x_step: u32,
    /// Vertical sampling stride used by the ZNCC scorer.
    #[serde(default = "default_sample_step")]
    pub sample_y_step: u32,
    /// Rows trimmed from the top of every frame before alignment only.
    #[serde(default)]
    pub crop_top_px: u32,
    /// Rows trimmed from the bottom of every frame before alignment only.
    #[serde(default)]
    pub crop_bottom_px: u32,
    /// Confidence floor below which a join is still performed but flagged.
    #[serde(default = "default_min_confidence")]
    pub min_confidence: f64,
    /// Width (in rows) of the alpha feather band straddling each seam.
    #[serde(default = "default_blend_band_px")]
    pub blend_band_px: u32,
    /// Clamp the estimator's returned offset into `[-(h_eff-1), h_eff-1]`.
    #[serde(default = "default_true")]
    pub clamp_offset_to_range: bool,
}

fn default_pyramid_levels() -> u32 {
    DEFAULT_PYRAMID_LEVELS
}
fn default_max_search_percent() -> f64 {
    DEFAULT_MAX_SEARCH_PERCENT
}
fn default_refine_window_px() -> u32 {
    DEFAULT_REFINE_WINDOW_PX
}
fn default_sample_step() -> u32 {
    1
}
fn default_min_confidence() -> f64 {
    DEFAULT_MIN_CONFIDENCE
}
fn default_blend_band_px() -> u32 {
    DEFAULT_BLEND_BAND_PX
}
fn default_true() -> bool {
    true
}

impl Default for StitchOptions {
    fn default() -> Self {
        Self {
            pyramid_levels: DEFAULT_PYRAMID_LEVELS,
            max_search_percent: DEFAULT_MAX_SEARCH_PERCENT,
            refine_window_px: DEFAULT_REFINE_WINDOW_PX,
            sample_x_step: 1,
            sample_y_step: 1,
            crop_top_px: 0,
            crop_bottom_px: 0,
            min_confidence: DEFAULT_MIN_CONFIDENCE,
            blend_band_px: DEFAULT_BLEND_BAND_PX,
            clamp_offset_to_range: true,
        }
    }
}

impl StitchOptions {
    /// Validate field ranges once, up front, rather than deep inside a hot
    /// loop (§7). Mirrors how the teacher validates `PipelineConfig` before
    /// a pipeline run.
    pub fn validate(&self) -> Result<()> {
        if self.pyramid_levels < 1 {
            return Err(StitchError::InvalidOption(
                "pyramid_levels must be >= 1".into(),
            ));
        }
        if !(self.max_search_percent > 0.0 && self.max_search_percent <= 1.0) {
            return Err(StitchError::InvalidOption(
                "max_search_percent must be in (0, 1]".into(),
            ));
        }
        if self.refine_window_px < 1 {
            return Err(StitchError::InvalidOption(
                "refine_window_px must be >= 1".into(),
            ));
        }
        if self.sample_x_step < 1 || self.sample_y_step < 1 {
            return Err(StitchError::InvalidOption(
                "sample strides must be >= 1".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.min_confidence) {
            return Err(StitchError::InvalidOption(
                "min_confidence must be in [0, 1]".into(),
            ));
        }
        Ok(())
    }
}
