//! Stitch Orchestrator (§4.8): the public entry point tying width
//! normalization, the Offset Estimator, and the Panorama Compositor
//! together.
//!
//! Grounded on `jupiter-core/src/pipeline/orchestrator.rs::run_pipeline_reported`
//! for the validate-up-front-then-log-stage-boundaries shape: a single
//! fallible entry point that emits `tracing::info!` at stage transitions
//! rather than per-candidate detail.

use image::imageops::FilterType;
use tracing::info;

use crate::align::estimate_offset;
use crate::compositor;
use crate::error::{Result, StitchError};
use crate::frame::{Frame, OffsetResult, StitchResult};

use super::config::StitchOptions;

/// Stitch `frames` into a single panorama, scrolling top to bottom (§4.8).
pub fn stitch(frames: &[Frame], options: &StitchOptions) -> Result<StitchResult> {
    if frames.is_empty() {
        return Err(StitchError::EmptyInput);
    }
    options.validate()?;

    info!(frame_count = frames.len(), "stitch starting");

    let target_width = frames[0].width();
    let normalized = normalize_widths(frames, target_width);

    let mut panorama = normalized[0].clone();
    let mut offsets = Vec::with_capacity(normalized.len() - 1);

    for i in 1..normalized.len() {
        let prev = &normalized[i - 1];
        let next = &normalized[i];
        let offset = estimate_offset(prev, next, options)?;
        info!(
            join = i,
            offset_px = offset.offset_px,
            confidence = offset.confidence,
            "estimate_offset"
        );
        panorama = compositor::join(&panorama, next, &offset, options);
        offsets.push(offset);
    }

    info!(
        output_width = panorama.width(),
        output_height = panorama.height(),
        joins = offsets.len(),
        "stitch complete"
    );

    Ok(StitchResult {
        image: panorama,
        offsets,
    })
}

/// Estimate the vertical scroll offset between two frames directly,
/// without compositing. Exposed for diagnostic callers (§6).
pub fn estimate_vertical_offset(prev: &Frame, next: &Frame, options: &StitchOptions) -> Result<OffsetResult> {
    options.validate()?;
    if prev.width() != next.width() {
        return Err(StitchError::DimensionMismatch {
            index: 1,
            width: next.width(),
            expected: prev.width(),
        });
    }
    let offset = estimate_offset(prev, next, options)?;
    info!(
        offset_px = offset.offset_px,
        confidence = offset.confidence,
        "estimate_offset"
    );
    Ok(offset)
}

/// Rescale every frame to `target_width` with bilinear filtering,
/// preserving aspect ratio; frames already at `target_width` are cloned
/// unchanged (§4.8 step 1).
fn normalize_widths(frames: &[Frame], target_width: u32) -> Vec<Frame> {
    frames
        .iter()
        .map(|frame| {
            if frame.width() == target_width {
                frame.clone()
            } else {
                let new_height = ((frame.height() as f64) * target_width as f64 / frame.width() as f64)
                    .round()
                    .max(1.0) as u32;
                let resized = image::imageops::resize(
                    &frame.to_image(),
                    target_width,
                    new_height,
                    FilterType::Triangle,
                );
                Frame::from_image(&resized)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn striped_frame(h: u32, w: u32) -> Frame {
        let mut rgba = Vec::with_capacity((h * w * 4) as usize);
        for y in 0..h {
            let v = if y % 2 == 0 { 230 } else { 25 };
            for _ in 0..w {
                rgba.extend_from_slice(&[v, v, v, 255]);
            }
        }
        Frame::from_rgba(w, h, rgba).unwrap()
    }

    #[test]
    fn empty_input_is_an_error() {
        let result = stitch(&[], &StitchOptions::default());
        assert!(matches!(result, Err(StitchError::EmptyInput)));
    }

    #[test]
    fn single_frame_passes_through_unchanged() {
        let frame = striped_frame(20, 10);
        let result = stitch(&[frame.clone()], &StitchOptions::default()).unwrap();
        assert_eq!(result.image.width(), frame.width());
        assert_eq!(result.image.height(), frame.height());
        assert!(result.offsets.is_empty());
    }

    #[test]
    fn two_identical_frames_grow_the_panorama_by_less_than_double() {
        let frame = striped_frame(40, 10);
        let mut options = StitchOptions::default();
        options.blend_band_px = 4;
        let result = stitch(&[frame.clone(), frame.clone()], &options).unwrap();
        assert_eq!(result.offsets.len(), 1);
        assert!(result.image.height() < frame.height() * 2);
        assert!(result.image.height() >= frame.height());
    }

    #[test]
    fn mismatched_widths_are_normalized_before_alignment() {
        let a = striped_frame(40, 10);
        let b = striped_frame(40, 20);
        let result = stitch(&[a, b], &StitchOptions::default()).unwrap();
        assert_eq!(result.image.width(), 10);
    }

    #[test]
    fn rejects_invalid_options() {
        let frame = striped_frame(20, 10);
        let mut options = StitchOptions::default();
        options.pyramid_levels = 0;
        let result = stitch(&[frame], &options);
        assert!(matches!(result, Err(StitchError::InvalidOption(_))));
    }
}
