/// Degenerate-variance threshold below which a ZNCC score is undefined (§4.3).
pub const ZNCC_MIN_VARIANCE_PRODUCT: f64 = 1e-6;

/// Overlap rows below this height make a ZNCC comparison meaningless (§4.3).
pub const ZNCC_MIN_OVERLAP_ROWS: i64 = 4;

/// Sentinel ZNCC score for degenerate comparisons (§3 Invariants).
pub const ZNCC_UNDEFINED: f64 = -2.0;

/// Minimum effective height (after crop) the estimator will align (§3
/// Invariants): frames shorter than this are rejected. Inclusive floor —
/// a frame exactly this tall is alignable (see DESIGN.md's note on
/// reconciling this with the numbered scenario that aligns 8-row frames).
pub const MIN_EFFECTIVE_HEIGHT: i64 = 8;

/// Central strip bounds the Seam Finder samples, as a fraction of width (§4.5).
pub const SEAM_STRIP_MARGIN: f64 = 0.1;

/// Minimum (candidates * samples-per-candidate) before the offset scan is
/// fanned out across a Rayon thread pool rather than run as a scalar loop.
/// Mirrors the teacher's `PARALLEL_PIXEL_THRESHOLD` gate.
pub const PARALLEL_CANDIDATE_THRESHOLD: usize = 65_536;

/// Default `StitchOptions` values (§3).
pub const DEFAULT_PYRAMID_LEVELS: u32 = 4;
pub const DEFAULT_MAX_SEARCH_PERCENT: f64 = 0.5;
pub const DEFAULT_REFINE_WINDOW_PX: u32 = 8;
pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.6;
pub const DEFAULT_BLEND_BAND_PX: u32 = 24;
