//! Alignment: pyramid construction, the ZNCC scorer, and the coarse-to-fine
//! offset estimator built on top of them (§4.2-§4.4).

pub mod estimator;
pub mod pyramid;
pub mod score;

pub use estimator::estimate_offset;
