//! Stitch configuration and the orchestrator that drives a full run
//! (§3, §4.8).

pub mod config;
pub mod orchestrator;

pub use config::StitchOptions;
pub use orchestrator::{estimate_vertical_offset, stitch};
