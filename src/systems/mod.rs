//! Per-frame systems.
//!
//! All systems run once per rendered frame on the thread that owns the scene
//! world; none may block. The clock advances first, then the animators, each
//! of which owns a disjoint set of transform/material fields.
//!
//! Submodules overview
//! - [`attach`] – propagate parent positions to rigidly attached children
//! - [`carhover`] – hover-driven bounce, wobble, emissive, and car lights
//! - [`door`] – approach primitive and the door height animator
//! - [`hover`] – route backend pointer input into hover flags and events
//! - [`particles`] – integrate and recycle the drifting particle pool
//! - [`rings`] – position, scale, and color the light rings from elapsed time
//! - [`texturescroll`] – advance tiling UV offsets for floor and grid
//! - [`time`] – advance the scene clock, first in every frame
//! - [`wheels`] – continuous wheel spin from elapsed time

pub mod attach;
pub mod carhover;
pub mod door;
pub mod hover;
pub mod particles;
pub mod rings;
pub mod texturescroll;
pub mod time;
pub mod wheels;
