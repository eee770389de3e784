//! Hover flag and hover-driven motion parameters.
//!
//! [`Hoverable`] is the per-object hover flag maintained by the pointer
//! router; [`HoverMotion`] holds the bounce/wobble/emissive parameters the
//! car hover animator reads every frame. The flag is the only field on a
//! display object the router is allowed to write.

use bevy_ecs::prelude::Component;

use crate::config::HoverConfig;

/// Per-object hover flag, written only by the pointer router.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Hoverable {
    pub hovered: bool,
}

/// Hover reaction parameters for a display object.
///
/// While hovered the object bounces in `[0, 2*bounce_amp]` above `rest_y`
/// and wobbles around the vertical axis; when the hover flag drops, offset
/// and wobble snap back to exactly zero.
#[derive(Component, Clone, Copy, Debug)]
pub struct HoverMotion {
    /// Resting height the bounce offset is applied from.
    pub rest_y: f32,
    pub bounce_amp: f32,
    pub bounce_freq: f32,
    /// Wobble amplitude around the vertical axis, radians.
    pub wobble_amp: f32,
    pub wobble_freq: f32,
    /// Emissive intensity while hovered.
    pub active_emissive: f32,
    /// Emissive intensity at rest.
    pub idle_emissive: f32,
    /// Approach gain for the emissive ramp-up, per second.
    pub emissive_gain: f32,
}

impl HoverMotion {
    pub fn new(config: &HoverConfig, rest_y: f32) -> Self {
        Self {
            rest_y,
            bounce_amp: config.bounce_amp,
            bounce_freq: config.bounce_freq,
            wobble_amp: config.wobble_amp,
            wobble_freq: config.wobble_freq,
            active_emissive: config.active_emissive,
            idle_emissive: config.idle_emissive,
            emissive_gain: config.emissive_gain,
        }
    }
}
