//! Clock update.
//!
//! Advances the shared [`SceneClock`](crate::resources::clock::SceneClock)
//! resource once per frame, before any animator runs. The provided delta is
//! clamped to the configured maximum so a stalled frame cannot destabilize
//! the integrators.

use bevy_ecs::prelude::*;

use crate::resources::clock::SceneClock;

/// Advance elapsed and delta seconds on the [`SceneClock`] resource.
///
/// `dt` is the raw frame delta in seconds as measured by the host render
/// loop; clamping happens inside [`SceneClock::advance`].
pub fn advance_clock(world: &mut World, dt: f32) {
    let mut clock = world.resource_mut::<SceneClock>();
    clock.advance(dt);
}
