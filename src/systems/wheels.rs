//! Continuous wheel spin.
//!
//! Wheels turn at a constant rate from elapsed time; the rotation is an
//! absolute function of the clock, so it is unaffected by effect toggles and
//! restarts cleanly from any elapsed value.

use bevy_ecs::prelude::*;

use crate::components::rotation::Rotation;
use crate::components::wheel::Wheel;
use crate::resources::clock::SceneClock;

/// Spin every wheel node around its axle.
pub fn wheel_spin_system(clock: Res<SceneClock>, mut query: Query<(&Wheel, &mut Rotation)>) {
    let elapsed = clock.elapsed;
    for (wheel, mut rotation) in query.iter_mut() {
        rotation.euler.x = elapsed * wheel.spin_rate;
    }
}
