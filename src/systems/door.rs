//! Door animator and the approach primitive.
//!
//! [`approach`] is the generic exponential-approach step used wherever a
//! value must converge on a target without overshoot. The door system applies
//! it to the door root's vertical offset each frame; the panels follow via
//! the attach system.

use bevy_ecs::prelude::*;

use crate::components::door::Door;
use crate::components::position::Position;
use crate::resources::clock::SceneClock;

/// Move `current` toward `target` by the fraction `gain * dt`, capped at 1.
///
/// Monotonic: the result never passes the target, and repeated application
/// converges within any epsilon in finitely many steps for `gain > 0`.
pub fn approach(current: f32, target: f32, gain: f32, dt: f32) -> f32 {
    current + (target - current) * (gain * dt).min(1.0)
}

/// Converge the door's vertical offset on its commanded target and write it
/// to the door root's position.
///
/// Snaps exactly onto the target once within the door's epsilon, so an idle
/// door holds a clean 0.0 or `open_height` rather than a near value.
pub fn door_system(clock: Res<SceneClock>, mut query: Query<(&mut Door, &mut Position)>) {
    let dt = clock.delta;
    for (mut door, mut position) in query.iter_mut() {
        let target = door.target_y();
        let next = approach(door.current_y, target, door.gain, dt);
        door.current_y = if (target - next).abs() < door.epsilon {
            target
        } else {
            next
        };
        position.pos.y = door.current_y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn approach_moves_half_way_at_gain_dt_half() {
        assert!(approx_eq(approach(0.0, 10.0, 1.0, 0.5), 5.0));
    }

    #[test]
    fn approach_caps_at_target_for_large_gain_dt() {
        assert!(approx_eq(approach(0.0, 10.0, 100.0, 1.0), 10.0));
        assert!(approx_eq(approach(3.0, -5.0, 10.0, 10.0), -5.0));
    }

    #[test]
    fn approach_never_overshoots() {
        let mut y = 0.0;
        for _ in 0..200 {
            let next = approach(y, 6.5, 3.0, 0.1);
            assert!(next <= 6.5 + EPSILON);
            assert!(next >= y - EPSILON); // monotone toward the target
            y = next;
        }
    }

    #[test]
    fn approach_from_above_descends_monotonically() {
        let mut y = 6.5;
        for _ in 0..200 {
            let next = approach(y, 0.0, 3.0, 0.1);
            assert!(next >= -EPSILON);
            assert!(next <= y + EPSILON);
            y = next;
        }
        assert!(y < 0.01);
    }

    #[test]
    fn approach_is_identity_at_target() {
        assert!(approx_eq(approach(4.2, 4.2, 3.0, 0.1), 4.2));
    }
}
