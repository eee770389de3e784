//! Hover reaction animator for display objects.
//!
//! While an object's hover flag is set it bounces above its rest height,
//! wobbles around the vertical axis, and ramps its emissive intensity toward
//! the active value; its headlights switch on and its underlight brightens.
//! When the flag drops everything snaps back to the exact idle state in one
//! frame — no easing on the way down, so an idle object is bit-identical to
//! one that was never hovered.

use bevy_ecs::prelude::*;

use crate::components::attachedto::AttachedTo;
use crate::components::hover::{HoverMotion, Hoverable};
use crate::components::material::Material;
use crate::components::pointlight::{Headlight, PointLight, Underlight};
use crate::components::position::Position;
use crate::components::rotation::Rotation;
use crate::resources::clock::SceneClock;

use super::door::approach;

/// Vertical bounce offset at `elapsed` seconds; always in `[0, 2*amp]`.
pub fn bounce_offset(elapsed: f32, freq: f32, amp: f32) -> f32 {
    (elapsed * freq).sin() * amp + amp
}

/// Drive bounce, wobble, and emissive intensity from the hover flag.
pub fn car_hover_system(
    clock: Res<SceneClock>,
    mut query: Query<(
        &Hoverable,
        &HoverMotion,
        &mut Position,
        &mut Rotation,
        &mut Material,
    )>,
) {
    let elapsed = clock.elapsed;
    let dt = clock.delta;

    for (hoverable, motion, mut position, mut rotation, mut material) in query.iter_mut() {
        if hoverable.hovered {
            position.pos.y =
                motion.rest_y + bounce_offset(elapsed, motion.bounce_freq, motion.bounce_amp);
            rotation.euler.y = (elapsed * motion.wobble_freq).sin() * motion.wobble_amp;
            material.emissive_intensity = approach(
                material.emissive_intensity,
                motion.active_emissive,
                motion.emissive_gain,
                dt,
            );
        } else {
            // Snap, not ease: idle must be exactly the rest state.
            position.pos.y = motion.rest_y;
            rotation.euler.y = 0.0;
            material.emissive_intensity = motion.idle_emissive;
        }
    }
}

/// Switch car lights from the owning car's hover flag.
///
/// Headlights are enabled only while hovered; the underlight stays on and
/// swaps between its idle and active intensity. Lights follow the bounce
/// offset through the attach pass that runs afterwards.
pub fn car_light_system(
    cars: Query<&Hoverable>,
    mut headlights: Query<(&AttachedTo, &mut PointLight), With<Headlight>>,
    mut underlights: Query<(&AttachedTo, &Underlight, &mut PointLight), Without<Headlight>>,
) {
    for (attached, mut light) in headlights.iter_mut() {
        if let Ok(hoverable) = cars.get(attached.parent) {
            light.enabled = hoverable.hovered;
        }
    }
    for (attached, underlight, mut light) in underlights.iter_mut() {
        if let Ok(hoverable) = cars.get(attached.parent) {
            light.intensity = if hoverable.hovered {
                underlight.active_intensity
            } else {
                underlight.idle_intensity
            };
        }
    }
}
