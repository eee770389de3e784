//! System propagating parent positions to rigidly attached children.
//!
//! Runs after the door and hover animators so panels, wheels, and lights
//! follow the transforms written this frame. Children whose parent entity is
//! gone keep their last position.

use bevy_ecs::prelude::*;

use crate::components::attachedto::AttachedTo;
use crate::components::position::Position;

/// Copy each parent's position plus offset into its attached children.
pub fn attach_system(
    mut children: Query<(&AttachedTo, &mut Position)>,
    parents: Query<&Position, Without<AttachedTo>>,
) {
    for (attached, mut child_pos) in children.iter_mut() {
        if let Ok(parent_pos) = parents.get(attached.parent) {
            child_pos.pos = parent_pos.pos + attached.offset;
        }
    }
}
