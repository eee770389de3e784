//! Garage door state component.
//!
//! The door is a compound object: this component lives on the door root
//! entity and drives its vertical offset; the individual panels carry
//! [`AttachedTo`](super::attachedto::AttachedTo) and follow rigidly.
//!
//! `current_y` converges toward `target_y()` each frame via the approach
//! primitive in [`crate::systems::door`] and never overshoots.

use bevy_ecs::prelude::Component;

use crate::config::DoorConfig;

/// Open/closed command and smoothed vertical offset of the garage door.
#[derive(Component, Clone, Copy, Debug)]
pub struct Door {
    /// Commanded state; `current_y` chases the matching target height.
    pub is_open: bool,
    /// Present vertical offset of the door root, in world units.
    pub current_y: f32,
    /// Height of the fully open door.
    pub open_height: f32,
    /// Approach gain per second.
    pub gain: f32,
    /// Snap distance: within this of the target, `current_y` snaps exactly.
    pub epsilon: f32,
}

impl Door {
    pub fn new(config: &DoorConfig) -> Self {
        Self {
            is_open: false,
            current_y: 0.0,
            open_height: config.open_height,
            gain: config.gain,
            epsilon: config.epsilon,
        }
    }

    /// Height `current_y` is converging toward.
    pub fn target_y(&self) -> f32 {
        if self.is_open { self.open_height } else { 0.0 }
    }

    /// Flip the commanded state.
    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    pub fn set_open(&mut self, open: bool) {
        self.is_open = open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn door() -> Door {
        Door::new(&DoorConfig::default())
    }

    #[test]
    fn starts_closed_at_ground() {
        let d = door();
        assert!(!d.is_open);
        assert_eq!(d.current_y, 0.0);
        assert_eq!(d.target_y(), 0.0);
    }

    #[test]
    fn toggle_flips_target() {
        let mut d = door();
        d.toggle();
        assert!(d.is_open);
        assert_eq!(d.target_y(), d.open_height);
        d.toggle();
        assert_eq!(d.target_y(), 0.0);
    }

    #[test]
    fn set_open_is_idempotent() {
        let mut d = door();
        d.set_open(true);
        d.set_open(true);
        assert!(d.is_open);
    }
}
