//! Visibility toggles for the ambient effect layers.
//!
//! Hiding an effect skips its update pass entirely; internal state (particle
//! positions, scroll phase) is preserved so showing it again resumes where it
//! left off instead of remounting from scratch.

use bevy_ecs::prelude::Resource;

/// The effect layers the host can toggle independently.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectKind {
    Particles,
    Rings,
    Grid,
}

/// Per-layer visibility flags; everything starts visible.
#[derive(Resource, Clone, Copy, Debug)]
pub struct EffectToggles {
    pub particles: bool,
    pub rings: bool,
    pub grid: bool,
}

impl Default for EffectToggles {
    fn default() -> Self {
        Self {
            particles: true,
            rings: true,
            grid: true,
        }
    }
}

impl EffectToggles {
    pub fn set(&mut self, kind: EffectKind, visible: bool) {
        match kind {
            EffectKind::Particles => self.particles = visible,
            EffectKind::Rings => self.rings = visible,
            EffectKind::Grid => self.grid = visible,
        }
    }

    pub fn is_visible(&self, kind: EffectKind) -> bool {
        match kind {
            EffectKind::Particles => self.particles,
            EffectKind::Rings => self.rings,
            EffectKind::Grid => self.grid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggles_are_independent() {
        let mut t = EffectToggles::default();
        t.set(EffectKind::Rings, false);
        assert!(!t.is_visible(EffectKind::Rings));
        assert!(t.is_visible(EffectKind::Particles));
        assert!(t.is_visible(EffectKind::Grid));
    }
}
