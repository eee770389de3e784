use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Scrolling UV offset for a tiling surface material.
///
/// The scroll system accumulates `speed * dt` into `offset` and wraps each
/// component into `[0, 1)`, so the value handed to the material is always a
/// valid tiling offset.
#[derive(Component, Clone, Copy, Debug)]
pub struct TextureScroll {
    pub offset: Vec2,
    pub speed: Vec2,
}

impl TextureScroll {
    pub fn new(speed: Vec2) -> Self {
        Self {
            offset: Vec2::ZERO,
            speed,
        }
    }
}

/// Marker for the floating grid overlay; its scroll is gated by the `grid`
/// effect toggle while the floor keeps scrolling regardless.
#[derive(Component, Clone, Copy, Debug)]
pub struct GridOverlay;
