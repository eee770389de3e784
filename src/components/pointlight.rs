use bevy_ecs::prelude::Component;
use glam::Vec3;

/// Point light parameters read by the rendering backend.
#[derive(Component, Clone, Copy, Debug)]
pub struct PointLight {
    pub color: Vec3,
    pub intensity: f32,
    /// Maximum range of the light in world units.
    pub distance: f32,
    /// Physical falloff exponent.
    pub decay: f32,
    /// Disabled lights are skipped entirely by the backend.
    pub enabled: bool,
}

impl PointLight {
    pub fn new(color: Vec3, intensity: f32, distance: f32, decay: f32) -> Self {
        Self {
            color,
            intensity,
            distance,
            decay,
            enabled: true,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

/// Marker for a car headlight: enabled only while the owning car is hovered.
#[derive(Component, Clone, Copy, Debug)]
pub struct Headlight;

/// Underbody glow light: always on, brighter while the owning car is hovered.
#[derive(Component, Clone, Copy, Debug)]
pub struct Underlight {
    pub idle_intensity: f32,
    pub active_intensity: f32,
}
