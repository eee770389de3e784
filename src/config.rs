//! Scene configuration and display-object descriptors.
//!
//! All tunables live here with safe defaults matching the reference scene.
//! Validation happens once at construction: negative counts and non-positive
//! gains or speeds are rejected with a [`ConfigError`] instead of being
//! silently clamped mid-run.

use glam::{Vec2, Vec3};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::resources::clock::DEFAULT_MAX_DELTA;

/// Invalid construction-time configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be positive (got {value})")]
    NonPositive { field: &'static str, value: f32 },
    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f32 },
    #[error("{field} must be at least 1")]
    ZeroCount { field: &'static str },
    #[error("{field}: min {min} exceeds max {max}")]
    InvertedRange {
        field: &'static str,
        min: f32,
        max: f32,
    },
    #[error("ring threshold {threshold} must be below max distance {max_distance}")]
    RingFalloffRange { threshold: f32, max_distance: f32 },
    #[error("particle reset height {reset_y} must lie below the ceiling {ceiling}")]
    ResetAboveCeiling { reset_y: f32, ceiling: f32 },
}

/// Failure to load the descriptor list from disk.
#[derive(Debug, Error)]
pub enum DescriptorError {
    #[error("failed to read descriptor file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse descriptor file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One display-object record from the data layer: `{id, label, base_color}`.
///
/// `base_color` is a `#RRGGBB` string. A malformed color is not an error at
/// this level; the scene composer falls back to a default body color and
/// logs a warning once.
#[derive(Debug, Clone, Deserialize)]
pub struct CarDescriptor {
    pub id: String,
    pub label: String,
    pub base_color: String,
}

/// Load an ordered descriptor list from a JSON file.
pub fn load_descriptors(path: impl AsRef<Path>) -> Result<Vec<CarDescriptor>, DescriptorError> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

fn require_positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

fn require_non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

fn require_range(field: &'static str, min: f32, max: f32) -> Result<(), ConfigError> {
    if min <= max {
        Ok(())
    } else {
        Err(ConfigError::InvertedRange { field, min, max })
    }
}

/// Garage door motion parameters.
#[derive(Debug, Clone, Copy)]
pub struct DoorConfig {
    /// Vertical offset of the fully open door, world units.
    pub open_height: f32,
    /// Approach gain per second.
    pub gain: f32,
    /// Snap distance to the target height.
    pub epsilon: f32,
}

impl Default for DoorConfig {
    fn default() -> Self {
        Self {
            open_height: 6.5,
            gain: 3.0,
            epsilon: 0.01,
        }
    }
}

impl DoorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("door.open_height", self.open_height)?;
        require_positive("door.gain", self.gain)?;
        require_positive("door.epsilon", self.epsilon)
    }
}

/// Particle pool parameters.
///
/// Defaults reproduce the reference scene: 30 motes rising through a 15x15
/// footprint, recycled at a ceiling of 8 world units.
#[derive(Debug, Clone, Copy)]
pub struct ParticleConfig {
    pub count: usize,
    /// Side length of the square spawn footprint, centered on the origin.
    pub footprint: f32,
    /// Height at which a particle is recycled.
    pub ceiling: f32,
    /// Height a recycled particle restarts from.
    pub reset_y: f32,
    /// Initial spawn height range.
    pub spawn_y_min: f32,
    pub spawn_y_max: f32,
    /// Upward velocity range, world units per second.
    pub rise_min: f32,
    pub rise_max: f32,
    /// Horizontal velocity is sampled in `[-lateral, lateral]` per axis.
    pub lateral: f32,
    /// Amplitude of the sinusoidal lateral drift.
    pub drift_amp: f32,
    /// Particle size range (uniform scale).
    pub size_min: f32,
    pub size_max: f32,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: 30,
            footprint: 15.0,
            ceiling: 8.0,
            reset_y: 0.1,
            spawn_y_min: 0.5,
            spawn_y_max: 2.5,
            rise_min: 0.02,
            rise_max: 0.07,
            lateral: 0.05,
            drift_amp: 0.02,
            size_min: 0.01,
            size_max: 0.03,
        }
    }
}

impl ParticleConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count == 0 {
            return Err(ConfigError::ZeroCount {
                field: "particles.count",
            });
        }
        require_positive("particles.footprint", self.footprint)?;
        require_positive("particles.ceiling", self.ceiling)?;
        require_non_negative("particles.reset_y", self.reset_y)?;
        if self.reset_y >= self.ceiling {
            return Err(ConfigError::ResetAboveCeiling {
                reset_y: self.reset_y,
                ceiling: self.ceiling,
            });
        }
        require_range("particles.spawn_y", self.spawn_y_min, self.spawn_y_max)?;
        require_positive("particles.rise_min", self.rise_min)?;
        require_range("particles.rise", self.rise_min, self.rise_max)?;
        require_non_negative("particles.lateral", self.lateral)?;
        require_non_negative("particles.drift_amp", self.drift_amp)?;
        require_positive("particles.size_min", self.size_min)?;
        require_range("particles.size", self.size_min, self.size_max)
    }
}

/// Light ring parameters.
#[derive(Debug, Clone, Copy)]
pub struct RingConfig {
    pub count: usize,
    /// Base ring radius; the per-frame scale is relative to it.
    pub radius: f32,
    /// Longitudinal spacing between adjacent rings.
    pub spacing: f32,
    /// Cycle speed along the axis.
    pub speed: f32,
    /// Multiplier turning the cycle phase into world-space travel.
    pub travel: f32,
    /// Scale lost per world unit of distance from the origin.
    pub falloff: f32,
    /// Distance up to which emissive intensity stays at full strength.
    pub threshold: f32,
    /// Distance at which emissive intensity has decayed to zero.
    pub max_distance: f32,
    /// Full emissive intensity scale.
    pub intensity: f32,
    /// Emissive color of even-indexed rings.
    pub color_even: Vec3,
    /// Emissive color of odd-indexed rings.
    pub color_odd: Vec3,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            count: 10,
            radius: 2.5,
            spacing: 2.5,
            speed: 0.2,
            travel: 1.5,
            falloff: 0.03,
            threshold: 1.5,
            max_distance: 8.0,
            intensity: 0.5,
            color_even: Vec3::new(0.05, 0.4, 2.0),
            color_odd: Vec3::new(2.0, 0.1, 0.4),
        }
    }
}

impl RingConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count == 0 {
            return Err(ConfigError::ZeroCount {
                field: "rings.count",
            });
        }
        require_positive("rings.radius", self.radius)?;
        require_positive("rings.spacing", self.spacing)?;
        require_positive("rings.speed", self.speed)?;
        require_positive("rings.travel", self.travel)?;
        require_non_negative("rings.falloff", self.falloff)?;
        require_non_negative("rings.threshold", self.threshold)?;
        require_non_negative("rings.intensity", self.intensity)?;
        if self.threshold >= self.max_distance {
            return Err(ConfigError::RingFalloffRange {
                threshold: self.threshold,
                max_distance: self.max_distance,
            });
        }
        Ok(())
    }
}

/// UV scroll velocities for the tiling surfaces. Components are signed;
/// the sign picks the scroll direction.
#[derive(Debug, Clone, Copy)]
pub struct ScrollConfig {
    pub floor_speed: Vec2,
    pub grid_speed: Vec2,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            floor_speed: Vec2::new(0.0, -0.05),
            grid_speed: Vec2::new(0.0, -0.3),
        }
    }
}

/// Hover reaction parameters shared by all display objects.
#[derive(Debug, Clone, Copy)]
pub struct HoverConfig {
    pub bounce_amp: f32,
    pub bounce_freq: f32,
    /// Yaw wobble amplitude, radians.
    pub wobble_amp: f32,
    pub wobble_freq: f32,
    pub active_emissive: f32,
    pub idle_emissive: f32,
    /// Approach gain of the emissive ramp-up.
    pub emissive_gain: f32,
    pub headlight_intensity: f32,
    pub headlight_distance: f32,
    pub headlight_decay: f32,
    pub underlight_idle: f32,
    pub underlight_active: f32,
    /// Wheel spin in radians per second of elapsed time.
    pub wheel_spin_rate: f32,
}

impl Default for HoverConfig {
    fn default() -> Self {
        Self {
            bounce_amp: 0.02,
            bounce_freq: 6.0,
            wobble_amp: 0.05,
            wobble_freq: 4.0,
            active_emissive: 1.0,
            idle_emissive: 0.0,
            emissive_gain: 8.0,
            headlight_intensity: 1.5,
            headlight_distance: 3.0,
            headlight_decay: 2.0,
            underlight_idle: 0.5,
            underlight_active: 1.0,
            wheel_spin_rate: 2.0,
        }
    }
}

impl HoverConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_negative("hover.bounce_amp", self.bounce_amp)?;
        require_positive("hover.bounce_freq", self.bounce_freq)?;
        require_non_negative("hover.wobble_amp", self.wobble_amp)?;
        require_positive("hover.wobble_freq", self.wobble_freq)?;
        require_non_negative("hover.active_emissive", self.active_emissive)?;
        require_non_negative("hover.idle_emissive", self.idle_emissive)?;
        require_positive("hover.emissive_gain", self.emissive_gain)?;
        require_non_negative("hover.headlight_intensity", self.headlight_intensity)?;
        require_positive("hover.headlight_distance", self.headlight_distance)?;
        require_positive("hover.headlight_decay", self.headlight_decay)?;
        require_non_negative("hover.underlight_idle", self.underlight_idle)?;
        require_non_negative("hover.underlight_active", self.underlight_active)?;
        require_non_negative("hover.wheel_spin_rate", self.wheel_spin_rate)
    }
}

/// Complete scene configuration; inserted into the world as a resource so
/// systems read the sub-config they own.
#[derive(bevy_ecs::prelude::Resource, Debug, Clone, Copy)]
pub struct ShowroomConfig {
    /// Per-frame delta clamp, seconds.
    pub max_delta: f32,
    /// Spacing between neighboring cars on the floor line.
    pub car_spacing: f32,
    pub door: DoorConfig,
    pub particles: ParticleConfig,
    pub rings: RingConfig,
    pub scroll: ScrollConfig,
    pub hover: HoverConfig,
}

impl Default for ShowroomConfig {
    fn default() -> Self {
        Self {
            max_delta: DEFAULT_MAX_DELTA,
            car_spacing: 3.0,
            door: DoorConfig::default(),
            particles: ParticleConfig::default(),
            rings: RingConfig::default(),
            scroll: ScrollConfig::default(),
            hover: HoverConfig::default(),
        }
    }
}

impl ShowroomConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("max_delta", self.max_delta)?;
        require_positive("car_spacing", self.car_spacing)?;
        self.door.validate()?;
        self.particles.validate()?;
        self.rings.validate()?;
        self.hover.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(ShowroomConfig::default().validate().is_ok());
    }

    #[test]
    fn negative_gain_is_rejected() {
        let mut config = ShowroomConfig::default();
        config.door.gain = -1.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive { field: "door.gain", .. })
        ));
    }

    #[test]
    fn zero_particle_count_is_rejected() {
        let mut config = ShowroomConfig::default();
        config.particles.count = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ZeroCount { field: "particles.count" })
        ));
    }

    #[test]
    fn inverted_rise_range_is_rejected() {
        let mut config = ShowroomConfig::default();
        config.particles.rise_min = 0.5;
        config.particles.rise_max = 0.1;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvertedRange { field: "particles.rise", .. })
        ));
    }

    #[test]
    fn ring_threshold_must_stay_below_max_distance() {
        let mut config = ShowroomConfig::default();
        config.rings.threshold = 9.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::RingFalloffRange { .. })
        ));
    }

    #[test]
    fn reset_height_must_stay_below_ceiling() {
        let mut config = ShowroomConfig::default();
        config.particles.reset_y = 8.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ResetAboveCeiling { .. })
        ));
    }

    #[test]
    fn descriptor_list_parses_from_json() {
        let json = r##"[
            {"id": "car1", "label": "To-Do App", "base_color": "#FF6B6B"}
        ]"##;
        let list: Vec<CarDescriptor> = serde_json::from_str(json).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].id, "car1");
        assert_eq!(list[0].base_color, "#FF6B6B");
    }
}
