use bevy_ecs::prelude::Component;
use glam::Vec3;

/// Surface material parameters written by the animators and read by the
/// rendering backend.
///
/// `emissive` is a linear RGB color (components may exceed 1.0 for bloom) and
/// `emissive_intensity` is the scalar glow strength the animators drive.
#[derive(Component, Clone, Copy, Debug)]
pub struct Material {
    /// Base albedo color, linear RGB.
    pub color: Vec3,
    /// Emissive color, linear RGB.
    pub emissive: Vec3,
    /// Scalar multiplier for the emissive color.
    pub emissive_intensity: f32,
    pub metalness: f32,
    pub roughness: f32,
}

impl Material {
    /// Matte material with the given base color and no glow.
    pub fn matte(color: Vec3) -> Self {
        Self {
            color,
            emissive: Vec3::ZERO,
            emissive_intensity: 0.0,
            metalness: 0.0,
            roughness: 1.0,
        }
    }

    /// Glossy car body paint in the given color.
    pub fn car_paint(color: Vec3) -> Self {
        Self {
            color,
            emissive: Vec3::ZERO,
            emissive_intensity: 0.0,
            metalness: 0.8,
            roughness: 0.2,
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::matte(Vec3::splat(0.5))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn car_paint_is_glossy() {
        let m = Material::car_paint(Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(m.metalness, 0.8);
        assert_eq!(m.roughness, 0.2);
        assert_eq!(m.emissive_intensity, 0.0);
    }
}
