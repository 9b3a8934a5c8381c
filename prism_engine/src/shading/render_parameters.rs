/// Scene-wide render parameters.
///
/// Owned by the `GraphicsManager` and handed to the calculators by reference.
/// Gameplay code mutates them between frames.

use glam::{Mat4, Vec3};
use crate::config::NUM_POINT_LIGHTS;

/// Single directional light
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DirectionalLight {
    pub direction: Vec3,
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
}

/// Point light slot
///
/// A slot with all-zero colors contributes nothing and is skipped by the
/// forward calculator.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointLight {
    pub position: Vec3,
    /// Distance at which the light reaches zero
    pub range: f32,
    /// Distance from the light where attenuation begins
    pub falloff: f32,
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderParameters {
    pub projection: Mat4,
    pub eye_position: Vec3,
    pub directional_light: DirectionalLight,
    pub point_lights: [PointLight; NUM_POINT_LIGHTS],
    /// Texture library name of the scene environment map (empty for none)
    pub environment_map: String,
    /// Color transform handed to every post-process pass
    pub color_correction: Mat4,
}

impl RenderParameters {
    /// Point light slot `index`, if it exists
    pub fn point_light_mut(&mut self, index: usize) -> Option<&mut PointLight> {
        self.point_lights.get_mut(index)
    }
}
