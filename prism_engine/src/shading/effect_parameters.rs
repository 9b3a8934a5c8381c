/// Per-object shading inputs, copied into every submitted batch.

use glam::{Mat4, Vec3};

#[derive(Debug, Clone, PartialEq)]
pub struct EffectParameters {
    pub model_view: Mat4,
    pub animation_time: f32,

    /// Texture library name bound on the diffuse channel (empty for none)
    pub diffuse_texture: String,
    /// Texture library name bound on the normal map channel (empty for none)
    pub normal_map: String,

    pub material_ambient: Vec3,
    pub material_diffuse: Vec3,
    pub material_specular: Vec3,
    pub specular_exponent: f32,
    pub gloss: f32,
    pub opacity: f32,
}

impl Default for EffectParameters {
    /// Untextured, black, fully opaque material at the origin
    fn default() -> Self {
        Self {
            model_view: Mat4::IDENTITY,
            animation_time: 0.0,
            diffuse_texture: String::new(),
            normal_map: String::new(),
            material_ambient: Vec3::ZERO,
            material_diffuse: Vec3::ZERO,
            material_specular: Vec3::ZERO,
            specular_exponent: 0.0,
            gloss: 0.0,
            opacity: 1.0,
        }
    }
}
