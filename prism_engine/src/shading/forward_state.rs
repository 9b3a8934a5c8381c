/// Forward shading state calculator.
///
/// Derives everything the lit forward shader needs for one batch from the
/// scene parameters and the batch's effect parameters. The calculation is
/// pure apart from the texture presence queries, which are answered fresh on
/// every call.

use glam::{Mat4, Vec3};
use crate::config::NUM_POINT_LIGHTS;
use crate::device::TextureLibrary;
use super::effect_parameters::EffectParameters;
use super::render_parameters::RenderParameters;

/// Derived inputs of one point light slot
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointLightState {
    /// False when every combined color is exactly zero
    pub active: bool,
    pub combined_ambient: Vec3,
    pub combined_diffuse: Vec3,
    pub combined_specular: Vec3,
    /// Zero for inactive slots
    pub position: Vec3,
    /// Zero for inactive slots
    pub range: f32,
    /// `1 / max(range - falloff, floor)`, zero for inactive slots
    pub attenuation_multiplier: f32,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ForwardShaderState {
    pub projection: Mat4,
    pub model_view: Mat4,
    pub eye_position: Vec3,
    pub animation_time: f32,

    // Texture presence
    pub use_diffuse_texture: bool,
    pub use_environment_map: bool,
    pub use_normal_map: bool,
    pub use_source0: bool,
    pub use_source1: bool,

    // Directional light
    pub light_direction: Vec3,
    pub light_combined_ambient: Vec3,
    pub light_combined_diffuse: Vec3,
    pub light_combined_specular: Vec3,

    // Material
    pub specular_exponent: f32,
    pub gloss: f32,
    pub opacity: f32,

    pub point_lights: [PointLightState; NUM_POINT_LIGHTS],

    /// Pass-through flags of the pass being drawn
    pub flags: Vec<String>,
}

impl ForwardShaderState {
    /// Append pass-through flags, in order
    pub fn apply_flags(&mut self, flags: &[String]) {
        self.flags.extend_from_slice(flags);
    }

    pub fn has_flag(&self, flag: &str) -> bool {
        self.flags.iter().any(|f| f == flag)
    }

    /// Number of point light slots the shader should evaluate
    pub fn active_point_lights(&self) -> usize {
        self.point_lights.iter().filter(|l| l.active).count()
    }
}

/// Attenuation multiplier of a point light
///
/// `floor` keeps the result finite and positive when `falloff >= range`.
pub fn attenuation_multiplier(range: f32, falloff: f32, floor: f32) -> f32 {
    1.0 / (range - falloff).max(floor)
}

fn texture_present(textures: Option<&dyn TextureLibrary>, name: &str) -> bool {
    !name.is_empty() && textures.is_some_and(|t| t.has_texture(name))
}

/// Compute the forward shader state of one batch
///
/// Without a texture library every texture presence flag is off. Source
/// flags are left off; the orchestrator sets them from the pass sources.
pub fn calculate_forward_state(
    params: &RenderParameters,
    effect: &EffectParameters,
    textures: Option<&dyn TextureLibrary>,
    falloff_floor: f32,
) -> ForwardShaderState {
    let light = &params.directional_light;
    let mut state = ForwardShaderState {
        projection: params.projection,
        model_view: effect.model_view,
        eye_position: params.eye_position,
        animation_time: effect.animation_time,

        use_diffuse_texture: texture_present(textures, &effect.diffuse_texture),
        use_environment_map: texture_present(textures, &params.environment_map),
        use_normal_map: texture_present(textures, &effect.normal_map),
        use_source0: false,
        use_source1: false,

        light_direction: light.direction,
        light_combined_ambient: light.ambient * effect.material_ambient,
        light_combined_diffuse: light.diffuse * effect.material_diffuse,
        light_combined_specular: light.specular * effect.material_specular,

        specular_exponent: effect.specular_exponent,
        gloss: effect.gloss,
        opacity: effect.opacity,

        point_lights: [PointLightState::default(); NUM_POINT_LIGHTS],
        flags: Vec::new(),
    };

    for (slot, light) in state.point_lights.iter_mut().zip(params.point_lights.iter()) {
        slot.combined_ambient = light.ambient * effect.material_ambient;
        slot.combined_diffuse = light.diffuse * effect.material_diffuse;
        slot.combined_specular = light.specular * effect.material_specular;

        // Exact comparison: any non-zero component enables the slot
        slot.active = slot.combined_ambient != Vec3::ZERO
            || slot.combined_diffuse != Vec3::ZERO
            || slot.combined_specular != Vec3::ZERO;
        if !slot.active {
            continue;
        }

        slot.position = light.position;
        slot.range = light.range;
        slot.attenuation_multiplier = attenuation_multiplier(light.range, light.falloff, falloff_floor);
    }

    state
}

#[cfg(test)]
#[path = "forward_state_tests.rs"]
mod tests;
