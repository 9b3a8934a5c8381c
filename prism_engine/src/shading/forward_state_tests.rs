/// Tests for the forward shading state calculator

use super::*;
use crate::device::mock_graphics_device::{CommandLog, MockTextureLibrary};
use crate::shading::PointLight;

const FLOOR: f32 = 0.0001;

fn textures(names: &[&str]) -> MockTextureLibrary {
    MockTextureLibrary::new(names, CommandLog::default())
}

fn white_material() -> EffectParameters {
    EffectParameters {
        material_ambient: Vec3::ONE,
        material_diffuse: Vec3::ONE,
        material_specular: Vec3::ONE,
        ..EffectParameters::default()
    }
}

fn lit_slot(range: f32, falloff: f32) -> PointLight {
    PointLight {
        position: Vec3::new(1.0, 2.0, 3.0),
        range,
        falloff,
        diffuse: Vec3::new(1.0, 0.5, 0.0),
        ..PointLight::default()
    }
}

// ============================================================================
// Tests: Directional light and material
// ============================================================================

#[test]
fn test_directional_light_elementwise_product() {
    let mut params = RenderParameters::default();
    params.directional_light.ambient = Vec3::new(0.5, 0.5, 0.7);
    params.directional_light.diffuse = Vec3::new(1.0, 0.8, 0.6);

    let mut effect = white_material();
    effect.material_diffuse = Vec3::new(0.5, 0.5, 0.5);

    let state = calculate_forward_state(&params, &effect, None, FLOOR);
    assert_eq!(state.light_combined_ambient, Vec3::new(0.5, 0.5, 0.7));
    assert_eq!(state.light_combined_diffuse, Vec3::new(0.5, 0.4, 0.3));
    assert_eq!(state.light_combined_specular, Vec3::ZERO);
}

#[test]
fn test_passes_through_matrices_and_material() {
    let params = RenderParameters {
        projection: Mat4::from_scale(Vec3::splat(2.0)),
        eye_position: Vec3::new(0.0, 1.0, 5.0),
        ..RenderParameters::default()
    };
    let effect = EffectParameters {
        model_view: Mat4::from_translation(Vec3::X),
        animation_time: 1.5,
        specular_exponent: 32.0,
        gloss: 0.25,
        opacity: 0.5,
        ..EffectParameters::default()
    };

    let state = calculate_forward_state(&params, &effect, None, FLOOR);
    assert_eq!(state.projection, params.projection);
    assert_eq!(state.model_view, effect.model_view);
    assert_eq!(state.eye_position, params.eye_position);
    assert_eq!(state.animation_time, 1.5);
    assert_eq!(state.specular_exponent, 32.0);
    assert_eq!(state.gloss, 0.25);
    assert_eq!(state.opacity, 0.5);
    assert!(state.flags.is_empty());
}

// ============================================================================
// Tests: Point lights
// ============================================================================

#[test]
fn test_zero_slots_are_inactive_without_attenuation() {
    let params = RenderParameters::default();
    let state = calculate_forward_state(&params, &white_material(), None, FLOOR);

    for slot in &state.point_lights {
        assert!(!slot.active);
        assert_eq!(slot.attenuation_multiplier, 0.0);
        assert_eq!(slot.range, 0.0);
    }
    assert_eq!(state.active_point_lights(), 0);
}

#[test]
fn test_black_material_disables_colored_light() {
    let mut params = RenderParameters::default();
    params.point_lights[0] = lit_slot(10.0, 2.0);

    let state = calculate_forward_state(&params, &EffectParameters::default(), None, FLOOR);
    assert!(!state.point_lights[0].active);
}

#[test]
fn test_active_slot_attenuation() {
    let mut params = RenderParameters::default();
    params.point_lights[1] = lit_slot(10.0, 6.0);

    let state = calculate_forward_state(&params, &white_material(), None, FLOOR);
    let slot = &state.point_lights[1];

    assert!(slot.active);
    assert_eq!(slot.combined_diffuse, Vec3::new(1.0, 0.5, 0.0));
    assert_eq!(slot.position, Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(slot.range, 10.0);
    assert_eq!(slot.attenuation_multiplier, 0.25);
    assert!(!state.point_lights[0].active);
    assert_eq!(state.active_point_lights(), 1);
}

#[test]
fn test_falloff_beyond_range_uses_floor() {
    for (range, falloff) in [(5.0, 5.0), (5.0, 8.0), (0.0, 100.0)] {
        let value = attenuation_multiplier(range, falloff, FLOOR);
        assert_eq!(value, 1.0 / FLOOR);
        assert!(value.is_finite() && value > 0.0);
    }
}

#[test]
fn test_point_light_slot_accessor() {
    let mut params = RenderParameters::default();
    params.point_light_mut(2).unwrap().range = 4.0;
    assert_eq!(params.point_lights[2].range, 4.0);
    assert!(params.point_light_mut(NUM_POINT_LIGHTS).is_none());
}

// ============================================================================
// Tests: Texture presence
// ============================================================================

#[test]
fn test_texture_presence_flags() {
    let library = textures(&["hull", "sky"]);
    let params = RenderParameters {
        environment_map: "sky".to_string(),
        ..RenderParameters::default()
    };
    let effect = EffectParameters {
        diffuse_texture: "hull".to_string(),
        normal_map: "hull_normals".to_string(),
        ..EffectParameters::default()
    };

    let state = calculate_forward_state(&params, &effect, Some(&library), FLOOR);
    assert!(state.use_diffuse_texture);
    assert!(state.use_environment_map);
    assert!(!state.use_normal_map);
    assert!(!state.use_source0);
    assert!(!state.use_source1);
}

#[test]
fn test_texture_presence_is_queried_every_call() {
    let mut library = textures(&[]);
    let effect = EffectParameters {
        diffuse_texture: "hull".to_string(),
        ..EffectParameters::default()
    };
    let params = RenderParameters::default();

    assert!(!calculate_forward_state(&params, &effect, Some(&library), FLOOR).use_diffuse_texture);
    library.names.insert("hull".to_string());
    assert!(calculate_forward_state(&params, &effect, Some(&library), FLOOR).use_diffuse_texture);
}

#[test]
fn test_no_texture_library_disables_textures() {
    let effect = EffectParameters {
        diffuse_texture: "hull".to_string(),
        ..EffectParameters::default()
    };
    let state = calculate_forward_state(&RenderParameters::default(), &effect, None, FLOOR);
    assert!(!state.use_diffuse_texture);
}

// ============================================================================
// Tests: Flags
// ============================================================================

#[test]
fn test_apply_flags_appends_in_order() {
    let mut state = ForwardShaderState::default();
    state.apply_flags(&["wireframe".to_string()]);
    state.apply_flags(&["twoSided".to_string()]);

    assert_eq!(state.flags, vec!["wireframe".to_string(), "twoSided".to_string()]);
    assert!(state.has_flag("twoSided"));
    assert!(!state.has_flag("clearColor"));
}
