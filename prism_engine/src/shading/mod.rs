//! Shading module
//!
//! Scene-wide render parameters, per-object effect parameters, and the pure
//! calculators deriving the inputs each shader kind needs for one draw.
//! Nothing here keeps state from one frame to the next.

mod render_parameters;
mod effect_parameters;
mod forward_state;
mod post_process_state;

pub use render_parameters::{RenderParameters, DirectionalLight, PointLight};
pub use effect_parameters::EffectParameters;
pub use forward_state::{
    ForwardShaderState, PointLightState, calculate_forward_state, attenuation_multiplier,
};
pub use post_process_state::{PostProcessShaderState, calculate_post_process_state};
