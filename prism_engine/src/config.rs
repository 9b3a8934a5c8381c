/// Graphics configuration and fixed engine constants.

use crate::error::{Error, Result};

/// Number of point light slots (must match the forward shader)
pub const NUM_POINT_LIGHTS: usize = 3;

/// Texture units used by the forward and post-process shaders
///
/// Object-level textures and pass-level sources live on disjoint units, so a
/// pass source never replaces a batch's diffuse, environment or normal map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureChannel {
    /// Per-object diffuse texture
    Diffuse = 0,
    /// Scene environment map
    EnvironmentMap = 1,
    /// Per-object normal map
    NormalMap = 2,
    /// Pass-level source 0
    PassSource0 = 3,
    /// Pass-level source 1
    PassSource1 = 4,
}

impl TextureChannel {
    /// Texture unit index
    pub fn unit(&self) -> u32 {
        *self as u32
    }
}

/// Graphics configuration
#[derive(Debug, Clone)]
pub struct GraphicsConfig {
    /// Window width in pixels (offscreen targets are sized from it)
    pub window_width: u32,
    /// Window height in pixels
    pub window_height: u32,
    /// Color used by `clearColor` pass flags (RGBA)
    pub clear_color: [f32; 4],
    /// Color target name meaning "the default framebuffer"
    pub screen_target: String,
    /// Geometry drawn once by every post-process pass
    pub screen_quad_geometry: String,
    /// Smallest `range - falloff` used for point light attenuation (> 0)
    pub falloff_floor: f32,
}

impl Default for GraphicsConfig {
    fn default() -> Self {
        Self {
            window_width: 800,
            window_height: 600,
            clear_color: [0.0, 0.0, 1.0, 1.0],
            screen_target: "screen".to_string(),
            screen_quad_geometry: "screenQuad".to_string(),
            falloff_floor: 0.0001,
        }
    }
}

impl GraphicsConfig {
    /// Same defaults with a different window size
    pub fn with_window_size(width: u32, height: u32) -> Self {
        Self {
            window_width: width,
            window_height: height,
            ..Self::default()
        }
    }

    /// Check the invariants the orchestrator relies on
    pub fn validate(&self) -> Result<()> {
        if self.window_width == 0 || self.window_height == 0 {
            return Err(Error::ConfigurationError(format!(
                "Window size must be non-zero (got {}x{})",
                self.window_width, self.window_height
            )));
        }
        if !(self.falloff_floor > 0.0) {
            return Err(Error::ConfigurationError(format!(
                "falloff_floor must be greater than 0 (got {})",
                self.falloff_floor
            )));
        }
        if self.screen_target.is_empty() {
            return Err(Error::ConfigurationError(
                "screen_target name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
