/// GraphicsDevice trait - thin hardware abstraction over the GPU binding layer

use std::fmt;
use std::sync::Arc;
use bitflags::bitflags;
use crate::error::Result;
use crate::config::TextureChannel;
use crate::pipeline::ShaderKind;
use crate::target::TargetFormat;
use crate::shading::{ForwardShaderState, PostProcessShaderState};

bitflags! {
    /// Buffers cleared at the start of a pass
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ClearFlags: u32 {
        /// Clear the color attachment (`clearColor` flag)
        const COLOR = 0b01;
        /// Clear the depth attachment (`clearDepth` flag)
        const DEPTH = 0b10;
    }
}

impl ClearFlags {
    /// Map a pass flag token to its clear bit, if it is a clear flag
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "clearColor" => Some(ClearFlags::COLOR),
            "clearDepth" => Some(ClearFlags::DEPTH),
            _ => None,
        }
    }
}

/// Viewport dimensions and depth range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub min_depth: f32,
    pub max_depth: f32,
}

impl Viewport {
    /// Viewport covering a whole `width` x `height` destination
    pub fn full(width: u32, height: u32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: width as f32,
            height: height as f32,
            min_depth: 0.0,
            max_depth: 1.0,
        }
    }
}

/// Compiled shader program owned by the backend
pub trait Shader: Send + Sync + fmt::Debug {
    /// Role this program was loaded for
    fn kind(&self) -> ShaderKind;
}

/// GPU resource behind an offscreen render target
pub trait TargetHandle: Send + Sync + fmt::Debug {
    /// Width in pixels
    fn width(&self) -> u32;

    /// Height in pixels
    fn height(&self) -> u32;

    /// Pixel format
    fn format(&self) -> TargetFormat;
}

/// GPU binding layer
///
/// Every call maps to a small number of API calls on the backend side.
/// Errors are backend failures; the orchestrator abandons the current pass
/// when one is returned.
pub trait GraphicsDevice: Send {
    /// Compile and link a shader program
    fn create_shader(
        &mut self,
        kind: ShaderKind,
        vertex_path: &str,
        fragment_path: &str,
    ) -> Result<Arc<dyn Shader>>;

    /// Allocate an offscreen render target
    fn create_target(
        &mut self,
        format: TargetFormat,
        width: u32,
        height: u32,
    ) -> Result<Arc<dyn TargetHandle>>;

    /// Bind the default framebuffer
    fn bind_screen(&mut self) -> Result<()>;

    /// Bind an offscreen framebuffer with the given color and optional depth attachment
    ///
    /// `depth == None` detaches any previous depth attachment.
    fn bind_offscreen(
        &mut self,
        color: &dyn TargetHandle,
        depth: Option<&dyn TargetHandle>,
    ) -> Result<()>;

    /// Enable or disable depth testing
    fn set_depth_test(&mut self, enabled: bool) -> Result<()>;

    /// Set the viewport
    fn set_viewport(&mut self, viewport: Viewport) -> Result<()>;

    /// Bind a render target as a sampled texture on a pass source channel
    fn bind_source(&mut self, channel: TextureChannel, source: &dyn TargetHandle) -> Result<()>;

    /// Clear the requested buffers of the bound framebuffer
    fn clear(&mut self, flags: ClearFlags, color: [f32; 4]) -> Result<()>;

    /// Make a shader program current
    fn apply_shader(&mut self, shader: &dyn Shader) -> Result<()>;

    /// Upload forward shader inputs for the next draw
    fn set_forward_state(&mut self, state: &ForwardShaderState) -> Result<()>;

    /// Upload post-process shader inputs for the next draw
    fn set_post_process_state(&mut self, state: &PostProcessShaderState) -> Result<()>;
}
