/// Render pass record: one configured step of the pass pipeline.
///
/// A pass names its color and depth destinations, up to two source targets,
/// the shader role that draws it, and a list of flag tokens. Names are
/// resolved against the buffer registry only when the pass executes.

use crate::batch::GeometryType;
use crate::device::ClearFlags;

/// Shader role a pass draws with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShaderKind {
    /// Lit forward shading, one draw per queued batch
    #[default]
    Forward,
    /// Full-screen post-process, one draw per pass
    PostProcess,
}

impl ShaderKind {
    /// Parse a role token (`forward`, `postProcess`)
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "forward" => Some(ShaderKind::Forward),
            "postProcess" => Some(ShaderKind::PostProcess),
            _ => None,
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            ShaderKind::Forward => "forward",
            ShaderKind::PostProcess => "postProcess",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderPass {
    name: String,
    shader_kind: ShaderKind,
    color_attach0: String,
    depth_attach: String,
    source0: String,
    source1: String,
    flags: Vec<String>,
    geometry_filter: Option<GeometryType>,
}

impl RenderPass {
    /// Forward pass with no attachments, sources or flags
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    // ===== BUILDER =====

    pub fn with_shader(mut self, kind: ShaderKind) -> Self {
        self.shader_kind = kind;
        self
    }

    pub fn with_color_attach0(mut self, target: &str) -> Self {
        self.color_attach0 = target.to_string();
        self
    }

    pub fn with_depth_attach(mut self, target: &str) -> Self {
        self.depth_attach = target.to_string();
        self
    }

    pub fn with_source0(mut self, target: &str) -> Self {
        self.source0 = target.to_string();
        self
    }

    pub fn with_source1(mut self, target: &str) -> Self {
        self.source1 = target.to_string();
        self
    }

    pub fn with_flag(mut self, flag: &str) -> Self {
        self.flags.push(flag.to_string());
        self
    }

    pub fn with_geometry_filter(mut self, filter: GeometryType) -> Self {
        self.geometry_filter = Some(filter);
        self
    }

    // ===== ACCESSORS =====

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn shader_kind(&self) -> ShaderKind {
        self.shader_kind
    }

    /// Color destination ("screen" for the default framebuffer)
    pub fn color_attach0(&self) -> &str {
        &self.color_attach0
    }

    /// Depth attachment (empty for none)
    pub fn depth_attach(&self) -> &str {
        &self.depth_attach
    }

    pub fn source0(&self) -> &str {
        &self.source0
    }

    pub fn source1(&self) -> &str {
        &self.source1
    }

    /// Flag tokens in declaration order
    pub fn flags(&self) -> &[String] {
        &self.flags
    }

    /// Geometry category drawn by a forward pass (`None` draws the whole queue)
    pub fn geometry_filter(&self) -> Option<GeometryType> {
        self.geometry_filter
    }

    /// Split flags into clear requests and shader pass-through flags
    ///
    /// `clearColor` and `clearDepth` are consumed here; every other token is
    /// forwarded, in order, to the shading state.
    pub fn partition_flags(&self) -> (ClearFlags, Vec<String>) {
        let mut clear = ClearFlags::empty();
        let mut pass_through = Vec::new();
        for flag in &self.flags {
            match ClearFlags::from_token(flag) {
                Some(bit) => clear |= bit,
                None => pass_through.push(flag.clone()),
            }
        }
        (clear, pass_through)
    }

    // ===== PARSER SETTERS =====

    pub(crate) fn set_shader(&mut self, kind: ShaderKind) {
        self.shader_kind = kind;
    }

    pub(crate) fn set_color_attach0(&mut self, target: String) {
        self.color_attach0 = target;
    }

    pub(crate) fn set_depth_attach(&mut self, target: String) {
        self.depth_attach = target;
    }

    pub(crate) fn set_source0(&mut self, target: String) {
        self.source0 = target;
    }

    pub(crate) fn set_source1(&mut self, target: String) {
        self.source1 = target;
    }

    pub(crate) fn push_flag(&mut self, flag: String) {
        self.flags.push(flag);
    }

    pub(crate) fn set_geometry_filter(&mut self, filter: GeometryType) {
        self.geometry_filter = Some(filter);
    }
}

#[cfg(test)]
#[path = "render_pass_tests.rs"]
mod tests;
