/// Mock graphics device for unit tests (no GPU required)
///
/// Every call is recorded as a short string in a command log shared with the
/// mock geometry and texture libraries, so tests can assert the exact order of
/// binds, clears and draws across collaborators.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use crate::config::TextureChannel;
use crate::device::{
    AssetLoader, ClearFlags, GeometryLibrary, GraphicsDevice, Shader, TargetHandle,
    TextureLibrary, Viewport,
};
use crate::error::Result;
use crate::engine_bail;
use crate::pipeline::ShaderKind;
use crate::shading::{ForwardShaderState, PostProcessShaderState};
use crate::target::TargetFormat;

/// Command log shared between mocks
pub type CommandLog = Arc<Mutex<Vec<String>>>;

// ============================================================================
// Mock Shader
// ============================================================================

#[derive(Debug)]
pub struct MockShader {
    pub kind: ShaderKind,
    pub vertex_path: String,
    pub fragment_path: String,
}

impl Shader for MockShader {
    fn kind(&self) -> ShaderKind {
        self.kind
    }
}

// ============================================================================
// Mock TargetHandle
// ============================================================================

#[derive(Debug)]
pub struct MockTargetHandle {
    pub id: usize,
    pub width: u32,
    pub height: u32,
    pub format: TargetFormat,
}

impl TargetHandle for MockTargetHandle {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn format(&self) -> TargetFormat {
        self.format
    }
}

fn handle_label(handle: &dyn TargetHandle) -> String {
    format!("{}x{}", handle.width(), handle.height())
}

// ============================================================================
// Mock GraphicsDevice
// ============================================================================

/// Mock device that records every call
#[derive(Debug, Default)]
pub struct MockGraphicsDevice {
    /// Recorded commands
    pub log: CommandLog,
    /// Forward states uploaded, in draw order
    pub forward_states: Arc<Mutex<Vec<ForwardShaderState>>>,
    /// Post-process states uploaded, in draw order
    pub post_process_states: Arc<Mutex<Vec<PostProcessShaderState>>>,
    /// Command prefix that makes the matching call fail
    pub fail_on: Arc<Mutex<Option<String>>>,
    next_target_id: usize,
}

impl MockGraphicsDevice {
    /// Create a mock device with a fresh command log
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock device writing into an existing command log
    pub fn with_log(log: CommandLog) -> Self {
        Self { log, ..Self::default() }
    }

    /// Snapshot of the recorded commands
    pub fn commands(&self) -> Vec<String> {
        self.log.lock().unwrap().clone()
    }

    fn record(&mut self, command: String) -> Result<()> {
        if let Some(prefix) = self.fail_on.lock().unwrap().as_ref() {
            if command.starts_with(prefix.as_str()) {
                engine_bail!("prism::MockGraphicsDevice", "injected failure on '{}'", command);
            }
        }
        self.log.lock().unwrap().push(command);
        Ok(())
    }
}

impl GraphicsDevice for MockGraphicsDevice {
    fn create_shader(
        &mut self,
        kind: ShaderKind,
        vertex_path: &str,
        fragment_path: &str,
    ) -> Result<Arc<dyn Shader>> {
        self.record(format!("create_shader {} {} {}", kind.token(), vertex_path, fragment_path))?;
        Ok(Arc::new(MockShader {
            kind,
            vertex_path: vertex_path.to_string(),
            fragment_path: fragment_path.to_string(),
        }))
    }

    fn create_target(
        &mut self,
        format: TargetFormat,
        width: u32,
        height: u32,
    ) -> Result<Arc<dyn TargetHandle>> {
        self.record(format!("create_target {} {}x{}", format.tag(), width, height))?;
        self.next_target_id += 1;
        Ok(Arc::new(MockTargetHandle {
            id: self.next_target_id,
            width,
            height,
            format,
        }))
    }

    fn bind_screen(&mut self) -> Result<()> {
        self.record("bind_screen".to_string())
    }

    fn bind_offscreen(
        &mut self,
        color: &dyn TargetHandle,
        depth: Option<&dyn TargetHandle>,
    ) -> Result<()> {
        let depth = depth.map(handle_label).unwrap_or_else(|| "none".to_string());
        self.record(format!("bind_offscreen {} depth={}", handle_label(color), depth))
    }

    fn set_depth_test(&mut self, enabled: bool) -> Result<()> {
        self.record(format!("depth_test {}", if enabled { "on" } else { "off" }))
    }

    fn set_viewport(&mut self, viewport: Viewport) -> Result<()> {
        self.record(format!("viewport {}x{}", viewport.width, viewport.height))
    }

    fn bind_source(&mut self, channel: TextureChannel, source: &dyn TargetHandle) -> Result<()> {
        self.record(format!("bind_source {} {}", channel.unit(), handle_label(source)))
    }

    fn clear(&mut self, flags: ClearFlags, _color: [f32; 4]) -> Result<()> {
        let mut parts = Vec::new();
        if flags.contains(ClearFlags::COLOR) {
            parts.push("color");
        }
        if flags.contains(ClearFlags::DEPTH) {
            parts.push("depth");
        }
        self.record(format!("clear {}", parts.join("+")))
    }

    fn apply_shader(&mut self, shader: &dyn Shader) -> Result<()> {
        self.record(format!("apply_shader {}", shader.kind().token()))
    }

    fn set_forward_state(&mut self, state: &ForwardShaderState) -> Result<()> {
        self.record("set_forward_state".to_string())?;
        self.forward_states.lock().unwrap().push(state.clone());
        Ok(())
    }

    fn set_post_process_state(&mut self, state: &PostProcessShaderState) -> Result<()> {
        self.record("set_post_process_state".to_string())?;
        self.post_process_states.lock().unwrap().push(state.clone());
        Ok(())
    }
}

// ============================================================================
// Mock GeometryLibrary / TextureLibrary
// ============================================================================

#[derive(Debug, Default)]
pub struct MockGeometryLibrary {
    pub names: HashSet<String>,
    pub log: CommandLog,
}

impl MockGeometryLibrary {
    pub fn new(names: &[&str], log: CommandLog) -> Self {
        Self {
            names: names.iter().map(|n| n.to_string()).collect(),
            log,
        }
    }
}

impl GeometryLibrary for MockGeometryLibrary {
    fn has_geometry(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    fn render_geometry(&mut self, name: &str) -> bool {
        if !self.names.contains(name) {
            return false;
        }
        self.log.lock().unwrap().push(format!("draw {}", name));
        true
    }
}

#[derive(Debug, Default)]
pub struct MockTextureLibrary {
    pub names: HashSet<String>,
    pub log: CommandLog,
}

impl MockTextureLibrary {
    pub fn new(names: &[&str], log: CommandLog) -> Self {
        Self {
            names: names.iter().map(|n| n.to_string()).collect(),
            log,
        }
    }
}

impl TextureLibrary for MockTextureLibrary {
    fn has_texture(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    fn bind_texture(&mut self, channel: TextureChannel, name: &str) -> bool {
        if !self.names.contains(name) {
            return false;
        }
        self.log.lock().unwrap().push(format!("bind_texture {} {}", channel.unit(), name));
        true
    }
}

// ============================================================================
// Mock AssetLoader
// ============================================================================

/// Loader producing mock libraries with fixed contents
#[derive(Debug, Default)]
pub struct MockAssetLoader {
    pub geometry_names: Vec<String>,
    pub texture_names: Vec<String>,
    pub log: CommandLog,
    /// Paths requested, in order
    pub loaded_paths: Arc<Mutex<Vec<String>>>,
}

impl MockAssetLoader {
    pub fn new(geometry: &[&str], textures: &[&str], log: CommandLog) -> Self {
        Self {
            geometry_names: geometry.iter().map(|n| n.to_string()).collect(),
            texture_names: textures.iter().map(|n| n.to_string()).collect(),
            log,
            loaded_paths: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl AssetLoader for MockAssetLoader {
    fn load_geometry_library(&mut self, path: &str) -> Result<Box<dyn GeometryLibrary>> {
        self.loaded_paths.lock().unwrap().push(path.to_string());
        let names: Vec<&str> = self.geometry_names.iter().map(|n| n.as_str()).collect();
        Ok(Box::new(MockGeometryLibrary::new(&names, self.log.clone())))
    }

    fn load_texture_library(&mut self, path: &str) -> Result<Box<dyn TextureLibrary>> {
        self.loaded_paths.lock().unwrap().push(path.to_string());
        let names: Vec<&str> = self.texture_names.iter().map(|n| n.as_str()).collect();
        Ok(Box::new(MockTextureLibrary::new(&names, self.log.clone())))
    }
}

#[cfg(test)]
#[path = "mock_graphics_device_tests.rs"]
mod tests;
