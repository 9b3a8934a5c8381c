/// Pass executor: runs the pass pipeline once against the queued batches.
///
/// Borrows the pieces of the `GraphicsManager` a frame needs, so the device
/// and libraries can be driven mutably while the registry, pipeline and
/// queue are only read.

use std::sync::Arc;
use rustc_hash::FxHashMap;
use crate::batch::BatchQueue;
use crate::config::{GraphicsConfig, TextureChannel};
use crate::device::{GeometryLibrary, GraphicsDevice, Shader, TextureLibrary, Viewport};
use crate::error::{Error, Result};
use crate::pipeline::{RenderPass, RenderPipeline, ShaderKind};
use crate::shading::{calculate_forward_state, calculate_post_process_state, RenderParameters};
use crate::target::{RenderTarget, TargetManager};
use crate::{engine_debug, engine_error, engine_trace, engine_warn};

const SOURCE: &str = "prism::GraphicsManager";

/// Counters of one executed frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Passes that ran to completion
    pub passes_executed: usize,
    /// Passes abandoned (unresolved color target or backend failure)
    pub passes_aborted: usize,
    /// Geometry draws actually issued
    pub draws: usize,
    /// Clear operations issued
    pub clears: usize,
}

pub(super) struct PassExecutor<'a> {
    pub device: &'a mut dyn GraphicsDevice,
    pub geometry: &'a mut Option<Box<dyn GeometryLibrary>>,
    pub textures: &'a mut Option<Box<dyn TextureLibrary>>,
    pub shaders: &'a FxHashMap<ShaderKind, Arc<dyn Shader>>,
    pub targets: &'a TargetManager,
    pub batches: &'a BatchQueue,
    pub params: &'a RenderParameters,
    pub config: &'a GraphicsConfig,
    pub stats: FrameStats,
}

impl<'a> PassExecutor<'a> {
    /// Execute every pass in declaration order
    ///
    /// A failing pass is logged once and skipped; later passes still run.
    pub fn run(mut self, pipeline: &RenderPipeline) -> FrameStats {
        for pass in pipeline.passes() {
            match self.execute_pass(pass) {
                Ok(()) => self.stats.passes_executed += 1,
                Err(err) => {
                    engine_error!(SOURCE, "Pass '{}' aborted this frame: {}", pass.name(), err);
                    self.stats.passes_aborted += 1;
                }
            }
        }
        self.stats
    }

    fn execute_pass(&mut self, pass: &RenderPass) -> Result<()> {
        engine_trace!(SOURCE, "Executing pass '{}'", pass.name());

        let (width, height) = self.bind_destination(pass)?;
        self.device.set_viewport(Viewport::full(width, height))?;

        let use_source0 = self.bind_source(TextureChannel::PassSource0, pass.source0())?;
        let use_source1 = self.bind_source(TextureChannel::PassSource1, pass.source1())?;

        let (clear, pass_through) = pass.partition_flags();
        if !clear.is_empty() {
            self.device.clear(clear, self.config.clear_color)?;
            self.stats.clears += 1;
        }

        // Both shaders are checked present before a frame starts
        let shader = self.shaders.get(&pass.shader_kind()).ok_or_else(|| {
            Error::MissingResource(format!(
                "No {} shader loaded for pass '{}'", pass.shader_kind().token(), pass.name()))
        })?;
        self.device.apply_shader(&**shader)?;

        match pass.shader_kind() {
            ShaderKind::Forward => self.draw_batches(pass, &pass_through, use_source0, use_source1),
            ShaderKind::PostProcess => self.draw_screen_quad(&pass_through, use_source0, use_source1),
        }
    }

    /// Bind the color (and depth) destination, returning its size
    fn bind_destination(&mut self, pass: &RenderPass) -> Result<(u32, u32)> {
        let targets = self.targets;
        let config = self.config;
        let screen = config.screen_target.as_str();

        if pass.color_attach0() == screen {
            self.device.bind_screen()?;
            self.device.set_depth_test(false)?;
            return Ok((config.window_width, config.window_height));
        }

        let color = targets.resolve(pass.color_attach0()).ok_or_else(|| {
            Error::ConfigurationError(format!(
                "Invalid destination buffer '{}' in pass '{}'", pass.color_attach0(), pass.name()))
        })?;

        let depth: Option<&RenderTarget> = match pass.depth_attach() {
            "" => None,
            name if name == screen => None,
            name => {
                let depth = targets.resolve(name);
                if depth.is_none() {
                    engine_debug!(SOURCE,
                        "Pass '{}': depth buffer '{}' not found, depth test disabled", pass.name(), name);
                }
                depth
            }
        };

        self.device.bind_offscreen(&**color.handle(), depth.map(|d| &**d.handle()))?;
        self.device.set_depth_test(depth.is_some())?;
        Ok((color.width(), color.height()))
    }

    /// Bind a pass source if it resolves, returning whether it did
    fn bind_source(&mut self, channel: TextureChannel, name: &str) -> Result<bool> {
        if name.is_empty() {
            return Ok(false);
        }
        match self.targets.resolve(name) {
            Some(source) => {
                self.device.bind_source(channel, &**source.handle())?;
                Ok(true)
            }
            None => {
                engine_debug!(SOURCE, "Source buffer '{}' not found, channel {} unused", name, channel.unit());
                Ok(false)
            }
        }
    }

    fn draw_batches(
        &mut self,
        pass: &RenderPass,
        pass_through: &[String],
        use_source0: bool,
        use_source1: bool,
    ) -> Result<()> {
        let batches = self.batches;
        let params = self.params;

        for batch in batches.filtered(pass.geometry_filter()) {
            let present = self
                .geometry
                .as_deref()
                .is_some_and(|geometry| geometry.has_geometry(&batch.geometry));
            if !present {
                engine_warn!(SOURCE, "Geometry '{}' not found, batch skipped", batch.geometry);
                continue;
            }

            let mut state = calculate_forward_state(
                params,
                &batch.effect,
                self.textures.as_deref(),
                self.config.falloff_floor,
            );
            state.use_source0 = use_source0;
            state.use_source1 = use_source1;
            state.apply_flags(pass_through);
            self.device.set_forward_state(&state)?;

            if let Some(textures) = self.textures.as_deref_mut() {
                if state.use_diffuse_texture {
                    textures.bind_texture(TextureChannel::Diffuse, &batch.effect.diffuse_texture);
                }
                if state.use_environment_map {
                    textures.bind_texture(TextureChannel::EnvironmentMap, &params.environment_map);
                }
                if state.use_normal_map {
                    textures.bind_texture(TextureChannel::NormalMap, &batch.effect.normal_map);
                }
            }

            self.draw(&batch.geometry);
        }
        Ok(())
    }

    fn draw_screen_quad(&mut self, pass_through: &[String], use_source0: bool, use_source1: bool) -> Result<()> {
        let mut state = calculate_post_process_state(pass_through);
        state.use_source0 = use_source0;
        state.use_source1 = use_source1;
        state.color_correction = self.params.color_correction;
        self.device.set_post_process_state(&state)?;

        let config = self.config;
        self.draw(&config.screen_quad_geometry);
        Ok(())
    }

    /// Draw a geometry by name; a missing geometry is skipped with a warning
    fn draw(&mut self, name: &str) {
        let drawn = self
            .geometry
            .as_deref_mut()
            .is_some_and(|geometry| geometry.render_geometry(name));
        if drawn {
            self.stats.draws += 1;
        } else {
            engine_warn!(SOURCE, "Geometry '{}' not found, draw skipped", name);
        }
    }
}
