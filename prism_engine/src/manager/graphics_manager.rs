/// Frame orchestrator for the engine.
///
/// Owns the buffer registry, the pass pipeline, the loaded shaders, the
/// scene render parameters and the per-frame batch queue. Each frame follows
/// the same cycle: gameplay code `submit`s batches, `execute_frame` walks the
/// pipeline once, then the queue is reset.
///
/// Asset (re)loading is stop-the-world: it must not overlap a frame. `&mut
/// self` on both operations enforces that.

use std::fs;
use std::sync::Arc;
use rustc_hash::FxHashMap;
use crate::batch::{BatchQueue, RenderBatch};
use crate::config::GraphicsConfig;
use crate::device::{AssetLoader, GeometryLibrary, GraphicsDevice, Shader, TextureLibrary};
use crate::error::{Error, Result};
use crate::pipeline::{parse_effect_description, EffectDescription, RenderPipeline, ShaderKind};
use crate::shading::RenderParameters;
use crate::target::TargetManager;
use crate::{engine_debug, engine_err, engine_error, engine_info};
use super::asset_library::AssetLibrary;
use super::pass_executor::{FrameStats, PassExecutor};

const SOURCE: &str = "prism::GraphicsManager";

pub struct GraphicsManager {
    config: GraphicsConfig,
    device: Box<dyn GraphicsDevice>,
    loader: Box<dyn AssetLoader>,

    // Assets, rebuilt together on reload
    geometry: Option<Box<dyn GeometryLibrary>>,
    textures: Option<Box<dyn TextureLibrary>>,
    shaders: FxHashMap<ShaderKind, Arc<dyn Shader>>,
    targets: TargetManager,
    pipeline: RenderPipeline,

    // Per-frame state
    batches: BatchQueue,
    render_parameters: RenderParameters,
    asset_library_path: Option<String>,
    last_frame_stats: FrameStats,
}

impl GraphicsManager {
    /// Create a graphics manager with no assets loaded
    ///
    /// # Errors
    ///
    /// Returns `InitializationFailed` if the configuration is invalid.
    pub fn new(
        config: GraphicsConfig,
        device: Box<dyn GraphicsDevice>,
        loader: Box<dyn AssetLoader>,
    ) -> Result<Self> {
        if let Err(err) = config.validate() {
            return Err(engine_err!(SOURCE, InitializationFailed, "Invalid graphics config: {}", err));
        }

        engine_info!(SOURCE, "GraphicsManager created ({}x{})", config.window_width, config.window_height);

        let targets = TargetManager::new(config.window_width, config.window_height);
        Ok(Self {
            config,
            device,
            loader,
            geometry: None,
            textures: None,
            shaders: FxHashMap::default(),
            targets,
            pipeline: RenderPipeline::new(),
            batches: BatchQueue::new(),
            render_parameters: RenderParameters::default(),
            asset_library_path: None,
            last_frame_stats: FrameStats::default(),
        })
    }

    // ===== ASSET LOADING =====

    /// Load every asset listed by the asset library file at `path`
    ///
    /// The path is remembered for `reload()`.
    pub fn load(&mut self, path: &str) -> Result<()> {
        self.asset_library_path = Some(path.to_string());
        self.reload()
    }

    /// Tear down and rebuild every asset from the last asset library path
    ///
    /// An unreadable asset library or effect file, or a library the loader
    /// rejects, leaves the manager with no assets at all. A malformed effect
    /// description is rejected before teardown, so the previous assets stay
    /// in place.
    ///
    /// # Errors
    ///
    /// `ConfigurationError` if nothing was loaded yet, otherwise the error
    /// of the failing step.
    pub fn reload(&mut self) -> Result<()> {
        let path = self.asset_library_path.clone().ok_or_else(|| {
            engine_err!(SOURCE, ConfigurationError, "No asset library to reload")
        })?;

        engine_info!(SOURCE, "Loading assets from '{}'", path);

        let library = match AssetLibrary::load(&path) {
            Ok(library) => library,
            Err(err) => return Err(self.abandon_load(err)),
        };

        let effect_text = match fs::read_to_string(&library.effect_path) {
            Ok(text) => text,
            Err(err) => {
                let err = Error::Io(format!("cannot read effect file '{}': {}", library.effect_path, err));
                return Err(self.abandon_load(err));
            }
        };

        let description = parse_effect_description(&effect_text).map_err(|err| {
            engine_error!(SOURCE, "Effect file '{}' rejected, keeping previous assets: {}",
                library.effect_path, err);
            err
        })?;

        self.clear_assets();

        match self.loader.load_geometry_library(&library.geometry_library_path) {
            Ok(geometry) => self.geometry = Some(geometry),
            Err(err) => return Err(self.abandon_load(err)),
        }
        match self.loader.load_texture_library(&library.texture_library_path) {
            Ok(textures) => self.textures = Some(textures),
            Err(err) => return Err(self.abandon_load(err)),
        }

        if let Err(err) = self.build(description) {
            return Err(self.abandon_load(err));
        }

        engine_info!(SOURCE, "Assets loaded: {} shader(s), {} buffer(s), {} pass(es)",
            self.shaders.len(), self.targets.target_count(), self.pipeline.pass_count());
        Ok(())
    }

    /// Replace shaders, buffers and passes from effect description text
    ///
    /// Geometry and texture libraries are kept. A malformed description
    /// leaves the previous pipeline in place.
    pub fn load_effect_source(&mut self, text: &str) -> Result<()> {
        let description = parse_effect_description(text).map_err(|err| {
            engine_error!(SOURCE, "Effect description rejected, keeping previous pipeline: {}", err);
            err
        })?;

        self.clear_pipeline();
        if let Err(err) = self.build(description) {
            self.clear_pipeline();
            engine_error!(SOURCE, "Effect description could not be built: {}", err);
            return Err(err);
        }
        Ok(())
    }

    /// Create shaders and buffers, then append passes in declaration order
    fn build(&mut self, description: EffectDescription) -> Result<()> {
        let EffectDescription { shaders, buffers, passes } = description;

        for decl in shaders {
            // Release the previous program of this role before creating the new one
            if self.shaders.remove(&decl.kind).is_some() {
                engine_debug!(SOURCE, "Replacing {} shader", decl.kind.token());
            }
            let shader = self.device.create_shader(decl.kind, &decl.vertex_path, &decl.fragment_path)?;
            self.shaders.insert(decl.kind, shader);
        }

        for decl in buffers {
            self.targets.define(
                &mut *self.device,
                &decl.name,
                decl.format,
                decl.width_ratio,
                decl.height_ratio,
            )?;
        }

        self.pipeline = passes.into_iter().collect();
        Ok(())
    }

    fn clear_pipeline(&mut self) {
        self.pipeline.clear();
        self.targets.clear();
        self.shaders.clear();
    }

    /// Drop every asset, including the geometry and texture libraries
    pub fn clear_assets(&mut self) {
        self.clear_pipeline();
        self.geometry = None;
        self.textures = None;
    }

    fn abandon_load(&mut self, err: Error) -> Error {
        engine_error!(SOURCE, "Asset load failed, all assets cleared: {}", err);
        self.clear_assets();
        err
    }

    /// Install a geometry library directly (bypassing the asset loader)
    pub fn set_geometry_library(&mut self, geometry: Box<dyn GeometryLibrary>) {
        self.geometry = Some(geometry);
    }

    /// Install a texture library directly (bypassing the asset loader)
    pub fn set_texture_library(&mut self, textures: Box<dyn TextureLibrary>) {
        self.textures = Some(textures);
    }

    // ===== FRAME CYCLE =====

    /// Queue a batch for the current frame
    pub fn submit(&mut self, batch: RenderBatch) {
        self.batches.submit(batch);
    }

    /// Execute the pass pipeline against the queued batches, then reset the queue
    ///
    /// Does nothing (apart from the reset) unless both a forward and a
    /// post-process shader are loaded.
    pub fn execute_frame(&mut self) -> FrameStats {
        let ready = self.shaders.contains_key(&ShaderKind::Forward)
            && self.shaders.contains_key(&ShaderKind::PostProcess);

        let stats = if ready {
            PassExecutor {
                device: &mut *self.device,
                geometry: &mut self.geometry,
                textures: &mut self.textures,
                shaders: &self.shaders,
                targets: &self.targets,
                batches: &self.batches,
                params: &self.render_parameters,
                config: &self.config,
                stats: FrameStats::default(),
            }
            .run(&self.pipeline)
        } else {
            engine_debug!(SOURCE, "Frame skipped: forward and post-process shaders are not both loaded");
            FrameStats::default()
        };

        self.batches.clear();
        self.last_frame_stats = stats;
        stats
    }

    /// Counters of the last executed frame
    pub fn last_frame_stats(&self) -> FrameStats {
        self.last_frame_stats
    }

    // ===== RENDER PARAMETERS =====

    pub fn render_parameters(&self) -> &RenderParameters {
        &self.render_parameters
    }

    pub fn render_parameters_mut(&mut self) -> &mut RenderParameters {
        &mut self.render_parameters
    }

    pub fn set_render_parameters(&mut self, params: RenderParameters) {
        self.render_parameters = params;
    }

    // ===== ACCESSORS =====

    pub fn config(&self) -> &GraphicsConfig {
        &self.config
    }

    pub fn pipeline(&self) -> &RenderPipeline {
        &self.pipeline
    }

    /// Buffer registry
    pub fn targets(&self) -> &TargetManager {
        &self.targets
    }

    /// Number of batches queued for the current frame
    pub fn batch_count(&self) -> usize {
        self.batches.len()
    }

    /// True if a shader of the given role is loaded
    pub fn has_shader(&self, kind: ShaderKind) -> bool {
        self.shaders.contains_key(&kind)
    }

    /// Asset library path used by `reload()`
    pub fn asset_library_path(&self) -> Option<&str> {
        self.asset_library_path.as_deref()
    }

    /// True once geometry and texture libraries are installed
    pub fn has_libraries(&self) -> bool {
        self.geometry.is_some() && self.textures.is_some()
    }
}

#[cfg(test)]
#[path = "graphics_manager_tests.rs"]
mod tests;
