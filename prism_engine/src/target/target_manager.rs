/// Buffer registry for the engine.
///
/// Owns the named offscreen render targets declared by the effect
/// description. All targets are torn down together on asset reload.

use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;
use crate::device::GraphicsDevice;
use crate::error::Result;
use crate::engine_err;
use super::render_target::{RenderTarget, TargetFormat};

/// Target manager (owned by the GraphicsManager)
///
/// Targets are sized as `window * ratio` when defined and keep that size
/// until the next `clear()`.
pub struct TargetManager {
    targets: FxHashMap<String, RenderTarget>,
    window_width: u32,
    window_height: u32,
}

impl TargetManager {
    /// Create a new empty target manager for the given window size
    pub fn new(window_width: u32, window_height: u32) -> Self {
        Self {
            targets: FxHashMap::default(),
            window_width,
            window_height,
        }
    }

    /// Window size targets are derived from
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }

    /// Size a target would get for the given ratios
    ///
    /// `floor(window * ratio)`, never below one pixel.
    pub fn scaled_size(&self, width_ratio: f32, height_ratio: f32) -> (u32, u32) {
        scale(self.window_width, self.window_height, width_ratio, height_ratio)
    }

    /// Define a named render target
    ///
    /// The first definition of a name wins: defining an existing name again
    /// returns the existing target untouched and allocates nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if a new name has a ratio that is not a finite
    /// positive number, or if the device fails to allocate the target.
    pub fn define(
        &mut self,
        device: &mut dyn GraphicsDevice,
        name: &str,
        format: TargetFormat,
        width_ratio: f32,
        height_ratio: f32,
    ) -> Result<&RenderTarget> {
        let (window_width, window_height) = self.window_size();
        match self.targets.entry(name.to_string()) {
            Entry::Occupied(existing) => {
                crate::engine_debug!("prism::TargetManager",
                    "Buffer '{}' already defined, keeping first definition", name);
                Ok(&*existing.into_mut())
            }
            Entry::Vacant(slot) => {
                if !is_valid_ratio(width_ratio) || !is_valid_ratio(height_ratio) {
                    return Err(engine_err!("prism::TargetManager", ConfigurationError,
                        "Buffer '{}' has invalid size ratio {}x{}", name, width_ratio, height_ratio));
                }
                let (width, height) = scale(window_width, window_height, width_ratio, height_ratio);
                let handle = device.create_target(format, width, height)?;
                crate::engine_debug!("prism::TargetManager",
                    "Defined buffer '{}' {} {}x{}", name, format, width, height);
                Ok(&*slot.insert(RenderTarget::new(name, format, width, height, handle)))
            }
        }
    }

    /// Resolve a target by name
    ///
    /// Empty names never resolve.
    pub fn resolve(&self, name: &str) -> Option<&RenderTarget> {
        if name.is_empty() {
            return None;
        }
        self.targets.get(name)
    }

    /// Get the number of targets
    pub fn target_count(&self) -> usize {
        self.targets.len()
    }

    /// Get all target names
    pub fn target_names(&self) -> Vec<&str> {
        self.targets.keys().map(|k| k.as_str()).collect()
    }

    /// Release every target
    pub fn clear(&mut self) {
        self.targets.clear();
    }
}

/// A size ratio must be a finite positive number
pub fn is_valid_ratio(ratio: f32) -> bool {
    ratio.is_finite() && ratio > 0.0
}

fn scale(window_width: u32, window_height: u32, width_ratio: f32, height_ratio: f32) -> (u32, u32) {
    let w = (window_width as f32 * width_ratio).floor().max(1.0) as u32;
    let h = (window_height as f32 * height_ratio).floor().max(1.0) as u32;
    (w, h)
}

#[cfg(test)]
#[path = "target_manager_tests.rs"]
mod tests;
