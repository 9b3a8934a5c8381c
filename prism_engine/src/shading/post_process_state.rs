/// Post-process shading state calculator.
///
/// A post-process pass draws once, so its state depends only on the pass
/// (pass-through flags and which sources resolved) and on the scene color
/// correction.

use glam::Mat4;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PostProcessShaderState {
    pub flags: Vec<String>,
    pub use_source0: bool,
    pub use_source1: bool,
    /// Scene color correction, applied to the final color (identity by default)
    pub color_correction: Mat4,
}

impl PostProcessShaderState {
    pub fn has_flag(&self, flag: &str) -> bool {
        self.flags.iter().any(|f| f == flag)
    }
}

/// Compute the post-process state from a pass's pass-through flags
pub fn calculate_post_process_state(flags: &[String]) -> PostProcessShaderState {
    PostProcessShaderState {
        flags: flags.to_vec(),
        ..PostProcessShaderState::default()
    }
}

#[cfg(test)]
#[path = "post_process_state_tests.rs"]
mod tests;
