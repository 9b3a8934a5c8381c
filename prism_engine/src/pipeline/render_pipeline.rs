/// Render pipeline: ordered list of render passes.
///
/// Passes execute in the order they were appended, which is the order they
/// were declared in the effect description. The asset author is responsible
/// for writing a target before a later pass samples it.

use super::render_pass::RenderPass;

#[derive(Debug, Clone, Default)]
pub struct RenderPipeline {
    passes: Vec<RenderPass>,
}

impl RenderPipeline {
    /// Create an empty pipeline
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pass at the end of the pipeline
    pub fn push(&mut self, pass: RenderPass) {
        self.passes.push(pass);
    }

    /// Passes in execution order
    pub fn passes(&self) -> &[RenderPass] {
        &self.passes
    }

    /// First pass with the given name
    pub fn pass(&self, name: &str) -> Option<&RenderPass> {
        self.passes.iter().find(|p| p.name() == name)
    }

    pub fn pass_count(&self) -> usize {
        self.passes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passes.is_empty()
    }

    /// Pass names in execution order
    pub fn pass_names(&self) -> Vec<&str> {
        self.passes.iter().map(|p| p.name()).collect()
    }

    /// Remove all passes
    pub fn clear(&mut self) {
        self.passes.clear();
    }
}

impl FromIterator<RenderPass> for RenderPipeline {
    fn from_iter<I: IntoIterator<Item = RenderPass>>(iter: I) -> Self {
        Self {
            passes: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
#[path = "render_pipeline_tests.rs"]
mod tests;
