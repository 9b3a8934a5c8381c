/// Per-frame render batch queue.
///
/// Append-only during a frame, no limit and no deduplication. Cleared by the
/// orchestrator once the frame has executed.

use super::render_batch::{RenderBatch, GeometryType};

#[derive(Debug, Default)]
pub struct BatchQueue {
    batches: Vec<RenderBatch>,
}

impl BatchQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a batch
    pub fn submit(&mut self, batch: RenderBatch) {
        self.batches.push(batch);
    }

    /// Batches in submission order
    pub fn iter(&self) -> impl Iterator<Item = &RenderBatch> {
        self.batches.iter()
    }

    /// Batches matching an optional geometry filter, in submission order
    ///
    /// `None` yields the whole queue.
    pub fn filtered(&self, filter: Option<GeometryType>) -> impl Iterator<Item = &RenderBatch> {
        self.batches
            .iter()
            .filter(move |b| filter.map_or(true, |t| b.geometry_type == t))
    }

    pub fn len(&self) -> usize {
        self.batches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }

    /// Drop every batch
    pub fn clear(&mut self) {
        self.batches.clear();
    }
}

#[cfg(test)]
#[path = "batch_queue_tests.rs"]
mod tests;
