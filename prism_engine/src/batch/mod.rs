//! Render batch module
//!
//! Draw requests accumulated during a frame and consumed by forward passes.

mod render_batch;
mod batch_queue;

pub use render_batch::{RenderBatch, GeometryType};
pub use batch_queue::BatchQueue;
