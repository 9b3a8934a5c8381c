//! Frame orchestrator module
//!
//! The `GraphicsManager` owns the buffer registry, the pass pipeline, the
//! loaded shaders and the per-frame batch queue, and drives the backend
//! collaborators through the accumulate / execute / reset cycle.

mod asset_library;
mod pass_executor;
mod graphics_manager;

pub use asset_library::AssetLibrary;
pub use pass_executor::FrameStats;
pub use graphics_manager::GraphicsManager;
