//! Render target management module
//!
//! The buffer registry: named offscreen render targets declared by the
//! effect description and sized as a ratio of the window resolution.

mod render_target;
mod target_manager;

pub use render_target::{RenderTarget, TargetFormat};
pub use target_manager::{is_valid_ratio, TargetManager};
