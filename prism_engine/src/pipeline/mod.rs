//! Pass pipeline module
//!
//! An ordered list of declarative render passes, built by parsing the
//! effect description. Execution order is declaration order; nothing is
//! reordered and no dependencies are inferred.

mod render_pass;
mod render_pipeline;
mod effect_parser;

pub use render_pass::{RenderPass, ShaderKind};
pub use render_pipeline::RenderPipeline;
pub use effect_parser::{EffectDescription, ShaderDecl, BufferDecl, parse_effect_description};
