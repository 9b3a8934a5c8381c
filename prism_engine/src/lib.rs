/*!
# Prism Engine

Runtime core of a data-driven, multi-pass forward renderer.

An effect description (shaders, offscreen buffers, ordered passes with flags)
is parsed into a pass pipeline and a buffer registry. Every frame, gameplay
code submits render batches; at frame end the `GraphicsManager` walks the
pass pipeline, resolving targets and sources, deriving shading state per
batch, and handing draws to the backend collaborators.

## Architecture

- **TargetManager**: named offscreen render targets sized from the window
- **RenderPipeline**: ordered list of `RenderPass` records
- **EffectParser**: text asset description → pipeline + buffer declarations
- **Shading calculators**: pure derivation of `ForwardShaderState` and
  `PostProcessShaderState`
- **GraphicsManager**: accumulate / execute / reset frame orchestrator

The GPU itself is reached only through the `GraphicsDevice`,
`GeometryLibrary`, `TextureLibrary` and `AssetLoader` traits, so a backend
crate provides the concrete implementations.
*/

// Internal modules
mod error;
mod engine;
mod config;
pub mod log;
pub mod device;
pub mod target;
pub mod pipeline;
pub mod shading;
pub mod batch;
pub mod manager;

// Main prism namespace module
pub mod prism {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging hub
    pub use crate::engine::Engine;

    // Configuration
    pub use crate::config::{GraphicsConfig, TextureChannel, NUM_POINT_LIGHTS};

    // Frame orchestrator
    pub use crate::manager::{GraphicsManager, FrameStats, AssetLibrary};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Backend collaborator traits
    pub mod device {
        pub use crate::device::*;
    }

    // Buffer registry
    pub mod target {
        pub use crate::target::*;
    }

    // Pass pipeline and effect description parsing
    pub mod pipeline {
        pub use crate::pipeline::*;
    }

    // Shading state calculators
    pub mod shading {
        pub use crate::shading::*;
    }

    // Render batches
    pub mod batch {
        pub use crate::batch::*;
    }
}

// Re-export math library at crate root
pub use glam;
