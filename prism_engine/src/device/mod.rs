/// Device module - collaborator traits the engine drives
///
/// The engine never talks to a graphics API directly. A backend crate
/// implements these traits (GPU binding layer, geometry and texture
/// libraries, asset loader) and hands them to the `GraphicsManager`.

// Module declarations
pub mod graphics_device;
pub mod libraries;

// Re-export everything
pub use graphics_device::*;
pub use libraries::*;

// Mock graphics device for tests (no GPU required)
#[cfg(test)]
pub mod mock_graphics_device;
