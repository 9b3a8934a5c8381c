/// Geometry and texture collaborators, and the loader that builds them.

use crate::error::Result;
use crate::config::TextureChannel;

/// Named geometry that can be drawn with the current device state
pub trait GeometryLibrary: Send {
    /// True if `name` is loaded
    fn has_geometry(&self, name: &str) -> bool;

    /// Issue the draw for `name`
    ///
    /// Returns false (and draws nothing) when the geometry is unknown.
    fn render_geometry(&mut self, name: &str) -> bool;
}

/// Named textures that can be bound to texture channels
pub trait TextureLibrary: Send {
    /// True if `name` is currently resolvable
    fn has_texture(&self, name: &str) -> bool;

    /// Bind `name` on `channel`
    ///
    /// Returns false (and binds nothing) when the texture is unknown.
    fn bind_texture(&mut self, channel: TextureChannel, name: &str) -> bool;
}

/// Builds the geometry and texture libraries named by an asset library file
pub trait AssetLoader: Send {
    /// Load the geometry library at `path`
    fn load_geometry_library(&mut self, path: &str) -> Result<Box<dyn GeometryLibrary>>;

    /// Load the texture library at `path`
    fn load_texture_library(&mut self, path: &str) -> Result<Box<dyn TextureLibrary>>;
}
