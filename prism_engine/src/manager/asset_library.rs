/// Top-level asset library file.
///
/// Three whitespace-separated paths: the effect description, the geometry
/// library and the texture library. Paths are used as written, relative
/// paths resolve against the process working directory.

use std::fs;
use crate::error::{Error, Result};
use crate::engine_warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetLibrary {
    pub effect_path: String,
    pub geometry_library_path: String,
    pub texture_library_path: String,
}

impl AssetLibrary {
    /// Parse the contents of an asset library file
    ///
    /// # Errors
    ///
    /// `ConfigurationError` if fewer than three paths are listed. Extra
    /// tokens are ignored with a warning.
    pub fn parse(text: &str) -> Result<Self> {
        let paths: Vec<&str> = text.split_whitespace().collect();
        if paths.len() < 3 {
            return Err(Error::ConfigurationError(format!(
                "Asset library must list an effect file, a geometry library and a texture library (found {} path(s))",
                paths.len()
            )));
        }
        if paths.len() > 3 {
            engine_warn!("prism::AssetLibrary",
                "Ignoring {} extra token(s) after the texture library path", paths.len() - 3);
        }

        Ok(Self {
            effect_path: paths[0].to_string(),
            geometry_library_path: paths[1].to_string(),
            texture_library_path: paths[2].to_string(),
        })
    }

    /// Read and parse an asset library file
    ///
    /// # Errors
    ///
    /// `Io` if the file cannot be read, otherwise as `parse`.
    pub fn load(path: &str) -> Result<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| Error::Io(format!("cannot read asset library '{}': {}", path, e)))?;
        Self::parse(&text)
    }
}

#[cfg(test)]
#[path = "asset_library_tests.rs"]
mod tests;
