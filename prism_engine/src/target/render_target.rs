/// Offscreen render target: a named, sized GPU surface.

use std::fmt;
use std::sync::Arc;
use crate::device::TargetHandle;

/// Pixel format of a render target, parsed from the effect description tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetFormat {
    /// 8-bit RGB
    Rgb,
    /// 8-bit RGBA
    Rgba,
    /// Half-float RGBA (HDR accumulation)
    Rgba16F,
    /// Depth-only
    Depth,
}

impl TargetFormat {
    /// Parse a format tag (`RGB`, `RGBA`, `RGBA16F`, `DEPTH`), case-insensitive
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_ascii_uppercase().as_str() {
            "RGB" => Some(TargetFormat::Rgb),
            "RGBA" => Some(TargetFormat::Rgba),
            "RGBA16F" => Some(TargetFormat::Rgba16F),
            "DEPTH" => Some(TargetFormat::Depth),
            _ => None,
        }
    }

    /// Canonical tag
    pub fn tag(&self) -> &'static str {
        match self {
            TargetFormat::Rgb => "RGB",
            TargetFormat::Rgba => "RGBA",
            TargetFormat::Rgba16F => "RGBA16F",
            TargetFormat::Depth => "DEPTH",
        }
    }
}

impl fmt::Display for TargetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Buffer registry entry.
///
/// Render targets can only be created via `TargetManager::define()`.
/// Width and height are absolute, computed once when the target is defined.
#[derive(Debug)]
pub struct RenderTarget {
    name: String,
    format: TargetFormat,
    width: u32,
    height: u32,
    handle: Arc<dyn TargetHandle>,
}

impl RenderTarget {
    /// Internal only, created via TargetManager::define()
    pub(crate) fn new(
        name: &str,
        format: TargetFormat,
        width: u32,
        height: u32,
        handle: Arc<dyn TargetHandle>,
    ) -> Self {
        Self {
            name: name.to_string(),
            format,
            width,
            height,
            handle,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn format(&self) -> TargetFormat {
        self.format
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Backend resource
    pub fn handle(&self) -> &Arc<dyn TargetHandle> {
        &self.handle
    }
}
