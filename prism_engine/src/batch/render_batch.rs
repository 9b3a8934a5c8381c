/// One queued draw request: geometry name + shading parameters snapshot.

use crate::shading::EffectParameters;

/// Geometry category, used by forward passes that filter the queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GeometryType {
    #[default]
    Opaque,
    Transparent,
    Hud,
    ScreenQuad,
}

impl GeometryType {
    /// Parse an effect description token (`opaque`, `transparent`, `hud`, `screenQuad`)
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "opaque" => Some(GeometryType::Opaque),
            "transparent" => Some(GeometryType::Transparent),
            "hud" => Some(GeometryType::Hud),
            "screenQuad" => Some(GeometryType::ScreenQuad),
            _ => None,
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            GeometryType::Opaque => "opaque",
            GeometryType::Transparent => "transparent",
            GeometryType::Hud => "hud",
            GeometryType::ScreenQuad => "screenQuad",
        }
    }
}

/// Render batch
///
/// The effect parameters are copied in, so the submitting object may change
/// or drop its own copy right after submission.
#[derive(Debug, Clone)]
pub struct RenderBatch {
    /// Geometry library name
    pub geometry: String,
    /// Geometry category (defaults to opaque)
    pub geometry_type: GeometryType,
    /// Shading inputs for this draw
    pub effect: EffectParameters,
}

impl RenderBatch {
    /// Opaque batch for `geometry`
    pub fn new(geometry: &str, effect: EffectParameters) -> Self {
        Self {
            geometry: geometry.to_string(),
            geometry_type: GeometryType::Opaque,
            effect,
        }
    }

    /// Same batch with another geometry category
    pub fn with_geometry_type(mut self, geometry_type: GeometryType) -> Self {
        self.geometry_type = geometry_type;
        self
    }
}
