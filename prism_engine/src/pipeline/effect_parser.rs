/// Effect description parser.
///
/// The effect description is a whitespace-tokenized text file made of
/// sections, each introduced by a header keyword and an explicit count:
///
/// ```text
/// shaders 2
///     forward      forward.vert      forward.frag
///     postProcess  postprocess.vert  postprocess.frag
/// buffers 1
///     hdr RGBA16F 1.0 1.0
/// passes 2
///     main 3
///         shader forward
///         colorAttach0 hdr
///         flags 2 clearColor clearDepth
///     present 3
///         shader postProcess
///         colorAttach0 screen
///         source0 hdr
/// ```
///
/// Parsing is pure: nothing is created on the device, so a malformed file
/// can be rejected before any existing pipeline state is torn down.

use crate::error::{Error, Result};
use crate::batch::GeometryType;
use crate::target::{is_valid_ratio, TargetFormat};
use crate::engine_warn;
use super::render_pass::{RenderPass, ShaderKind};

const SOURCE: &str = "prism::EffectParser";

/// Shader program declaration (`shaders` section)
#[derive(Debug, Clone, PartialEq)]
pub struct ShaderDecl {
    pub kind: ShaderKind,
    pub vertex_path: String,
    pub fragment_path: String,
}

/// Offscreen buffer declaration (`buffers` section)
#[derive(Debug, Clone, PartialEq)]
pub struct BufferDecl {
    pub name: String,
    pub format: TargetFormat,
    pub width_ratio: f32,
    pub height_ratio: f32,
}

/// Everything an effect description declares, in file order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EffectDescription {
    pub shaders: Vec<ShaderDecl>,
    pub buffers: Vec<BufferDecl>,
    pub passes: Vec<RenderPass>,
}

// ============================================================================
// Token stream
// ============================================================================

struct TokenStream<'a> {
    tokens: Vec<(usize, &'a str)>,
    pos: usize,
}

impl<'a> TokenStream<'a> {
    fn new(text: &'a str) -> Self {
        let tokens = text
            .lines()
            .enumerate()
            .flat_map(|(i, line)| line.split_whitespace().map(move |t| (i + 1, t)))
            .collect();
        Self { tokens, pos: 0 }
    }

    fn is_empty(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Line of the current token (or of the last one at end of input)
    fn line(&self) -> usize {
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .map_or(1, |(line, _)| *line)
    }

    fn error(&self, message: String) -> Error {
        Error::ParseError { line: self.line(), message }
    }

    fn next(&mut self, expected: &str) -> Result<&'a str> {
        match self.tokens.get(self.pos) {
            Some(&(_, token)) => {
                self.pos += 1;
                Ok(token)
            }
            None => Err(self.error(format!("unexpected end of input, expected {}", expected))),
        }
    }

    fn next_count(&mut self, expected: &str) -> Result<usize> {
        let token = self.next(expected)?;
        token.parse::<usize>().map_err(|_| Error::ParseError {
            line: self.tokens[self.pos - 1].0,
            message: format!("expected {} (non-negative integer), found '{}'", expected, token),
        })
    }

    fn next_f32(&mut self, expected: &str) -> Result<f32> {
        let token = self.next(expected)?;
        token.parse::<f32>().map_err(|_| Error::ParseError {
            line: self.tokens[self.pos - 1].0,
            message: format!("expected {} (number), found '{}'", expected, token),
        })
    }

    /// Size ratio: a finite number greater than zero
    fn next_ratio(&mut self, expected: &str) -> Result<f32> {
        let ratio = self.next_f32(expected)?;
        if !is_valid_ratio(ratio) {
            return Err(Error::ParseError {
                line: self.tokens[self.pos - 1].0,
                message: format!("expected {} (positive number), found '{}'", expected, ratio),
            });
        }
        Ok(ratio)
    }
}

// ============================================================================
// Parser
// ============================================================================

/// Parse an effect description
///
/// Tolerated (logged, not errors): unknown shader roles, unknown pass option
/// keywords, unknown `shader` kinds and `geometryType` values inside a pass.
///
/// # Errors
///
/// `Error::ParseError` for unknown section headers, non-numeric or negative
/// counts, ratios that are not finite positive numbers, unknown buffer
/// formats, and input ending in the middle of a section. Count mismatches
/// surface as one of these.
pub fn parse_effect_description(text: &str) -> Result<EffectDescription> {
    let mut stream = TokenStream::new(text);
    let mut description = EffectDescription::default();

    while !stream.is_empty() {
        let line = stream.line();
        let header = stream.next("section header")?;
        match header {
            "shaders" => parse_shaders(&mut stream, &mut description)?,
            "buffers" => parse_buffers(&mut stream, &mut description)?,
            "passes" => parse_passes(&mut stream, &mut description)?,
            other => {
                return Err(Error::ParseError {
                    line,
                    message: format!("unknown section header '{}'", other),
                });
            }
        }
    }

    Ok(description)
}

fn parse_shaders(stream: &mut TokenStream<'_>, description: &mut EffectDescription) -> Result<()> {
    let count = stream.next_count("shader count")?;
    for _ in 0..count {
        let role = stream.next("shader role")?;
        let vertex_path = stream.next("vertex shader path")?;
        let fragment_path = stream.next("fragment shader path")?;

        match ShaderKind::from_token(role) {
            Some(kind) => description.shaders.push(ShaderDecl {
                kind,
                vertex_path: vertex_path.to_string(),
                fragment_path: fragment_path.to_string(),
            }),
            None => engine_warn!(SOURCE, "Ignoring shader with unsupported role '{}'", role),
        }
    }
    Ok(())
}

fn parse_buffers(stream: &mut TokenStream<'_>, description: &mut EffectDescription) -> Result<()> {
    let count = stream.next_count("buffer count")?;
    for _ in 0..count {
        let name = stream.next("buffer name")?;
        let tag = stream.next("buffer format")?;
        let format = TargetFormat::from_tag(tag)
            .ok_or_else(|| Error::ParseError {
                line: stream.line(),
                message: format!("unknown format '{}' for buffer '{}'", tag, name),
            })?;
        let width_ratio = stream.next_ratio("buffer width ratio")?;
        let height_ratio = stream.next_ratio("buffer height ratio")?;

        description.buffers.push(BufferDecl {
            name: name.to_string(),
            format,
            width_ratio,
            height_ratio,
        });
    }
    Ok(())
}

fn parse_passes(stream: &mut TokenStream<'_>, description: &mut EffectDescription) -> Result<()> {
    let count = stream.next_count("pass count")?;
    for _ in 0..count {
        let name = stream.next("pass name")?;
        let option_count = stream.next_count("pass option count")?;
        let mut pass = RenderPass::new(name);

        for _ in 0..option_count {
            let keyword = stream.next("pass option")?;
            match keyword {
                "shader" => {
                    let kind = stream.next("shader kind")?;
                    match ShaderKind::from_token(kind) {
                        Some(kind) => pass.set_shader(kind),
                        None => engine_warn!(SOURCE,
                            "Pass '{}': unknown shader kind '{}', keeping {}",
                            name, kind, pass.shader_kind().token()),
                    }
                }
                "colorAttach0" => pass.set_color_attach0(stream.next("color target")?.to_string()),
                "depthAttach" => pass.set_depth_attach(stream.next("depth target")?.to_string()),
                "source0" => pass.set_source0(stream.next("source0 target")?.to_string()),
                "source1" => pass.set_source1(stream.next("source1 target")?.to_string()),
                "flags" => {
                    let flag_count = stream.next_count("flag count")?;
                    for _ in 0..flag_count {
                        pass.push_flag(stream.next("flag")?.to_string());
                    }
                }
                "geometryType" => {
                    let token = stream.next("geometry type")?;
                    match GeometryType::from_token(token) {
                        Some(filter) => pass.set_geometry_filter(filter),
                        None => engine_warn!(SOURCE,
                            "Pass '{}': unknown geometry type '{}', drawing every batch",
                            name, token),
                    }
                }
                other => engine_warn!(SOURCE, "Pass '{}': ignoring unknown option '{}'", name, other),
            }
        }

        description.passes.push(pass);
    }
    Ok(())
}

#[cfg(test)]
#[path = "effect_parser_tests.rs"]
mod tests;
