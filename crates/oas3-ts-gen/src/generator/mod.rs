pub mod ast;
pub mod codegen;
pub mod converter;
pub mod emitter;
pub mod errors;
pub mod metrics;
pub mod naming;
pub mod orchestrator;

#[cfg(test)]
mod tests;

use std::{fmt, str::FromStr};

pub use ast::{FormatContext, RenderMode, ResolvedType};
pub use codegen::DeclarationRenderer;
pub use converter::TypeResolver;
pub use emitter::DocumentEmitter;
pub use errors::{ConversionError, ConversionResult};
pub use metrics::{GenerationStats, GenerationWarning};
pub use orchestrator::{GeneratedOutput, Orchestrator};

pub const DEFAULT_MAX_DEPTH: usize = 64;
const MAX_INDENT_SPACES: u8 = 8;

/// Whitespace used for one level of object nesting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndentStyle {
  #[default]
  Tab,
  Spaces(u8),
}

impl IndentStyle {
  /// Returns the leading whitespace for a line nested `depth` levels deep.
  pub fn indent(self, depth: usize) -> String {
    match self {
      Self::Tab => "\t".repeat(depth),
      Self::Spaces(width) => " ".repeat(usize::from(width) * depth),
    }
  }
}

impl FromStr for IndentStyle {
  type Err = String;

  fn from_str(value: &str) -> Result<Self, Self::Err> {
    match value.trim().to_ascii_lowercase().as_str() {
      "tab" | "tabs" => Ok(Self::Tab),
      other => match other.parse::<u8>() {
        Ok(width @ 1..=MAX_INDENT_SPACES) => Ok(Self::Spaces(width)),
        _ => Err(format!(
          "invalid indent '{value}': expected 'tab' or a space count between 1 and {MAX_INDENT_SPACES}"
        )),
      },
    }
  }
}

impl fmt::Display for IndentStyle {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Tab => f.write_str("tab"),
      Self::Spaces(width) => write!(f, "{width}"),
    }
  }
}

/// Options shared by every stage of a generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, bon::Builder)]
pub struct GeneratorConfig {
  #[builder(default)]
  pub indent: IndentStyle,
  /// Deepest object nesting level resolved before a property is skipped.
  #[builder(default = DEFAULT_MAX_DEPTH)]
  pub max_depth: usize,
}

impl Default for GeneratorConfig {
  fn default() -> Self {
    Self::builder().build()
  }
}
