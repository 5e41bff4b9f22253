//! Orchestration for the OpenAPI to TypeScript generation pipeline.
//!
//! The orchestrator owns a parsed document and runs the emitter over its
//! `components.schemas`.
//!
//! ## Usage
//!
//! ```no_run
//! use oas3_ts_gen::generator::{GeneratorConfig, Orchestrator};
//!
//! # fn example() -> anyhow::Result<()> {
//! let spec_json = std::fs::read_to_string("openapi.json")?;
//! let spec = oas3::from_json(spec_json)?;
//!
//! let orchestrator = Orchestrator::new(spec, GeneratorConfig::default());
//! let output = orchestrator.generate_with_header("openapi.json")?;
//!
//! println!("Generated {} types with {} warnings", output.stats.types_generated, output.stats.warnings.len());
//! std::fs::write("types.ts", output.code)?;
//! # Ok(())
//! # }
//! ```

use crate::generator::{GeneratorConfig, emitter::DocumentEmitter, metrics::GenerationStats};

/// High-level entry point for turning an OpenAPI document into TypeScript.
pub struct Orchestrator {
  spec: oas3::Spec,
  config: GeneratorConfig,
}

/// Metadata about the OpenAPI specification for file header generation.
#[derive(Debug, Clone)]
pub struct CodeMetadata {
  /// API title from OpenAPI info object
  pub title: String,
  /// API version from OpenAPI info object
  pub version: String,
  /// Optional API description from OpenAPI info object
  pub description: Option<String>,
}

/// Generated TypeScript source together with what happened while producing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedOutput {
  pub code: String,
  pub stats: GenerationStats,
}

impl Orchestrator {
  pub fn new(spec: oas3::Spec, config: GeneratorConfig) -> Self {
    Self { spec, config }
  }

  pub fn metadata(&self) -> CodeMetadata {
    CodeMetadata {
      title: self.spec.info.title.clone(),
      version: self.spec.info.version.clone(),
      description: self.spec.info.description.clone(),
    }
  }

  /// Number of named schemas under `components.schemas`.
  pub fn schema_count(&self) -> usize {
    self
      .spec
      .components
      .as_ref()
      .map_or(0, |components| components.schemas.len())
  }

  /// Generates one declaration per component schema, without a file header.
  ///
  /// A document without `components` produces empty output.
  ///
  /// # Errors
  ///
  /// Returns an error if the in-memory sink cannot be written or the output is
  /// not valid UTF-8. Individual schema failures are reported in the stats instead.
  pub fn generate(&self) -> anyhow::Result<GeneratedOutput> {
    let emitter = DocumentEmitter::new(self.config);
    let mut buffer = Vec::new();

    let stats = match &self.spec.components {
      Some(components) => emitter.emit(&components.schemas, &mut buffer)?,
      None => GenerationStats::default(),
    };

    Ok(GeneratedOutput {
      code: String::from_utf8(buffer)?,
      stats,
    })
  }

  /// Generates the declarations behind an auto-generated file header naming
  /// the API title, version and `source_path`.
  pub fn generate_with_header(&self, source_path: &str) -> anyhow::Result<GeneratedOutput> {
    let output = self.generate()?;
    let code = format!("{}\n{}", self.file_header(source_path), output.code);
    Ok(GeneratedOutput { code, ..output })
  }

  fn file_header(&self, source_path: &str) -> String {
    let metadata = self.metadata();
    let mut lines = vec![
      "// AUTO-GENERATED CODE - DO NOT EDIT!".to_string(),
      "//".to_string(),
      format!("// {}", metadata.title),
      format!("// Source: {source_path}"),
      format!("// Version: {}", metadata.version),
      format!("// Generated by `{}`", env!("CARGO_PKG_NAME")),
    ];

    if let Some(description) = metadata.description.as_deref().map(str::trim)
      && !description.is_empty()
    {
      lines.push("//".to_string());
      lines.extend(description.lines().map(|line| format!("// {line}").trim_end().to_string()));
    }

    let mut header = lines.join("\n");
    header.push('\n');
    header
  }
}
