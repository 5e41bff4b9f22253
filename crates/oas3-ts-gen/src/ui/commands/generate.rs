use std::path::PathBuf;

use anyhow::Context;
use chrono::{Local, Timelike};
use crossterm::style::Stylize;
use oas3_ts_gen::{
  generator::{GeneratedOutput, GenerationStats, GeneratorConfig, Orchestrator},
  utils::spec::SpecLoader,
};
use tokio::io::AsyncWriteExt;

use crate::ui::{Colors, GenerateCommand};

fn format_timestamp() -> String {
  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}

#[derive(Debug, Clone)]
pub struct GenerateConfig {
  pub input: PathBuf,
  /// Destination file. `None` writes the generated code to stdout.
  pub output: Option<PathBuf>,
  pub generator: GeneratorConfig,
  pub include_header: bool,
  pub verbose: bool,
  pub quiet: bool,
}

impl GenerateConfig {
  pub fn from_command(command: GenerateCommand) -> anyhow::Result<Self> {
    let GenerateCommand {
      input,
      output,
      indent,
      max_depth,
      no_header,
      verbose,
      quiet,
    } = command;

    if verbose && quiet {
      anyhow::bail!("--verbose and --quiet cannot be used together");
    }
    if max_depth == 0 {
      anyhow::bail!("--max-depth must be at least 1");
    }

    Ok(Self {
      input,
      output,
      generator: GeneratorConfig::builder().indent(indent).max_depth(max_depth).build(),
      include_header: !no_header,
      verbose,
      quiet,
    })
  }

  async fn load_spec(&self) -> anyhow::Result<oas3::Spec> {
    SpecLoader::open(&self.input).await?.parse()
  }

  fn create_orchestrator(&self, spec: oas3::Spec) -> Orchestrator {
    Orchestrator::new(spec, self.generator)
  }

  fn render(&self, orchestrator: &Orchestrator) -> anyhow::Result<GeneratedOutput> {
    if self.include_header {
      orchestrator.generate_with_header(&self.input.display().to_string())
    } else {
      orchestrator.generate()
    }
  }

  async fn write_output(&self, code: &str) -> anyhow::Result<()> {
    let Some(output) = &self.output else {
      let mut stdout = tokio::io::stdout();
      stdout.write_all(code.as_bytes()).await?;
      stdout.flush().await?;
      return Ok(());
    };

    if let Some(parent) = output.parent()
      && !parent.as_os_str().is_empty()
    {
      tokio::fs::create_dir_all(parent)
        .await
        .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    tokio::fs::write(output, code)
      .await
      .with_context(|| format!("Failed to write {}", output.display()))?;
    Ok(())
  }
}

/// Progress output for a generation run. Goes to stderr when the generated
/// code itself is written to stdout.
struct GenerateLogger<'a> {
  config: &'a GenerateConfig,
  colors: &'a Colors,
}

impl<'a> GenerateLogger<'a> {
  fn new(config: &'a GenerateConfig, colors: &'a Colors) -> Self {
    Self { config, colors }
  }

  fn line(&self, text: &str) {
    if self.config.output.is_some() {
      println!("{text}");
    } else {
      eprintln!("{text}");
    }
  }

  fn info(&self, message: &str) {
    if !self.config.quiet {
      self.line(&format!("{} {message}", format_timestamp().with(self.colors.timestamp())));
    }
  }

  fn stat(&self, label: &str, value: String) {
    if !self.config.quiet {
      self.line(&format!(
        "            {:<25} {}",
        label.with(self.colors.label()),
        value.with(self.colors.value())
      ));
    }
  }

  fn log_loading(&self) {
    self.info(
      &format!("Loading OpenAPI spec from: {}", self.config.input.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_generating(&self, orchestrator: &Orchestrator) {
    let metadata = orchestrator.metadata();
    self.info(
      &format!(
        "Generating TypeScript types for {} {} ({} schemas)...",
        metadata.title,
        metadata.version,
        orchestrator.schema_count()
      )
      .with(self.colors.primary())
      .to_string(),
    );
  }

  fn print_statistics(&self, stats: &GenerationStats) {
    if self.config.quiet {
      return;
    }

    self.stat("Types generated:", stats.types_generated.to_string());
    if self.config.verbose {
      self.stat("", format!("{} object types", stats.object_types_generated));
      self.stat("", format!("{} array types", stats.array_types_generated));
      self.stat("", format!("{} primitive types", stats.primitive_types_generated));
      self.stat("", format!("{} reference aliases", stats.reference_aliases_generated));
      self.stat("", format!("{} unknown types", stats.unknown_types_generated));
    }
    if !stats.warnings.is_empty() {
      self.stat("Warnings:", stats.warnings.len().to_string());
    }

    self.print_warnings(stats);
  }

  fn print_warnings(&self, stats: &GenerationStats) {
    if stats.warnings.is_empty() {
      return;
    }

    eprintln!();
    for warning in &stats.warnings {
      eprintln!(
        "{} {}",
        "Skipped:".with(self.colors.accent()),
        warning.to_string().with(self.colors.primary())
      );
    }
  }

  fn log_writing(&self) {
    let target = self
      .config
      .output
      .as_ref()
      .map_or_else(|| "stdout".to_string(), |path| path.display().to_string());
    self.info(&format!("Writing to: {target}").with(self.colors.primary()).to_string());
  }

  fn log_success(&self) {
    if !self.config.quiet {
      self.line("");
      self.line(&format!(
        "{} {}",
        format_timestamp().with(self.colors.timestamp()),
        "Successfully generated TypeScript types".with(self.colors.success())
      ));
    }
  }
}

pub async fn generate_code(config: GenerateConfig, colors: &Colors) -> anyhow::Result<GenerationStats> {
  let logger = GenerateLogger::new(&config, colors);

  logger.log_loading();
  let spec = config.load_spec().await?;

  let orchestrator = config.create_orchestrator(spec);
  logger.log_generating(&orchestrator);
  let output = config.render(&orchestrator)?;
  logger.print_statistics(&output.stats);

  logger.log_writing();
  config.write_output(&output.code).await?;

  logger.log_success();
  Ok(output.stats)
}
