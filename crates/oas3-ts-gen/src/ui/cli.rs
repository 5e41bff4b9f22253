use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use oas3_ts_gen::generator::{DEFAULT_MAX_DEPTH, IndentStyle};

use super::colors::{ColorMode, Colors, ThemeMode};

#[derive(Parser, Debug)]
#[command(name = "oas3-ts-gen")]
#[command(author, version, about = "OpenAPI to TypeScript type generator")]
#[command(styles = Colors::clap_styles())]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,

  /// Control color output
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub color: ColorMode,

  /// Terminal theme (dark or light background)
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub theme: ThemeMode,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// List information from OpenAPI specification
  List {
    #[command(subcommand)]
    list_command: ListCommands,
  },
  /// Generate TypeScript types from the component schemas of an OpenAPI specification
  Generate(GenerateCommand),
}

#[derive(Args, Debug)]
pub struct GenerateCommand {
  /// Path to the OpenAPI specification file (JSON, or YAML with a .yaml/.yml extension)
  #[arg(short, long, value_name = "FILE")]
  pub input: PathBuf,

  /// Path where the generated TypeScript will be written (stdout when omitted)
  #[arg(short, long, value_name = "FILE")]
  pub output: Option<PathBuf>,

  /// Indentation for nested object members: 'tab' or a number of spaces
  #[arg(long, value_name = "INDENT", default_value_t = IndentStyle::Tab)]
  pub indent: IndentStyle,

  /// Deepest inline object nesting to expand; deeper properties are skipped with a warning
  #[arg(long, value_name = "DEPTH", default_value_t = DEFAULT_MAX_DEPTH)]
  pub max_depth: usize,

  /// Do not prepend the auto-generated file header
  #[arg(long, default_value_t = false)]
  pub no_header: bool,

  /// Enable verbose output with detailed progress information
  #[arg(short, long, default_value_t = false)]
  pub verbose: bool,

  /// Suppress non-essential output (errors only)
  #[arg(short, long, default_value_t = false)]
  pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum ListCommands {
  /// List all component schemas with the TypeScript names they generate
  Schemas {
    /// Path to the OpenAPI specification file
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,
  },
}
