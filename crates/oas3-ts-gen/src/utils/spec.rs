use std::{
  ffi::OsStr,
  path::{Path, PathBuf},
};

use anyhow::Context;
use fmmap::tokio::{AsyncMmapFile, AsyncMmapFileExt};
use oas3::OpenApiV3Spec;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpecFormat {
  #[default]
  Json,
  Yaml,
}

impl SpecFormat {
  #[must_use]
  pub fn from_extension(ext: &str) -> Self {
    match ext.to_ascii_lowercase().as_str() {
      "yaml" | "yml" => Self::Yaml,
      _ => Self::Json,
    }
  }

  #[must_use]
  pub fn from_path(path: &Path) -> Self {
    path
      .extension()
      .and_then(OsStr::to_str)
      .map_or(Self::default(), Self::from_extension)
  }
}

/// Loads an OpenAPI document from disk.
///
/// Any failure here is fatal to a generation run: nothing is emitted for a
/// document that cannot be read or parsed.
pub struct SpecLoader {
  path: PathBuf,
  file: AsyncMmapFile,
  format: SpecFormat,
}

impl SpecLoader {
  pub async fn open(path: &Path) -> anyhow::Result<Self> {
    let format = SpecFormat::from_path(path);
    let file = AsyncMmapFile::open(path)
      .await
      .with_context(|| format!("Failed to open OpenAPI spec {}", path.display()))?;

    Ok(Self {
      path: path.to_path_buf(),
      file,
      format,
    })
  }

  pub fn format(&self) -> SpecFormat {
    self.format
  }

  pub fn parse(&self) -> anyhow::Result<oas3::Spec> {
    let spec = match self.format {
      SpecFormat::Json => serde_json::from_slice::<OpenApiV3Spec>(self.file.as_slice())
        .with_context(|| format!("Failed to parse JSON spec {}", self.path.display()))?,
      SpecFormat::Yaml => {
        let content = std::str::from_utf8(self.file.as_slice())
          .with_context(|| format!("Spec {} is not valid UTF-8", self.path.display()))?;
        oas3::from_yaml(content).with_context(|| format!("Failed to parse YAML spec {}", self.path.display()))?
      }
    };
    Ok(spec)
  }
}
