use std::{fmt, io};

use thiserror::Error;

pub type ConversionResult<T> = Result<T, ConversionError>;

/// Failures raised while turning one schema into a declaration.
///
/// None of these abort a whole document: the emitter records them as warnings
/// and moves on, except for [`ConversionError::Io`] which means the output sink
/// itself is broken.
#[derive(Debug, Error)]
pub enum ConversionError {
  #[error("schema nesting at '{path}' exceeds the maximum depth of {max_depth}")]
  DepthLimitExceeded { path: String, max_depth: usize },

  #[error("failed to render declaration '{name}'")]
  Render {
    name: String,
    #[source]
    source: fmt::Error,
  },

  #[error("failed to write generated code")]
  Io(#[from] io::Error),
}
