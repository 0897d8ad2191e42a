//! Error taxonomy: configuration errors raised while building steps, usage
//! errors raised by the lesson manager, and I/O/parse errors raised while
//! loading lesson files. Wrong answers are not errors.

use std::path::PathBuf;

use crate::domain::StepKind;

/// A step configuration that cannot be turned into a usable step.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StepError {
  #[error("Step must have an ID")]
  MissingId,
  #[error("Step {id} must have a title")]
  MissingTitle { id: String },
  #[error("{kind} step {id} must have a screen configuration")]
  MissingScreen { kind: StepKind, id: String },
  #[error("{kind} step {id} must have an interaction")]
  MissingInteraction { kind: StepKind, id: String },
  #[error("{kind} step {id} must have at least one {what}")]
  Empty { kind: StepKind, id: String, what: &'static str },
  #[error("First chunk in learn-it step {id} must have a screen configuration")]
  FirstChunkWithoutScreen { id: String },
  #[error("Unknown step type: {0}")]
  UnknownStepType(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LessonError {
  #[error("Lesson not initialized or no steps available")]
  NotInitialized,
  #[error("Lesson configuration contains no steps")]
  Empty,
  #[error("Invalid step configuration at position {index}: {source}")]
  Step {
    index: usize,
    #[source]
    source: StepError,
  },
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  #[error("Failed to read lesson file {path}: {source}")]
  Read {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
  #[error("Failed to parse TOML lesson: {0}")]
  Toml(#[from] toml::de::Error),
  #[error("Failed to parse JSON lesson: {0}")]
  Json(#[from] serde_json::Error),
}
