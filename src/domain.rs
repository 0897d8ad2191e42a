//! Domain value types shared by configuration, steps and the manager:
//! step kinds, step ids, learner answers and feedback texts.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::StepError;

pub const DEFAULT_CORRECT: &str = "Correct!";
pub const DEFAULT_INCORRECT: &str = "Try again!";

/// Which pedagogical phase a step belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepKind {
  WarmUp,
  LearnIt,
  TryIt,
  DoIt,
  ShowIt,
  Extension,
}

impl StepKind {
  pub fn as_str(self) -> &'static str {
    match self {
      StepKind::WarmUp => "warm-up",
      StepKind::LearnIt => "learn-it",
      StepKind::TryIt => "try-it",
      StepKind::DoIt => "do-it",
      StepKind::ShowIt => "show-it",
      StepKind::Extension => "extension",
    }
  }
}

impl fmt::Display for StepKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for StepKind {
  type Err = StepError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "warm-up" => Ok(StepKind::WarmUp),
      "learn-it" => Ok(StepKind::LearnIt),
      "try-it" => Ok(StepKind::TryIt),
      "do-it" => Ok(StepKind::DoIt),
      "show-it" => Ok(StepKind::ShowIt),
      "extension" => Ok(StepKind::Extension),
      other => Err(StepError::UnknownStepType(other.to_string())),
    }
  }
}

/// Lesson data uses both numeric (`1`) and dotted string (`"2.1"`) ids.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
enum RawId {
  Int(i64),
  Text(String),
}

impl From<RawId> for StepId {
  fn from(raw: RawId) -> Self {
    match raw {
      RawId::Int(n) => StepId(n.to_string()),
      RawId::Text(s) => StepId(s),
    }
  }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawId", into = "String")]
pub struct StepId(String);

impl StepId {
  pub fn as_str(&self) -> &str { &self.0 }
  pub fn is_blank(&self) -> bool { self.0.trim().is_empty() }
}

impl From<StepId> for String {
  fn from(id: StepId) -> Self { id.0 }
}

impl From<&str> for StepId {
  fn from(s: &str) -> Self { StepId(s.to_string()) }
}

impl fmt::Display for StepId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

/// A learner's answer as captured by the presentation layer.
///
/// Comparison is strict: `Text("true")` never equals `Flag(true)`, and
/// `Number(5)` never equals `Text("5")`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
  Flag(bool),
  Number(i64),
  Text(String),
  /// Text typed into a specific blank, e.g. the empty box at the "5" position.
  Entry { position: String, value: String },
}

impl Answer {
  pub fn entry(position: impl Into<String>, value: impl Into<String>) -> Self {
    Answer::Entry { position: position.into(), value: value.into() }
  }
}

impl From<&str> for Answer {
  fn from(s: &str) -> Self { Answer::Text(s.to_string()) }
}

impl From<String> for Answer {
  fn from(s: String) -> Self { Answer::Text(s) }
}

impl From<bool> for Answer {
  fn from(b: bool) -> Self { Answer::Flag(b) }
}

impl From<i64> for Answer {
  fn from(n: i64) -> Self { Answer::Number(n) }
}

impl fmt::Display for Answer {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Answer::Flag(b) => write!(f, "{b}"),
      Answer::Number(n) => write!(f, "{n}"),
      Answer::Text(s) => f.write_str(s),
      Answer::Entry { position, value } => write!(f, "{position}={value}"),
    }
  }
}

/// Feedback texts attached to a step, chunk, screen, problem or interaction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
  #[serde(default)] pub correct: Option<String>,
  #[serde(default)] pub incorrect: Option<String>,
  #[serde(default)] pub completion: Option<String>,
  #[serde(default)] pub remediation: Option<String>,
}

impl Feedback {
  /// The configured text for an outcome, if any.
  pub fn for_outcome(&self, correct: bool) -> Option<&str> {
    if correct { self.correct.as_deref() } else { self.incorrect.as_deref() }
  }
}

/// Feedback text for an outcome, falling back to the generic texts.
pub fn feedback_text(feedback: Option<&Feedback>, correct: bool) -> String {
  feedback
    .and_then(|f| f.for_outcome(correct))
    .unwrap_or(if correct { DEFAULT_CORRECT } else { DEFAULT_INCORRECT })
    .to_string()
}
