//! Loading lesson configuration (the ordered step records) from TOML or JSON.
//!
//! The records here are deliberately loose: every field is optional and
//! screen/interaction payloads stay as raw JSON values. `factory` turns them
//! into typed steps and decides what is fatal and what degrades gracefully.

use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tracing::{error, info};

use crate::domain::{Answer, Feedback, StepId};
use crate::error::ConfigError;

pub const LESSON_CONFIG_ENV: &str = "LESSON_CONFIG_PATH";
pub const LESSON_MODE_ENV: &str = "LESSON_MODE";

/// A whole lesson document: `title` plus the ordered `steps`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct LessonConfig {
  #[serde(default)]
  pub title: Option<String>,
  #[serde(default)]
  pub steps: Vec<StepConfig>,
}

/// One step record. `stepType` picks the variant; only the branch matching
/// that variant needs to be filled.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StepConfig {
  pub id: Option<StepId>,
  pub step_type: Option<String>,
  pub title: Option<String>,
  pub goal: Option<String>,
  pub character_prompt: Option<String>,
  pub transition: Option<String>,
  pub vocabulary: Vec<String>,
  pub sequence: Vec<SequenceItemConfig>,

  // warm-up / extension
  pub screen: Option<Value>,
  pub interaction: Option<Value>,
  pub feedback: Option<Feedback>,

  // learn-it
  pub chunks: Vec<ChunkConfig>,

  // try-it
  pub screens: Vec<TryScreenConfig>,

  // do-it / show-it
  pub problems: Vec<ProblemConfig>,
  pub questions: Vec<ProblemConfig>,
  pub format: Option<String>,
  pub variety: Option<String>,
  pub instructions: Option<String>,
  pub introduction: Option<String>,
  pub remediation: Option<String>,
  pub completion: Option<Completion>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChunkConfig {
  pub id: Option<StepId>,
  pub title: Option<String>,
  pub goal: Option<String>,
  pub character_prompt: Option<String>,
  pub follow_up_prompt: Option<String>,
  pub hint: Option<String>,
  pub vocabulary: Vec<String>,
  pub screen: Option<Value>,
  /// A single interaction object or a list of checks.
  pub interaction: Option<Value>,
  pub feedback: Option<Feedback>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TryScreenConfig {
  pub id: Option<StepId>,
  pub title: Option<String>,
  /// Screen descriptor shown for this sub-screen.
  pub config: Option<Value>,
  pub prompt: Option<String>,
  pub interaction: Option<Value>,
  pub feedback: Option<Feedback>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProblemConfig {
  pub id: Option<StepId>,
  #[serde(rename = "type")]
  pub kind: Option<String>,
  pub config: Option<Value>,
  pub prompt: Option<String>,
  pub options: Vec<Value>,
  pub correct_answer: Option<Answer>,
  pub feedback: Option<Feedback>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SequenceItemConfig {
  pub id: Option<StepId>,
  pub narration: Option<String>,
  pub screen: Option<Value>,
  pub embedded_check: Option<EmbeddedCheckConfig>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct EmbeddedCheckConfig {
  pub prompt: Option<String>,
  pub interaction: Option<Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Completion {
  pub message: Option<String>,
  pub reward: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LessonFormat {
  Toml,
  Json,
}

impl LessonFormat {
  /// `.json` files are JSON; everything else is read as TOML.
  pub fn from_path(path: &Path) -> Self {
    match path.extension().and_then(|e| e.to_str()) {
      Some(ext) if ext.eq_ignore_ascii_case("json") => LessonFormat::Json,
      _ => LessonFormat::Toml,
    }
  }
}

/// How the binary presents the lesson.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunMode {
  /// Walk forward through every sub-unit, printing one JSON view per change.
  Outline,
  /// Read navigation/answer commands from stdin.
  Play,
}

impl RunMode {
  pub fn from_env() -> Self {
    match std::env::var(LESSON_MODE_ENV).as_deref() {
      Ok("play") => RunMode::Play,
      _ => RunMode::Outline,
    }
  }
}

pub fn parse_lesson(text: &str, format: LessonFormat) -> Result<LessonConfig, ConfigError> {
  Ok(match format {
    LessonFormat::Toml => toml::from_str::<LessonConfig>(text)?,
    LessonFormat::Json => serde_json::from_str::<LessonConfig>(text)?,
  })
}

pub fn load_lesson_config(path: &Path) -> Result<LessonConfig, ConfigError> {
  let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
    path: path.to_path_buf(),
    source,
  })?;
  parse_lesson(&text, LessonFormat::from_path(path))
}

/// Attempt to load a lesson from LESSON_CONFIG_PATH. On any parsing/IO error, returns None.
pub fn load_lesson_config_from_env() -> Option<LessonConfig> {
  let path = std::env::var(LESSON_CONFIG_ENV).ok()?;
  match load_lesson_config(Path::new(&path)) {
    Ok(cfg) => {
      info!(target: "clock_lesson", %path, steps = cfg.steps.len(), "Loaded lesson config");
      Some(cfg)
    }
    Err(e) => {
      error!(target: "clock_lesson", %path, error = %e, "Failed to load lesson config");
      None
    }
  }
}

#[cfg(test)]
mod tests {
  use std::io::Write;

  use super::*;

  const TOML_LESSON: &str = r#"
title = "Tiny"

[[steps]]
id = 1
stepType = "warm-up"
title = "Numbers"
characterPrompt = "Fill the gaps"
screen = { type = "clock-face", config = { missingNumbers = [2, 5] } }
interaction = { type = "text-input", correctAnswers = { "2" = "2", "5" = "5" } }

[[steps]]
id = "2"
stepType = "do-it"
title = "Practice"

[[steps.problems]]
id = "2.1"
prompt = "Is the long hand the minute hand?"
correctAnswer = true
"#;

  #[test]
  fn parses_toml_lessons_with_mixed_ids_and_answers() {
    let cfg = parse_lesson(TOML_LESSON, LessonFormat::Toml).unwrap();
    assert_eq!(cfg.title.as_deref(), Some("Tiny"));
    assert_eq!(cfg.steps.len(), 2);
    assert_eq!(cfg.steps[0].id.as_ref().unwrap().as_str(), "1");
    assert_eq!(cfg.steps[0].step_type.as_deref(), Some("warm-up"));
    assert_eq!(cfg.steps[0].screen.as_ref().unwrap()["type"], "clock-face");
    assert_eq!(cfg.steps[1].problems[0].correct_answer, Some(Answer::Flag(true)));
  }

  #[test]
  fn parses_json_lessons() {
    let cfg = parse_lesson(
      r#"{"steps": [{"id": 6, "stepType": "extension", "title": "Around us", "screen": {"type": "image-gallery"}}]}"#,
      LessonFormat::Json,
    )
    .unwrap();
    assert_eq!(cfg.steps[0].step_type.as_deref(), Some("extension"));
    assert!(cfg.steps[0].interaction.is_none());
  }

  #[test]
  fn format_is_picked_from_the_extension() {
    assert_eq!(LessonFormat::from_path(Path::new("a/lesson.JSON")), LessonFormat::Json);
    assert_eq!(LessonFormat::from_path(Path::new("a/lesson.toml")), LessonFormat::Toml);
    assert_eq!(LessonFormat::from_path(Path::new("lesson")), LessonFormat::Toml);
  }

  #[test]
  fn loads_lessons_from_disk() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(TOML_LESSON.as_bytes()).unwrap();
    let cfg = load_lesson_config(file.path()).unwrap();
    assert_eq!(cfg.steps.len(), 2);
  }

  #[test]
  fn reports_missing_files_and_bad_syntax() {
    let missing = load_lesson_config(Path::new("/definitely/not/here.toml")).unwrap_err();
    assert!(matches!(missing, ConfigError::Read { .. }));

    let broken = parse_lesson("steps = [", LessonFormat::Toml).unwrap_err();
    assert!(matches!(broken, ConfigError::Toml(_)));
  }
}
