//! Serializable views handed to the presentation layer.
//! Keep this small and stable so the renderer and the model evolve independently.

use serde::Serialize;
use serde_json::Value;

use crate::domain::{StepId, StepKind};
use crate::error::LessonError;
use crate::interaction::Interaction;
use crate::lesson::LessonManager;
use crate::screen::Screen;
use crate::steps::Step;

/// Snapshot of what the learner should see right now.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepView<'a> {
  pub index: usize,
  pub total: usize,
  pub kind: StepKind,
  pub id: &'a StepId,
  pub title: &'a str,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub goal: Option<&'a str>,
  pub prompt: &'a str,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub sub_unit: Option<SubUnit<'a>>,
  pub screen: Option<&'a Screen>,
  pub interactions: Vec<&'a Interaction>,
  #[serde(skip_serializing_if = "<[_]>::is_empty")]
  pub options: &'a [Value],
  pub vocabulary: &'a [String],
  pub is_first: bool,
  pub is_last: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubUnit<'a> {
  pub id: Option<&'a StepId>,
  pub current: usize,
  pub total: usize,
}

/// Result of checking one answer against the current sub-unit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerOutcome {
  /// False when nothing on screen can judge an answer.
  pub checked: bool,
  pub correct: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub feedback: Option<String>,
  /// Running score on problem sets.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub score: Option<usize>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub needs_remediation: Option<bool>,
}

impl AnswerOutcome {
  pub fn unchecked() -> Self {
    Self { checked: false, correct: false, feedback: None, score: None, needs_remediation: None }
  }

  pub fn judged(correct: bool, feedback: String) -> Self {
    Self { checked: true, correct, feedback: Some(feedback), score: None, needs_remediation: None }
  }
}

pub fn to_view(lesson: &LessonManager) -> Result<StepView<'_>, LessonError> {
  let index = lesson.current_step_index()?;
  let step = lesson.current_step()?;
  let header = step.header();

  let sub_unit = step.pages().map(|pages| SubUnit {
    id: sub_unit_id(step),
    current: pages.position(),
    total: pages.len(),
  });

  Ok(StepView {
    index,
    total: lesson.steps().len(),
    kind: step.kind(),
    id: &header.id,
    title: current_title(step),
    goal: header.goal.as_deref(),
    prompt: step.prompt(),
    sub_unit,
    screen: step.current_screen(),
    interactions: interactions(step),
    options: options(step),
    vocabulary: vocabulary(step),
    is_first: lesson.is_first_step()?,
    is_last: lesson.is_last_step()?,
  })
}

fn sub_unit_id(step: &Step) -> Option<&StepId> {
  match step {
    Step::LearnIt(s) => s.sub_type(),
    Step::TryIt(s) => s.current_screen_id(),
    Step::DoIt(s) => s.current_problem_id(),
    Step::ShowIt(s) => s.current_question_id(),
    Step::WarmUp(_) | Step::Extension(_) => None,
  }
}

fn current_title(step: &Step) -> &str {
  match step {
    Step::LearnIt(s) => s.current_title(),
    Step::TryIt(s) => s.current_screen_title().unwrap_or(step.title()),
    _ => step.title(),
  }
}

fn interactions(step: &Step) -> Vec<&Interaction> {
  match step {
    Step::WarmUp(s) => vec![&s.interaction],
    Step::LearnIt(s) => s.interactions().iter().collect(),
    Step::TryIt(s) => s.current_screen().interaction.iter().collect(),
    Step::Extension(s) => vec![&s.interaction],
    Step::DoIt(_) | Step::ShowIt(_) => Vec::new(),
  }
}

fn options(step: &Step) -> &[Value] {
  match step {
    Step::DoIt(s) => &s.current_problem().options,
    Step::ShowIt(s) => &s.current_question().options,
    _ => &[],
  }
}

fn vocabulary(step: &Step) -> &[String] {
  match step {
    Step::LearnIt(s) if !s.vocabulary().is_empty() => s.vocabulary(),
    _ => &step.header().vocabulary,
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;
  use crate::config::LessonConfig;
  use crate::lesson::LessonCallbacks;

  fn lesson() -> LessonManager {
    let cfg: LessonConfig = serde_json::from_value(json!({
      "title": "Tiny",
      "steps": [
        {
          "id": 1, "stepType": "learn-it", "title": "Parts", "vocabulary": ["clock"],
          "chunks": [
            { "id": "1.1", "title": "Numbers", "screen": { "type": "clock-face" },
              "interaction": { "type": "click-tap", "correctAnswer": "9" } },
            { "id": "1.2", "vocabulary": ["hour hand"],
              "interaction": [{ "type": "click-tap" }, { "type": "click-tap" }] }
          ]
        },
        { "id": 2, "stepType": "do-it", "title": "Practice",
          "problems": [{ "id": "2.1", "prompt": "Pick one", "options": ["a", "b"], "correctAnswer": "a" }] }
      ]
    }))
    .unwrap();
    let mut lesson = LessonManager::from_lesson(cfg, LessonCallbacks::default());
    assert!(lesson.initialize());
    lesson
  }

  #[test]
  fn view_follows_the_sub_cursor() {
    let mut lesson = lesson();
    let view = serde_json::to_value(to_view(&lesson).unwrap()).unwrap();
    assert_eq!(view["kind"], "learn-it");
    assert_eq!(view["id"], "1");
    assert_eq!(view["title"], "Numbers");
    assert_eq!(view["subUnit"], json!({ "id": "1.1", "current": 0, "total": 2 }));
    assert_eq!(view["screen"]["type"], "clock-face");
    assert_eq!(view["interactions"][0]["type"], "click-tap");
    assert_eq!(view["vocabulary"], json!(["clock"]));
    assert_eq!(view["isFirst"], true);

    lesson.next_step().unwrap();
    let view = to_view(&lesson).unwrap();
    assert_eq!(view.title, "Parts");
    assert_eq!(view.interactions.len(), 2);
    assert_eq!(view.vocabulary, ["hour hand".to_string()]);
    assert!(view.screen.is_none());
  }

  #[test]
  fn problem_views_carry_options() {
    let mut lesson = lesson();
    lesson.next_step().unwrap();
    lesson.next_step().unwrap();
    let view = to_view(&lesson).unwrap();
    assert_eq!(view.prompt, "Pick one");
    assert_eq!(view.options, [json!("a"), json!("b")]);
    assert!(view.interactions.is_empty());
    assert!(view.is_last);
  }

  #[test]
  fn no_view_before_initialize() {
    let lesson = LessonManager::new(Vec::new(), LessonCallbacks::default());
    assert_eq!(to_view(&lesson).unwrap_err(), LessonError::NotInitialized);
  }
}
