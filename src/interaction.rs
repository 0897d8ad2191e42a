//! Interaction descriptors: what input a screen expects and how to check it.

use std::collections::BTreeMap;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::domain::{Answer, Feedback};

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Interaction {
  TextInput(TextInput),
  ClickTap(ClickTap),
  DragDrop(DragDrop),
  BinaryChoice(Choice),
  Mcq(Choice),
  /// Explicitly no input expected (extension screens).
  None,
  #[serde(untagged)]
  Unrecognized(Value),
}

/// Type a value into one of several blanks; each blank has its own answer.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextInput {
  pub description: String,
  pub correct_answers: BTreeMap<String, String>,
  pub feedback: Option<Feedback>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClickTap {
  pub description: String,
  pub target_element: Option<String>,
  pub options: Vec<Value>,
  pub correct_answer: Option<Answer>,
  pub feedback: Option<Feedback>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DragDrop {
  pub description: String,
  #[serde(alias = "element")]
  pub object: Option<String>,
  #[serde(alias = "correctDirection")]
  pub target_direction: Option<String>,
  pub feedback: Option<Feedback>,
}

/// Pick one of the offered options (binary choice and multiple choice).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Choice {
  pub description: String,
  pub options: Vec<Value>,
  pub correct_answer: Option<Answer>,
  pub feedback: Option<Feedback>,
}

impl Interaction {
  /// Whether `input` is the expected answer. Shapes that cannot be checked
  /// (none, unrecognized) never accept.
  pub fn validate(&self, input: &Answer) -> bool {
    match self {
      Interaction::TextInput(t) => match input {
        Answer::Entry { position, value } if !position.is_empty() && !value.is_empty() => {
          t.correct_answers.get(position) == Some(value)
        }
        _ => false,
      },
      Interaction::ClickTap(c) => c.correct_answer.as_ref() == Some(input),
      Interaction::DragDrop(d) => match (input, &d.target_direction) {
        (Answer::Text(dir), Some(expected)) => dir == expected,
        _ => false,
      },
      Interaction::BinaryChoice(c) | Interaction::Mcq(c) => c.correct_answer.as_ref() == Some(input),
      Interaction::None | Interaction::Unrecognized(_) => false,
    }
  }

  /// Whether this interaction can judge answers at all.
  pub fn is_checkable(&self) -> bool {
    !matches!(self, Interaction::None | Interaction::Unrecognized(_))
  }

  pub fn type_name(&self) -> Option<&str> {
    match self {
      Interaction::TextInput(_) => Some("text-input"),
      Interaction::ClickTap(_) => Some("click-tap"),
      Interaction::DragDrop(_) => Some("drag-drop"),
      Interaction::BinaryChoice(_) => Some("binary-choice"),
      Interaction::Mcq(_) => Some("mcq"),
      Interaction::None => Some("none"),
      Interaction::Unrecognized(raw) => raw.get("type").and_then(Value::as_str),
    }
  }

  pub fn description(&self) -> Option<&str> {
    let text = match self {
      Interaction::TextInput(t) => &t.description,
      Interaction::ClickTap(c) => &c.description,
      Interaction::DragDrop(d) => &d.description,
      Interaction::BinaryChoice(c) | Interaction::Mcq(c) => &c.description,
      Interaction::None => return None,
      Interaction::Unrecognized(raw) => return raw.get("description").and_then(Value::as_str),
    };
    if text.is_empty() { None } else { Some(text.as_str()) }
  }

  /// Feedback attached directly to this interaction, if any.
  pub fn feedback(&self) -> Option<&Feedback> {
    match self {
      Interaction::TextInput(t) => t.feedback.as_ref(),
      Interaction::ClickTap(c) => c.feedback.as_ref(),
      Interaction::DragDrop(d) => d.feedback.as_ref(),
      Interaction::BinaryChoice(c) | Interaction::Mcq(c) => c.feedback.as_ref(),
      Interaction::None | Interaction::Unrecognized(_) => None,
    }
  }
}

/// Build a typed interaction from a raw record. Never fails: the string
/// `"none"` is the explicit no-input marker, unknown shapes come back unchanged.
pub fn create_interaction(raw: Value) -> Interaction {
  if raw.as_str() == Some("none") {
    return Interaction::None;
  }
  let built = match raw.get("type").and_then(Value::as_str) {
    Some("text-input") => fields(&raw).map(Interaction::TextInput),
    Some("click-tap") => fields(&raw).map(Interaction::ClickTap),
    Some("drag-drop") => fields(&raw).map(Interaction::DragDrop),
    Some("binary-choice") => fields(&raw).map(Interaction::BinaryChoice),
    Some("mcq") => fields(&raw).map(Interaction::Mcq),
    _ => return Interaction::Unrecognized(raw),
  };
  match built {
    Ok(interaction) => interaction,
    Err(e) => {
      warn!(target: "factory", interaction_type = ?raw.get("type"), error = %e, "Interaction fields invalid; keeping raw config");
      Interaction::Unrecognized(raw)
    }
  }
}

/// A single interaction object, or a list of checks asked one after another.
pub fn create_interactions(raw: Value) -> Vec<Interaction> {
  match raw {
    Value::Array(items) => items.into_iter().map(create_interaction).collect(),
    single => vec![create_interaction(single)],
  }
}

fn fields<T: DeserializeOwned>(raw: &Value) -> Result<T, serde_json::Error> {
  serde_json::from_value(raw.clone())
}
