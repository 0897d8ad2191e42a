//! Learn-it: direct instruction delivered one chunk at a time.

use crate::domain::{Feedback, StepId, StepKind};
use crate::error::StepError;
use crate::interaction::Interaction;
use crate::screen::Screen;

use super::{Pages, Paging, StepHeader};

/// One teaching beat inside a learn-it step.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Chunk {
  pub id: Option<StepId>,
  pub title: Option<String>,
  pub goal: Option<String>,
  pub character_prompt: Option<String>,
  pub follow_up_prompt: Option<String>,
  pub hint: Option<String>,
  pub vocabulary: Vec<String>,
  pub screen: Option<Screen>,
  /// Quick checks, asked in order. Usually one.
  pub interactions: Vec<Interaction>,
  pub feedback: Option<Feedback>,
}

/// Direct instruction split into chunks. Only the current chunk is visible.
#[derive(Clone, Debug, PartialEq)]
pub struct LearnItStep {
  pub header: StepHeader,
  pub chunks: Pages<Chunk>,
}

impl LearnItStep {
  pub fn new(header: StepHeader, chunks: Vec<Chunk>) -> Result<Self, StepError> {
    let id = header.id.to_string();
    let chunks = Pages::new(chunks).ok_or_else(|| StepError::Empty {
      kind: StepKind::LearnIt,
      id: id.clone(),
      what: "chunk",
    })?;
    if chunks.current().screen.is_none() {
      return Err(StepError::FirstChunkWithoutScreen { id });
    }
    Ok(Self { header, chunks })
  }

  pub fn current_chunk(&self) -> &Chunk {
    self.chunks.current()
  }

  /// The current chunk's id, used by presenters to pick a layout.
  pub fn sub_type(&self) -> Option<&StepId> {
    self.current_chunk().id.as_ref()
  }

  pub fn current_title(&self) -> &str {
    self.current_chunk().title.as_deref().unwrap_or(&self.header.title)
  }

  pub fn screen(&self) -> Option<&Screen> {
    self.current_chunk().screen.as_ref()
  }

  pub fn interactions(&self) -> &[Interaction] {
    &self.current_chunk().interactions
  }

  pub fn feedback(&self) -> Option<&Feedback> {
    self.current_chunk().feedback.as_ref()
  }

  pub fn vocabulary(&self) -> &[String] {
    &self.current_chunk().vocabulary
  }

  pub fn next_chunk(&mut self) -> bool {
    self.chunks.advance()
  }

  pub fn previous_chunk(&mut self) -> bool {
    self.chunks.retreat()
  }

  pub fn is_first_chunk(&self) -> bool {
    self.chunks.at_start()
  }

  pub fn is_last_chunk(&self) -> bool {
    self.chunks.at_end()
  }

  pub fn current_chunk_index(&self) -> usize {
    self.chunks.position()
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;
  use crate::screen::create_screen;

  fn header() -> StepHeader {
    StepHeader {
      id: StepId::from("2"),
      title: "Clock Parts Explorer".into(),
      goal: None,
      character_prompt: String::new(),
      transition: String::new(),
      vocabulary: Vec::new(),
      sequence: Vec::new(),
    }
  }

  fn chunk(id: &str, with_screen: bool) -> Chunk {
    Chunk {
      id: Some(StepId::from(id)),
      title: Some(format!("Chunk {id}")),
      vocabulary: vec![format!("word {id}")],
      screen: with_screen.then(|| create_screen(json!({ "type": "clock-face" }))),
      ..Chunk::default()
    }
  }

  #[test]
  fn requires_chunks_and_a_first_screen() {
    assert_eq!(
      LearnItStep::new(header(), Vec::new()).unwrap_err(),
      StepError::Empty { kind: StepKind::LearnIt, id: "2".into(), what: "chunk" }
    );
    assert_eq!(
      LearnItStep::new(header(), vec![chunk("2.1", false)]).unwrap_err(),
      StepError::FirstChunkWithoutScreen { id: "2".into() }
    );
    assert!(LearnItStep::new(header(), vec![chunk("2.1", true), chunk("2.2", false)]).is_ok());
  }

  #[test]
  fn exposes_only_the_current_chunk() {
    let mut step = LearnItStep::new(header(), vec![chunk("2.1", true), chunk("2.2", false), chunk("2.3", true)]).unwrap();
    assert_eq!(step.sub_type().map(StepId::as_str), Some("2.1"));
    assert!(step.is_first_chunk());
    assert!(step.next_chunk());
    assert_eq!(step.current_title(), "Chunk 2.2");
    assert_eq!(step.vocabulary(), ["word 2.2".to_string()]);
    assert!(step.screen().is_none());
    assert!(step.next_chunk());
    assert!(step.is_last_chunk());
    assert!(!step.next_chunk());
    assert_eq!(step.current_chunk_index(), 2);
    assert!(step.previous_chunk());
    assert_eq!(step.current_chunk_index(), 1);
  }
}
