//! Try-it: guided practice over a series of self-contained screens.

use crate::domain::{Feedback, StepId, StepKind};
use crate::error::StepError;
use crate::interaction::Interaction;
use crate::screen::Screen;

use super::{Pages, Paging, StepHeader};

/// A self-contained guided-practice screen.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TryScreen {
  pub id: Option<StepId>,
  pub title: Option<String>,
  pub screen: Option<Screen>,
  pub prompt: Option<String>,
  pub interaction: Option<Interaction>,
  pub feedback: Option<Feedback>,
}

/// Guided practice over a series of screens.
#[derive(Clone, Debug, PartialEq)]
pub struct TryItStep {
  pub header: StepHeader,
  pub screens: Pages<TryScreen>,
}

impl TryItStep {
  pub fn new(header: StepHeader, screens: Vec<TryScreen>) -> Result<Self, StepError> {
    let screens = Pages::new(screens).ok_or_else(|| StepError::Empty {
      kind: StepKind::TryIt,
      id: header.id.to_string(),
      what: "screen",
    })?;
    Ok(Self { header, screens })
  }

  pub fn current_screen(&self) -> &TryScreen {
    self.screens.current()
  }

  pub fn current_screen_id(&self) -> Option<&StepId> {
    self.current_screen().id.as_ref()
  }

  pub fn current_screen_title(&self) -> Option<&str> {
    self.current_screen().title.as_deref()
  }

  pub fn next_screen(&mut self) -> bool {
    self.screens.advance()
  }

  pub fn previous_screen(&mut self) -> bool {
    self.screens.retreat()
  }

  pub fn is_first_screen(&self) -> bool {
    self.screens.at_start()
  }

  pub fn is_last_screen(&self) -> bool {
    self.screens.at_end()
  }

  pub fn current_screen_index(&self) -> usize {
    self.screens.position()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn step(count: usize) -> Result<TryItStep, StepError> {
    let header = StepHeader {
      id: StepId::from("3"),
      title: "Guided Hand Spotting".into(),
      goal: None,
      character_prompt: String::new(),
      transition: String::new(),
      vocabulary: Vec::new(),
      sequence: Vec::new(),
    };
    let screens = (1..=count)
      .map(|n| TryScreen {
        id: Some(StepId::from(format!("3.{n}").as_str())),
        title: Some(format!("Screen {n}")),
        ..TryScreen::default()
      })
      .collect();
    TryItStep::new(header, screens)
  }

  #[test]
  fn needs_at_least_one_screen() {
    assert!(matches!(step(0), Err(StepError::Empty { what: "screen", .. })));
  }

  #[test]
  fn walks_screens_in_order() {
    let mut s = step(4).unwrap();
    for _ in 0..3 {
      assert!(s.next_screen());
    }
    assert!(s.is_last_screen());
    assert!(!s.next_screen());
    assert_eq!(s.current_screen_id().map(StepId::as_str), Some("3.4"));
    assert_eq!(s.current_screen_title(), Some("Screen 4"));
    while s.previous_screen() {}
    assert!(s.is_first_screen());
    assert_eq!(s.current_screen_index(), 0);
  }
}
