//! Lesson steps: the six pedagogical phases and their sub-navigation.
//!
//! Every step shares a `StepHeader`. Steps with repeated content (learn-it,
//! try-it, do-it, show-it) expose it through the `Paging` capability; the
//! manager asks `Step::pages`/`Step::pages_mut` instead of probing types.

mod extension;
mod learn_it;
mod paging;
mod practice;
mod try_it;
mod warm_up;

pub use extension::ExtensionStep;
pub use learn_it::{Chunk, LearnItStep};
pub use paging::{Pages, Paging};
pub use practice::{DoItStep, Problem, ProblemSet, ShowItStep, REMEDIATION_THRESHOLD};
pub use try_it::{TryItStep, TryScreen};
pub use warm_up::WarmUpStep;

use crate::domain::{StepId, StepKind};
use crate::interaction::Interaction;
use crate::screen::Screen;

/// Fields common to every step.
#[derive(Clone, Debug, PartialEq)]
pub struct StepHeader {
  pub id: StepId,
  pub title: String,
  pub goal: Option<String>,
  pub character_prompt: String,
  pub transition: String,
  pub vocabulary: Vec<String>,
  pub sequence: Vec<SequenceItem>,
}

/// One narrated beat of a step, optionally followed by a quick check.
#[derive(Clone, Debug, PartialEq)]
pub struct SequenceItem {
  pub id: Option<StepId>,
  pub narration: Option<String>,
  pub screen: Option<Screen>,
  pub embedded_check: Option<EmbeddedCheck>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EmbeddedCheck {
  pub prompt: Option<String>,
  pub interaction: Option<Interaction>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Step {
  WarmUp(WarmUpStep),
  LearnIt(LearnItStep),
  TryIt(TryItStep),
  DoIt(DoItStep),
  ShowIt(ShowItStep),
  Extension(ExtensionStep),
}

impl Step {
  pub fn kind(&self) -> StepKind {
    match self {
      Step::WarmUp(_) => StepKind::WarmUp,
      Step::LearnIt(_) => StepKind::LearnIt,
      Step::TryIt(_) => StepKind::TryIt,
      Step::DoIt(_) => StepKind::DoIt,
      Step::ShowIt(_) => StepKind::ShowIt,
      Step::Extension(_) => StepKind::Extension,
    }
  }

  pub fn header(&self) -> &StepHeader {
    match self {
      Step::WarmUp(s) => &s.header,
      Step::LearnIt(s) => &s.header,
      Step::TryIt(s) => &s.header,
      Step::DoIt(s) => &s.header,
      Step::ShowIt(s) => &s.header,
      Step::Extension(s) => &s.header,
    }
  }

  pub fn id(&self) -> &StepId {
    &self.header().id
  }

  pub fn title(&self) -> &str {
    &self.header().title
  }

  /// Sub-navigation over the step's repeated content, if it has any.
  pub fn pages(&self) -> Option<&dyn Paging> {
    match self {
      Step::LearnIt(s) => Some(&s.chunks),
      Step::TryIt(s) => Some(&s.screens),
      Step::DoIt(s) => Some(&s.problems),
      Step::ShowIt(s) => Some(&s.questions),
      Step::WarmUp(_) | Step::Extension(_) => None,
    }
  }

  pub fn pages_mut(&mut self) -> Option<&mut dyn Paging> {
    match self {
      Step::LearnIt(s) => Some(&mut s.chunks),
      Step::TryIt(s) => Some(&mut s.screens),
      Step::DoIt(s) => Some(&mut s.problems),
      Step::ShowIt(s) => Some(&mut s.questions),
      Step::WarmUp(_) | Step::Extension(_) => None,
    }
  }

  /// True when the step has no sub-content or its cursor is on the first sub-unit.
  pub fn at_first_page(&self) -> bool {
    self.pages().map_or(true, |p| p.at_start())
  }

  /// True when the step has no sub-content or its cursor is on the last sub-unit.
  pub fn at_last_page(&self) -> bool {
    self.pages().map_or(true, |p| p.at_end())
  }

  /// What is on screen right now.
  pub fn current_screen(&self) -> Option<&Screen> {
    match self {
      Step::WarmUp(s) => Some(&s.screen),
      Step::LearnIt(s) => s.screen(),
      Step::TryIt(s) => s.current_screen().screen.as_ref(),
      Step::DoIt(s) => s.current_problem().screen.as_ref(),
      Step::ShowIt(s) => s.current_question().screen.as_ref(),
      Step::Extension(s) => Some(&s.screen),
    }
  }

  /// The text the guide character says for the current sub-unit.
  pub fn prompt(&self) -> &str {
    let own = match self {
      Step::LearnIt(s) => s.current_chunk().character_prompt.as_deref(),
      Step::TryIt(s) => s.current_screen().prompt.as_deref(),
      Step::DoIt(s) => s.current_problem().prompt.as_deref(),
      Step::ShowIt(s) => s.current_question().prompt.as_deref(),
      Step::WarmUp(_) | Step::Extension(_) => None,
    };
    own.unwrap_or(self.header().character_prompt.as_str())
  }
}
