//! Warm-up: one screen and one quick check to activate prior knowledge.

use crate::domain::{Feedback, StepKind};
use crate::error::StepError;
use crate::interaction::Interaction;
use crate::screen::Screen;

use super::StepHeader;

/// Quick activation exercise: one screen, one interaction.
#[derive(Clone, Debug, PartialEq)]
pub struct WarmUpStep {
  pub header: StepHeader,
  pub screen: Screen,
  pub interaction: Interaction,
  pub feedback: Option<Feedback>,
}

impl WarmUpStep {
  pub fn new(
    header: StepHeader,
    screen: Option<Screen>,
    interaction: Option<Interaction>,
    feedback: Option<Feedback>,
  ) -> Result<Self, StepError> {
    let kind = StepKind::WarmUp;
    let screen = screen.ok_or_else(|| StepError::MissingScreen { kind, id: header.id.to_string() })?;
    let interaction =
      interaction.ok_or_else(|| StepError::MissingInteraction { kind, id: header.id.to_string() })?;
    Ok(Self { header, screen, interaction, feedback })
  }
}
