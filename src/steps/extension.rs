//! Extension: a closing real-world connection with nothing to score.

use crate::domain::StepKind;
use crate::error::StepError;
use crate::interaction::Interaction;
use crate::screen::Screen;

use super::StepHeader;

/// Real-world connection at the end of a lesson; usually nothing to answer.
#[derive(Clone, Debug, PartialEq)]
pub struct ExtensionStep {
  pub header: StepHeader,
  pub screen: Screen,
  pub interaction: Interaction,
}

impl ExtensionStep {
  /// A missing interaction becomes `Interaction::None`.
  pub fn new(header: StepHeader, screen: Option<Screen>, interaction: Option<Interaction>) -> Result<Self, StepError> {
    let screen = screen.ok_or_else(|| StepError::MissingScreen {
      kind: StepKind::Extension,
      id: header.id.to_string(),
    })?;
    Ok(Self { header, screen, interaction: interaction.unwrap_or(Interaction::None) })
  }
}
