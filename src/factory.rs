//! Builds typed steps from raw step records.
//!
//! Nested screen and interaction payloads are normalized first (they never
//! fail, unknown shapes are kept verbatim); then `stepType` picks the variant
//! and the variant's own checks run. An unknown `stepType` is fatal.

use serde_json::Value;
use tracing::{debug, instrument};

use crate::config::{ChunkConfig, ProblemConfig, SequenceItemConfig, StepConfig, TryScreenConfig};
use crate::domain::StepKind;
use crate::error::StepError;
use crate::interaction::{self, Interaction};
use crate::screen::{self, Screen};
use crate::steps::{
  Chunk, DoItStep, EmbeddedCheck, ExtensionStep, LearnItStep, Problem, SequenceItem, ShowItStep, Step, StepHeader,
  TryItStep, TryScreen, WarmUpStep,
};

pub struct StepFactory;

impl StepFactory {
  #[instrument(level = "debug", target = "factory", skip(config), fields(id = ?config.id, step_type = ?config.step_type))]
  pub fn create_step(config: StepConfig) -> Result<Step, StepError> {
    let kind: StepKind = match config.step_type.as_deref() {
      Some(tag) => tag.parse()?,
      None => return Err(StepError::UnknownStepType("(missing)".into())),
    };

    let StepConfig {
      id,
      title,
      goal,
      character_prompt,
      transition,
      vocabulary,
      sequence,
      screen,
      interaction,
      feedback,
      chunks,
      screens,
      problems,
      questions,
      format,
      variety,
      instructions,
      introduction,
      remediation,
      completion,
      ..
    } = config;

    let screen = screen.map(Self::create_screen);
    let interaction = interaction.map(Self::create_interaction);

    let id = id.filter(|id| !id.is_blank()).ok_or(StepError::MissingId)?;
    let title = title
      .filter(|t| !t.trim().is_empty())
      .ok_or_else(|| StepError::MissingTitle { id: id.to_string() })?;
    let header = StepHeader {
      id,
      title,
      goal,
      character_prompt: character_prompt.unwrap_or_default(),
      transition: transition.unwrap_or_default(),
      vocabulary,
      sequence: sequence.into_iter().map(Self::sequence_item).collect(),
    };

    let step = match kind {
      StepKind::WarmUp => Step::WarmUp(WarmUpStep::new(header, screen, interaction, feedback)?),
      StepKind::LearnIt => Step::LearnIt(LearnItStep::new(header, chunks.into_iter().map(Self::chunk).collect())?),
      StepKind::TryIt => Step::TryIt(TryItStep::new(header, screens.into_iter().map(Self::try_screen).collect())?),
      StepKind::DoIt => {
        let mut step = DoItStep::new(header, problems.into_iter().map(Self::problem).collect())?;
        step.format = format;
        step.variety = variety;
        step.instructions = instructions;
        step.completion = completion;
        Step::DoIt(step)
      }
      StepKind::ShowIt => {
        let mut step = ShowItStep::new(header, questions.into_iter().map(Self::problem).collect())?;
        step.format = format;
        step.introduction = introduction;
        step.feedback = feedback;
        step.remediation = remediation;
        Step::ShowIt(step)
      }
      StepKind::Extension => Step::Extension(ExtensionStep::new(header, screen, interaction)?),
    };

    debug!(target: "factory", id = %step.id(), kind = %step.kind(), sub_units = ?step.pages().map(|p| p.len()), "Step built");
    Ok(step)
  }

  pub fn create_screen(raw: Value) -> Screen {
    screen::create_screen(raw)
  }

  pub fn create_interaction(raw: Value) -> Interaction {
    interaction::create_interaction(raw)
  }

  fn sequence_item(item: SequenceItemConfig) -> SequenceItem {
    SequenceItem {
      id: item.id,
      narration: item.narration,
      screen: item.screen.map(Self::create_screen),
      embedded_check: item.embedded_check.map(|check| EmbeddedCheck {
        prompt: check.prompt,
        interaction: check.interaction.map(Self::create_interaction),
      }),
    }
  }

  fn chunk(cfg: ChunkConfig) -> Chunk {
    Chunk {
      id: cfg.id,
      title: cfg.title,
      goal: cfg.goal,
      character_prompt: cfg.character_prompt,
      follow_up_prompt: cfg.follow_up_prompt,
      hint: cfg.hint,
      vocabulary: cfg.vocabulary,
      screen: cfg.screen.map(Self::create_screen),
      interactions: cfg.interaction.map(interaction::create_interactions).unwrap_or_default(),
      feedback: cfg.feedback,
    }
  }

  fn try_screen(cfg: TryScreenConfig) -> TryScreen {
    TryScreen {
      id: cfg.id,
      title: cfg.title,
      screen: cfg.config.map(Self::create_screen),
      prompt: cfg.prompt,
      interaction: cfg.interaction.map(Self::create_interaction),
      feedback: cfg.feedback,
    }
  }

  fn problem(cfg: ProblemConfig) -> Problem {
    Problem {
      id: cfg.id,
      kind: cfg.kind,
      screen: cfg.config.map(Self::create_screen),
      prompt: cfg.prompt,
      options: cfg.options,
      correct_answer: cfg.correct_answer,
      feedback: cfg.feedback,
    }
  }
}
