//! Lesson navigation: the ordered steps, the current step index, and what
//! "next" and "previous" mean when steps have their own sub-units.
//!
//! The manager owns:
//!   - the raw step records it was configured with
//!   - the built steps (only after a successful `initialize`)
//!   - the step-change and lesson-complete callbacks
//!
//! Forward navigation moves inside the current step first and only then to
//! the next step. Backward navigation mirrors it, and a step entered from
//! behind lands on its last sub-unit.

use tracing::{debug, error, info, instrument};

use crate::config::{LessonConfig, StepConfig};
use crate::error::LessonError;
use crate::factory::StepFactory;
use crate::steps::Step;

pub type StepChangeHandler = Box<dyn FnMut(&Step)>;
pub type LessonCompleteHandler = Box<dyn FnMut()>;

/// Notifications to the presentation layer.
#[derive(Default)]
pub struct LessonCallbacks {
  on_step_change: Option<StepChangeHandler>,
  on_lesson_complete: Option<LessonCompleteHandler>,
}

impl LessonCallbacks {
  /// Called with the new current step after every successful move and after initialization.
  pub fn on_step_change(mut self, f: impl FnMut(&Step) + 'static) -> Self {
    self.on_step_change = Some(Box::new(f));
    self
  }

  /// Called when forward navigation runs out of content.
  pub fn on_lesson_complete(mut self, f: impl FnMut() + 'static) -> Self {
    self.on_lesson_complete = Some(Box::new(f));
    self
  }
}

pub struct LessonManager {
  title: Option<String>,
  configs: Vec<StepConfig>,
  steps: Vec<Step>,
  current: usize,
  initialized: bool,
  completed: bool,
  callbacks: LessonCallbacks,
}

impl LessonManager {
  pub fn new(configs: Vec<StepConfig>, callbacks: LessonCallbacks) -> Self {
    Self { title: None, configs, steps: Vec::new(), current: 0, initialized: false, completed: false, callbacks }
  }

  pub fn from_lesson(lesson: LessonConfig, callbacks: LessonCallbacks) -> Self {
    let mut manager = Self::new(lesson.steps, callbacks);
    manager.title = lesson.title;
    manager
  }

  pub fn title(&self) -> Option<&str> {
    self.title.as_deref()
  }

  /// Replace the step records; the lesson must be initialized again.
  pub fn reconfigure(&mut self, configs: Vec<StepConfig>) {
    self.configs = configs;
    self.reset();
  }

  /// Build every step and move to the first one. Errors are logged and the
  /// lesson stays unusable.
  pub fn initialize(&mut self) -> bool {
    match self.try_initialize() {
      Ok(()) => true,
      Err(e) => {
        error!(target: "lesson", error = %e, "Failed to initialize lesson");
        false
      }
    }
  }

  #[instrument(level = "info", target = "lesson", skip(self), fields(configured = self.configs.len()))]
  pub fn try_initialize(&mut self) -> Result<(), LessonError> {
    self.reset();
    if self.configs.is_empty() {
      return Err(LessonError::Empty);
    }

    let steps = self
      .configs
      .iter()
      .cloned()
      .enumerate()
      .map(|(index, cfg)| StepFactory::create_step(cfg).map_err(|source| LessonError::Step { index, source }))
      .collect::<Result<Vec<_>, _>>()?;

    self.steps = steps;
    self.current = 0;
    self.initialized = true;
    info!(target: "lesson", steps = self.steps.len(), title = ?self.title, "Lesson initialized");
    self.notify_step_change();
    Ok(())
  }

  pub fn is_initialized(&self) -> bool {
    self.initialized
  }

  pub fn steps(&self) -> &[Step] {
    &self.steps
  }

  pub fn current_step(&self) -> Result<&Step, LessonError> {
    self.ensure_initialized()?;
    Ok(&self.steps[self.current])
  }

  pub fn current_step_mut(&mut self) -> Result<&mut Step, LessonError> {
    self.ensure_initialized()?;
    Ok(&mut self.steps[self.current])
  }

  pub fn current_step_index(&self) -> Result<usize, LessonError> {
    self.ensure_initialized()?;
    Ok(self.current)
  }

  /// Current step index plus the step's sub-unit cursor, if it has one.
  pub fn position(&self) -> Result<(usize, Option<usize>), LessonError> {
    let step = self.current_step()?;
    Ok((self.current, step.pages().map(|p| p.position())))
  }

  /// Advance one sub-unit, or one step when the current step is exhausted.
  /// Returns false (after signalling completion) when there is nothing left.
  #[instrument(level = "debug", target = "lesson", skip(self))]
  pub fn next_step(&mut self) -> Result<bool, LessonError> {
    self.ensure_initialized()?;

    if let Some(pages) = self.steps[self.current].pages_mut() {
      if pages.advance() {
        debug!(target: "lesson", step = self.current, sub_unit = pages.position(), "Advanced within step");
        self.notify_step_change();
        return Ok(true);
      }
    }

    if self.current + 1 < self.steps.len() {
      self.current += 1;
      debug!(target: "lesson", step = self.current, "Advanced to next step");
      self.notify_step_change();
      return Ok(true);
    }

    if !self.completed {
      self.completed = true;
      info!(target: "lesson", steps = self.steps.len(), "Lesson complete");
      if let Some(on_complete) = self.callbacks.on_lesson_complete.as_mut() {
        on_complete();
      }
    }
    Ok(false)
  }

  /// Step back one sub-unit, or into the previous step's last sub-unit.
  /// Returns false at the very beginning.
  #[instrument(level = "debug", target = "lesson", skip(self))]
  pub fn previous_step(&mut self) -> Result<bool, LessonError> {
    self.ensure_initialized()?;

    if let Some(pages) = self.steps[self.current].pages_mut() {
      if pages.retreat() {
        debug!(target: "lesson", step = self.current, sub_unit = pages.position(), "Retreated within step");
        self.completed = false;
        self.notify_step_change();
        return Ok(true);
      }
    }

    if self.current == 0 {
      return Ok(false);
    }

    self.current -= 1;
    if let Some(pages) = self.steps[self.current].pages_mut() {
      pages.seek_last();
    }
    debug!(target: "lesson", step = self.current, "Retreated to previous step");
    self.completed = false;
    self.notify_step_change();
    Ok(true)
  }

  pub fn is_first_step(&self) -> Result<bool, LessonError> {
    let step = self.current_step()?;
    Ok(self.current == 0 && step.at_first_page())
  }

  pub fn is_last_step(&self) -> Result<bool, LessonError> {
    let step = self.current_step()?;
    Ok(self.current + 1 == self.steps.len() && step.at_last_page())
  }

  fn ensure_initialized(&self) -> Result<(), LessonError> {
    if self.initialized && !self.steps.is_empty() {
      Ok(())
    } else {
      Err(LessonError::NotInitialized)
    }
  }

  fn reset(&mut self) {
    self.steps.clear();
    self.current = 0;
    self.initialized = false;
    self.completed = false;
  }

  fn notify_step_change(&mut self) {
    if !self.initialized {
      return;
    }
    if let Some(on_change) = self.callbacks.on_step_change.as_mut() {
      on_change(&self.steps[self.current]);
    }
  }
}
