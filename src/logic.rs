//! Answer checking for whatever is on screen.
//!
//! Feedback comes from the most specific place that has a text for the outcome:
//! the interaction, then the chunk / screen / step, then the generic texts.
//! Problem sets record the answer and keep score.

use tracing::{debug, instrument};

use crate::domain::{feedback_text, Answer, Feedback};
use crate::error::LessonError;
use crate::interaction::Interaction;
use crate::lesson::LessonManager;
use crate::protocol::AnswerOutcome;
use crate::steps::Step;
use crate::util::trunc_for_log;

#[instrument(level = "info", target = "lesson", skip(lesson, answer), fields(answer = %trunc_for_log(&answer.to_string(), 64)))]
pub fn submit_answer(lesson: &mut LessonManager, answer: Answer) -> Result<AnswerOutcome, LessonError> {
  let step = lesson.current_step_mut()?;
  let outcome = match step {
    Step::WarmUp(s) => check(std::slice::from_ref(&s.interaction), s.feedback.as_ref(), &answer),
    Step::LearnIt(s) => check(s.interactions(), s.feedback(), &answer),
    Step::TryIt(s) => {
      let screen = s.current_screen();
      check(screen.interaction.as_slice(), screen.feedback.as_ref(), &answer)
    }
    Step::Extension(s) => check(std::slice::from_ref(&s.interaction), None, &answer),
    Step::DoIt(s) => {
      let feedback = s.get_feedback(&answer);
      let correct = s.record_answer(answer);
      AnswerOutcome { score: Some(s.score()), ..AnswerOutcome::judged(correct, feedback) }
    }
    Step::ShowIt(s) => {
      let feedback = s.get_feedback(&answer);
      let correct = s.record_answer(answer);
      AnswerOutcome {
        score: Some(s.score()),
        needs_remediation: Some(s.needs_remediation()),
        ..AnswerOutcome::judged(correct, feedback)
      }
    }
  };
  debug!(target: "lesson", checked = outcome.checked, correct = outcome.correct, "Answer checked");
  Ok(outcome)
}

/// Accept when any checkable interaction accepts.
fn check(interactions: &[Interaction], fallback: Option<&Feedback>, answer: &Answer) -> AnswerOutcome {
  let checkable: Vec<&Interaction> = interactions.iter().filter(|i| i.is_checkable()).collect();
  let Some(first) = checkable.first() else {
    return AnswerOutcome::unchecked();
  };

  let accepted = checkable.iter().find(|i| i.validate(answer));
  let correct = accepted.is_some();
  let source = accepted.unwrap_or(first);

  let feedback = match source.feedback().and_then(|f| f.for_outcome(correct)) {
    Some(text) => text.to_string(),
    None => feedback_text(fallback, correct),
  };
  AnswerOutcome::judged(correct, feedback)
}
