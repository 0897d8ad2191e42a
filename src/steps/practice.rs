//! Scored problem sets: independent practice (do-it) and assessment (show-it).

use serde_json::Value;
use tracing::debug;

use crate::config::Completion;
use crate::domain::{feedback_text, Answer, Feedback, StepId, StepKind};
use crate::error::StepError;
use crate::screen::Screen;

use super::{Pages, Paging, StepHeader};

/// Fewer correct answers than this on a show-it step calls for a review.
pub const REMEDIATION_THRESHOLD: usize = 3;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Problem {
  pub id: Option<StepId>,
  /// Free-form presentation label ("multiple-choice", "click-tap", "yes-no", ...).
  pub kind: Option<String>,
  pub screen: Option<Screen>,
  pub prompt: Option<String>,
  pub options: Vec<Value>,
  pub correct_answer: Option<Answer>,
  pub feedback: Option<Feedback>,
}

impl Problem {
  pub fn is_correct(&self, answer: &Answer) -> bool {
    self.correct_answer.as_ref() == Some(answer)
  }
}

/// Problems with a cursor, one answer slot per problem, and a running score.
#[derive(Clone, Debug, PartialEq)]
pub struct ProblemSet {
  problems: Pages<Problem>,
  answers: Vec<Option<Answer>>,
  score: usize,
}

impl ProblemSet {
  pub fn new(problems: Pages<Problem>) -> Self {
    let answers = vec![None; problems.len()];
    Self { problems, answers, score: 0 }
  }

  pub fn current(&self) -> &Problem {
    self.problems.current()
  }

  pub fn problems(&self) -> &[Problem] {
    self.problems.items()
  }

  pub fn answers(&self) -> &[Option<Answer>] {
    &self.answers
  }

  /// Number of positions whose recorded answer is correct.
  pub fn score(&self) -> usize {
    self.score
  }

  /// Store `answer` for the current problem, replacing any earlier answer
  /// there, and return whether it is correct.
  pub fn record_answer(&mut self, answer: Answer) -> bool {
    let position = self.problems.position();
    let problem = self.problems.current();
    let correct = problem.is_correct(&answer);
    let was_correct = self.answers[position].as_ref().is_some_and(|prev| problem.is_correct(prev));

    if was_correct {
      self.score -= 1;
    }
    if correct {
      self.score += 1;
    }
    debug!(target: "lesson", problem = ?problem.id, position, %answer, correct, score = self.score, "Answer recorded");
    self.answers[position] = Some(answer);
    correct
  }

  /// Feedback text for `answer` on the current problem; does not record anything.
  pub fn feedback(&self, answer: &Answer) -> String {
    let problem = self.current();
    feedback_text(problem.feedback.as_ref(), problem.is_correct(answer))
  }
}

impl Paging for ProblemSet {
  fn position(&self) -> usize {
    self.problems.position()
  }

  fn len(&self) -> usize {
    self.problems.len()
  }

  fn advance(&mut self) -> bool {
    self.problems.advance()
  }

  fn retreat(&mut self) -> bool {
    self.problems.retreat()
  }

  fn seek_last(&mut self) {
    self.problems.seek_last()
  }
}

fn problem_set(kind: StepKind, header: &StepHeader, problems: Vec<Problem>, what: &'static str) -> Result<ProblemSet, StepError> {
  Pages::new(problems)
    .map(ProblemSet::new)
    .ok_or_else(|| StepError::Empty { kind, id: header.id.to_string(), what })
}

/// Independent practice.
#[derive(Clone, Debug, PartialEq)]
pub struct DoItStep {
  pub header: StepHeader,
  pub format: Option<String>,
  pub variety: Option<String>,
  pub instructions: Option<String>,
  pub completion: Option<Completion>,
  pub problems: ProblemSet,
}

impl DoItStep {
  pub fn new(header: StepHeader, problems: Vec<Problem>) -> Result<Self, StepError> {
    let problems = problem_set(StepKind::DoIt, &header, problems, "problem")?;
    Ok(Self { header, format: None, variety: None, instructions: None, completion: None, problems })
  }

  pub fn current_problem(&self) -> &Problem {
    self.problems.current()
  }

  pub fn current_problem_id(&self) -> Option<&StepId> {
    self.current_problem().id.as_ref()
  }

  pub fn next_problem(&mut self) -> bool {
    self.problems.advance()
  }

  pub fn previous_problem(&mut self) -> bool {
    self.problems.retreat()
  }

  pub fn is_first_problem(&self) -> bool {
    self.problems.at_start()
  }

  pub fn is_last_problem(&self) -> bool {
    self.problems.at_end()
  }

  pub fn current_problem_index(&self) -> usize {
    self.problems.position()
  }

  pub fn record_answer(&mut self, answer: Answer) -> bool {
    self.problems.record_answer(answer)
  }

  pub fn get_feedback(&self, answer: &Answer) -> String {
    self.problems.feedback(answer)
  }

  pub fn score(&self) -> usize {
    self.problems.score()
  }

  pub fn answers(&self) -> &[Option<Answer>] {
    self.problems.answers()
  }
}

/// Assessment without hints; a low score asks for remediation.
#[derive(Clone, Debug, PartialEq)]
pub struct ShowItStep {
  pub header: StepHeader,
  pub format: Option<String>,
  pub introduction: Option<String>,
  pub feedback: Option<Feedback>,
  pub remediation: Option<String>,
  pub questions: ProblemSet,
}

impl ShowItStep {
  pub fn new(header: StepHeader, questions: Vec<Problem>) -> Result<Self, StepError> {
    let questions = problem_set(StepKind::ShowIt, &header, questions, "question")?;
    Ok(Self { header, format: None, introduction: None, feedback: None, remediation: None, questions })
  }

  pub fn current_question(&self) -> &Problem {
    self.questions.current()
  }

  pub fn current_question_id(&self) -> Option<&StepId> {
    self.current_question().id.as_ref()
  }

  pub fn next_question(&mut self) -> bool {
    self.questions.advance()
  }

  pub fn previous_question(&mut self) -> bool {
    self.questions.retreat()
  }

  pub fn is_first_question(&self) -> bool {
    self.questions.at_start()
  }

  pub fn is_last_question(&self) -> bool {
    self.questions.at_end()
  }

  pub fn current_question_index(&self) -> usize {
    self.questions.position()
  }

  pub fn record_answer(&mut self, answer: Answer) -> bool {
    self.questions.record_answer(answer)
  }

  pub fn get_feedback(&self, answer: &Answer) -> String {
    self.questions.feedback(answer)
  }

  pub fn score(&self) -> usize {
    self.questions.score()
  }

  pub fn answers(&self) -> &[Option<Answer>] {
    self.questions.answers()
  }

  pub fn needs_remediation(&self) -> bool {
    self.score() < REMEDIATION_THRESHOLD
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::{DEFAULT_CORRECT, DEFAULT_INCORRECT};

  fn header(id: &str) -> StepHeader {
    StepHeader {
      id: StepId::from(id),
      title: "Practice".into(),
      goal: None,
      character_prompt: String::new(),
      transition: String::new(),
      vocabulary: Vec::new(),
      sequence: Vec::new(),
    }
  }

  fn problem(id: &str, correct: &str) -> Problem {
    Problem { id: Some(StepId::from(id)), correct_answer: Some(Answer::from(correct)), ..Problem::default() }
  }

  fn clock_check() -> ShowItStep {
    ShowItStep::new(
      header("5"),
      vec![
        problem("5.1", "hour-hand"),
        problem("5.2", "minute-hand"),
        problem("5.3", "Minute Hand"),
        problem("5.4", "yes"),
      ],
    )
    .unwrap()
  }

  #[test]
  fn empty_sets_are_rejected() {
    assert_eq!(
      DoItStep::new(header("4"), Vec::new()).unwrap_err(),
      StepError::Empty { kind: StepKind::DoIt, id: "4".into(), what: "problem" }
    );
    assert_eq!(
      ShowItStep::new(header("5"), Vec::new()).unwrap_err(),
      StepError::Empty { kind: StepKind::ShowIt, id: "5".into(), what: "question" }
    );
  }

  #[test]
  fn answers_start_unset_and_match_problem_count() {
    let step = DoItStep::new(header("4"), vec![problem("4.1", "a"), problem("4.2", "b")]).unwrap();
    assert_eq!(step.answers().len(), 2);
    assert!(step.answers().iter().all(Option::is_none));
    assert_eq!(step.score(), 0);
  }

  #[test]
  fn recording_is_idempotent_per_position() {
    let mut step = DoItStep::new(header("4"), vec![problem("4.1", "hour-hand"), problem("4.2", "minute-hand")]).unwrap();
    assert!(step.record_answer(Answer::from("hour-hand")));
    assert!(step.record_answer(Answer::from("hour-hand")));
    assert_eq!(step.score(), 1);
    assert_eq!(step.answers()[0], Some(Answer::from("hour-hand")));

    // Overwriting with a wrong answer takes the point back.
    assert!(!step.record_answer(Answer::from("minute-hand")));
    assert_eq!(step.score(), 0);

    assert!(step.next_problem());
    assert!(step.record_answer(Answer::from("minute-hand")));
    assert_eq!(step.score(), 1);
    assert_eq!(step.answers()[1], Some(Answer::from("minute-hand")));
  }

  #[test]
  fn feedback_uses_problem_texts_then_defaults() {
    let mut with_texts = problem("4.1", "Short hand");
    with_texts.feedback = Some(Feedback {
      correct: Some("That's right!".into()),
      incorrect: Some("Not quite.".into()),
      ..Feedback::default()
    });
    let mut step = DoItStep::new(header("4"), vec![with_texts, problem("4.2", "minute-hand")]).unwrap();
    assert_eq!(step.get_feedback(&Answer::from("Short hand")), "That's right!");
    assert_eq!(step.get_feedback(&Answer::from("Long hand")), "Not quite.");
    assert_eq!(step.score(), 0);

    step.next_problem();
    assert_eq!(step.get_feedback(&Answer::from("minute-hand")), DEFAULT_CORRECT);
    assert_eq!(step.get_feedback(&Answer::from("hour-hand")), DEFAULT_INCORRECT);
  }

  #[test]
  fn boolean_answers_do_not_match_text() {
    let p = Problem { correct_answer: Some(Answer::Flag(true)), ..Problem::default() };
    let mut step = DoItStep::new(header("4"), vec![p]).unwrap();
    assert!(!step.record_answer(Answer::from("true")));
    assert!(step.record_answer(Answer::Flag(true)));
  }

  #[test]
  fn remediation_is_needed_below_three_correct() {
    for correct_count in 0..=4usize {
      let mut step = clock_check();
      let expected = ["hour-hand", "minute-hand", "Minute Hand", "yes"];
      for (i, want) in expected.iter().enumerate() {
        let answer = if i < correct_count { *want } else { "wrong" };
        step.record_answer(Answer::from(answer));
        step.next_question();
      }
      assert_eq!(step.score(), correct_count);
      assert_eq!(step.needs_remediation(), correct_count < 3, "score {correct_count}");
    }
  }

  #[test]
  fn question_cursor_moves_within_bounds() {
    let mut step = clock_check();
    assert!(step.is_first_question());
    assert!(!step.previous_question());
    for _ in 0..3 {
      assert!(step.next_question());
    }
    assert!(step.is_last_question());
    assert_eq!(step.current_question_id().map(StepId::as_str), Some("5.4"));
    assert_eq!(step.current_question_index(), 3);
  }
}
