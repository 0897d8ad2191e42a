//! Meet the Clock · lesson runner
//!
//! - Loads a lesson (external file or the built-in "Meet the Clock!")
//! - Outline mode prints one JSON view per navigation step
//! - Play mode reads commands from stdin and prints views/answer results
//!
//! Important env variables:
//!   LESSON_CONFIG_PATH : path to a TOML (or .json) lesson file
//!   LESSON_MODE        : "outline" (default) or "play"
//!   LOG_LEVEL          : tracing filter, e.g. "debug" or full directives
//!   LOG_FORMAT         : "pretty" (default) or "json"
//!
//! Play commands: `n` next, `p` previous, `v` view, `a <answer>` answer, `q` quit.
//! Answers: `5=5` fills the blank at position 5, `true`/`false` are flags,
//! anything else (numbers included) is text.

use std::io::{self, BufRead};

use serde_json::json;
use tracing::{info, instrument, warn};

use clock_lesson::config::{load_lesson_config_from_env, RunMode};
use clock_lesson::util::trunc_for_log;
use clock_lesson::{seeds, submit_answer, telemetry, to_view, Answer, LessonCallbacks, LessonManager};

#[instrument(level = "info", skip_all)]
fn main() -> Result<(), Box<dyn std::error::Error>> {
  telemetry::init_tracing();

  let config = match load_lesson_config_from_env() {
    Some(cfg) => cfg,
    None => seeds::meet_the_clock()?,
  };

  let callbacks = LessonCallbacks::default()
    .on_step_change(|step| {
      info!(target: "clock_lesson", id = %step.id(), kind = %step.kind(), title = %step.title(), "Step changed");
    })
    .on_lesson_complete(|| {
      info!(target: "clock_lesson", "Lesson complete");
      println!("{}", json!({ "event": "lessonComplete" }));
    });

  let mut lesson = LessonManager::from_lesson(config, callbacks);
  lesson.try_initialize()?;

  match RunMode::from_env() {
    RunMode::Outline => outline(&mut lesson),
    RunMode::Play => play(&mut lesson),
  }
}

fn outline(lesson: &mut LessonManager) -> Result<(), Box<dyn std::error::Error>> {
  print_view(lesson)?;
  while lesson.next_step()? {
    print_view(lesson)?;
  }
  Ok(())
}

fn play(lesson: &mut LessonManager) -> Result<(), Box<dyn std::error::Error>> {
  print_view(lesson)?;
  for line in io::stdin().lock().lines() {
    let line = line?;
    let (cmd, rest) = line.trim().split_once(' ').unwrap_or((line.trim(), ""));
    match cmd {
      "" => continue,
      "n" | "next" => {
        if lesson.next_step()? {
          print_view(lesson)?;
        }
      }
      "p" | "prev" => {
        if lesson.previous_step()? {
          print_view(lesson)?;
        }
      }
      "v" | "view" => print_view(lesson)?,
      "a" | "answer" => {
        let outcome = submit_answer(lesson, parse_answer(rest.trim()))?;
        println!("{}", serde_json::to_string(&outcome)?);
      }
      "q" | "quit" => break,
      other => warn!(target: "clock_lesson", command = %trunc_for_log(other, 32), "Unknown command"),
    }
  }
  Ok(())
}

fn print_view(lesson: &LessonManager) -> Result<(), Box<dyn std::error::Error>> {
  println!("{}", serde_json::to_string(&to_view(lesson)?)?);
  Ok(())
}

fn parse_answer(raw: &str) -> Answer {
  if let Some((position, value)) = raw.split_once('=') {
    return Answer::entry(position.trim(), value.trim());
  }
  match raw {
    "true" => Answer::Flag(true),
    "false" => Answer::Flag(false),
    text => Answer::from(text),
  }
}
