//! Built-in lesson content, so the binary is useful without any external config.

use crate::config::{parse_lesson, LessonConfig, LessonFormat};
use crate::error::ConfigError;

const MEET_THE_CLOCK: &str = include_str!("../lessons/meet_the_clock.toml");

/// "Meet the Clock!": clock face, hands and clockwise direction in six steps.
pub fn meet_the_clock() -> Result<LessonConfig, ConfigError> {
  parse_lesson(MEET_THE_CLOCK, LessonFormat::Toml)
}
