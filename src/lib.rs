//! Meet the Clock · lesson navigation model
//!
//! - Six-phase lesson steps (warm-up, learn-it, try-it, do-it, show-it, extension)
//! - Step factory turning loose lesson records into typed steps
//! - Lesson manager with sub-unit aware next/previous navigation
//!
//! Rendering is left to whoever consumes `protocol::StepView`.

pub mod config;
pub mod domain;
pub mod error;
pub mod factory;
pub mod interaction;
pub mod lesson;
pub mod logic;
pub mod protocol;
pub mod screen;
pub mod seeds;
pub mod steps;
pub mod telemetry;
pub mod util;

pub use config::{LessonConfig, StepConfig};
pub use domain::{Answer, Feedback, StepId, StepKind};
pub use error::{ConfigError, LessonError, StepError};
pub use factory::StepFactory;
pub use lesson::{LessonCallbacks, LessonManager};
pub use logic::submit_answer;
pub use protocol::{to_view, AnswerOutcome, StepView};
pub use steps::Step;
