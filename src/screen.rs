//! Screen descriptors: what the clock visualization should show.
//!
//! Raw screen records look like `{ "type": "clock-face", "config": { ... } }`.
//! Known types become typed variants; anything else is kept verbatim in
//! `Screen::Unrecognized` so newer lesson data still loads.

use std::{fmt, str::FromStr};

use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use tracing::warn;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Screen {
  ClockFace(ClockFace),
  ClockWithHands(ClockWithHands),
  AnimatedClock(AnimatedClock),
  ImageGallery(ImageGallery),
  #[serde(untagged)]
  Unrecognized(Value),
}

impl Screen {
  /// The discriminant as written in lesson data, if there is one.
  pub fn type_name(&self) -> Option<&str> {
    match self {
      Screen::ClockFace(_) => Some("clock-face"),
      Screen::ClockWithHands(_) => Some("clock-with-hands"),
      Screen::AnimatedClock(_) => Some("animated-clock"),
      Screen::ImageGallery(_) => Some("image-gallery"),
      Screen::Unrecognized(raw) => raw.get("type").and_then(Value::as_str),
    }
  }
}

/// Clock face without hands, optionally with blanks to fill in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClockFace {
  pub missing_numbers: Vec<u8>,
  pub anchors: Vec<u8>,
  pub show_numbers: bool,
  #[serde(alias = "highlightNumbers")]
  pub sequential_highlight: bool,
}

impl Default for ClockFace {
  fn default() -> Self {
    Self { missing_numbers: Vec::new(), anchors: Vec::new(), show_numbers: true, sequential_highlight: false }
  }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClockWithHands {
  pub time: ClockTime,
  pub hour_hand: HandStyle,
  pub minute_hand: HandStyle,
}

impl Default for ClockWithHands {
  fn default() -> Self {
    Self {
      time: ClockTime { hour: 12, minute: 0 },
      hour_hand: HandStyle { color: "black".into(), length: HandLength::Short },
      minute_hand: HandStyle { color: "black".into(), length: HandLength::Long },
    }
  }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandStyle {
  pub color: String,
  pub length: HandLength,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandLength {
  Short,
  Long,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimatedClock {
  pub animation: String,
  pub arrows: Vec<Arrow>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arrow {
  pub id: String,
  #[serde(default)]
  pub display: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageGallery {
  pub images: Vec<Image>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
  pub src: String,
  #[serde(default)]
  pub alt: String,
}

/// Wall-clock time shown by the hands, written `H:MM` in lesson data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClockTime {
  pub hour: u8,
  pub minute: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid clock time '{0}', expected H:MM")]
pub struct ClockTimeError(String);

impl FromStr for ClockTime {
  type Err = ClockTimeError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let err = || ClockTimeError(s.to_string());
    let (h, m) = s.trim().split_once(':').ok_or_else(err)?;
    if m.len() != 2 {
      return Err(err());
    }
    let hour: u8 = h.parse().map_err(|_| err())?;
    let minute: u8 = m.parse().map_err(|_| err())?;
    if hour > 23 || minute > 59 {
      return Err(err());
    }
    Ok(ClockTime { hour, minute })
  }
}

impl fmt::Display for ClockTime {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}:{:02}", self.hour, self.minute)
  }
}

impl Serialize for ClockTime {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(self)
  }
}

impl<'de> Deserialize<'de> for ClockTime {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let s = String::deserialize(deserializer)?;
    s.parse().map_err(serde::de::Error::custom)
  }
}

/// Build a typed screen from a raw record. Never fails: unknown types, and
/// known types whose parameters do not parse, come back unchanged.
pub fn create_screen(raw: Value) -> Screen {
  let built = match raw.get("type").and_then(Value::as_str) {
    Some("clock-face") => params(&raw).map(Screen::ClockFace),
    Some("clock-with-hands") => params(&raw).map(Screen::ClockWithHands),
    Some("animated-clock") => params(&raw).map(Screen::AnimatedClock),
    Some("image-gallery") => params(&raw).map(Screen::ImageGallery),
    _ => return Screen::Unrecognized(raw),
  };
  match built {
    Ok(screen) => screen,
    Err(e) => {
      warn!(target: "factory", screen_type = ?raw.get("type"), error = %e, "Screen parameters invalid; keeping raw config");
      Screen::Unrecognized(raw)
    }
  }
}

/// Variant parameters live under `config`; a missing `config` means all defaults.
fn params<T: DeserializeOwned>(raw: &Value) -> Result<T, serde_json::Error> {
  match raw.get("config") {
    Some(cfg) if !cfg.is_null() => serde_json::from_value(cfg.clone()),
    _ => serde_json::from_value(Value::Object(Default::default())),
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn clock_face_reads_blanks_and_anchors() {
    let screen = create_screen(json!({
      "type": "clock-face",
      "config": { "missingNumbers": [2, 5, 11], "anchors": [12, 3, 6, 9] }
    }));
    let Screen::ClockFace(face) = screen else { panic!("expected clock face") };
    assert_eq!(face.missing_numbers, vec![2, 5, 11]);
    assert_eq!(face.anchors, vec![12, 3, 6, 9]);
    assert!(face.show_numbers);
    assert!(!face.sequential_highlight);
  }

  #[test]
  fn clock_face_accepts_highlight_numbers() {
    let screen = create_screen(json!({ "type": "clock-face", "config": { "highlightNumbers": true } }));
    let Screen::ClockFace(face) = screen else { panic!("expected clock face") };
    assert!(face.sequential_highlight);
  }

  #[test]
  fn clock_with_hands_defaults_to_noon_with_black_hands() {
    let Screen::ClockWithHands(clock) = create_screen(json!({ "type": "clock-with-hands" })) else {
      panic!("expected clock with hands");
    };
    assert_eq!(clock, ClockWithHands::default());
    assert_eq!(clock.time.to_string(), "12:00");
    assert_eq!(clock.minute_hand.length, HandLength::Long);
  }

  #[test]
  fn clock_with_hands_parses_time() {
    let Screen::ClockWithHands(clock) = create_screen(json!({
      "type": "clock-with-hands",
      "config": { "time": "8:15", "hourHand": { "color": "blue", "length": "short" } }
    })) else {
      panic!("expected clock with hands");
    };
    assert_eq!(clock.time, ClockTime { hour: 8, minute: 15 });
    assert_eq!(clock.hour_hand.color, "blue");
  }

  #[test]
  fn unknown_screen_types_pass_through_unchanged() {
    let raw = json!({ "type": "unknown", "config": { "whatever": 1 } });
    assert_eq!(create_screen(raw.clone()), Screen::Unrecognized(raw));

    let untyped = json!({ "time": "6:00" });
    assert_eq!(create_screen(untyped.clone()), Screen::Unrecognized(untyped));
  }

  #[test]
  fn invalid_parameters_degrade_to_raw() {
    let raw = json!({ "type": "clock-with-hands", "config": { "time": "25:99" } });
    assert_eq!(create_screen(raw.clone()), Screen::Unrecognized(raw));
  }

  #[test]
  fn clock_time_rejects_malformed_values() {
    assert!("3:5".parse::<ClockTime>().is_err());
    assert!("noon".parse::<ClockTime>().is_err());
    assert_eq!("10:50".parse::<ClockTime>().unwrap(), ClockTime { hour: 10, minute: 50 });
  }

  #[test]
  fn screens_serialize_with_their_discriminant() {
    let screen = create_screen(json!({ "type": "image-gallery", "config": { "images": [{ "src": "a.jpg", "alt": "A" }] } }));
    let out = serde_json::to_value(&screen).unwrap();
    assert_eq!(out["type"], "image-gallery");
    assert_eq!(out["images"][0]["src"], "a.jpg");
    assert_eq!(screen.type_name(), Some("image-gallery"));
  }
}
