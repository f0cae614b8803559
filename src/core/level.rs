//! Severity level definitions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered severity classification.
///
/// Ascending severity: `Debug < Info < Warn < Error < Panic < Fatal`.
/// [`Level::None`] is a threshold-only sentinel strictly above `Fatal`;
/// setting it as the minimum level suppresses all emission, and it is
/// never produced by emission itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[derive(Default)]
pub enum Level {
    #[default]
    Debug = 0,
    Info = 1,
    Warn = 2,
    Error = 3,
    Panic = 4,
    Fatal = 5,
    None = 6,
}

impl Level {
    /// The canonical four-letter tag used to prefix emitted lines.
    ///
    /// `Level::None` has no tag and yields an empty string.
    pub fn as_tag(&self) -> &'static str {
        match self {
            Level::Debug => "DEBU",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERRO",
            Level::Panic => "PANI",
            Level::Fatal => "FATA",
            Level::None => "",
        }
    }

    /// Inverse of [`Level::as_tag`]: exact, case-sensitive lookup.
    ///
    /// Anything that is not one of the six canonical tags maps to
    /// [`Level::None`], i.e. an unknown level name reads as "suppress
    /// everything" rather than an error.
    pub fn from_tag(tag: &str) -> Level {
        match tag {
            "DEBU" => Level::Debug,
            "INFO" => Level::Info,
            "WARN" => Level::Warn,
            "ERRO" => Level::Error,
            "PANI" => Level::Panic,
            "FATA" => Level::Fatal,
            _ => Level::None,
        }
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            Level::Debug => Blue,
            Level::Info => Green,
            Level::Warn => Yellow,
            Level::Error => Red,
            Level::Panic => BrightRed,
            Level::Fatal => BrightRed,
            Level::None => White,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACTIVE: [Level; 6] = [
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::Panic,
        Level::Fatal,
    ];

    #[test]
    fn test_tag_round_trip() {
        for level in ACTIVE {
            assert_eq!(Level::from_tag(level.as_tag()), level);
        }
    }

    #[test]
    fn test_none_has_no_tag() {
        assert_eq!(Level::None.as_tag(), "");
        assert_eq!(format!("{}", Level::None), "");
    }

    #[test]
    fn test_unknown_tag_is_none() {
        assert_eq!(Level::from_tag("warn"), Level::None);
        assert_eq!(Level::from_tag("WARNING"), Level::None);
        assert_eq!(Level::from_tag("NONE"), Level::None);
        assert_eq!(Level::from_tag(""), Level::None);
    }

    #[test]
    fn test_ordering() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warn);
        assert!(Level::Warn < Level::Error);
        assert!(Level::Error < Level::Panic);
        assert!(Level::Panic < Level::Fatal);
        assert!(Level::Fatal < Level::None);
    }

    #[test]
    fn test_default_is_debug() {
        assert_eq!(Level::default(), Level::Debug);
    }

    #[test]
    fn test_display_matches_tag() {
        for level in ACTIVE {
            assert_eq!(format!("{}", level), level.as_tag());
        }
    }
}
