//! Selector presets (Value Objects)
//!
//! The mode, grade, and font-size selectors each offer a small fixed set of
//! options. Parsing accepts both the English token used on the command line
//! and the Korean label shown in the original UI.

use crate::core::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Persona preset selecting the system-prompt template family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CoachMode {
    /// "개념 유지 코치" - explains school concepts at the chosen grade level
    #[default]
    ConceptCoach,
    /// "감정 코치" - responds empathetically to feelings and problems
    EmotionCoach,
}

impl CoachMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CoachMode::ConceptCoach => "concept",
            CoachMode::EmotionCoach => "emotion",
        }
    }

    /// The Korean label shown in the mode selector
    pub fn label(&self) -> &'static str {
        match self {
            CoachMode::ConceptCoach => "개념 유지 코치",
            CoachMode::EmotionCoach => "감정 코치",
        }
    }

    pub fn all() -> [CoachMode; 2] {
        [CoachMode::ConceptCoach, CoachMode::EmotionCoach]
    }
}

impl std::fmt::Display for CoachMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CoachMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "concept" | "concept-coach" | "개념 유지 코치" => Ok(CoachMode::ConceptCoach),
            "emotion" | "emotion-coach" | "감정 코치" => Ok(CoachMode::EmotionCoach),
            other => Err(DomainError::InvalidMode(other.to_string())),
        }
    }
}

/// Target grade level, 1학년 through 6학년
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grade {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
    Sixth,
}

impl Grade {
    /// The display string interpolated verbatim into prompt templates
    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::First => "1학년",
            Grade::Second => "2학년",
            Grade::Third => "3학년",
            Grade::Fourth => "4학년",
            Grade::Fifth => "5학년",
            Grade::Sixth => "6학년",
        }
    }

    pub fn all() -> [Grade; 6] {
        [
            Grade::First,
            Grade::Second,
            Grade::Third,
            Grade::Fourth,
            Grade::Fifth,
            Grade::Sixth,
        ]
    }
}

impl Default for Grade {
    /// Returns the default grade (3학년)
    fn default() -> Self {
        Grade::Third
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Grade {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" | "1학년" => Ok(Grade::First),
            "2" | "2학년" => Ok(Grade::Second),
            "3" | "3학년" => Ok(Grade::Third),
            "4" | "4학년" => Ok(Grade::Fourth),
            "5" | "5학년" => Ok(Grade::Fifth),
            "6" | "6학년" => Ok(Grade::Sixth),
            other => Err(DomainError::InvalidGrade(other.to_string())),
        }
    }
}

/// Chat message font size ("작게" / "보통" / "크게")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl FontSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            FontSize::Small => "small",
            FontSize::Medium => "medium",
            FontSize::Large => "large",
        }
    }

    /// Pixel size used when rendering a message.
    ///
    /// Fixed 3-entry table: small 14, medium 18, large 22.
    pub fn px(&self) -> u16 {
        match self {
            FontSize::Small => 14,
            FontSize::Medium => 18,
            FontSize::Large => 22,
        }
    }
}

impl std::fmt::Display for FontSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for FontSize {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small" | "작게" => Ok(FontSize::Small),
            "medium" | "보통" => Ok(FontSize::Medium),
            "large" | "크게" => Ok(FontSize::Large),
            other => Err(DomainError::InvalidFontSize(other.to_string())),
        }
    }
}

// Serialize/Deserialize as the English token so config files stay ASCII
// while the Korean labels still parse.
macro_rules! string_serde {
    ($ty:ty) => {
        impl Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

string_serde!(CoachMode);
string_serde!(Grade);
string_serde!(FontSize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parses_korean_label() {
        let mode: CoachMode = "감정 코치".parse().unwrap();
        assert_eq!(mode, CoachMode::EmotionCoach);
        assert_eq!("concept".parse::<CoachMode>().unwrap(), CoachMode::ConceptCoach);
    }

    #[test]
    fn test_mode_rejects_unknown() {
        assert!("tutor".parse::<CoachMode>().is_err());
    }

    #[test]
    fn test_grade_display_string() {
        assert_eq!(Grade::Third.as_str(), "3학년");
        assert_eq!("5".parse::<Grade>().unwrap(), Grade::Fifth);
        assert_eq!("5학년".parse::<Grade>().unwrap(), Grade::Fifth);
    }

    #[test]
    fn test_grade_default_and_bounds() {
        assert_eq!(Grade::default(), Grade::Third);
        assert!("0".parse::<Grade>().is_err());
        assert!("7학년".parse::<Grade>().is_err());
        assert_eq!(Grade::all().len(), 6);
    }

    #[test]
    fn test_font_size_table() {
        assert_eq!(FontSize::Small.px(), 14);
        assert_eq!(FontSize::Medium.px(), 18);
        assert_eq!(FontSize::Large.px(), 22);
    }

    #[test]
    fn test_font_size_default_is_medium() {
        assert_eq!(FontSize::default().px(), 18);
    }

    #[test]
    fn test_font_size_parses_korean_label() {
        assert_eq!("크게".parse::<FontSize>().unwrap(), FontSize::Large);
    }

    #[test]
    fn test_preset_serde_roundtrip() {
        let json = serde_json::to_string(&CoachMode::EmotionCoach).unwrap();
        assert_eq!(json, "\"emotion\"");
        let back: CoachMode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, CoachMode::EmotionCoach);
    }
}
