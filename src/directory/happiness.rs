//! Display band for `levelOfHappiness`.

use super::MAX_HAPPINESS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HappinessBand {
    Joyful,
    Content,
    Uneasy,
    Unhappy,
}

impl HappinessBand {
    #[must_use]
    pub fn for_level(level: u8) -> Self {
        match level {
            8.. => Self::Joyful,
            6..=7 => Self::Content,
            4..=5 => Self::Uneasy,
            _ => Self::Unhappy,
        }
    }

    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Joyful => "#4caf50",
            Self::Content => "#ff9800",
            Self::Uneasy => "#f44336",
            Self::Unhappy => "#9e9e9e",
        }
    }

    #[must_use]
    pub fn emoji(self) -> &'static str {
        match self {
            Self::Joyful => "😄",
            Self::Content => "😊",
            Self::Uneasy => "😐",
            Self::Unhappy => "😢",
        }
    }
}

/// `"7/10"`.
#[must_use]
pub fn label(level: u8) -> String {
    format!("{level}/{MAX_HAPPINESS}")
}
