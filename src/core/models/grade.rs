//! Grade model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Letter grade awarded for a subject
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    /// Outstanding (10 points)
    #[serde(rename = "O")]
    O,
    /// Excellent (9 points)
    #[serde(rename = "A+")]
    APlus,
    /// Very good (8 points)
    #[serde(rename = "A")]
    A,
    /// Good (7 points)
    #[serde(rename = "B+")]
    BPlus,
    /// Above average (6 points)
    #[serde(rename = "B")]
    B,
    /// Average (5 points)
    #[serde(rename = "C")]
    C,
    /// Below average (4 points)
    #[serde(rename = "D")]
    D,
    /// Reappear (0 points)
    #[serde(rename = "U")]
    U,
}

/// Every grade, best first
pub const GRADES: [Grade; 8] = [
    Grade::O,
    Grade::APlus,
    Grade::A,
    Grade::BPlus,
    Grade::B,
    Grade::C,
    Grade::D,
    Grade::U,
];

impl Grade {
    /// Grade point on the 10-point scale
    #[must_use]
    pub const fn points(self) -> f64 {
        match self {
            Self::O => 10.0,
            Self::APlus => 9.0,
            Self::A => 8.0,
            Self::BPlus => 7.0,
            Self::B => 6.0,
            Self::C => 5.0,
            Self::D => 4.0,
            Self::U => 0.0,
        }
    }

    /// Short symbol (e.g. "A+")
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::O => "O",
            Self::APlus => "A+",
            Self::A => "A",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::U => "U",
        }
    }

    /// Descriptive label shown when picking a grade
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::O => "O (Outstanding)",
            Self::APlus => "A+ (Excellent)",
            Self::A => "A (Very Good)",
            Self::BPlus => "B+ (Good)",
            Self::B => "B (Above Average)",
            Self::C => "C (Average)",
            Self::D => "D (Below Average)",
            Self::U => "U (Reappear)",
        }
    }
}

impl FromStr for Grade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "O" => Ok(Self::O),
            "A+" => Ok(Self::APlus),
            "A" => Ok(Self::A),
            "B+" => Ok(Self::BPlus),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            "D" => Ok(Self::D),
            "U" => Ok(Self::U),
            _ => Err(format!("Unknown grade: '{}'", s.trim())),
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
