//! Small closed vocabularies used by block variants.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Error;

/// Heading level (1-6).
///
/// Deserialization rejects any other value, so a `HeadingLevel` held by a
/// block is always in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    /// Create a heading level, returning `None` outside 1-6.
    pub fn new(level: u8) -> Option<Self> {
        (1..=6).contains(&level).then_some(Self(level))
    }

    /// Create a heading level, clamping into 1-6.
    pub fn clamped(level: u8) -> Self {
        Self(level.clamp(1, 6))
    }

    /// Numeric level.
    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for HeadingLevel {
    fn default() -> Self {
        Self(2)
    }
}

impl TryFrom<u8> for HeadingLevel {
    type Error = Error;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::new(level).ok_or(Error::InvalidHeadingLevel(level))
    }
}

impl From<HeadingLevel> for u8 {
    fn from(level: HeadingLevel) -> Self {
        level.0
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "h{}", self.0)
    }
}

/// Spacing around a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpacingSize {
    None,
    Small,
    #[default]
    Medium,
    Large,
}

/// Gap between grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GapSize {
    None,
    Small,
    #[default]
    Medium,
    Large,
}

/// Visual tone of an info box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InfoBoxStyle {
    #[default]
    Info,
    Warning,
    Error,
    Tip,
    Note,
}

/// Visual tone of a callout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalloutStyle {
    #[default]
    Default,
    Info,
    Highlight,
    Box,
}

/// Ordering style of a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListStyle {
    Ordered,
    #[default]
    Unordered,
}

impl ListStyle {
    /// Check if this is an ordered list.
    pub fn is_ordered(self) -> bool {
        matches!(self, ListStyle::Ordered)
    }
}

/// Label of a step: either any JSON number or free text such as "A".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StepNumber {
    Number(serde_json::Number),
    Label(String),
}

impl fmt::Display for StepNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepNumber::Number(n) => write!(f, "{}", n),
            StepNumber::Label(s) => f.write_str(s),
        }
    }
}

impl From<u32> for StepNumber {
    fn from(n: u32) -> Self {
        StepNumber::Number(n.into())
    }
}

impl From<&str> for StepNumber {
    fn from(s: &str) -> Self {
        StepNumber::Label(s.to_string())
    }
}
