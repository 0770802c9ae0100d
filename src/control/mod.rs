//! Control kinds and values
//!
//! Each option renders as exactly one control. The kind is decided once from the
//! descriptor's bounds and never changes for the widget's lifetime.

mod bounds;

pub use bounds::{Step, StepperBounds};

use std::fmt;

/// The closed set of control renderings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKind {
    Stepper,
    Switch,
}

impl ControlKind {
    /// `min <= 1 && max == 1` renders a switch, anything else a stepper.
    /// A missing `min` never satisfies the lower test.
    pub fn from_bounds(min: Option<i64>, max: Option<i64>) -> Self {
        match (min, max) {
            (Some(min), Some(1)) if min <= 1 => Self::Switch,
            _ => Self::Stepper,
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Self::Stepper => "stepper",
            Self::Switch => "switch",
        }
    }
}

impl fmt::Display for ControlKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}

/// Live value of a single control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlValue {
    Count(i64),
    Flag(bool),
}

impl ControlValue {
    /// Numeric reading used by the summary: a set flag counts as 1.
    pub const fn magnitude(&self) -> i64 {
        match *self {
            Self::Count(n) => n,
            Self::Flag(true) => 1,
            Self::Flag(false) => 0,
        }
    }

    pub const fn is_active(&self) -> bool {
        self.magnitude() > 0
    }

    pub const fn as_count(&self) -> i64 {
        self.magnitude()
    }

    pub const fn as_flag(&self) -> bool {
        self.is_active()
    }
}

impl fmt::Display for ControlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(n) => write!(f, "{n}"),
            Self::Flag(b) => write!(f, "{b}"),
        }
    }
}

/// Read a stepper's display text back as an integer.
///
/// Leading integer digits are taken the way a browser's `parseInt` would
/// (`"12px"` reads 12). Text with no leading integer reads as 0.
pub fn parse_display(text: &str) -> i64 {
    let trimmed = text.trim_start();
    let (sign, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end]
        .parse::<i64>()
        .map(|n| sign * n)
        .unwrap_or(0)
}
