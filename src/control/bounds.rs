//! StepperBounds - integer range with optional ends
//!
//! Steps clamp to the bounds instead of overflowing them, so a stepper
//! at either end stays put when pushed further.

/// Direction of a single stepper activation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Down,
    Up,
}

impl Step {
    pub const fn delta(&self) -> i64 {
        match self {
            Self::Down => -1,
            Self::Up => 1,
        }
    }
}

/// Inclusive range `[min, max]`; an absent end is unbounded on that side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StepperBounds {
    pub min: Option<i64>,
    pub max: Option<i64>,
}

impl StepperBounds {
    pub const UNBOUNDED: Self = Self { min: None, max: None };

    pub const fn new(min: Option<i64>, max: Option<i64>) -> Self {
        Self { min, max }
    }

    /// `max(min, value)`, then `min(max, result)`. The lower bound is applied
    /// first, so an inverted range resolves to `max`.
    pub fn clamp(&self, value: i64) -> i64 {
        let value = match self.min {
            Some(min) => value.max(min),
            None => value,
        };
        match self.max {
            Some(max) => value.min(max),
            None => value,
        }
    }

    pub fn contains(&self, value: i64) -> bool {
        self.min.is_none_or(|min| value >= min) && self.max.is_none_or(|max| value <= max)
    }

    pub fn step(&self, value: i64, step: Step) -> i64 {
        self.clamp(value.saturating_add(step.delta()))
    }

    /// Decrement affordance is disabled at or below `min`.
    pub fn is_min(&self, value: i64) -> bool {
        self.min.is_some_and(|min| value <= min)
    }

    /// Increment affordance is disabled at or above `max`.
    pub fn is_max(&self, value: i64) -> bool {
        self.max.is_some_and(|max| value >= max)
    }

    pub fn is_disabled(&self, value: i64, step: Step) -> bool {
        match step {
            Step::Down => self.is_min(value),
            Step::Up => self.is_max(value),
        }
    }

    /// Attribute text for `data-min` / `data-max`; unbounded ends render empty.
    pub fn attr(bound: Option<i64>) -> String {
        bound.map(|b| b.to_string()).unwrap_or_default()
    }
}
