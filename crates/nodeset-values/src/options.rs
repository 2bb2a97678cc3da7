//! Parse configuration.

use chrono::NaiveDateTime;

use crate::util::datetime::now_seconds;

/// Locale given to inline localized text.
pub const DEFAULT_LOCALE: &str = "en_US";

/// Source of "now" for timestamps that are missing or unreadable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Clock {
    /// UTC wall clock truncated to whole seconds.
    #[default]
    System,
    /// Always returns the given instant.
    Fixed(NaiveDateTime),
}

impl Clock {
    pub fn now(&self) -> NaiveDateTime {
        match self {
            Clock::System => now_seconds(),
            Clock::Fixed(dt) => *dt,
        }
    }
}

/// Options for parsing values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Locale used for localized text given inline without one.
    pub default_locale: String,

    /// Clock used for the date-time fallback.
    ///
    /// Pin it with [`ParseOptions::with_fixed_time`] when generated output
    /// must be reproducible.
    pub clock: Clock,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            default_locale: DEFAULT_LOCALE.to_string(),
            clock: Clock::System,
        }
    }
}

impl ParseOptions {
    /// Creates default parse options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options whose date-time fallback is always `now`.
    pub fn with_fixed_time(now: NaiveDateTime) -> Self {
        Self {
            clock: Clock::Fixed(now),
            ..Self::default()
        }
    }

    pub fn default_locale(mut self, locale: impl Into<String>) -> Self {
        self.default_locale = locale.into();
        self
    }
}
