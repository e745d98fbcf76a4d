//! Event category filters.

use std::str::FromStr;

use catalog::Event;
use chrono::NaiveDate;

/// Event types shown under the festivals filter.
pub const FESTIVAL_KINDS: [&str; 2] = ["Festival", "Dance Festival"];

/// Event types shown under the rituals filter.
pub const RITUAL_KINDS: [&str; 2] = ["Sacred Ritual", "Religious Observance"];

/// Closed set of event category filters.
///
/// Parsing never fails: an unrecognized key selects [`EventFilter::All`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum EventFilter {
    /// Every event.
    #[default]
    All,
    /// Events on or after today.
    Upcoming,
    /// Festivals and dance festivals.
    Festivals,
    /// Sacred rituals and religious observances.
    Rituals,
}

impl EventFilter {
    /// Parses a filter key case-insensitively, mapping unknown keys to `All`.
    pub fn parse_lenient(key: &str) -> Self {
        match key.trim().to_ascii_lowercase().as_str() {
            "upcoming" => Self::Upcoming,
            "festivals" => Self::Festivals,
            "rituals" => Self::Rituals,
            _ => Self::All,
        }
    }

    /// Returns the canonical key for this filter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Upcoming => "upcoming",
            Self::Festivals => "festivals",
            Self::Rituals => "rituals",
        }
    }

    /// Returns true if `event` belongs to this category as of `today`.
    pub fn matches(&self, event: &Event, today: NaiveDate) -> bool {
        match self {
            Self::All => true,
            Self::Upcoming => event.is_upcoming(today),
            Self::Festivals => kind_in(&event.kind, &FESTIVAL_KINDS),
            Self::Rituals => kind_in(&event.kind, &RITUAL_KINDS),
        }
    }
}

fn kind_in(kind: &str, kinds: &[&str]) -> bool {
    kinds.iter().any(|k| k.eq_ignore_ascii_case(kind))
}

impl FromStr for EventFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse_lenient(s))
    }
}

impl std::fmt::Display for EventFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
