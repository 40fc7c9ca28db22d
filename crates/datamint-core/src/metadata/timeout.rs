//! Timeout labels.
//!
//! Assets carry an access timeout chosen from a fixed set of symbolic
//! durations. `Forever` maps to `0`, meaning no expiry.

use std::fmt;

use crate::errors::{DatamintError, DatamintResult};

/// Known timeout labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeoutLabel {
    Forever,
    OneDay,
    OneWeek,
    OneMonth,
    OneYear,
}

impl TimeoutLabel {
    /// Every label, in the order forms present them.
    pub const ALL: [TimeoutLabel; 5] = [
        Self::Forever,
        Self::OneDay,
        Self::OneWeek,
        Self::OneMonth,
        Self::OneYear,
    ];

    /// Parse a label as shown in forms (e.g. "1 week").
    pub fn parse(s: &str) -> DatamintResult<Self> {
        match s {
            "Forever" => Ok(Self::Forever),
            "1 day" => Ok(Self::OneDay),
            "1 week" => Ok(Self::OneWeek),
            "1 month" => Ok(Self::OneMonth),
            "1 year" => Ok(Self::OneYear),
            _ => Err(DatamintError::invalid_timeout(format!(
                "unknown timeout label: {s:?}"
            ))),
        }
    }

    /// Return the canonical label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Forever => "Forever",
            Self::OneDay => "1 day",
            Self::OneWeek => "1 week",
            Self::OneMonth => "1 month",
            Self::OneYear => "1 year",
        }
    }

    pub fn seconds(&self) -> u64 {
        match self {
            Self::Forever => 0,
            Self::OneDay => 86_400,
            Self::OneWeek => 604_800,
            Self::OneMonth => 2_630_000,
            Self::OneYear => 31_556_600,
        }
    }
}

impl fmt::Display for TimeoutLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a timeout label to seconds.
pub fn map_timeout(label: &str) -> DatamintResult<u64> {
    TimeoutLabel::parse(label).map(|l| l.seconds())
}
