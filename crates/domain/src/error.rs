// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::Date;

/// Errors that can occur while constructing or validating domain values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Team name is empty after trimming.
    InvalidTeamName(String),
    /// The same team name appears more than once.
    DuplicateTeam {
        /// The duplicated name, as trimmed.
        name: String,
    },
    /// A time slot could not be parsed as a 24-hour time of day.
    InvalidTimeSlot {
        /// The raw value that was rejected.
        value: String,
        /// The parser's explanation.
        reason: String,
    },
    /// Pitch index is zero.
    InvalidPitch {
        /// The rejected index.
        index: u32,
    },
    /// Week index is zero.
    InvalidWeekIndex {
        /// The rejected index.
        index: u32,
    },
    /// Failed to parse date from string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Failed to format a date as `YYYY-MM-DD`.
    DateFormatError {
        /// The date that could not be formatted.
        date: Date,
        /// The formatting error message.
        error: String,
    },
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// The date the arithmetic started from.
        start_date: Date,
        /// The number of weeks that were added.
        weeks: u32,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTeamName(msg) => write!(f, "Invalid team name: {msg}"),
            Self::DuplicateTeam { name } => {
                write!(f, "Team '{name}' appears more than once")
            }
            Self::InvalidTimeSlot { value, reason } => {
                write!(f, "Invalid time slot '{value}': {reason}")
            }
            Self::InvalidPitch { index } => {
                write!(f, "Invalid pitch index: {index}. Must be 1 or greater")
            }
            Self::InvalidWeekIndex { index } => {
                write!(f, "Invalid week index: {index}. Must be 1 or greater")
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::DateFormatError { date, error } => {
                write!(f, "Failed to format date {date}: {error}")
            }
            Self::DateArithmeticOverflow { start_date, weeks } => {
                write!(
                    f,
                    "Date arithmetic overflow while adding {weeks} weeks to {start_date}"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
