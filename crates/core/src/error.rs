// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use fixture_gen_domain::DomainError;

/// Errors reported by the scheduler.
///
/// Neither kind is transient; the caller decides whether to correct the
/// input or extend the week count and try again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchedulingError {
    /// The request was rejected before any scheduling took place.
    InvalidInput {
        /// The request field at fault.
        field: &'static str,
        /// A human-readable description of the problem.
        reason: String,
    },
    /// Some required matches did not fit into the configured weeks.
    CapacityExceeded {
        /// The number of matches left unscheduled after the final week.
        unscheduled: usize,
        /// The number of weeks that were scheduled.
        week_count: u32,
    },
}

impl SchedulingError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for SchedulingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, reason } => {
                write!(f, "Invalid input for field '{field}': {reason}")
            }
            Self::CapacityExceeded {
                unscheduled,
                week_count,
            } => {
                write!(
                    f,
                    "Capacity exceeded: {unscheduled} matches could not be placed within {week_count} weeks"
                )
            }
        }
    }
}

impl std::error::Error for SchedulingError {}

impl From<DomainError> for SchedulingError {
    fn from(err: DomainError) -> Self {
        let field: &'static str = match &err {
            DomainError::InvalidTeamName(_) | DomainError::DuplicateTeam { .. } => "teams",
            DomainError::InvalidTimeSlot { .. } => "time_slots",
            DomainError::InvalidPitch { .. } => "pitch_count",
            DomainError::InvalidWeekIndex { .. } => "week_count",
            DomainError::DateParseError { .. }
            | DomainError::DateFormatError { .. }
            | DomainError::DateArithmeticOverflow { .. } => "start_date",
        };
        Self::invalid(field, err.to_string())
    }
}
