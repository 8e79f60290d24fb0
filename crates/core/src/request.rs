// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::SchedulingError;
use fixture_gen_domain::{Team, TimeSlot, dedupe_time_slots, validate_teams_unique, week_date};
use time::Date;

/// A validated scheduling request.
///
/// Construction performs every input check, so scheduling a
/// `ScheduleRequest` never fails on bad input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleRequest {
    teams: Vec<Team>,
    time_slots: Vec<TimeSlot>,
    pitch_count: u32,
    start_date: Date,
    week_count: u32,
}

impl ScheduleRequest {
    /// Creates a new `ScheduleRequest`.
    ///
    /// Repeated time slots are collapsed, keeping the first occurrence.
    ///
    /// # Arguments
    ///
    /// * `teams` - The teams in entry order (the order drives the pairings)
    /// * `time_slots` - The kick-off times in fill order
    /// * `pitch_count` - The number of pitches available at every kick-off
    /// * `start_date` - The date of week 1
    /// * `week_count` - The number of weeks to schedule
    ///
    /// # Errors
    ///
    /// Returns `SchedulingError::InvalidInput` if:
    /// - a team name repeats
    /// - fewer than 2 teams are given
    /// - no time slot is given
    /// - `pitch_count` or `week_count` is zero
    /// - the last week's date is outside the supported calendar range
    pub fn new(
        teams: Vec<Team>,
        time_slots: &[TimeSlot],
        pitch_count: u32,
        start_date: Date,
        week_count: u32,
    ) -> Result<Self, SchedulingError> {
        validate_teams_unique(&teams)?;

        if teams.len() < 2 {
            return Err(SchedulingError::invalid(
                "teams",
                format!("At least 2 distinct teams are required, got {}", teams.len()),
            ));
        }

        let time_slots: Vec<TimeSlot> = dedupe_time_slots(time_slots);
        if time_slots.is_empty() {
            return Err(SchedulingError::invalid(
                "time_slots",
                "At least one time slot is required",
            ));
        }

        if pitch_count == 0 {
            return Err(SchedulingError::invalid(
                "pitch_count",
                "Pitch count must be greater than 0",
            ));
        }

        if week_count == 0 {
            return Err(SchedulingError::invalid(
                "week_count",
                "Week count must be greater than 0",
            ));
        }

        week_date(start_date, week_count)?;

        Ok(Self {
            teams,
            time_slots,
            pitch_count,
            start_date,
            week_count,
        })
    }

    /// Returns the teams in entry order.
    #[must_use]
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// Returns the distinct time slots in fill order.
    #[must_use]
    pub fn time_slots(&self) -> &[TimeSlot] {
        &self.time_slots
    }

    /// Returns the number of pitches.
    #[must_use]
    pub const fn pitch_count(&self) -> u32 {
        self.pitch_count
    }

    /// Returns the date of week 1.
    #[must_use]
    pub const fn start_date(&self) -> Date {
        self.start_date
    }

    /// Returns the number of weeks to schedule.
    #[must_use]
    pub const fn week_count(&self) -> u32 {
        self.week_count
    }

    /// Returns how many matches fit into one week.
    #[must_use]
    pub fn weekly_capacity(&self) -> usize {
        let pitches: usize = usize::try_from(self.pitch_count).unwrap_or(usize::MAX);
        self.time_slots.len().saturating_mul(pitches)
    }
}
