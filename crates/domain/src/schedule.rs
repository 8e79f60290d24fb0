// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar-facing output of the scheduler.
//!
//! ## Invariants
//!
//! Within one `WeekSchedule`:
//! - each `(TimeSlot, Pitch)` pair is used at most once
//! - each team appears in at most one assignment
//!
//! A `Schedule` always holds one `WeekSchedule` per requested week, in
//! week order. Weeks may be empty.

use crate::types::{Match, Pitch, Team, TimeSlot};
use serde::{Deserialize, Serialize};
use time::Date;

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// A match placed at a specific kick-off time and pitch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotAssignment {
    /// The kick-off time.
    pub time_slot: TimeSlot,
    /// The pitch the match is played on.
    pub pitch: Pitch,
    /// The match itself.
    pub fixture: Match,
}

/// All matches played in one calendar week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekSchedule {
    /// 1-based week index.
    pub week: u32,
    /// The match date for this week.
    #[serde(with = "iso_date")]
    pub date: Date,
    /// Assignments ordered by time slot, then pitch.
    pub assignments: Vec<SlotAssignment>,
}

impl WeekSchedule {
    /// Creates an empty week.
    #[must_use]
    pub const fn new(week: u32, date: Date) -> Self {
        Self {
            week,
            date,
            assignments: Vec::new(),
        }
    }

    /// Returns whether `team` already has a match this week.
    #[must_use]
    pub fn has_team(&self, team: &Team) -> bool {
        self.assignments.iter().any(|a| a.fixture.involves(team))
    }

    /// Returns whether the `(time_slot, pitch)` pair is already used this week.
    #[must_use]
    pub fn is_slot_taken(&self, time_slot: TimeSlot, pitch: Pitch) -> bool {
        self.assignments
            .iter()
            .any(|a| a.time_slot == time_slot && a.pitch == pitch)
    }

    /// Returns whether no match is scheduled this week.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

/// The full fixture list, one entry per week.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule {
    weeks: Vec<WeekSchedule>,
}

impl Schedule {
    /// Creates a schedule from weeks already in week order.
    #[must_use]
    pub const fn new(weeks: Vec<WeekSchedule>) -> Self {
        Self { weeks }
    }

    /// Returns the weeks of this schedule.
    #[must_use]
    pub fn weeks(&self) -> &[WeekSchedule] {
        &self.weeks
    }

    /// Returns the number of weeks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.weeks.len()
    }

    /// Returns whether the schedule has no weeks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    /// Iterates over every scheduled match in week order.
    pub fn matches(&self) -> impl Iterator<Item = &Match> {
        self.weeks
            .iter()
            .flat_map(|week| week.assignments.iter().map(|a| &a.fixture))
    }

    /// Returns the total number of scheduled matches.
    #[must_use]
    pub fn match_count(&self) -> usize {
        self.weeks.iter().map(|week| week.assignments.len()).sum()
    }
}
