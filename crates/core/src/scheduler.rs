// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! End-to-end fixture generation.
//!
//! Stages, each of which either completes or fails the whole call:
//! 1. validate inputs into a `ScheduleRequest`
//! 2. generate one rotation of round-robin rounds
//! 3. cycle the rotation to cover every requested week
//! 4. fill each week, carrying overflow to the start of the next week
//! 5. attach week dates
//!
//! Matches still pending after the final week are returned with the
//! schedule instead of being dropped.

use crate::assign::{WeekFill, fill_week};
use crate::error::SchedulingError;
use crate::request::ScheduleRequest;
use crate::round_robin::generate_rounds;
use fixture_gen_domain::{
    Match, Round, Schedule, Team, TimeSlot, WeekSchedule, parse_calendar_date, week_date,
};
use serde::Serialize;
use time::Date;
use tracing::{debug, info, warn};

/// A generated schedule together with any matches that did not fit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleOutcome {
    /// One entry per requested week.
    pub schedule: Schedule,
    /// Matches still waiting for a slot after the final week, in the order
    /// they would have been played.
    pub unscheduled: Vec<Match>,
}

impl ScheduleOutcome {
    /// Returns whether every required match was placed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.unscheduled.is_empty()
    }

    /// Returns the `CapacityExceeded` condition, if any match is unscheduled.
    #[must_use]
    pub fn capacity_exceeded(&self) -> Option<SchedulingError> {
        if self.is_complete() {
            return None;
        }
        Some(SchedulingError::CapacityExceeded {
            unscheduled: self.unscheduled.len(),
            week_count: u32::try_from(self.schedule.len()).unwrap_or(u32::MAX),
        })
    }

    /// Returns the schedule only if it is complete.
    ///
    /// # Errors
    ///
    /// Returns `SchedulingError::CapacityExceeded` if any match is
    /// unscheduled.
    pub fn into_complete(self) -> Result<Schedule, SchedulingError> {
        match self.capacity_exceeded() {
            Some(err) => Err(err),
            None => Ok(self.schedule),
        }
    }
}

/// Builds the schedule for a validated request.
///
/// Identical requests always yield identical outcomes.
///
/// # Errors
///
/// Returns an error if the round-robin rotation or a week date cannot be
/// produced. Both are ruled out by `ScheduleRequest::new`.
pub fn schedule(request: &ScheduleRequest) -> Result<ScheduleOutcome, SchedulingError> {
    let rounds: Vec<Round> = generate_rounds(request.teams())?;
    let mut pending: Vec<Match> = Vec::new();
    let mut weeks: Vec<WeekSchedule> =
        Vec::with_capacity(usize::try_from(request.week_count()).unwrap_or_default());

    for (week, round) in (1..=request.week_count()).zip(rounds.iter().cycle()) {
        let carried: usize = pending.len();
        pending.extend(round.matches.iter().cloned());

        let WeekFill {
            assignments,
            deferred,
        } = fill_week(pending, request.time_slots(), request.pitch_count());

        debug!(
            "Week {}: round {}, {} carried in, {} placed, {} carried out",
            week,
            round.number,
            carried,
            assignments.len(),
            deferred.len()
        );

        pending = deferred;

        let mut week_schedule: WeekSchedule =
            WeekSchedule::new(week, week_date(request.start_date(), week)?);
        for assignment in assignments {
            debug_assert!(!week_schedule.is_slot_taken(assignment.time_slot, assignment.pitch));
            debug_assert!(!week_schedule.has_team(&assignment.fixture.home));
            debug_assert!(!week_schedule.has_team(&assignment.fixture.away));
            week_schedule.assignments.push(assignment);
        }
        weeks.push(week_schedule);
    }

    let outcome: ScheduleOutcome = ScheduleOutcome {
        schedule: Schedule::new(weeks),
        unscheduled: pending,
    };

    if outcome.is_complete() {
        info!(
            "Scheduled {} matches over {} weeks",
            outcome.schedule.match_count(),
            request.week_count()
        );
    } else {
        warn!(
            "Capacity exceeded: {} matches unscheduled after {} weeks ({} per week)",
            outcome.unscheduled.len(),
            request.week_count(),
            request.weekly_capacity()
        );
    }

    Ok(outcome)
}

/// Validates raw inputs and generates a fixture schedule.
///
/// # Arguments
///
/// * `teams` - Team names in entry order (trimmed; must be unique)
/// * `time_slots` - Kick-off times as `HH:MM` or `HHMM`; repeats collapse
/// * `pitch_count` - The number of pitches available at every kick-off
/// * `start_date` - The date of week 1 as `YYYY-MM-DD`
/// * `week_count` - The number of weeks to schedule
///
/// # Returns
///
/// A `ScheduleOutcome` holding exactly `week_count` weeks and any matches
/// that did not fit. See `ScheduleOutcome::capacity_exceeded`.
///
/// # Errors
///
/// Returns `SchedulingError::InvalidInput` if any input is invalid; no
/// scheduling is attempted in that case.
pub fn generate_schedule<T, S>(
    teams: &[T],
    time_slots: &[S],
    pitch_count: u32,
    start_date: &str,
    week_count: u32,
) -> Result<ScheduleOutcome, SchedulingError>
where
    T: AsRef<str>,
    S: AsRef<str>,
{
    let teams: Vec<Team> = teams
        .iter()
        .map(|name| Team::new(name.as_ref()))
        .collect::<Result<_, _>>()?;
    let time_slots: Vec<TimeSlot> = time_slots
        .iter()
        .map(|slot| TimeSlot::parse(slot.as_ref()))
        .collect::<Result<_, _>>()?;
    let start_date: Date = parse_calendar_date(start_date)?;

    let request: ScheduleRequest =
        ScheduleRequest::new(teams, &time_slots, pitch_count, start_date, week_count)?;

    schedule(&request)
}
