// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Raw form input parsing.
//!
//! The fixture form collects teams and kick-off times as comma-separated
//! text. This module turns that text, plus the numeric and date fields,
//! into a validated `ScheduleRequest`.

use crate::error::ApiError;
use fixture_gen::{ScheduleOutcome, ScheduleRequest, schedule};
use fixture_gen_domain::{
    Schedule, Team, TimeSlot, dedupe_time_slots, parse_calendar_date, validate_teams_unique,
};
use serde::{Deserialize, Serialize};
use time::Date;
use tracing::debug;

/// Pitch count offered before the user changes it.
pub const DEFAULT_PITCHES: i64 = 2;

/// Week count offered before the user changes it.
pub const DEFAULT_WEEKS: i64 = 8;

/// Splits comma-separated text into trimmed, non-empty entries.
fn split_entries(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|entry| !entry.is_empty())
}

/// Parses a comma-separated team list.
///
/// Entries are trimmed and blank entries dropped; entry order is kept.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if a team name appears twice.
pub fn parse_team_list(raw: &str) -> Result<Vec<Team>, ApiError> {
    let teams: Vec<Team> = split_entries(raw)
        .map(Team::new)
        .collect::<Result<_, _>>()?;
    validate_teams_unique(&teams)?;
    Ok(teams)
}

/// Parses a comma-separated list of 24-hour kick-off times.
///
/// Entries are trimmed, blank entries dropped and repeats collapsed to
/// their first occurrence.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if an entry is not a valid time.
pub fn parse_time_slots(raw: &str) -> Result<Vec<TimeSlot>, ApiError> {
    let slots: Vec<TimeSlot> = split_entries(raw)
        .map(TimeSlot::parse)
        .collect::<Result<_, _>>()?;
    Ok(dedupe_time_slots(&slots))
}

/// The raw text fields that are persisted between sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInputs {
    /// Comma-separated team names.
    pub teams: String,
    /// Comma-separated kick-off times.
    pub times: String,
}

/// The fixture form as entered by the user.
///
/// Numeric fields are signed because they arrive from free-form input;
/// non-positive values are rejected by `to_request`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureForm {
    /// Comma-separated team names.
    pub raw_teams: String,
    /// Comma-separated kick-off times.
    pub raw_times: String,
    /// Number of pitches.
    pub pitches: i64,
    /// Date of week 1 as `YYYY-MM-DD`.
    pub start_date: String,
    /// Number of weeks.
    pub weeks: i64,
}

impl Default for FixtureForm {
    fn default() -> Self {
        Self::from_raw_inputs(RawInputs::default())
    }
}

impl FixtureForm {
    /// Creates a form pre-filled with persisted text and default numbers.
    #[must_use]
    pub fn from_raw_inputs(inputs: RawInputs) -> Self {
        Self {
            raw_teams: inputs.teams,
            raw_times: inputs.times,
            pitches: DEFAULT_PITCHES,
            start_date: String::new(),
            weeks: DEFAULT_WEEKS,
        }
    }

    /// Returns the text fields to persist.
    #[must_use]
    pub fn raw_inputs(&self) -> RawInputs {
        RawInputs {
            teams: self.raw_teams.clone(),
            times: self.raw_times.clone(),
        }
    }

    /// Returns whether every field has been filled in.
    ///
    /// This is a cheap readiness check; `to_request` performs full
    /// validation.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.raw_teams.trim().is_empty()
            && !self.raw_times.trim().is_empty()
            && self.pitches > 0
            && !self.start_date.is_empty()
            && self.weeks > 0
    }

    /// Validates the form into a typed scheduling request.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidInput` if any field is invalid.
    pub fn to_request(&self) -> Result<ScheduleRequest, ApiError> {
        let teams: Vec<Team> = parse_team_list(&self.raw_teams)?;
        let time_slots: Vec<TimeSlot> = parse_time_slots(&self.raw_times)?;
        let pitch_count: u32 = positive_count("pitches", self.pitches)?;
        let start_date: Date = parse_calendar_date(&self.start_date)?;
        let week_count: u32 = positive_count("weeks", self.weeks)?;

        debug!(
            "Parsed form: {} teams, {} time slots, {} pitches, {} weeks from {}",
            teams.len(),
            time_slots.len(),
            pitch_count,
            week_count,
            start_date
        );

        Ok(ScheduleRequest::new(
            teams,
            &time_slots,
            pitch_count,
            start_date,
            week_count,
        )?)
    }

    /// Validates the form and generates the schedule.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidInput` if any field is invalid. A schedule
    /// that does not fit is not an error here; inspect
    /// `ScheduleOutcome::unscheduled`.
    pub fn generate(&self) -> Result<ScheduleOutcome, ApiError> {
        let request: ScheduleRequest = self.to_request()?;
        Ok(schedule(&request)?)
    }

    /// Validates the form and generates a schedule that places every match.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidInput` if any field is invalid, or
    /// `ApiError::Scheduling` if some matches do not fit.
    pub fn generate_complete(&self) -> Result<Schedule, ApiError> {
        Ok(self.generate()?.into_complete()?)
    }
}

/// Converts a form count to `u32`, rejecting zero and negative values.
fn positive_count(field: &str, value: i64) -> Result<u32, ApiError> {
    if value <= 0 {
        return Err(ApiError::invalid(
            field,
            format!("Must be greater than 0, got {value}"),
        ));
    }
    u32::try_from(value).map_err(|_| {
        ApiError::invalid(field, format!("Must be at most {}, got {value}", u32::MAX))
    })
}
