// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::ApiError;
use fixture_gen_domain::{Match, Schedule, format_calendar_date};

/// Shown in place of a schedule with no weeks.
pub const EMPTY_SCHEDULE_MESSAGE: &str = "No fixtures generated yet.";

/// Renders a schedule as plain text, one block per week.
///
/// ```text
/// Week 1 – 2024-01-01
///   18:00 - Pitch 1: A vs D
/// ```
///
/// # Errors
///
/// Returns `ApiError::Export` if a week date cannot be formatted.
pub fn render_schedule(schedule: &Schedule) -> Result<String, ApiError> {
    if schedule.is_empty() {
        return Ok(format!("{EMPTY_SCHEDULE_MESSAGE}\n"));
    }

    let mut out: String = String::new();
    for week in schedule.weeks() {
        let date: String = format_calendar_date(week.date).map_err(|e| ApiError::Export {
            message: e.to_string(),
        })?;
        out.push_str(&format!("Week {} – {date}\n", week.week));
        for assignment in &week.assignments {
            out.push_str(&format!(
                "  {} - {}: {}\n",
                assignment.time_slot, assignment.pitch, assignment.fixture
            ));
        }
    }
    Ok(out)
}

/// Renders the matches that did not fit, or nothing if all were placed.
#[must_use]
pub fn render_unscheduled(unscheduled: &[Match]) -> String {
    if unscheduled.is_empty() {
        return String::new();
    }

    let mut out: String = format!("Unscheduled ({}):\n", unscheduled.len());
    for fixture in unscheduled {
        out.push_str(&format!("  {fixture}\n"));
    }
    out
}
