// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod calendar;
mod error;
mod schedule;
mod types;
mod validation;

#[cfg(test)]
mod tests;

// Re-export public types
pub use calendar::{format_calendar_date, parse_calendar_date, week_date};
pub use error::DomainError;
pub use schedule::{Schedule, SlotAssignment, WeekSchedule};
pub use types::{Match, Pitch, Round, Team, TimeSlot};
pub use validation::{dedupe_time_slots, validate_teams_unique};
