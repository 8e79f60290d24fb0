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
    clippy::unwrap_used,
    clippy::expect_used
)]

//! The boundary between the fixture form and the scheduler.
//!
//! Callers hand over raw form text, receive a schedule, and choose how to
//! present or export it. Nothing here owns scheduling state.

mod csv_export;
mod error;
mod input;
mod render;
mod storage;

#[cfg(test)]
mod tests;

pub use csv_export::{
    CSV_HEADERS, DEFAULT_EXPORT_FILE_NAME, ROW_FIELD_COUNT, schedule_to_csv, write_schedule_csv,
};
pub use error::ApiError;
pub use input::{
    DEFAULT_PITCHES, DEFAULT_WEEKS, FixtureForm, RawInputs, parse_team_list, parse_time_slots,
};
pub use render::{EMPTY_SCHEDULE_MESSAGE, render_schedule, render_unscheduled};
pub use storage::{
    KeyValueStore, MemoryStore, RAW_TEAMS_KEY, RAW_TIMES_KEY, load_raw_inputs, save_raw_inputs,
};

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;
