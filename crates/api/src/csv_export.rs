// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! CSV export of a generated schedule.
//!
//! The layout follows the fixture import format used by league websites:
//! a fixed 11-column header and one row per match. Rows carry ten fields,
//! the four fixture values followed by six empty result and statistics
//! fields, so the writer runs in flexible mode.

use crate::error::ApiError;
use fixture_gen_domain::{Schedule, format_calendar_date};
use std::io::Write;
use tracing::info;

const COLUMN_COUNT: usize = 11;

/// Fields per fixture row, one fewer than the header.
pub const ROW_FIELD_COUNT: usize = 10;

/// Column headers expected by the fixture importer.
pub const CSV_HEADERS: [&str; COLUMN_COUNT] = [
    "Date",
    "Time",
    "Venue",
    "Teams",
    "Results",
    "Outcome",
    "Players",
    "Goals",
    "Assists",
    "Yellow Cards",
    "Red Cards",
];

/// File name offered for the export.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "fixtures.csv";

/// Writes `schedule` as CSV to any byte sink.
///
/// # Errors
///
/// Returns `ApiError::Export` if the sink cannot be written.
pub fn write_schedule_csv<W: Write>(schedule: &Schedule, sink: W) -> Result<(), ApiError> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .flexible(true)
        .from_writer(sink);

    writer.write_record(CSV_HEADERS)?;

    let mut rows: usize = 0;
    for week in schedule.weeks() {
        let date: String = format_calendar_date(week.date).map_err(|e| ApiError::Export {
            message: e.to_string(),
        })?;
        for assignment in &week.assignments {
            let time: String = assignment.time_slot.to_string();
            let venue: String = assignment.pitch.to_string();
            let teams: String = assignment.fixture.to_string();

            let mut record: [&str; ROW_FIELD_COUNT] = [""; ROW_FIELD_COUNT];
            record[0] = &date;
            record[1] = &time;
            record[2] = &venue;
            record[3] = &teams;
            writer.write_record(record)?;
            rows += 1;
        }
    }

    writer.flush()?;
    info!("Exported {} fixtures to CSV", rows);
    Ok(())
}

/// Serializes `schedule` to CSV bytes.
///
/// # Errors
///
/// Returns `ApiError::Export` if serialization fails.
pub fn schedule_to_csv(schedule: &Schedule) -> Result<Vec<u8>, ApiError> {
    let mut buffer: Vec<u8> = Vec::new();
    write_schedule_csv(schedule, &mut buffer)?;
    Ok(buffer)
}
