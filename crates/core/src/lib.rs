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

mod assign;
mod error;
mod request;
mod round_robin;
mod scheduler;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use assign::{WeekFill, fill_week, slot_order};
pub use error::SchedulingError;
pub use request::ScheduleRequest;
pub use round_robin::generate_rounds;
pub use scheduler::{ScheduleOutcome, generate_schedule, schedule};
