// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::ScheduleRequest;
use fixture_gen_domain::{Match, Team, TimeSlot, WeekSchedule};
use time::{Date, Month};

pub fn create_test_teams(names: &[&str]) -> Vec<Team> {
    names.iter().map(|name| Team::new(name).unwrap()).collect()
}

pub fn create_test_slots(times: &[&str]) -> Vec<TimeSlot> {
    times.iter().map(|time| TimeSlot::parse(time).unwrap()).collect()
}

pub fn create_test_match(home: &str, away: &str) -> Match {
    Match::new(Team::new(home).unwrap(), Team::new(away).unwrap())
}

pub fn create_test_start_date() -> Date {
    Date::from_calendar_date(2024, Month::January, 1).unwrap()
}

pub fn create_test_request(
    teams: &[&str],
    times: &[&str],
    pitch_count: u32,
    week_count: u32,
) -> ScheduleRequest {
    ScheduleRequest::new(
        create_test_teams(teams),
        &create_test_slots(times),
        pitch_count,
        create_test_start_date(),
        week_count,
    )
    .unwrap()
}

/// Renders a week as `HH:MM/P: Home vs Away` lines for compact assertions.
pub fn describe_week(week: &WeekSchedule) -> Vec<String> {
    week.assignments
        .iter()
        .map(|a| format!("{}/{}: {}", a.time_slot, a.pitch.index(), a.fixture))
        .collect()
}

/// Generates team names `T1..=Tn`.
pub fn numbered_teams(count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("T{i}")).collect()
}
