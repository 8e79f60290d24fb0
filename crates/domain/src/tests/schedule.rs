// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Match, Pitch, Schedule, SlotAssignment, Team, TimeSlot, WeekSchedule};
use time::{Date, Month};

fn create_test_week() -> WeekSchedule {
    let mut week: WeekSchedule =
        WeekSchedule::new(1, Date::from_calendar_date(2024, Month::January, 1).unwrap());
    week.assignments.push(SlotAssignment {
        time_slot: TimeSlot::parse("18:00").unwrap(),
        pitch: Pitch::new(1).unwrap(),
        fixture: Match::new(Team::new("A").unwrap(), Team::new("D").unwrap()),
    });
    week
}

#[test]
fn test_week_schedule_tracks_booked_teams_and_slots() {
    let week: WeekSchedule = create_test_week();

    assert!(week.has_team(&Team::new("A").unwrap()));
    assert!(!week.has_team(&Team::new("B").unwrap()));
    assert!(week.is_slot_taken(TimeSlot::parse("18:00").unwrap(), Pitch::new(1).unwrap()));
    assert!(!week.is_slot_taken(TimeSlot::parse("18:00").unwrap(), Pitch::new(2).unwrap()));
    assert!(!week.is_empty());
}

#[test]
fn test_schedule_counts_matches() {
    let empty: WeekSchedule =
        WeekSchedule::new(2, Date::from_calendar_date(2024, Month::January, 8).unwrap());
    let schedule: Schedule = Schedule::new(vec![create_test_week(), empty]);

    assert_eq!(schedule.len(), 2);
    assert_eq!(schedule.match_count(), 1);
    assert_eq!(schedule.matches().count(), 1);
    assert!(schedule.weeks()[1].is_empty());
}

#[test]
fn test_week_schedule_serializes_with_iso_date_and_clock_time() {
    let json: String = serde_json::to_string(&create_test_week()).unwrap();
    assert_eq!(
        json,
        r#"{"week":1,"date":"2024-01-01","assignments":[{"time_slot":"18:00","pitch":1,"fixture":{"home":"A","away":"D"}}]}"#
    );

    let back: WeekSchedule = serde_json::from_str(&json).unwrap();
    assert_eq!(back, create_test_week());
}
