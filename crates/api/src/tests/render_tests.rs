// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{EMPTY_SCHEDULE_MESSAGE, render_schedule, render_unscheduled};
use fixture_gen::ScheduleOutcome;
use fixture_gen_domain::{Schedule, WeekSchedule};
use time::{Date, Month};

use super::helpers::{create_test_form, create_test_schedule};

#[test]
fn test_render_schedule_lists_weeks_and_matches() {
    let text: String = render_schedule(&create_test_schedule()).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(
        lines,
        vec![
            "Week 1 – 2024-01-01",
            "  18:00 - Pitch 1: A vs D",
            "  18:00 - Pitch 2: B vs C",
            "Week 2 – 2024-01-08",
            "  18:00 - Pitch 1: A vs C",
            "  18:00 - Pitch 2: D vs B",
            "Week 3 – 2024-01-15",
            "  18:00 - Pitch 1: A vs B",
            "  18:00 - Pitch 2: C vs D",
        ]
    );
}

#[test]
fn test_render_empty_schedule() {
    assert_eq!(
        render_schedule(&Schedule::default()).unwrap().trim_end(),
        EMPTY_SCHEDULE_MESSAGE
    );
}

#[test]
fn test_render_unscheduled() {
    let mut form = create_test_form();
    form.raw_times = String::from("18:00");
    form.pitches = 1;
    let outcome: ScheduleOutcome = form.generate().unwrap();

    assert_eq!(
        render_unscheduled(&outcome.unscheduled),
        "Unscheduled (3):\n  D vs B\n  A vs B\n  C vs D\n"
    );
    assert_eq!(render_unscheduled(&[]), "");
}

#[test]
fn test_render_week_without_matches_prints_heading_only() {
    let date = Date::from_calendar_date(2024, Month::January, 1).unwrap();
    let schedule: Schedule = Schedule::new(vec![WeekSchedule::new(1, date)]);
    assert_eq!(render_schedule(&schedule).unwrap(), "Week 1 – 2024-01-01\n");
}
