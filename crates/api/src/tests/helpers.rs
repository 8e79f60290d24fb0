// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use crate::FixtureForm;
use fixture_gen_domain::Schedule;

pub fn create_test_form() -> FixtureForm {
    FixtureForm {
        raw_teams: String::from("A, B, C, D"),
        raw_times: String::from("18:00, 19:00"),
        pitches: 2,
        start_date: String::from("2024-01-01"),
        weeks: 3,
    }
}

pub fn create_test_schedule() -> Schedule {
    create_test_form().generate().unwrap().schedule
}
