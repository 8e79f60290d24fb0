// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, Team, TimeSlot, dedupe_time_slots, validate_teams_unique};

fn teams(names: &[&str]) -> Vec<Team> {
    names.iter().map(|name| Team::new(name).unwrap()).collect()
}

#[test]
fn test_validate_teams_unique_accepts_distinct_names() {
    let result: Result<(), DomainError> = validate_teams_unique(&teams(&["A", "B", "C"]));
    assert!(result.is_ok());
}

#[test]
fn test_validate_teams_unique_rejects_duplicate_after_trim() {
    let result: Result<(), DomainError> = validate_teams_unique(&teams(&["A", "B", " A "]));
    assert_eq!(
        result,
        Err(DomainError::DuplicateTeam {
            name: String::from("A")
        })
    );
}

#[test]
fn test_validate_teams_unique_accepts_empty_list() {
    assert!(validate_teams_unique(&[]).is_ok());
}

#[test]
fn test_dedupe_time_slots_keeps_first_occurrence_order() {
    let slots: Vec<TimeSlot> = ["19:00", "18:00", "1900", "20:00", "18:00"]
        .iter()
        .map(|s| TimeSlot::parse(s).unwrap())
        .collect();

    let deduped: Vec<String> = dedupe_time_slots(&slots)
        .iter()
        .map(ToString::to_string)
        .collect();

    assert_eq!(deduped, vec!["19:00", "18:00", "20:00"]);
}
