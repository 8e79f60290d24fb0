// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, Match, Pitch, Team, TimeSlot};

#[test]
fn test_team_name_is_trimmed() {
    let team: Team = Team::new("  City  ").unwrap();
    assert_eq!(team.name(), "City");
    assert_eq!(team.to_string(), "City");
}

#[test]
fn test_team_rejects_blank_name() {
    assert!(matches!(
        Team::new("   "),
        Err(DomainError::InvalidTeamName(_))
    ));
    assert!(matches!(Team::new(""), Err(DomainError::InvalidTeamName(_))));
}

#[test]
fn test_team_names_are_case_sensitive() {
    assert_ne!(Team::new("city").unwrap(), Team::new("City").unwrap());
}

#[test]
fn test_time_slot_parses_colon_form() {
    let slot: TimeSlot = TimeSlot::parse("18:00").unwrap();
    assert_eq!(slot.time().hour(), 18);
    assert_eq!(slot.time().minute(), 0);
    assert_eq!(slot.to_string(), "18:00");
}

#[test]
fn test_time_slot_parses_unpadded_hour() {
    let slot: TimeSlot = TimeSlot::parse("9:30").unwrap();
    assert_eq!(slot.to_string(), "09:30");
    assert_eq!(String::from(slot), "09:30");
}

#[test]
fn test_time_slot_parses_military_form() {
    let slot: TimeSlot = "1945".parse().unwrap();
    assert_eq!(slot.to_string(), "19:45");
}

#[test]
fn test_time_slot_rejects_out_of_range() {
    assert!(matches!(
        TimeSlot::parse("25:00"),
        Err(DomainError::InvalidTimeSlot { .. })
    ));
    assert!(matches!(
        TimeSlot::parse("18:60"),
        Err(DomainError::InvalidTimeSlot { .. })
    ));
    assert!(matches!(
        TimeSlot::parse("evening"),
        Err(DomainError::InvalidTimeSlot { .. })
    ));
}

#[test]
fn test_pitch_rejects_zero() {
    assert_eq!(Pitch::new(0), Err(DomainError::InvalidPitch { index: 0 }));
    assert_eq!(Pitch::new(3).unwrap().index(), 3);
    assert_eq!(Pitch::new(3).unwrap().to_string(), "Pitch 3");
}

#[test]
fn test_match_pairing_ignores_orientation() {
    let a: Team = Team::new("A").unwrap();
    let b: Team = Team::new("B").unwrap();
    let forward: Match = Match::new(a.clone(), b.clone());
    let reverse: Match = Match::new(b.clone(), a.clone());

    assert_eq!(forward.pairing(), reverse.pairing());
    assert!(forward.involves(&a));
    assert!(forward.involves(&b));
    assert!(!forward.involves(&Team::new("C").unwrap()));
    assert_eq!(forward.to_string(), "A vs B");
}

#[test]
fn test_team_deserialization_validates() {
    let team: Team = serde_json::from_str("\" Rovers \"").unwrap();
    assert_eq!(team.name(), "Rovers");

    let result: Result<Team, _> = serde_json::from_str("\"  \"");
    assert!(result.is_err());
}

#[test]
fn test_pitch_deserialization_validates() {
    let pitch: Pitch = serde_json::from_str("2").unwrap();
    assert_eq!(pitch.index(), 2);

    let result: Result<Pitch, _> = serde_json::from_str("0");
    assert!(result.is_err());
}
