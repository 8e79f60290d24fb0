// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Round-robin pairing by the circle method.
//!
//! Teams are seated in entry order. With an odd count an empty seat is
//! appended, and whoever faces it has a bye. Each round pairs seat `k` with
//! seat `n - 1 - k`; between rounds every seat except the first moves one
//! place clockwise.
//!
//! ## Invariants
//!
//! - `n` seats (after padding) produce exactly `n - 1` rounds
//! - every unordered pair of teams meets in exactly one round
//! - no team appears twice in a round
//! - with an odd team count every team has exactly one bye
//! - output depends only on the entry order of the teams

use crate::error::SchedulingError;
use fixture_gen_domain::{Match, Round, Team, validate_teams_unique};
use tracing::debug;

/// Generates one full rotation of round-robin rounds.
///
/// Leagues with more weeks than rounds replay this sequence from the start
/// (double, triple round-robin and so on).
///
/// # Arguments
///
/// * `teams` - The teams in entry order
///
/// # Errors
///
/// Returns `SchedulingError::InvalidInput` if a team repeats or fewer than
/// 2 teams are given.
pub fn generate_rounds(teams: &[Team]) -> Result<Vec<Round>, SchedulingError> {
    validate_teams_unique(teams)?;

    if teams.len() < 2 {
        return Err(SchedulingError::invalid(
            "teams",
            format!("At least 2 distinct teams are required, got {}", teams.len()),
        ));
    }

    let mut seats: Vec<Option<&Team>> = teams.iter().map(Some).collect();
    if seats.len() % 2 == 1 {
        seats.push(None);
    }

    let seat_count: usize = seats.len();
    let mut rounds: Vec<Round> = Vec::with_capacity(seat_count - 1);

    for number in 1..seat_count {
        rounds.push(pair_seats(number, &seats));
        // Seat 0 stays put; the rest rotate by one.
        seats[1..].rotate_right(1);
    }

    debug!(
        "Generated {} rounds of {} matches for {} teams",
        rounds.len(),
        teams.len() / 2,
        teams.len()
    );

    Ok(rounds)
}

/// Pairs opposite seats for one round.
fn pair_seats(number: usize, seats: &[Option<&Team>]) -> Round {
    let seat_count: usize = seats.len();
    let mut matches: Vec<Match> = Vec::with_capacity(seat_count / 2);
    let mut bye: Option<Team> = None;

    for k in 0..seat_count / 2 {
        match (seats[k], seats[seat_count - 1 - k]) {
            (Some(home), Some(away)) => matches.push(Match::new(home.clone(), away.clone())),
            (Some(team), None) | (None, Some(team)) => bye = Some(team.clone()),
            (None, None) => {}
        }
    }

    Round {
        number,
        matches,
        bye,
    }
}
