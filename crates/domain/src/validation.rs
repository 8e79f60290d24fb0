// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{Team, TimeSlot};
use std::collections::HashSet;

/// Validates that every team name is unique.
///
/// Names are compared after trimming, which `Team::new` has already applied.
///
/// # Arguments
///
/// * `teams` - The teams in entry order
///
/// # Returns
///
/// * `Ok(())` if no name repeats
/// * `Err(DomainError::DuplicateTeam)` naming the first repeated team
///
/// # Errors
///
/// Returns an error if the same name appears more than once.
pub fn validate_teams_unique(teams: &[Team]) -> Result<(), DomainError> {
    let mut seen: HashSet<&Team> = HashSet::with_capacity(teams.len());

    for team in teams {
        // Rule: a team may be entered only once
        if !seen.insert(team) {
            return Err(DomainError::DuplicateTeam {
                name: team.name().to_string(),
            });
        }
    }

    Ok(())
}

/// Removes repeated time slots, keeping the first occurrence of each.
///
/// Entry order is preserved; it decides which kick-off is filled first.
#[must_use]
pub fn dedupe_time_slots(time_slots: &[TimeSlot]) -> Vec<TimeSlot> {
    let mut seen: HashSet<TimeSlot> = HashSet::with_capacity(time_slots.len());
    time_slots
        .iter()
        .copied()
        .filter(|slot| seen.insert(*slot))
        .collect()
}
