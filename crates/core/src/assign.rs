// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Weekly `(time slot, pitch)` assignment.
//!
//! Slots are handed out with time slots as the outer axis (in entry order)
//! and pitches `1..=pitch_count` as the inner axis. Pending matches are
//! considered in order; a match is placed in the next free slot unless
//! either team is already playing that week or the week is full, in which
//! case it is deferred. Deferred matches keep their relative order.

use fixture_gen_domain::{Match, Pitch, SlotAssignment, Team, TimeSlot};
use std::collections::HashSet;

/// The result of filling one week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekFill {
    /// Matches placed this week, in slot order.
    pub assignments: Vec<SlotAssignment>,
    /// Matches that must wait for a later week, in their original order.
    pub deferred: Vec<Match>,
}

/// Iterates over every `(time slot, pitch)` pair of a week in fill order.
pub fn slot_order(
    time_slots: &[TimeSlot],
    pitch_count: u32,
) -> impl Iterator<Item = (TimeSlot, Pitch)> + '_ {
    time_slots.iter().flat_map(move |&time_slot| {
        (1..=pitch_count)
            .filter_map(|index| Pitch::new(index).ok())
            .map(move |pitch| (time_slot, pitch))
    })
}

/// Places as many pending matches as one week allows.
///
/// # Arguments
///
/// * `pending` - Carried-over matches first, then this week's own round
/// * `time_slots` - The kick-off times in fill order
/// * `pitch_count` - The number of pitches per kick-off
#[must_use]
pub fn fill_week(pending: Vec<Match>, time_slots: &[TimeSlot], pitch_count: u32) -> WeekFill {
    let mut free_slots = slot_order(time_slots, pitch_count).peekable();
    let mut booked: HashSet<Team> = HashSet::new();
    let mut assignments: Vec<SlotAssignment> = Vec::new();
    let mut deferred: Vec<Match> = Vec::new();

    for fixture in pending {
        if free_slots.peek().is_none()
            || booked.contains(&fixture.home)
            || booked.contains(&fixture.away)
        {
            deferred.push(fixture);
            continue;
        }

        if let Some((time_slot, pitch)) = free_slots.next() {
            booked.insert(fixture.home.clone());
            booked.insert(fixture.away.clone());
            assignments.push(SlotAssignment {
                time_slot,
                pitch,
                fixture,
            });
        }
    }

    WeekFill {
        assignments,
        deferred,
    }
}
