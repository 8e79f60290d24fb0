// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Time;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

/// Accepted spellings of a 24-hour time of day, tried in order.
const TIME_SLOT_FORMATS: &[&[BorrowedFormatItem<'static>]] = &[
    format_description!("[hour]:[minute]"),
    format_description!("[hour padding:none]:[minute]"),
    format_description!("[hour][minute]"),
];

/// Canonical spelling used for display and serialization.
const TIME_SLOT_DISPLAY: &[BorrowedFormatItem<'static>] = format_description!("[hour]:[minute]");

/// A team taking part in the league.
///
/// The name is trimmed on construction and must not be empty.
/// Teams compare by exact (case-sensitive) name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Team {
    name: String,
}

impl Team {
    /// Creates a new `Team`.
    ///
    /// # Arguments
    ///
    /// * `name` - The display name (surrounding whitespace is removed)
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTeamName` if the trimmed name is empty.
    pub fn new(name: &str) -> Result<Self, DomainError> {
        let trimmed: &str = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidTeamName(String::from(
                "Team name cannot be empty",
            )));
        }
        Ok(Self {
            name: trimmed.to_string(),
        })
    }

    /// Returns the team name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

impl TryFrom<String> for Team {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Team> for String {
    fn from(team: Team) -> Self {
        team.name
    }
}

/// A kick-off time available in every week, on a 24-hour clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeSlot {
    time: Time,
}

impl TimeSlot {
    /// Creates a time slot from an already-validated time of day.
    #[must_use]
    pub const fn new(time: Time) -> Self {
        Self { time }
    }

    /// Parses a time slot from `HH:MM`, `H:MM` or military `HHMM`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTimeSlot` if none of the accepted
    /// spellings match.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let trimmed: &str = value.trim();
        let mut last_error: Option<time::error::Parse> = None;

        for format in TIME_SLOT_FORMATS {
            match Time::parse(trimmed, format) {
                Ok(time) => return Ok(Self { time }),
                Err(e) => last_error = Some(e),
            }
        }

        Err(DomainError::InvalidTimeSlot {
            value: value.to_string(),
            reason: last_error.map_or_else(
                || String::from("expected a 24-hour time such as 18:00"),
                |e| e.to_string(),
            ),
        })
    }

    /// Returns the underlying time of day.
    #[must_use]
    pub const fn time(&self) -> Time {
        self.time
    }
}

impl std::fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text: String = self
            .time
            .format(TIME_SLOT_DISPLAY)
            .map_err(|_| std::fmt::Error)?;
        f.write_str(&text)
    }
}

impl FromStr for TimeSlot {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TimeSlot {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TimeSlot> for String {
    fn from(slot: TimeSlot) -> Self {
        slot.to_string()
    }
}

/// A pitch, identified only by its 1-based index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Pitch {
    index: u32,
}

impl Pitch {
    /// Creates a new `Pitch`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPitch` if `index` is zero.
    pub const fn new(index: u32) -> Result<Self, DomainError> {
        if index == 0 {
            return Err(DomainError::InvalidPitch { index });
        }
        Ok(Self { index })
    }

    /// Returns the 1-based pitch index.
    #[must_use]
    pub const fn index(&self) -> u32 {
        self.index
    }
}

impl std::fmt::Display for Pitch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pitch {}", self.index)
    }
}

impl TryFrom<u32> for Pitch {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Pitch> for u32 {
    fn from(pitch: Pitch) -> Self {
        pitch.index
    }
}

/// A fixture between two distinct teams.
///
/// Home and away are labels only; two matches with the same teams in either
/// orientation are the same pairing for scheduling purposes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Match {
    /// The team listed first.
    pub home: Team,
    /// The team listed second.
    pub away: Team,
}

impl Match {
    /// Creates a new `Match`.
    #[must_use]
    pub const fn new(home: Team, away: Team) -> Self {
        Self { home, away }
    }

    /// Returns whether `team` plays in this match.
    #[must_use]
    pub fn involves(&self, team: &Team) -> bool {
        &self.home == team || &self.away == team
    }

    /// Returns the two teams ordered by name, independent of home/away.
    #[must_use]
    pub fn pairing(&self) -> (&Team, &Team) {
        if self.home <= self.away {
            (&self.home, &self.away)
        } else {
            (&self.away, &self.home)
        }
    }
}

impl std::fmt::Display for Match {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} vs {}", self.home, self.away)
    }
}

/// One set of pairings from the round-robin rotation.
///
/// No team appears twice in a round. With an odd team count exactly one
/// team sits the round out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    /// 1-based position of this round within one full rotation.
    pub number: usize,
    /// The pairings of this round, bye excluded.
    pub matches: Vec<Match>,
    /// The team without an opponent this round, if any.
    pub bye: Option<Team>,
}
