use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::profile::ProfileId;

/// Swipe direction chosen by the reviewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Reject.
    Left,
    /// Accept.
    Right,
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "l" | "left" | "n" | "no" => Ok(Direction::Left),
            "r" | "right" | "y" | "yes" => Ok(Direction::Right),
            other => Err(format!("unknown direction '{}'", other)),
        }
    }
}

/// Outcome recorded for one profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Accepted,
    Rejected,
}

impl From<Direction> for Decision {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Left => Decision::Rejected,
            Direction::Right => Decision::Accepted,
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Accepted => f.write_str("accepted"),
            Decision::Rejected => f.write_str("rejected"),
        }
    }
}

/// Identity → decision mapping, sent to the sink as a flat JSON object.
///
/// Ordered by identity so the serialized form is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DecisionMap(BTreeMap<ProfileId, Decision>);

impl DecisionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `decision`, replacing any earlier one for `id`.
    pub fn record(&mut self, id: ProfileId, decision: Decision) -> Option<Decision> {
        self.0.insert(id, decision)
    }

    pub fn get(&self, id: &ProfileId) -> Option<Decision> {
        self.0.get(id).copied()
    }

    pub fn contains(&self, id: &ProfileId) -> bool {
        self.0.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ProfileId, Decision)> {
        self.0.iter().map(|(id, decision)| (id, *decision))
    }

    pub fn ids(&self) -> impl Iterator<Item = &ProfileId> {
        self.0.keys()
    }

    pub fn accepted(&self) -> usize {
        self.0.values().filter(|d| **d == Decision::Accepted).count()
    }

    pub fn rejected(&self) -> usize {
        self.0.values().filter(|d| **d == Decision::Rejected).count()
    }
}

impl FromIterator<(ProfileId, Decision)> for DecisionMap {
    fn from_iter<T: IntoIterator<Item = (ProfileId, Decision)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
