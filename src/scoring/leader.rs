use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use super::compare::Pinfall;
use crate::entry::PerSide;

/// Who is ahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Leader {
    Home,
    Visitor,
    Tie,
}

/// What settled the leader. Serialized and displayed with the exact labels
/// shown on the scoreboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Method {
    #[serde(rename = "Points")]
    Points,
    #[serde(rename = "Points tied (need more pins entered)")]
    PointsTiedIncomplete,
    #[serde(rename = "Tiebreak: Total Pinfall")]
    TotalPinfall,
    #[serde(rename = "Tiebreak: After American Game 1 (Points)")]
    AmericanGame1Points,
    #[serde(rename = "Tiebreak: After American Game 1 (Pinfall)")]
    AmericanGame1Pinfall,
    #[serde(rename = "Still tied")]
    StillTied,
}

impl Method {
    pub fn label(&self) -> &'static str {
        match self {
            Method::Points => "Points",
            Method::PointsTiedIncomplete => "Points tied (need more pins entered)",
            Method::TotalPinfall => "Tiebreak: Total Pinfall",
            Method::AmericanGame1Points => "Tiebreak: After American Game 1 (Points)",
            Method::AmericanGame1Pinfall => "Tiebreak: After American Game 1 (Pinfall)",
            Method::StillTied => "Still tied",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchStatus {
    pub leader: Leader,
    pub method: Method,
}

/// Everything the tiebreak cascade looks at.
#[derive(Debug, Clone, Copy)]
pub struct StandingInput {
    pub points: PerSide<f64>,
    pub total_pins: Pinfall,
    pub american1_points: PerSide<f64>,
    pub american1_pins: Pinfall,
}

/// Decide the leader, walking the tiebreaks in order and stopping at the
/// first one that separates the teams:
///
/// 1. total points
/// 2. total pinfall (only once every pin is entered; until then a points tie
///    stays a tie)
/// 3. points after American Game 1, then pinfall after American Game 1 (only
///    when American Game 1 is fully entered)
pub fn determine_leader(input: &StandingInput) -> MatchStatus {
    if let Some(leader) = ahead(input.points.home, input.points.visitor) {
        return MatchStatus {
            leader,
            method: Method::Points,
        };
    }

    if !input.total_pins.complete {
        return MatchStatus {
            leader: Leader::Tie,
            method: Method::PointsTiedIncomplete,
        };
    }
    if let Some(leader) = ahead(input.total_pins.home, input.total_pins.visitor) {
        return MatchStatus {
            leader,
            method: Method::TotalPinfall,
        };
    }

    if input.american1_pins.complete {
        if let Some(leader) = ahead(input.american1_points.home, input.american1_points.visitor) {
            return MatchStatus {
                leader,
                method: Method::AmericanGame1Points,
            };
        }
        if let Some(leader) = ahead(input.american1_pins.home, input.american1_pins.visitor) {
            return MatchStatus {
                leader,
                method: Method::AmericanGame1Pinfall,
            };
        }
    }

    MatchStatus {
        leader: Leader::Tie,
        method: Method::StillTied,
    }
}

fn ahead<T: PartialOrd>(home: T, visitor: T) -> Option<Leader> {
    match home.partial_cmp(&visitor) {
        Some(Ordering::Greater) => Some(Leader::Home),
        Some(Ordering::Less) => Some(Leader::Visitor),
        _ => None,
    }
}
