use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::entry::{Match, PerSide};
use crate::scoring::{Leader, Method, ScoreReport};

/// Most snapshots kept on disk.
pub const MAX_HISTORY: usize = 200;

/// A saved match: the headline numbers plus the full entry so it can be
/// reloaded exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub id: String,
    pub date: String,
    pub home_name: String,
    pub visitor_name: String,
    pub points: PerSide<f64>,
    pub pins: PerSide<u32>,
    pub leader: Leader,
    pub method: Method,
    pub raw: Match,
}

impl Snapshot {
    /// Capture a match and its report. Team names are stored as displayed, so
    /// blank names are saved as "Home"/"Visitor".
    pub fn capture(m: &Match, report: &ScoreReport) -> Self {
        Self {
            id: Utc::now().timestamp_millis().to_string(),
            date: m.date.clone(),
            home_name: m.display_home_name().to_string(),
            visitor_name: m.display_visitor_name().to_string(),
            points: report.points,
            pins: PerSide::new(
                report.overall.total_pins.home,
                report.overall.total_pins.visitor,
            ),
            leader: report.status.leader,
            method: report.status.method,
            raw: m.clone(),
        }
    }
}

/// Saved matches, most recent first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    entries: Vec<Snapshot>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<Snapshot>) -> Self {
        Self { entries }
    }

    /// Add a snapshot at the front, dropping the oldest entries beyond `limit`.
    pub fn record(&mut self, snapshot: Snapshot, limit: usize) {
        self.entries.insert(0, snapshot);
        self.entries.truncate(limit);
    }

    /// Entry at a 0-based index.
    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.entries.get(index)
    }

    /// Remove the entry at a 0-based index.
    pub fn remove(&mut self, index: usize) -> Option<Snapshot> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Snapshot> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[Snapshot] {
        &self.entries
    }
}
