use serde::Serialize;

use super::american::{score_american, AmericanResult};
use super::baker::{score_baker, BakerResult};
use super::leader::{determine_leader, MatchStatus, StandingInput};
use super::overall::{score_overall, OverallResult};
use crate::entry::{Match, PerSide};

/// Most points one side can finish with: 8 + 8 from the American games,
/// 3 + 3 from the Baker games, 2 for Baker combined, 3 for overall pinfall.
pub const MAX_MATCH_POINTS: f64 = 27.0;

/// Everything derived from a [`Match`]. Rebuilt from scratch on every change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreReport {
    pub american1: AmericanResult,
    pub american2: AmericanResult,
    pub baker: BakerResult,
    pub overall: OverallResult,
    pub points: PerSide<f64>,
    pub status: MatchStatus,
}

/// Score a match. The same input always yields the same report.
pub fn compute_report(m: &Match) -> ScoreReport {
    let american1 = score_american(&m.american1);
    let american2 = score_american(&m.american2);
    let baker = score_baker(&m.baker1, &m.baker2);
    let overall = score_overall(&american1, &american2, &baker);

    let baker_points = baker.points();
    let points = PerSide::new(
        american1.total.home + american2.total.home + baker_points.home + overall.bonus.home,
        american1.total.visitor
            + american2.total.visitor
            + baker_points.visitor
            + overall.bonus.visitor,
    );

    let status = determine_leader(&StandingInput {
        points,
        total_pins: overall.total_pins,
        american1_points: american1.total,
        american1_pins: american1.pinfall,
    });

    ScoreReport {
        american1,
        american2,
        baker,
        overall,
        points,
        status,
    }
}
