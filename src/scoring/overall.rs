use serde::Serialize;

use super::american::AmericanResult;
use super::baker::BakerResult;
use super::compare::{award, Award, Pinfall, OVERALL_PINFALL_BONUS};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OverallResult {
    pub total_pins: Pinfall,
    pub bonus: Award,
}

/// Total pinfall for the match and the overall-pinfall bonus.
///
/// The bonus waits for every American position and every Baker total to be in.
pub fn score_overall(
    american1: &AmericanResult,
    american2: &AmericanResult,
    baker: &BakerResult,
) -> OverallResult {
    let home = american1.pinfall.home + american2.pinfall.home + baker.combined.home;
    let visitor = american1.pinfall.visitor + american2.pinfall.visitor + baker.combined.visitor;

    let complete =
        american1.pinfall.complete && american2.pinfall.complete && baker.combined.complete;

    let bonus = if complete {
        award(Some(home), Some(visitor), OVERALL_PINFALL_BONUS)
    } else {
        Award::UNDECIDED
    };

    OverallResult {
        total_pins: Pinfall {
            home,
            visitor,
            complete,
        },
        bonus,
    }
}
