use serde::Serialize;

use super::compare::{award, Award, Pinfall, AMERICAN_TEAM_PINFALL, POSITION_DUEL};
use crate::entry::{AmericanGame, PerSide, Pins, POSITIONS};

/// One head-to-head duel of an American game.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PositionLine {
    pub position: &'static str,
    pub pins: PerSide<Pins>,
    pub award: Award,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AmericanResult {
    pub positions: [PositionLine; 6],
    pub pinfall: Pinfall,
    /// Sum of the six position duels (max 6 per side).
    pub individual: PerSide<f64>,
    pub team_pinfall: Award,
    /// Individual plus team pinfall (max 8 per side).
    pub total: PerSide<f64>,
}

/// Score one American game.
///
/// Team pinfall is only compared once a side has all six positions entered;
/// until then that side counts as missing for the team comparison even though
/// its entered pins still show in `pinfall`.
pub fn score_american(game: &AmericanGame) -> AmericanResult {
    let positions: [PositionLine; 6] = std::array::from_fn(|i| {
        let home = game.home[i];
        let visitor = game.visitor[i];
        PositionLine {
            position: POSITIONS[i],
            pins: PerSide::new(home, visitor),
            award: award(home.map(u32::from), visitor.map(u32::from), POSITION_DUEL),
        }
    });

    let individual = positions.iter().fold(PerSide::new(0.0, 0.0), |acc, line| {
        PerSide::new(acc.home + line.award.home, acc.visitor + line.award.visitor)
    });

    let home_pins = sum_pins(&game.home);
    let visitor_pins = sum_pins(&game.visitor);
    let home_full = is_full(&game.home);
    let visitor_full = is_full(&game.visitor);

    let team_pinfall = award(
        home_full.then_some(home_pins),
        visitor_full.then_some(visitor_pins),
        AMERICAN_TEAM_PINFALL,
    );

    AmericanResult {
        positions,
        pinfall: Pinfall {
            home: home_pins,
            visitor: visitor_pins,
            complete: home_full && visitor_full,
        },
        individual,
        team_pinfall,
        total: PerSide::new(
            individual.home + team_pinfall.home,
            individual.visitor + team_pinfall.visitor,
        ),
    }
}

fn sum_pins(slots: &[Pins]) -> u32 {
    slots.iter().flatten().map(|&p| u32::from(p)).sum()
}

fn is_full(slots: &[Pins]) -> bool {
    slots.iter().all(Option::is_some)
}
