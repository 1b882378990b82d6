use serde::Serialize;

use super::compare::{award, Award, Pinfall, BAKER_COMBINED_BONUS, BAKER_GAME};
use crate::entry::{BakerGame, PerSide, Pins};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BakerGameLine {
    pub pins: PerSide<Pins>,
    pub award: Award,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BakerResult {
    pub games: [BakerGameLine; 2],
    /// Both games summed, unset totals counting as zero.
    pub combined: Pinfall,
    pub bonus: Award,
}

impl BakerResult {
    /// Points from both games plus the combined bonus.
    pub fn points(&self) -> PerSide<f64> {
        let [g1, g2] = &self.games;
        PerSide::new(
            g1.award.home + g2.award.home + self.bonus.home,
            g1.award.visitor + g2.award.visitor + self.bonus.visitor,
        )
    }
}

/// Score both Baker games and the combined-pinfall bonus.
///
/// A side's combined pinfall only enters the bonus comparison once both of
/// its game totals are in.
pub fn score_baker(game1: &BakerGame, game2: &BakerGame) -> BakerResult {
    let line = |g: &BakerGame| BakerGameLine {
        pins: PerSide::new(g.home_total, g.visitor_total),
        award: award(
            g.home_total.map(u32::from),
            g.visitor_total.map(u32::from),
            BAKER_GAME,
        ),
    };

    let home = combine(game1.home_total, game2.home_total);
    let visitor = combine(game1.visitor_total, game2.visitor_total);

    let bonus = award(home.entered, visitor.entered, BAKER_COMBINED_BONUS);

    BakerResult {
        games: [line(game1), line(game2)],
        combined: Pinfall {
            home: home.sum,
            visitor: visitor.sum,
            complete: home.entered.is_some() && visitor.entered.is_some(),
        },
        bonus,
    }
}

struct Combined {
    sum: u32,
    /// The sum, but only when both totals were entered.
    entered: Option<u32>,
}

fn combine(first: Pins, second: Pins) -> Combined {
    let sum = u32::from(first.unwrap_or(0)) + u32::from(second.unwrap_or(0));
    Combined {
        sum,
        entered: (first.is_some() && second.is_some()).then_some(sum),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn baker(home: Pins, visitor: Pins) -> BakerGame {
        BakerGame {
            home_total: home,
            visitor_total: visitor,
        }
    }

    #[test]
    fn test_empty_baker_scores_nothing() {
        let result = score_baker(&BakerGame::default(), &BakerGame::default());
        assert_eq!(result.points(), PerSide::new(0.0, 0.0));
        assert_eq!(result.combined, Pinfall::default());
        assert!(!result.bonus.decided);
    }

    #[test]
    fn test_games_and_bonus_to_one_side() {
        let result = score_baker(&baker(Some(200), Some(180)), &baker(Some(210), Some(190)));
        assert_eq!(result.games[0].award.home, 3.0);
        assert_eq!(result.games[1].award.home, 3.0);
        assert_eq!(result.bonus.home, 2.0);
        assert_eq!(result.bonus.visitor, 0.0);
        assert_eq!(result.combined.home, 410);
        assert_eq!(result.combined.visitor, 370);
        assert!(result.combined.complete);
        assert_eq!(result.points(), PerSide::new(8.0, 0.0));
    }

    #[test]
    fn test_split_games_and_tied_combined() {
        let result = score_baker(&baker(Some(200), Some(150)), &baker(Some(150), Some(200)));
        assert_eq!(result.games[0].award.home, 3.0);
        assert_eq!(result.games[1].award.visitor, 3.0);
        assert_eq!(result.bonus.home, 1.0);
        assert_eq!(result.bonus.visitor, 1.0);
        assert_eq!(result.points(), PerSide::new(4.0, 4.0));
    }

    #[test]
    fn test_tied_game_splits_three() {
        let result = score_baker(&baker(Some(190), Some(190)), &BakerGame::default());
        assert_eq!(result.games[0].award.home, 1.5);
        assert_eq!(result.games[0].award.visitor, 1.5);
        assert!(!result.games[1].award.decided);
    }

    #[test]
    fn test_missing_total_blocks_bonus_but_not_sum() {
        let result = score_baker(&baker(Some(200), Some(180)), &baker(Some(210), None));
        assert_eq!(result.bonus, Award::UNDECIDED);
        assert!(!result.combined.complete);
        assert_eq!(result.combined.home, 410);
        assert_eq!(result.combined.visitor, 180);
        assert!(!result.games[1].award.decided);
        // Game 1 still counts
        assert_eq!(result.points(), PerSide::new(3.0, 0.0));
    }

    #[test]
    fn test_bonus_needs_both_sides_complete() {
        // Home has both games in, visitor only one: combined incomplete
        let result = score_baker(&baker(Some(100), Some(300)), &baker(Some(100), None));
        assert_eq!(result.bonus, Award::UNDECIDED);
    }

    #[test]
    fn test_swapped_sides_swap_results() {
        let g1 = baker(Some(180), Some(220));
        let g2 = baker(Some(205), Some(205));
        let forward = score_baker(&g1, &g2);
        let reverse = score_baker(
            &baker(g1.visitor_total, g1.home_total),
            &baker(g2.visitor_total, g2.home_total),
        );
        assert_eq!(forward.points(), reverse.points().swapped());
        assert_eq!(forward.combined.home, reverse.combined.visitor);
    }
}
