use serde::Serialize;

/// Points at stake in one head-to-head comparison. A tie splits the win
/// value evenly, so `tie_each` is always `win / 2`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PointValue {
    pub win: f64,
    pub tie_each: f64,
}

/// One roster position against its opposite number.
pub const POSITION_DUEL: PointValue = PointValue {
    win: 1.0,
    tie_each: 0.5,
};
/// Team pinfall of an American game.
pub const AMERICAN_TEAM_PINFALL: PointValue = PointValue {
    win: 2.0,
    tie_each: 1.0,
};
/// A single Baker game.
pub const BAKER_GAME: PointValue = PointValue {
    win: 3.0,
    tie_each: 1.5,
};
/// Combined pinfall of both Baker games.
pub const BAKER_COMBINED_BONUS: PointValue = PointValue {
    win: 2.0,
    tie_each: 1.0,
};
/// Total pinfall across the whole match.
pub const OVERALL_PINFALL_BONUS: PointValue = PointValue {
    win: 3.0,
    tie_each: 1.5,
};

/// Result of a comparison: points for each side and whether there was enough
/// data to decide it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Award {
    pub home: f64,
    pub visitor: f64,
    pub decided: bool,
}

impl Award {
    pub const UNDECIDED: Award = Award {
        home: 0.0,
        visitor: 0.0,
        decided: false,
    };

    pub fn total(&self) -> f64 {
        self.home + self.visitor
    }
}

/// Summed pinfall for both sides. Unset slots add nothing; `complete` is true
/// only when every slot feeding the sums was entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Pinfall {
    pub home: u32,
    pub visitor: u32,
    pub complete: bool,
}

/// Compare two pinfalls and award points.
///
/// Missing data on either side leaves the comparison undecided at 0/0; that is
/// "not yet known", not a tie.
pub fn award(home: Option<u32>, visitor: Option<u32>, value: PointValue) -> Award {
    let (Some(h), Some(v)) = (home, visitor) else {
        return Award::UNDECIDED;
    };

    let (home, visitor) = match h.cmp(&v) {
        std::cmp::Ordering::Greater => (value.win, 0.0),
        std::cmp::Ordering::Less => (0.0, value.win),
        std::cmp::Ordering::Equal => (value.tie_each, value.tie_each),
    };

    Award {
        home,
        visitor,
        decided: true,
    }
}
