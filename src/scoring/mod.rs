pub mod american;
pub mod baker;
pub mod compare;
pub mod engine;
pub mod leader;
pub mod overall;

pub use american::{score_american, AmericanResult, PositionLine};
pub use baker::{score_baker, BakerGameLine, BakerResult};
pub use compare::{award, Award, Pinfall, PointValue};
pub use engine::{compute_report, ScoreReport, MAX_MATCH_POINTS};
pub use leader::{determine_leader, Leader, MatchStatus, Method, StandingInput};
pub use overall::{score_overall, OverallResult};
