pub mod input;
pub mod storage;
pub mod types;

pub use input::{clamp_pins, parse_pins, Field};
pub use storage::{get_current_path, load_current, save_current};
pub use types::{
    today_iso, AmericanGame, BakerGame, Match, PerSide, Pins, Side, MAX_PINS, POSITIONS,
};
