use anyhow::{bail, Context, Result};

use super::types::{Match, Pins, Side, MAX_PINS, POSITIONS};

/// Clamp an entered number to a legal pinfall: rounded to the nearest whole
/// pin and held within [0, 400].
pub fn clamp_pins(n: f64) -> u16 {
    n.round().clamp(0.0, MAX_PINS as f64) as u16
}

/// Turn raw user text into a pin slot.
///
/// Blank text, a dash, or anything that isn't a finite number clears the
/// slot. Numbers are clamped with [`clamp_pins`].
pub fn parse_pins(raw: &str) -> Pins {
    let s = raw.trim();
    if s.is_empty() || s == "-" || s == "\u{2014}" {
        return None;
    }
    match s.parse::<f64>() {
        Ok(n) if n.is_finite() => Some(clamp_pins(n)),
        _ => None,
    }
}

/// An editable pin slot of a [`Match`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    American {
        game: usize,
        side: Side,
        position: usize, // 0-based index into POSITIONS
    },
    Baker {
        game: usize,
        side: Side,
    },
}

impl Field {
    /// Parse a dotted field path.
    ///
    /// Accepted forms: `american1.home.1A`, `a2.v.3b`, `american1.visitor.4`
    /// (1-based position number), `baker1.home`, `b2.visitor`.
    pub fn parse(path: &str) -> Result<Self> {
        let parts: Vec<&str> = path.trim().split('.').map(str::trim).collect();
        let section = parts[0].to_ascii_lowercase();

        let (kind, game_str) = if let Some(rest) = section.strip_prefix("american") {
            ("american", rest)
        } else if let Some(rest) = section.strip_prefix("baker") {
            ("baker", rest)
        } else if let Some(rest) = section.strip_prefix('a') {
            ("american", rest)
        } else if let Some(rest) = section.strip_prefix('b') {
            ("baker", rest)
        } else {
            bail!("Unknown section '{}': expected american1, american2, baker1 or baker2", parts[0]);
        };

        let game: usize = game_str
            .parse()
            .with_context(|| format!("Missing or invalid game number in '{}'", parts[0]))?;
        if !(1..=2).contains(&game) {
            bail!("Game number must be 1 or 2, got {}", game);
        }

        let side = match parts.get(1) {
            Some(s) => Side::parse(s)
                .with_context(|| format!("Unknown side '{}': expected home or visitor", s))?,
            None => bail!("Missing side in '{}': expected home or visitor", path),
        };

        match kind {
            "american" => {
                let Some(pos_str) = parts.get(2) else {
                    bail!("Missing roster position in '{}' (1A, 2A, 3A, 1B, 2B, 3B)", path);
                };
                if parts.len() > 3 {
                    bail!("Too many parts in field path '{}'", path);
                }
                let position = parse_position(pos_str)?;
                Ok(Field::American {
                    game,
                    side,
                    position,
                })
            }
            _ => {
                if parts.len() > 2 {
                    bail!("Baker games take a team total only: '{}'", path);
                }
                Ok(Field::Baker { game, side })
            }
        }
    }

    /// Human label, e.g. "American Game 1, Home 2A".
    pub fn label(&self, m: &Match) -> String {
        match *self {
            Field::American {
                game,
                side,
                position,
            } => format!(
                "American Game {}, {} {}",
                game,
                m.display_name(side),
                POSITIONS[position]
            ),
            Field::Baker { game, side } => {
                format!("Baker Game {}, {} Total Pins", game, m.display_name(side))
            }
        }
    }

    pub fn get(&self, m: &Match) -> Pins {
        match *self {
            Field::American {
                game,
                side,
                position,
            } => m.american(game).and_then(|g| g.side(side)[position]),
            Field::Baker { game, side } => m.baker(game).and_then(|g| g.total(side)),
        }
    }

    /// Write one slot. Returns the previous value.
    pub fn set(&self, m: &mut Match, value: Pins) -> Pins {
        let slot = match *self {
            Field::American {
                game,
                side,
                position,
            } => m.american_mut(game).map(|g| &mut g.side_mut(side)[position]),
            Field::Baker { game, side } => m.baker_mut(game).map(|g| g.total_mut(side)),
        };
        // Game numbers are range-checked in parse
        match slot {
            Some(slot) => std::mem::replace(slot, value),
            None => None,
        }
    }
}

fn parse_position(s: &str) -> Result<usize> {
    if let Some(idx) = POSITIONS.iter().position(|p| p.eq_ignore_ascii_case(s)) {
        return Ok(idx);
    }
    match s.parse::<usize>() {
        Ok(n) if (1..=POSITIONS.len()).contains(&n) => Ok(n - 1),
        _ => bail!(
            "Unknown roster position '{}': expected one of {} or 1-6",
            s,
            POSITIONS.join(", ")
        ),
    }
}
