use serde::{Deserialize, Serialize};

/// Pinfall for one slot. `None` means nothing has been entered yet, which is
/// not the same thing as a game of zero.
pub type Pins = Option<u16>;

/// Highest pinfall a slot accepts.
pub const MAX_PINS: u16 = 400;

/// Roster positions in the order they are bowled and stored.
pub const POSITIONS: [&str; 6] = ["1A", "2A", "3A", "1B", "2B", "3B"];

pub const DEFAULT_HOME_NAME: &str = "Home";
pub const DEFAULT_VISITOR_NAME: &str = "Visitor";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Home,
    Visitor,
}

impl Side {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "home" | "h" => Some(Side::Home),
            "visitor" | "v" | "away" => Some(Side::Visitor),
            _ => None,
        }
    }
}

/// A value held once for each team.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PerSide<T> {
    pub home: T,
    pub visitor: T,
}

impl<T> PerSide<T> {
    pub fn new(home: T, visitor: T) -> Self {
        Self { home, visitor }
    }

    pub fn get(&self, side: Side) -> &T {
        match side {
            Side::Home => &self.home,
            Side::Visitor => &self.visitor,
        }
    }

    pub fn get_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::Home => &mut self.home,
            Side::Visitor => &mut self.visitor,
        }
    }

    /// Exchange the home and visitor values.
    pub fn swapped(self) -> Self {
        Self {
            home: self.visitor,
            visitor: self.home,
        }
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> PerSide<U> {
        PerSide {
            home: f(self.home),
            visitor: f(self.visitor),
        }
    }
}

/// One American game: each roster position bowls head-to-head against the
/// opposing player in the same position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AmericanGame {
    pub home: [Pins; 6],
    pub visitor: [Pins; 6],
}

impl AmericanGame {
    pub fn side(&self, side: Side) -> &[Pins; 6] {
        match side {
            Side::Home => &self.home,
            Side::Visitor => &self.visitor,
        }
    }

    pub fn side_mut(&mut self, side: Side) -> &mut [Pins; 6] {
        match side {
            Side::Home => &mut self.home,
            Side::Visitor => &mut self.visitor,
        }
    }
}

/// One Baker game: a single team total per side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BakerGame {
    pub home_total: Pins,
    pub visitor_total: Pins,
}

impl BakerGame {
    pub fn total(&self, side: Side) -> Pins {
        match side {
            Side::Home => self.home_total,
            Side::Visitor => self.visitor_total,
        }
    }

    pub fn total_mut(&mut self, side: Side) -> &mut Pins {
        match side {
            Side::Home => &mut self.home_total,
            Side::Visitor => &mut self.visitor_total,
        }
    }
}

/// Everything entered for a match. The scoring engine only ever reads this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub home_name: String,
    #[serde(default)]
    pub visitor_name: String,
    #[serde(default)]
    pub american1: AmericanGame,
    #[serde(default)]
    pub american2: AmericanGame,
    #[serde(default)]
    pub baker1: BakerGame,
    #[serde(default)]
    pub baker2: BakerGame,
}

impl Default for Match {
    fn default() -> Self {
        Self::new()
    }
}

impl Match {
    /// An empty match dated today with the stock team names.
    pub fn new() -> Self {
        Self::with_names(DEFAULT_HOME_NAME, DEFAULT_VISITOR_NAME)
    }

    pub fn with_names(home: &str, visitor: &str) -> Self {
        Self {
            id: None,
            date: today_iso(),
            home_name: home.to_string(),
            visitor_name: visitor.to_string(),
            american1: AmericanGame::default(),
            american2: AmericanGame::default(),
            baker1: BakerGame::default(),
            baker2: BakerGame::default(),
        }
    }

    pub fn display_home_name(&self) -> &str {
        display_name(&self.home_name, DEFAULT_HOME_NAME)
    }

    pub fn display_visitor_name(&self) -> &str {
        display_name(&self.visitor_name, DEFAULT_VISITOR_NAME)
    }

    pub fn display_name(&self, side: Side) -> &str {
        match side {
            Side::Home => self.display_home_name(),
            Side::Visitor => self.display_visitor_name(),
        }
    }

    pub fn american(&self, game: usize) -> Option<&AmericanGame> {
        match game {
            1 => Some(&self.american1),
            2 => Some(&self.american2),
            _ => None,
        }
    }

    pub fn american_mut(&mut self, game: usize) -> Option<&mut AmericanGame> {
        match game {
            1 => Some(&mut self.american1),
            2 => Some(&mut self.american2),
            _ => None,
        }
    }

    pub fn baker(&self, game: usize) -> Option<&BakerGame> {
        match game {
            1 => Some(&self.baker1),
            2 => Some(&self.baker2),
            _ => None,
        }
    }

    pub fn baker_mut(&mut self, game: usize) -> Option<&mut BakerGame> {
        match game {
            1 => Some(&mut self.baker1),
            2 => Some(&mut self.baker2),
            _ => None,
        }
    }

    /// The same match seen from the other bench: names and every pin value
    /// exchanged between home and visitor.
    pub fn swapped(&self) -> Self {
        let swap_american = |g: &AmericanGame| AmericanGame {
            home: g.visitor,
            visitor: g.home,
        };
        let swap_baker = |g: &BakerGame| BakerGame {
            home_total: g.visitor_total,
            visitor_total: g.home_total,
        };
        Self {
            id: self.id.clone(),
            date: self.date.clone(),
            home_name: self.visitor_name.clone(),
            visitor_name: self.home_name.clone(),
            american1: swap_american(&self.american1),
            american2: swap_american(&self.american2),
            baker1: swap_baker(&self.baker1),
            baker2: swap_baker(&self.baker2),
        }
    }
}

fn display_name<'a>(name: &'a str, fallback: &'a str) -> &'a str {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        fallback
    } else {
        trimmed
    }
}

/// Today's local date as `YYYY-MM-DD`.
pub fn today_iso() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_match_is_empty() {
        let m = Match::new();
        assert_eq!(m.home_name, "Home");
        assert_eq!(m.visitor_name, "Visitor");
        assert!(m.american1.home.iter().all(|p| p.is_none()));
        assert!(m.american2.visitor.iter().all(|p| p.is_none()));
        assert_eq!(m.baker1, BakerGame::default());
        assert_eq!(m.date.len(), 10);
    }

    #[test]
    fn test_display_name_falls_back_when_blank() {
        let mut m = Match::new();
        m.home_name = "   ".to_string();
        m.visitor_name = String::new();
        assert_eq!(m.display_home_name(), "Home");
        assert_eq!(m.display_visitor_name(), "Visitor");

        m.home_name = " Central ".to_string();
        assert_eq!(m.display_name(Side::Home), "Central");
    }

    #[test]
    fn test_serializes_with_camel_case_and_nulls() {
        let mut m = Match::new();
        m.american1.home[0] = Some(180);
        m.baker2.visitor_total = Some(0);

        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["homeName"], "Home");
        assert_eq!(json["american1"]["home"][0], 180);
        assert!(json["american1"]["home"][1].is_null());
        assert_eq!(json["baker2"]["visitorTotal"], 0);
        assert!(json["baker2"]["homeTotal"].is_null());
    }

    #[test]
    fn test_parses_saved_browser_document() {
        let raw = r#"{
            "id": null,
            "date": "2025-11-04",
            "homeName": "Central",
            "visitorName": "West",
            "american1": {"home": [150, 160, null, 170, 180, 190], "visitor": [null, null, null, null, null, null]},
            "american2": {"home": [null, null, null, null, null, null], "visitor": [100, 100, 100, 100, 100, 100]},
            "baker1": {"homeTotal": 600, "visitorTotal": null},
            "baker2": {"homeTotal": null, "visitorTotal": 590}
        }"#;
        let m: Match = serde_json::from_str(raw).unwrap();
        assert_eq!(m.home_name, "Central");
        assert_eq!(m.american1.home[2], None);
        assert_eq!(m.american1.home[5], Some(190));
        assert_eq!(m.baker1.home_total, Some(600));
        assert_eq!(m.baker2.visitor_total, Some(590));
    }

    #[test]
    fn test_swapped_exchanges_everything() {
        let mut m = Match::new();
        m.home_name = "A".to_string();
        m.visitor_name = "B".to_string();
        m.american2.home[4] = Some(99);
        m.baker1.visitor_total = Some(700);

        let s = m.swapped();
        assert_eq!(s.home_name, "B");
        assert_eq!(s.american2.visitor[4], Some(99));
        assert_eq!(s.baker1.home_total, Some(700));
        assert_eq!(s.swapped(), m);
    }

    #[test]
    fn test_per_side_helpers() {
        let mut pair = PerSide::new(1, 2);
        *pair.get_mut(Side::Visitor) += 5;
        assert_eq!(*pair.get(Side::Visitor), 7);
        assert_eq!(pair.swapped(), PerSide::new(7, 1));
        assert_eq!(pair.map(|v| v * 10), PerSide::new(10, 70));
    }

    #[test]
    fn test_side_parse() {
        assert_eq!(Side::parse("Home"), Some(Side::Home));
        assert_eq!(Side::parse("v"), Some(Side::Visitor));
        assert_eq!(Side::parse("away"), Some(Side::Visitor));
        assert_eq!(Side::parse("bench"), None);
    }
}
