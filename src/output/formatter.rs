use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use super::theme::Painter;
use crate::entry::{Match, Pins, Side};
use crate::history::History;
use crate::scoring::{AmericanResult, Leader, MatchStatus, ScoreReport};

/// Shown wherever a pin slot has not been entered.
pub const UNSET: &str = "\u{2014}";

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Points with one decimal: 8 -> "8.0", 13.5 -> "13.5"
pub fn fmt1(n: f64) -> String {
    format!("{:.1}", (n * 10.0).round() / 10.0)
}

/// A pin slot, or a dash when unset
pub fn format_pins(pins: Pins) -> String {
    match pins {
        Some(p) => p.to_string(),
        None => UNSET.to_string(),
    }
}

/// "13.5 – 13.5"
pub fn format_score_line(report: &ScoreReport) -> String {
    format!(
        "{} \u{2013} {}",
        fmt1(report.points.home),
        fmt1(report.points.visitor)
    )
}

/// "Pins: 2592 – 2493"
pub fn format_pin_line(report: &ScoreReport) -> String {
    format!(
        "Pins: {} \u{2013} {}",
        report.overall.total_pins.home, report.overall.total_pins.visitor
    )
}

/// "Central leads (Points)." or "Tied (Still tied)."
pub fn format_lead_line(m: &Match, status: &MatchStatus) -> String {
    match status.leader {
        Leader::Home => format!("{} leads ({}).", m.display_home_name(), status.method),
        Leader::Visitor => format!("{} leads ({}).", m.display_visitor_name(), status.method),
        Leader::Tie => format!("Tied ({}).", status.method),
    }
}

/// The method label, coloured good when someone leads and warn on a tie
pub fn format_status_chip(status: &MatchStatus, painter: &Painter) -> String {
    let label = format!("[{}]", status.method);
    match status.leader {
        Leader::Tie => painter.warn(&label),
        _ => painter.good(&label),
    }
}

/// Score line, pin line, lead line and status: the top of the scoreboard
pub fn format_summary(m: &Match, report: &ScoreReport, painter: &Painter) -> String {
    let header = format!(
        "{} vs {}  {}",
        m.display_home_name(),
        m.display_visitor_name(),
        painter.muted(&m.date)
    );
    [
        painter.heading(&header),
        painter.bold(&format_score_line(report)),
        format_pin_line(report),
        format!(
            "{}  {}",
            format_lead_line(m, &report.status),
            format_status_chip(&report.status, painter)
        ),
    ]
    .join("\n")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Section,
    Detail,
    Total,
}

/// One line of the points breakdown
#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownRow {
    pub label: String,
    pub home: String,
    pub visitor: String,
    pub kind: RowKind,
}

impl BreakdownRow {
    fn new(kind: RowKind, label: &str, home: String, visitor: String) -> Self {
        Self {
            label: label.to_string(),
            home,
            visitor,
            kind,
        }
    }

    fn points(kind: RowKind, label: &str, home: f64, visitor: f64) -> Self {
        Self::new(kind, label, fmt1(home), fmt1(visitor))
    }
}

fn american_rows(rows: &mut Vec<BreakdownRow>, game: usize, result: &AmericanResult) {
    rows.push(BreakdownRow::points(
        RowKind::Section,
        &format!("American Game {} (max 8)", game),
        result.total.home,
        result.total.visitor,
    ));
    rows.push(BreakdownRow::points(
        RowKind::Detail,
        "\u{2022} Individual (6)",
        result.individual.home,
        result.individual.visitor,
    ));
    rows.push(BreakdownRow::points(
        RowKind::Detail,
        "\u{2022} Team Pinfall (2)",
        result.team_pinfall.home,
        result.team_pinfall.visitor,
    ));
}

/// Every row of the points breakdown, in display order
pub fn breakdown_rows(report: &ScoreReport) -> Vec<BreakdownRow> {
    let mut rows = Vec::new();

    american_rows(&mut rows, 1, &report.american1);
    american_rows(&mut rows, 2, &report.american2);

    for (i, game) in report.baker.games.iter().enumerate() {
        rows.push(BreakdownRow::points(
            RowKind::Section,
            &format!("Baker Game {} (max 3)", i + 1),
            game.award.home,
            game.award.visitor,
        ));
        rows.push(BreakdownRow::new(
            RowKind::Detail,
            "\u{2022} Pins",
            format_pins(game.pins.home),
            format_pins(game.pins.visitor),
        ));
    }

    rows.push(BreakdownRow::points(
        RowKind::Section,
        "Baker Combined Bonus (max 2)",
        report.baker.bonus.home,
        report.baker.bonus.visitor,
    ));
    rows.push(BreakdownRow::points(
        RowKind::Section,
        "Overall Total Pinfall Bonus (max 3)",
        report.overall.bonus.home,
        report.overall.bonus.visitor,
    ));
    rows.push(BreakdownRow::points(
        RowKind::Total,
        "TOTAL POINTS (max 27)",
        report.points.home,
        report.points.visitor,
    ));
    rows.push(BreakdownRow::new(
        RowKind::Detail,
        "TOTAL PINS",
        report.overall.total_pins.home.to_string(),
        report.overall.total_pins.visitor.to_string(),
    ));

    rows
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate a label to fit available width, accounting for Unicode
fn truncate_label(label: &str, max_width: usize) -> String {
    let chars: Vec<char> = label.chars().collect();
    if chars.len() <= max_width {
        label.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Three-column table: Section | home | visitor
pub fn format_breakdown(m: &Match, report: &ScoreReport, painter: &Painter) -> String {
    format_breakdown_with_width(m, report, painter, get_terminal_width())
}

fn format_breakdown_with_width(
    m: &Match,
    report: &ScoreReport,
    painter: &Painter,
    term_width: Option<usize>,
) -> String {
    let rows = breakdown_rows(report);
    let home_name = m.display_home_name();
    let visitor_name = m.display_visitor_name();

    let value_width = rows
        .iter()
        .flat_map(|r| [r.home.chars().count(), r.visitor.chars().count()])
        .chain([home_name.chars().count(), visitor_name.chars().count()])
        .max()
        .unwrap_or(0);
    let separator = "  ";

    let mut label_width = rows
        .iter()
        .map(|r| r.label.chars().count())
        .max()
        .unwrap_or(0)
        .max("Section".len());
    if let Some(width) = term_width {
        let fixed = value_width * 2 + separator.len() * 2;
        if width > fixed + 12 {
            label_width = label_width.min(width - fixed);
        }
    }

    let line = |label: &str, home: &str, visitor: &str| {
        format!(
            "{:<lw$}{sep}{:>vw$}{sep}{:>vw$}",
            truncate_label(label, label_width),
            home,
            visitor,
            lw = label_width,
            vw = value_width,
            sep = separator
        )
    };

    let mut out = vec![painter.heading(&line("Section", home_name, visitor_name))];
    for row in &rows {
        let text = line(&row.label, &row.home, &row.visitor);
        out.push(match row.kind {
            RowKind::Section => text,
            RowKind::Detail => painter.muted(&text),
            RowKind::Total => painter.bold(&text),
        });
    }
    out.join("\n")
}

/// Entered pins laid out like the paper score sheet, with points per line
pub fn format_entry_sheet(m: &Match, report: &ScoreReport, painter: &Painter) -> String {
    let home_name = m.display_home_name();
    let visitor_name = m.display_visitor_name();
    let col = home_name
        .chars()
        .count()
        .max(visitor_name.chars().count())
        .max(5);

    let mut out = Vec::new();
    for (game, result) in [(1, &report.american1), (2, &report.american2)] {
        out.push(painter.heading(&format!("American 10-Pin Game {}", game)));
        out.push(painter.muted(&format!(
            "{:<4}  {:>col$}  {:>col$}  {:>9}",
            "Pos",
            home_name,
            visitor_name,
            "Pts",
            col = col
        )));
        for line in &result.positions {
            let pts = if line.award.decided {
                format!("{}\u{2013}{}", fmt1(line.award.home), fmt1(line.award.visitor))
            } else {
                UNSET.to_string()
            };
            out.push(format!(
                "{:<4}  {:>col$}  {:>col$}  {:>9}",
                line.position,
                format_pins(line.pins.home),
                format_pins(line.pins.visitor),
                pts,
                col = col
            ));
        }
        let mark = if result.pinfall.complete { "" } else { " *" };
        out.push(format!(
            "{:<4}  {:>col$}  {:>col$}{}",
            "Pins",
            result.pinfall.home,
            result.pinfall.visitor,
            mark,
            col = col
        ));
        out.push(String::new());
    }

    for (i, game) in report.baker.games.iter().enumerate() {
        out.push(format!(
            "{}  {} {}  {} {}",
            painter.heading(&format!("Baker Game {} Totals", i + 1)),
            home_name,
            format_pins(game.pins.home),
            visitor_name,
            format_pins(game.pins.visitor)
        ));
    }
    let mark = if report.baker.combined.complete { "" } else { " *" };
    out.push(format!(
        "Combined Baker pins: {} \u{2013} {}{}",
        report.baker.combined.home, report.baker.combined.visitor, mark
    ));
    out.push(painter.muted("* not every pin entered yet"));

    out.join("\n")
}

/// Saved matches, newest first, showing at most `limit`
pub fn format_history_list(history: &History, limit: usize, painter: &Painter) -> String {
    if history.is_empty() {
        return "No saved matches yet.".to_string();
    }

    let mut lines: Vec<String> = history
        .iter()
        .take(limit)
        .enumerate()
        .map(|(idx, s)| {
            let index_str = format!("{:>2}.", idx + 1);
            let meta = format!(
                "{} \u{2022} {}\u{2013}{} \u{2022} Pins {}\u{2013}{}",
                s.date,
                fmt1(s.points.home),
                fmt1(s.points.visitor),
                s.pins.home,
                s.pins.visitor
            );
            format!(
                "{} {}\n    {}",
                painter.muted(&index_str),
                painter.bold(&format!("{} vs {}", s.home_name, s.visitor_name)),
                meta
            )
        })
        .collect();

    if history.len() > limit {
        lines.push(painter.muted(&format!("... and {} older", history.len() - limit)));
    }
    lines.join("\n")
}

/// Name of the side a leader refers to, for messages
pub fn leader_name<'a>(m: &'a Match, leader: Leader) -> Option<&'a str> {
    match leader {
        Leader::Home => Some(m.display_name(Side::Home)),
        Leader::Visitor => Some(m.display_name(Side::Visitor)),
        Leader::Tie => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::AmericanGame;
    use crate::history::{Snapshot, MAX_HISTORY};
    use crate::scoring::{compute_report, Method};

    fn sweep_match() -> Match {
        let mut m = Match::new();
        m.home_name = "Central".to_string();
        m.visitor_name = "West".to_string();
        m.date = "2025-11-04".to_string();
        m.american1 = AmericanGame {
            home: [Some(100); 6],
            visitor: [Some(90); 6],
        };
        m
    }

    #[test]
    fn test_fmt1() {
        assert_eq!(fmt1(0.0), "0.0");
        assert_eq!(fmt1(8.0), "8.0");
        assert_eq!(fmt1(13.5), "13.5");
        assert_eq!(fmt1(27.0), "27.0");
    }

    #[test]
    fn test_format_pins() {
        assert_eq!(format_pins(None), "\u{2014}");
        assert_eq!(format_pins(Some(0)), "0");
        assert_eq!(format_pins(Some(289)), "289");
    }

    #[test]
    fn test_score_and_pin_lines() {
        let report = compute_report(&sweep_match());
        assert_eq!(format_score_line(&report), "8.0 \u{2013} 0.0");
        assert_eq!(format_pin_line(&report), "Pins: 600 \u{2013} 540");
    }

    #[test]
    fn test_lead_line() {
        let m = sweep_match();
        let report = compute_report(&m);
        assert_eq!(format_lead_line(&m, &report.status), "Central leads (Points).");

        let tie = MatchStatus {
            leader: Leader::Tie,
            method: Method::StillTied,
        };
        assert_eq!(format_lead_line(&m, &tie), "Tied (Still tied).");

        let visitor = MatchStatus {
            leader: Leader::Visitor,
            method: Method::TotalPinfall,
        };
        assert_eq!(
            format_lead_line(&m, &visitor),
            "West leads (Tiebreak: Total Pinfall)."
        );
    }

    #[test]
    fn test_lead_line_uses_fallback_name() {
        let mut m = sweep_match();
        m.home_name = "  ".to_string();
        let report = compute_report(&m);
        assert_eq!(format_lead_line(&m, &report.status), "Home leads (Points).");
    }

    #[test]
    fn test_status_chip_plain() {
        let report = compute_report(&Match::new());
        assert_eq!(
            format_status_chip(&report.status, &Painter::plain()),
            "[Points tied (need more pins entered)]"
        );
    }

    #[test]
    fn test_breakdown_rows_order_and_values() {
        let report = compute_report(&sweep_match());
        let rows = breakdown_rows(&report);
        let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "American Game 1 (max 8)",
                "\u{2022} Individual (6)",
                "\u{2022} Team Pinfall (2)",
                "American Game 2 (max 8)",
                "\u{2022} Individual (6)",
                "\u{2022} Team Pinfall (2)",
                "Baker Game 1 (max 3)",
                "\u{2022} Pins",
                "Baker Game 2 (max 3)",
                "\u{2022} Pins",
                "Baker Combined Bonus (max 2)",
                "Overall Total Pinfall Bonus (max 3)",
                "TOTAL POINTS (max 27)",
                "TOTAL PINS",
            ]
        );
        assert_eq!((rows[0].home.as_str(), rows[0].visitor.as_str()), ("8.0", "0.0"));
        assert_eq!((rows[2].home.as_str(), rows[2].visitor.as_str()), ("2.0", "0.0"));
        assert_eq!(rows[7].home, "\u{2014}");
        assert_eq!(rows[12].kind, RowKind::Total);
        assert_eq!((rows[13].home.as_str(), rows[13].visitor.as_str()), ("600", "540"));
    }

    #[test]
    fn test_format_breakdown_plain() {
        let m = sweep_match();
        let report = compute_report(&m);
        let text = format_breakdown_with_width(&m, &report, &Painter::plain(), None);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 15);
        assert!(lines[0].starts_with("Section"));
        assert!(lines[0].contains("Central"));
        assert!(lines[0].contains("West"));
        assert!(lines[13].starts_with("TOTAL POINTS (max 27)"));
        assert!(lines[13].ends_with("8.0      0.0"));
        // Value columns line up
        let widths: Vec<usize> = lines.iter().map(|l| l.chars().count()).collect();
        assert!(widths.iter().all(|w| *w == widths[0]));
    }

    #[test]
    fn test_format_breakdown_narrow_terminal_truncates_labels() {
        let m = sweep_match();
        let report = compute_report(&m);
        let text = format_breakdown_with_width(&m, &report, &Painter::plain(), Some(40));
        assert!(text.lines().all(|l| l.chars().count() <= 40));
        assert!(text.contains("..."));
    }

    #[test]
    fn test_truncate_label() {
        assert_eq!(truncate_label("Short", 20), "Short");
        assert_eq!(truncate_label("Baker Combined Bonus (max 2)", 10), "Baker C...");
        assert_eq!(truncate_label("Hello", 3), "Hel");
    }

    #[test]
    fn test_format_entry_sheet_marks_missing() {
        let mut m = sweep_match();
        m.american1.visitor[2] = None;
        let report = compute_report(&m);
        let text = format_entry_sheet(&m, &report, &Painter::plain());

        assert!(text.contains("American 10-Pin Game 1"));
        assert!(text.contains("Baker Game 2 Totals"));
        let line_3a = text.lines().find(|l| l.starts_with("3A")).unwrap();
        assert!(line_3a.contains("100"));
        assert!(line_3a.contains("\u{2014}"));
        let line_1a = text.lines().find(|l| l.starts_with("1A")).unwrap();
        assert!(line_1a.ends_with("1.0\u{2013}0.0"));
        assert!(text.contains("Pins      600      450 *"));
    }

    #[test]
    fn test_format_history_list_empty() {
        assert_eq!(
            format_history_list(&History::new(), 25, &Painter::plain()),
            "No saved matches yet."
        );
    }

    #[test]
    fn test_format_history_list_entries() {
        let m = sweep_match();
        let mut history = History::new();
        history.record(Snapshot::capture(&m, &compute_report(&m)), MAX_HISTORY);
        history.record(Snapshot::capture(&Match::new(), &compute_report(&Match::new())), MAX_HISTORY);

        let text = format_history_list(&history, 25, &Painter::plain());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], " 1. Home vs Visitor");
        assert_eq!(lines[2], " 2. Central vs West");
        assert_eq!(
            lines[3],
            "    2025-11-04 \u{2022} 8.0\u{2013}0.0 \u{2022} Pins 600\u{2013}540"
        );
    }

    #[test]
    fn test_format_history_list_respects_limit() {
        let m = sweep_match();
        let mut history = History::new();
        for _ in 0..3 {
            history.record(Snapshot::capture(&m, &compute_report(&m)), MAX_HISTORY);
        }
        let text = format_history_list(&history, 2, &Painter::plain());
        assert!(text.contains(" 2. "));
        assert!(!text.contains(" 3. "));
        assert!(text.ends_with("... and 1 older"));
    }

    #[test]
    fn test_leader_name() {
        let m = sweep_match();
        assert_eq!(leader_name(&m, Leader::Home), Some("Central"));
        assert_eq!(leader_name(&m, Leader::Visitor), Some("West"));
        assert_eq!(leader_name(&m, Leader::Tie), None);
    }
}
