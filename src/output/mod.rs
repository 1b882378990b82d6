pub mod formatter;
pub mod theme;

pub use formatter::{
    breakdown_rows, fmt1, format_breakdown, format_entry_sheet, format_history_list,
    format_lead_line, format_pin_line, format_pins, format_score_line, format_status_chip,
    format_summary, leader_name, should_use_colors, BreakdownRow, RowKind,
};
pub use theme::{resolve_theme, toggled, Painter, Palette, Theme};
