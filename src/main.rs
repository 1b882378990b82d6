use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use bowl_tally::config::{self, Config, ThemeChoice};
use bowl_tally::entry::{self, Field, Match, Side};
use bowl_tally::history::{self, History, Snapshot};
use bowl_tally::output::{self, Painter};
use bowl_tally::scoring::{compute_report, ScoreReport};
use bowl_tally::{diag, verbose_eprintln};

const EXIT_SUCCESS: i32 = 0;
const EXIT_STORAGE: i32 = 2;
const EXIT_USAGE: i32 = 3;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the scoreboard for the current match (default if no subcommand)
    Show {
        /// Also print every entered pin, laid out like the score sheet
        #[arg(long)]
        sheet: bool,
        /// Print the full score report as JSON instead
        #[arg(long, conflicts_with = "sheet")]
        json: bool,
    },
    /// Enter or clear one pin slot
    Set {
        /// Slot to edit: american1.home.1A, american2.visitor.3B, baker1.home, baker2.visitor
        field: String,
        /// Pinfall (0-400). Omit, or pass "-", to clear the slot
        #[arg(allow_hyphen_values = true)]
        value: Option<String>,
    },
    /// Rename a team
    Name {
        side: SideArg,
        /// New name; blank shows as "Home"/"Visitor"
        #[arg(num_args = 0..)]
        name: Vec<String>,
    },
    /// Set the match date (YYYY-MM-DD or "today")
    Date { date: String },
    /// Save the current match to history
    Save,
    /// Start a fresh match (history is kept)
    Clear {
        /// Don't ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Browse, reload and export saved matches
    History {
        #[command(subcommand)]
        action: Option<HistoryCommand>,
    },
    /// Switch colour theme
    Theme { choice: ThemeArg },
    /// Create a config file interactively
    Init,
}

#[derive(Subcommand, Debug)]
enum HistoryCommand {
    /// List saved matches, newest first (default)
    List {
        /// Show every saved match instead of the configured number
        #[arg(long)]
        all: bool,
    },
    /// Replace the current match with a saved one
    Load {
        /// Index as shown by `history list` (1-based)
        index: usize,
    },
    /// Delete a saved match
    Delete {
        /// Index as shown by `history list` (1-based)
        index: usize,
    },
    /// Delete every saved match
    Wipe {
        /// Don't ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Write all saved matches to a JSON file
    Export {
        /// Output file (defaults to ./bowling-history.json)
        path: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum SideArg {
    Home,
    Visitor,
}

impl From<SideArg> for Side {
    fn from(arg: SideArg) -> Self {
        match arg {
            SideArg::Home => Side::Home,
            SideArg::Visitor => Side::Visitor,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ThemeArg {
    Dark,
    Light,
    Auto,
    Toggle,
}

#[derive(Parser, Debug)]
#[command(name = "bowl-tally")]
#[command(about = "Two-team bowling match scoreboard", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/bowl-tally/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Never colour output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Print any buffered warnings, then exit.
fn finish(code: i32) -> ! {
    for warning in diag::drain() {
        eprintln!("{}", warning);
    }
    std::process::exit(code);
}

fn fail(code: i32, message: String) -> ! {
    eprintln!("{}", message);
    finish(code);
}

fn save_current_or_exit(path: &std::path::Path, m: &Match) {
    if let Err(e) = entry::save_current(path, m) {
        fail(EXIT_STORAGE, format!("Storage error: {:#}", e));
    }
}

fn save_history_or_exit(path: &std::path::Path, h: &History) {
    if let Err(e) = history::save_history(path, h) {
        fail(EXIT_STORAGE, format!("Storage error: {:#}", e));
    }
}

/// Convert a 1-based index from the command line, exiting when out of range.
fn history_index(index: usize, h: &History) -> usize {
    if index < 1 || index > h.len() {
        if h.is_empty() {
            fail(EXIT_USAGE, "No saved matches yet.".to_string());
        }
        fail(
            EXIT_USAGE,
            format!("Invalid index {}. Must be between 1 and {}.", index, h.len()),
        );
    }
    index - 1
}

fn fresh_match(config: &Config) -> Match {
    Match::with_names(config.home_name(), config.visitor_name())
}

fn print_summary(m: &Match, report: &ScoreReport, painter: &Painter) {
    println!("{}", output::format_summary(m, report, painter));
}

fn main() {
    let cli = Cli::parse();
    diag::set_verbose(cli.verbose);
    // Warnings from loading state are shown after the command's own output
    diag::activate();

    let command = cli.command.unwrap_or(Commands::Show {
        sheet: false,
        json: false,
    });
    let config_path = cli.config.map(PathBuf::from);

    if let Commands::Init = command {
        if let Err(e) = config::init::run_init_wizard(config_path) {
            fail(EXIT_CONFIG, format!("Init failed: {:#}", e));
        }
        finish(EXIT_SUCCESS);
    }

    // Load config
    let mut cfg = match config::load_config(config_path.clone()) {
        Ok(c) => c,
        Err(e) => fail(EXIT_CONFIG, format!("Config error: {:#}", e)),
    };

    if let Err(errors) = config::validate_config(&cfg) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        finish(EXIT_CONFIG);
    }

    let data_dir = match config::resolve_data_dir(&cfg) {
        Ok(d) => d,
        Err(e) => fail(EXIT_CONFIG, format!("Config error: {:#}", e)),
    };
    verbose_eprintln!("Data directory: {}", data_dir.display());

    let current_path = entry::get_current_path(&data_dir);
    let history_path = history::get_history_path(&data_dir);

    let theme = output::resolve_theme(cfg.theme());
    let painter = Painter::new(theme, !cli.no_color && output::should_use_colors());

    let mut current = entry::load_current(&current_path).unwrap_or_else(|| fresh_match(&cfg));
    if current.date.trim().is_empty() {
        current.date = entry::today_iso();
    }

    match command {
        Commands::Show { sheet, json } => {
            let report = compute_report(&current);
            if json {
                match serde_json::to_string_pretty(&report) {
                    Ok(s) => println!("{}", s),
                    Err(e) => fail(EXIT_STORAGE, format!("Failed to serialize report: {}", e)),
                }
            } else {
                if sheet {
                    println!("{}", output::format_entry_sheet(&current, &report, &painter));
                    println!();
                }
                print_summary(&current, &report, &painter);
                println!();
                println!("{}", output::format_breakdown(&current, &report, &painter));
            }
        }
        Commands::Set { field, value } => {
            let field = match Field::parse(&field) {
                Ok(f) => f,
                Err(e) => fail(EXIT_USAGE, format!("{:#}", e)),
            };
            let pins = entry::parse_pins(value.as_deref().unwrap_or(""));
            let previous = field.set(&mut current, pins);
            save_current_or_exit(&current_path, &current);

            println!(
                "{}: {} -> {}",
                field.label(&current),
                output::format_pins(previous),
                output::format_pins(pins)
            );
            print_summary(&current, &compute_report(&current), &painter);
        }
        Commands::Name { side, name } => {
            let side = Side::from(side);
            let name = name.join(" ");
            match side {
                Side::Home => current.home_name = name,
                Side::Visitor => current.visitor_name = name,
            }
            save_current_or_exit(&current_path, &current);
            println!(
                "{} team is now {}",
                match side {
                    Side::Home => "Home",
                    Side::Visitor => "Visitor",
                },
                current.display_name(side)
            );
        }
        Commands::Date { date } => {
            let date = if date.eq_ignore_ascii_case("today") {
                entry::today_iso()
            } else {
                match chrono::NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d") {
                    Ok(d) => d.format("%Y-%m-%d").to_string(),
                    Err(_) => fail(
                        EXIT_USAGE,
                        format!("Invalid date '{}': expected YYYY-MM-DD or today", date),
                    ),
                }
            };
            current.date = date;
            save_current_or_exit(&current_path, &current);
            println!("Match date set to {}", current.date);
        }
        Commands::Save => {
            let report = compute_report(&current);
            let snapshot = Snapshot::capture(&current, &report);
            let mut saved = history::load_history(&history_path);
            saved.record(snapshot, cfg.history_limit());
            save_history_or_exit(&history_path, &saved);

            println!(
                "Saved {} vs {} ({}) to history. {} saved matches.",
                current.display_home_name(),
                current.display_visitor_name(),
                output::format_score_line(&report),
                saved.len()
            );
        }
        Commands::Clear { yes } => {
            let confirmed = yes
                || config::init::prompt_yes_no(
                    "Clear the current match entry? (History will remain)",
                    false,
                )
                .unwrap_or(false);
            if !confirmed {
                println!("Aborted.");
                finish(EXIT_SUCCESS);
            }
            current = fresh_match(&cfg);
            save_current_or_exit(&current_path, &current);
            println!("Cleared current match. History is unchanged.");
        }
        Commands::History { action } => {
            let mut saved = history::load_history(&history_path);
            match action.unwrap_or(HistoryCommand::List { all: false }) {
                HistoryCommand::List { all } => {
                    let limit = if all {
                        saved.len()
                    } else {
                        cfg.history_display()
                    };
                    println!("{}", output::format_history_list(&saved, limit, &painter));
                }
                HistoryCommand::Load { index } => {
                    let idx = history_index(index, &saved);
                    if let Some(snapshot) = saved.get(idx) {
                        current = snapshot.raw.clone();
                        save_current_or_exit(&current_path, &current);
                        println!("Loaded saved match #{}.", index);
                        print_summary(&current, &compute_report(&current), &painter);
                    }
                }
                HistoryCommand::Delete { index } => {
                    let idx = history_index(index, &saved);
                    if let Some(removed) = saved.remove(idx) {
                        save_history_or_exit(&history_path, &saved);
                        println!(
                            "Deleted {} vs {} ({}).",
                            removed.home_name, removed.visitor_name, removed.date
                        );
                    }
                }
                HistoryCommand::Wipe { yes } => {
                    let confirmed = yes
                        || config::init::prompt_yes_no(
                            "Wipe ALL saved history? This cannot be undone.",
                            false,
                        )
                        .unwrap_or(false);
                    if !confirmed {
                        println!("Aborted.");
                        finish(EXIT_SUCCESS);
                    }
                    let count = saved.len();
                    saved.clear();
                    save_history_or_exit(&history_path, &saved);
                    println!("Wiped {} saved matches.", count);
                }
                HistoryCommand::Export { path } => {
                    let path =
                        path.unwrap_or_else(|| PathBuf::from(history::DEFAULT_EXPORT_FILE));
                    if let Err(e) = history::export_history(&path, &saved) {
                        fail(EXIT_STORAGE, format!("Export failed: {:#}", e));
                    }
                    println!("Exported {} saved matches to {}", saved.len(), path.display());
                }
            }
        }
        Commands::Theme { choice } => {
            let choice = match choice {
                ThemeArg::Dark => ThemeChoice::Dark,
                ThemeArg::Light => ThemeChoice::Light,
                ThemeArg::Auto => ThemeChoice::Auto,
                ThemeArg::Toggle => output::toggled(theme),
            };
            cfg.theme = Some(choice);

            let path = match config_path {
                Some(p) => p,
                None => match config::get_config_path() {
                    Ok(p) => p,
                    Err(e) => fail(EXIT_CONFIG, format!("Config error: {:#}", e)),
                },
            };
            if let Err(e) = config::save_config(&path, &cfg) {
                fail(EXIT_CONFIG, format!("Config error: {:#}", e));
            }
            println!(
                "Theme set to {}",
                match choice {
                    ThemeChoice::Dark => "dark",
                    ThemeChoice::Light => "light",
                    ThemeChoice::Auto => "auto",
                }
            );
        }
        Commands::Init => {}
    }

    finish(EXIT_SUCCESS);
}
