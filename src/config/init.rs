use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::config::{get_config_path, save_config, Config, ThemeChoice, DEFAULT_HISTORY_DISPLAY};
use crate::history::MAX_HISTORY;

/// Prompt user with a message and return their trimmed input.
fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    std::io::stdout()
        .flush()
        .context("Failed to flush stdout")?;
    let mut input = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut input)
        .context("Failed to read input")?;
    Ok(input.trim().to_string())
}

/// Prompt user with a message and a default value. Returns default if input is empty.
fn prompt_with_default(message: &str, default: &str) -> Result<String> {
    let input = prompt(&format!("{} [{}]: ", message, default))?;
    if input.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(input)
    }
}

/// Prompt user with a yes/no question. Returns bool based on input and default.
pub fn prompt_yes_no(message: &str, default_yes: bool) -> Result<bool> {
    let hint = if default_yes { "Y/n" } else { "y/N" };
    let input = prompt(&format!("{} [{}]: ", message, hint))?;
    let input = input.to_lowercase();
    if input.is_empty() {
        Ok(default_yes)
    } else {
        Ok(input == "y" || input == "yes")
    }
}

/// Keep asking until `parse` accepts the answer.
fn prompt_until<T>(
    message: &str,
    default: &str,
    parse: impl Fn(&str) -> Result<T, String>,
) -> Result<T> {
    loop {
        let answer = prompt_with_default(message, default)?;
        match parse(&answer) {
            Ok(v) => return Ok(v),
            Err(e) => println!("  Invalid: {}. Try again.", e),
        }
    }
}

fn parse_team_name(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("name must not be blank".to_string())
    } else {
        Ok(s.trim().to_string())
    }
}

fn parse_history_limit(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(n) if (1..=MAX_HISTORY).contains(&n) => Ok(n),
        _ => Err(format!("must be a whole number from 1 to {}", MAX_HISTORY)),
    }
}

fn parse_history_display(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err("must be a whole number of at least 1".to_string()),
    }
}

fn parse_theme(s: &str) -> Result<ThemeChoice, String> {
    ThemeChoice::parse(s).ok_or_else(|| "expected dark, light or auto".to_string())
}

/// Run the interactive init wizard to create a config file.
///
/// If `default_path` is Some, uses that as the config file path.
/// Otherwise, prompts the user with the default config path.
pub fn run_init_wizard(default_path: Option<PathBuf>) -> Result<()> {
    println!();
    println!("Bowl Tally Configuration");
    println!("========================");
    println!();
    println!("Team names are used whenever you start a fresh match.");

    let home = prompt_until("Home team name", "Home", parse_team_name)?;
    let visitor = prompt_until("Visitor team name", "Visitor", parse_team_name)?;

    println!();
    println!("Colours: 'dark' and 'light' match your terminal background; 'auto' detects it.");
    let theme = prompt_until("Theme", "dark", parse_theme)?;

    println!();
    println!("Saved matches are kept newest first; the oldest drop off past the limit.");
    let history_limit = prompt_until(
        "Saved matches to keep",
        &MAX_HISTORY.to_string(),
        parse_history_limit,
    )?;
    let history_display = prompt_until(
        "Saved matches to list",
        &DEFAULT_HISTORY_DISPLAY.to_string(),
        parse_history_display,
    )?;

    let default_config_path = match default_path {
        Some(p) => p,
        None => get_config_path()?,
    };
    println!();
    let path_str = prompt_with_default(
        "Where should the config be saved?",
        &default_config_path.display().to_string(),
    )?;
    let config_path = PathBuf::from(&path_str);

    if config_path.exists() {
        let overwrite = prompt_yes_no(
            &format!(
                "Config already exists at {}. Overwrite?",
                config_path.display()
            ),
            false,
        )?;
        if !overwrite {
            println!("Aborted.");
            return Ok(());
        }
    }

    // Only write what differs from the defaults
    let config = Config {
        theme: (theme != ThemeChoice::default()).then_some(theme),
        history_limit: (history_limit != MAX_HISTORY).then_some(history_limit),
        history_display: (history_display != DEFAULT_HISTORY_DISPLAY).then_some(history_display),
        default_home_name: (home != "Home").then_some(home),
        default_visitor_name: (visitor != "Visitor").then_some(visitor),
        data_dir: None,
    };

    save_config(&config_path, &config)?;

    println!();
    println!("Config written to {}", config_path.display());
    println!("Run `bowl-tally` to see the scoreboard.");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_team_name() {
        assert_eq!(parse_team_name("  Central "), Ok("Central".to_string()));
        assert!(parse_team_name("   ").is_err());
    }

    #[test]
    fn test_parse_history_limit() {
        assert_eq!(parse_history_limit("200"), Ok(200));
        assert_eq!(parse_history_limit("1"), Ok(1));
        assert!(parse_history_limit("0").is_err());
        assert!(parse_history_limit("201").is_err());
        assert!(parse_history_limit("many").is_err());
    }

    #[test]
    fn test_parse_history_display() {
        assert_eq!(parse_history_display("10"), Ok(10));
        assert!(parse_history_display("0").is_err());
    }

    #[test]
    fn test_parse_theme() {
        assert_eq!(parse_theme("auto"), Ok(ThemeChoice::Auto));
        assert!(parse_theme("sepia").is_err());
    }
}
