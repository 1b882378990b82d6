use super::schema::Config;
use crate::history::MAX_HISTORY;

/// Validate configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(limit) = config.history_limit {
        if !(1..=MAX_HISTORY).contains(&limit) {
            errors.push(format!(
                "history_limit: must be between 1 and {}, got {}",
                MAX_HISTORY, limit
            ));
        }
    }

    if let Some(display) = config.history_display {
        if display == 0 {
            errors.push("history_display: must be at least 1".to_string());
        }
    }

    if let Some(ref name) = config.default_home_name {
        if name.trim().is_empty() {
            errors.push("default_home_name: must not be blank".to_string());
        }
    }

    if let Some(ref name) = config.default_visitor_name {
        if name.trim().is_empty() {
            errors.push("default_visitor_name: must not be blank".to_string());
        }
    }

    if let Some(ref dir) = config.data_dir {
        if dir.as_os_str().is_empty() {
            errors.push("data_dir: must not be empty".to_string());
        } else if dir.is_file() {
            errors.push(format!("data_dir: '{}' is a file, not a directory", dir.display()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
