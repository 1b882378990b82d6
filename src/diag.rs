use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

static VERBOSE: AtomicBool = AtomicBool::new(false);
static BUFFER: Mutex<Option<Vec<String>>> = Mutex::new(None);

/// Turn `--verbose` progress output on or off for the whole process.
pub fn set_verbose(on: bool) {
    VERBOSE.store(on, Ordering::Relaxed);
}

pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

/// Activate buffering. While active, `warn()` stores messages instead of
/// printing them, so they don't land in the middle of a rendered report.
pub fn activate() {
    if let Ok(mut guard) = BUFFER.lock() {
        *guard = Some(Vec::new());
    }
}

/// Deactivate buffering and return all collected messages.
pub fn drain() -> Vec<String> {
    BUFFER
        .lock()
        .ok()
        .and_then(|mut guard| guard.take())
        .unwrap_or_default()
}

/// Write a warning. If buffering is active the message is stored;
/// otherwise it is printed to stderr immediately.
pub fn warn(msg: String) {
    if let Ok(mut guard) = BUFFER.lock() {
        if let Some(buf) = guard.as_mut() {
            buf.push(msg);
            return;
        }
    }
    eprintln!("{}", msg);
}

/// Print progress detail to stderr when `--verbose` is on.
pub fn verbose(msg: String) {
    if is_verbose() {
        eprintln!("{}", msg);
    }
}

/// Works like `eprintln!` but routes through the warning buffer when it is
/// active.
#[macro_export]
macro_rules! buffered_eprintln {
    ($($arg:tt)*) => {
        $crate::diag::warn(format!($($arg)*))
    };
}

/// Works like `eprintln!` but only prints under `--verbose`.
#[macro_export]
macro_rules! verbose_eprintln {
    ($($arg:tt)*) => {
        if $crate::diag::is_verbose() {
            $crate::diag::verbose(format!($($arg)*))
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    // Buffer state is process-wide, so everything touching it lives in one test.
    #[test]
    fn test_buffer_collects_until_drained() {
        activate();
        warn("first".to_string());
        crate::buffered_eprintln!("second {}", 2);
        let drained = drain();
        // Other tests may warn concurrently, so check membership and order only
        let first = drained.iter().position(|m| m == "first");
        let second = drained.iter().position(|m| m == "second 2");
        assert!(first.is_some() && second.is_some());
        assert!(first < second);

        // Nothing buffered once drained
        assert!(drain().is_empty());
    }

    #[test]
    fn test_verbose_flag_toggles() {
        set_verbose(true);
        assert!(is_verbose());
        set_verbose(false);
        assert!(!is_verbose());
    }
}
