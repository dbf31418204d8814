//! Parser warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! Used by the tokenizer to report lenient-mode recoveries (truncated
//! elements, discarded closing tags) that would otherwise be silent.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// When set, warnings are still recorded but never printed.
static QUIET: AtomicBool = AtomicBool::new(false);

/// Warn about a recovery from malformed input (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("element", "discarded stray closing tag </span> at line 3, position 7");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let key = format!("[{component}] {message}");
    if record(key) && !QUIET.load(Ordering::Relaxed) {
        eprintln!("{}", format!("[tagtree {component}] ⚠ {message}").yellow());
    }
}

/// Clear all recorded warnings (call before parsing a new document)
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}

/// Silence (or re-enable) warning output for the whole process.
pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

/// Returns true the first time `key` is seen.
fn record(key: String) -> bool {
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key)
}
