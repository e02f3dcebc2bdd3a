//! Authoring warnings with colored terminal output.
//!
//! Provides deduplication so a warning raised for every compilation unit of a
//! batch is printed once. Used by the compiler core for problems that are worth
//! reporting but must not drop or reorder rules.

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// Every warning recorded so far, keyed by `[area] message`.
static WARNED: Mutex<BTreeSet<String>> = Mutex::new(BTreeSet::new());

/// When set, warnings are still recorded but never printed.
static QUIET: AtomicBool = AtomicBool::new(false);

fn key(area: &str, message: &str) -> String {
    format!("[{area}] {message}")
}

/// Warn about an authoring problem (prints once per unique message).
///
/// # Example
/// ```ignore
/// warn_once("collect", "component `nav` submitted a blank fragment for `768up`");
/// ```
pub fn warn_once(area: &str, message: &str) {
    if record_warning(area, message) && !QUIET.load(Ordering::Relaxed) {
        eprintln!("{}", format!("[strata {area}] ⚠ {message}").yellow());
    }
}

/// Record a warning without printing it.
///
/// Returns `true` only the first time this warning is seen; [`warn_once`]
/// prints exactly when this would return `true`.
#[must_use]
pub fn record_warning(area: &str, message: &str) -> bool {
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(key(area, message))
}

/// Whether the given warning has been raised since the last [`clear_warnings`].
#[must_use]
pub fn has_warned(area: &str, message: &str) -> bool {
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .contains(&key(area, message))
}

/// Number of distinct warnings recorded since the last [`clear_warnings`].
#[must_use]
pub fn warning_count() -> usize {
    WARNED.lock().unwrap_or_else(PoisonError::into_inner).len()
}

/// Suppress (or re-enable) printing. Warnings are recorded either way.
pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

/// Clear all recorded warnings (call between independent batches).
pub fn clear_warnings() {
    WARNED.lock().unwrap_or_else(PoisonError::into_inner).clear();
}
