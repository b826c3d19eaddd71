//! One-shot limitation warnings with colored terminal output.
//!
//! The calculator never fails (see the classifier's permissive default),
//! but a few inputs hit documented limitations worth telling the user
//! about exactly once, e.g. a bucket count reaching the positional base.

use std::collections::HashSet;
use std::sync::{LazyLock, Mutex};

/// ANSI color codes for terminal output
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Messages already printed, kept to deduplicate across calls.
static WARNED: LazyLock<Mutex<HashSet<String>>> =
    LazyLock::new(|| Mutex::new(HashSet::new()));

/// Warn about a known limitation (prints once per unique message).
///
/// # Example
/// ```ignore
/// warn_once("specificity", "bucket count 300 reaches base 256");
/// ```
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn warn_once(component: &str, message: &str) {
    let key = format!("[{component}] {message}");
    let fresh = WARNED.lock().unwrap().insert(key);

    if fresh {
        eprintln!("{YELLOW}[specificity {component}] ⚠ {message}{RESET}");
    }
}

/// Clear all recorded warnings (call between independent batches).
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn clear_warnings() {
    WARNED.lock().unwrap().clear();
}
