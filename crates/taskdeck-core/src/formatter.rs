//! Display formatting for task records.
//!
//! Pure functions mapping a raw task string to its truncated display form
//! and a completion flag to a display label. No state, no side effects.

/// Maximum number of characters of task text shown before truncation.
pub const MAX_TASK_CHARS: usize = 14;

/// Marker appended to truncated task text.
pub const ELLIPSIS: &str = "...";

/// Formats task text for display.
///
/// Text of up to [`MAX_TASK_CHARS`] characters is returned unchanged; longer
/// text is cut after [`MAX_TASK_CHARS`] characters and suffixed with
/// [`ELLIPSIS`]. Lengths are counted in characters, so multi-byte text is
/// never split inside a character.
///
/// # Examples
///
/// ```
/// use taskdeck_core::formatter::format_task;
///
/// assert_eq!(format_task("buy milk"), "buy milk");
/// assert_eq!(format_task("water the plants today"), "water the plan...");
/// ```
pub fn format_task(text: &str) -> String {
    match text.char_indices().nth(MAX_TASK_CHARS) {
        None => text.to_string(),
        Some((cut, _)) => format!("{}{}", &text[..cut], ELLIPSIS),
    }
}

/// Returns the display label for a completion flag.
///
/// # Examples
///
/// ```
/// use taskdeck_core::formatter::format_status;
///
/// assert_eq!(format_status(true), "Completed");
/// assert_eq!(format_status(false), "Pending");
/// ```
pub fn format_status(completed: bool) -> &'static str {
    if completed { "Completed" } else { "Pending" }
}
