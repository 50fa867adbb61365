//! Keyboard shortcut matching.

#[cfg(test)]
#[path = "keyboard_test.rs"]
mod keyboard_test;

/// Ctrl+S, or Cmd+S on macOS.
#[must_use]
pub fn is_save_shortcut(key: &str, ctrl: bool, meta: bool) -> bool {
    (ctrl || meta) && key.eq_ignore_ascii_case("s")
}
