//! Keyboard Actions and Shortcuts
//!
//! Defines the counter actions, global keyboard shortcuts and the helper that
//! renders keystrokes for button hints.

use gpui::{KeyBinding, actions};

use crate::constants::COUNTER_KEY_CONTEXT;
use crate::domain::counter::CounterAction;

actions!(counter, [Increment, Decrement, Reset]);
actions!(app, [Quit, ToggleLocale]);

/// Convert a keystroke string to human-readable format
///
/// Platform-specific formatting:
/// - macOS: ⌘ for cmd, ⌥ for alt, ⌃ for ctrl, ⇧ for shift
/// - Others: Ctrl+, Alt+, Shift+
pub fn humanize_keystroke(keystroke: &str) -> String {
    // A bare "-" is the minus key, not a separator
    if keystroke == "-" {
        return "-".to_string();
    }

    let parts = keystroke.split('-');
    let mut display_text = String::new();

    #[cfg(target_os = "macos")]
    let separator = "";
    #[cfg(not(target_os = "macos"))]
    let separator = "+";

    for (i, part) in parts.enumerate() {
        if i > 0 {
            display_text.push_str(separator);
        }

        let symbol = match part {
            "secondary" | "cmd" => {
                #[cfg(target_os = "macos")]
                { "⌘" }
                #[cfg(not(target_os = "macos"))]
                { "Ctrl" }
            }
            "ctrl" => {
                #[cfg(target_os = "macos")]
                { "⌃" }
                #[cfg(not(target_os = "macos"))]
                { "Ctrl" }
            }
            "alt" => {
                #[cfg(target_os = "macos")]
                { "⌥" }
                #[cfg(not(target_os = "macos"))]
                { "Alt" }
            }
            "shift" => {
                #[cfg(target_os = "macos")]
                { "⇧" }
                #[cfg(not(target_os = "macos"))]
                { "Shift" }
            }
            "up" => "↑",
            "down" => "↓",
            "enter" => "Enter",
            "space" => "Space",
            "escape" => "Esc",
            c => {
                display_text.push_str(&c.to_uppercase());
                continue;
            }
        };
        display_text.push_str(symbol);
    }

    display_text
}

/// Primary keystroke shown as the hint for a counter action
pub fn counter_shortcut(action: CounterAction) -> &'static str {
    match action {
        CounterAction::Increment => "up",
        CounterAction::Decrement => "down",
        CounterAction::Reset => "0",
    }
}

/// Create global keyboard bindings
pub fn new_key_bindings() -> Vec<KeyBinding> {
    let counter = Some(COUNTER_KEY_CONTEXT);
    vec![
        // Application
        KeyBinding::new("secondary-q", Quit, None),
        KeyBinding::new("secondary-l", ToggleLocale, None),
        // Counter
        KeyBinding::new(counter_shortcut(CounterAction::Increment), Increment, counter),
        KeyBinding::new("+", Increment, counter),
        KeyBinding::new("=", Increment, counter),
        KeyBinding::new(counter_shortcut(CounterAction::Decrement), Decrement, counter),
        KeyBinding::new("-", Decrement, counter),
        KeyBinding::new(counter_shortcut(CounterAction::Reset), Reset, counter),
        KeyBinding::new("escape", Reset, counter),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_humanize_plain_keys() {
        assert_eq!(humanize_keystroke("up"), "↑");
        assert_eq!(humanize_keystroke("down"), "↓");
        assert_eq!(humanize_keystroke("0"), "0");
        assert_eq!(humanize_keystroke("-"), "-");
        assert_eq!(humanize_keystroke("escape"), "Esc");
    }

    #[cfg(not(target_os = "macos"))]
    #[test]
    fn test_humanize_modifiers() {
        assert_eq!(humanize_keystroke("secondary-q"), "Ctrl+Q");
        assert_eq!(humanize_keystroke("ctrl-shift-l"), "Ctrl+Shift+L");
    }

    #[cfg(target_os = "macos")]
    #[test]
    fn test_humanize_modifiers() {
        assert_eq!(humanize_keystroke("secondary-q"), "⌘Q");
        assert_eq!(humanize_keystroke("ctrl-shift-l"), "⌃⇧L");
    }

    #[test]
    fn test_every_counter_action_has_shortcut() {
        let shortcuts: Vec<_> = CounterAction::all()
            .iter()
            .map(|a| counter_shortcut(*a))
            .collect();
        assert_eq!(shortcuts, vec!["up", "down", "0"]);
    }
}
