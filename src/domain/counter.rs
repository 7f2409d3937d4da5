//! Counter - The Count State Machine
//!
//! A single integer that starts at zero and moves through three transitions:
//!
//! ```text
//! Increment : n -> n + 1
//! Decrement : n -> n - 1
//! Reset     : n -> 0
//! ```
//!
//! Every transition is a total function. Arithmetic saturates at the `i64`
//! limits instead of wrapping, so the count never jumps sign.

use std::fmt;

/// One of the three user-triggered counter transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CounterAction {
    /// Count -> Count + 1
    Increment,
    /// Count -> Count - 1
    Decrement,
    /// Count -> 0
    Reset,
}

impl CounterAction {
    /// Get the translation key for the action's button label
    pub fn label_key(&self) -> &'static str {
        match self {
            CounterAction::Increment => "action-increment",
            CounterAction::Decrement => "action-decrement",
            CounterAction::Reset => "action-reset",
        }
    }

    /// Stable name used in log fields and element ids
    pub fn name(&self) -> &'static str {
        match self {
            CounterAction::Increment => "increment",
            CounterAction::Decrement => "decrement",
            CounterAction::Reset => "reset",
        }
    }

    /// All actions in display order
    pub fn all() -> &'static [CounterAction] {
        &[
            CounterAction::Increment,
            CounterAction::Decrement,
            CounterAction::Reset,
        ]
    }
}

impl fmt::Display for CounterAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The counter state: a single unclamped integer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counter {
    count: i64,
}

impl Counter {
    /// Create a counter at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Current count
    pub fn count(&self) -> i64 {
        self.count
    }

    /// Apply one transition and return the new count
    pub fn apply(&mut self, action: CounterAction) -> i64 {
        match action {
            CounterAction::Increment => self.increment(),
            CounterAction::Decrement => self.decrement(),
            CounterAction::Reset => self.reset(),
        }
    }

    pub fn increment(&mut self) -> i64 {
        self.count = self.count.saturating_add(1);
        self.count
    }

    pub fn decrement(&mut self) -> i64 {
        self.count = self.count.saturating_sub(1);
        self.count
    }

    pub fn reset(&mut self) -> i64 {
        self.count = 0;
        self.count
    }

    /// Text shown in the display label
    pub fn display_value(&self) -> String {
        self.count.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(actions: &[CounterAction]) -> Counter {
        let mut counter = Counter::new();
        for action in actions {
            counter.apply(*action);
        }
        counter
    }

    #[test]
    fn test_initial_count_is_zero() {
        let counter = Counter::new();
        assert_eq!(counter.count(), 0);
        assert_eq!(counter.display_value(), "0");
    }

    #[test]
    fn test_n_increments() {
        for n in [1usize, 2, 7, 100] {
            let counter = run(&vec![CounterAction::Increment; n]);
            assert_eq!(counter.count(), n as i64);
        }
    }

    #[test]
    fn test_n_decrements_go_negative() {
        for n in [1usize, 3, 50] {
            let counter = run(&vec![CounterAction::Decrement; n]);
            assert_eq!(counter.count(), -(n as i64));
        }
    }

    #[test]
    fn test_reset_from_any_state() {
        for start in [-42i64, -1, 0, 1, 9000] {
            let mut counter = Counter { count: start };
            assert_eq!(counter.apply(CounterAction::Reset), 0);
            assert_eq!(counter.count(), 0);
        }
    }

    #[test]
    fn test_increment_decrement_are_inverse() {
        let mut counter = run(&[CounterAction::Increment; 5]);
        let before = counter.count();

        counter.increment();
        counter.decrement();
        assert_eq!(counter.count(), before);

        counter.decrement();
        counter.increment();
        assert_eq!(counter.count(), before);
    }

    #[test]
    fn test_apply_returns_new_count() {
        let mut counter = Counter::new();
        assert_eq!(counter.apply(CounterAction::Increment), 1);
        assert_eq!(counter.apply(CounterAction::Increment), 2);
        assert_eq!(counter.apply(CounterAction::Decrement), 1);
        assert_eq!(counter.apply(CounterAction::Reset), 0);
    }

    #[test]
    fn test_walkthrough_scenario() {
        let mut counter = Counter::new();
        assert_eq!(counter.display_value(), "0");

        for _ in 0..3 {
            counter.apply(CounterAction::Increment);
        }
        assert_eq!(counter.display_value(), "3");

        counter.apply(CounterAction::Decrement);
        assert_eq!(counter.display_value(), "2");

        counter.apply(CounterAction::Reset);
        assert_eq!(counter.display_value(), "0");
    }

    #[test]
    fn test_decrement_from_zero_has_no_floor() {
        let mut counter = Counter::new();
        counter.apply(CounterAction::Decrement);
        assert_eq!(counter.display_value(), "-1");
    }

    #[test]
    fn test_display_tracks_count_after_each_transition() {
        let mut counter = Counter::new();
        let sequence = [
            CounterAction::Decrement,
            CounterAction::Decrement,
            CounterAction::Increment,
            CounterAction::Reset,
            CounterAction::Increment,
        ];
        for action in sequence {
            let count = counter.apply(action);
            assert_eq!(counter.display_value(), count.to_string());
        }
    }

    #[test]
    fn test_saturates_at_limits() {
        let mut counter = Counter { count: i64::MAX };
        assert_eq!(counter.increment(), i64::MAX);

        let mut counter = Counter { count: i64::MIN };
        assert_eq!(counter.decrement(), i64::MIN);
    }

    #[test]
    fn test_action_metadata() {
        let names: Vec<_> = CounterAction::all().iter().map(|a| a.name()).collect();
        assert_eq!(names, vec!["increment", "decrement", "reset"]);
        assert_eq!(CounterAction::Reset.label_key(), "action-reset");
        assert_eq!(CounterAction::Decrement.to_string(), "decrement");
    }
}
