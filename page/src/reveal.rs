//! Reveal-on-scroll model.
//!
//! Animated elements render hidden-able markup ([`FadeIn`]); the browser
//! entry feeds viewport observations into a [`RevealTracker`], which turns
//! each element from [`RevealState::Hidden`] to [`RevealState::Revealed`] the
//! first time it intersects and never back.

use std::collections::HashMap;

/// Attribute marking an element as a reveal target.
pub const REVEAL_ATTR: &str = "data-reveal";

/// Attribute carrying the numeric id assigned by the browser entry.
pub const REVEAL_ID_ATTR: &str = "data-reveal-id";

/// Class added to a target once it has been revealed.
pub const REVEALED_CLASS: &str = "is-revealed";

/// Class on `<body>` that arms the hidden state. Without it every target is
/// shown as-is, which is what prerendered HTML gets.
pub const READY_CLASS: &str = "reveal-ready";

/// Entrance animation for one element: fade from transparent and slide up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FadeIn {
    /// Opacity before the reveal
    pub initial_opacity: f32,
    /// Downward offset in pixels before the reveal
    pub initial_offset_px: f32,
    /// Opacity after the reveal
    pub target_opacity: f32,
    /// Offset in pixels after the reveal
    pub target_offset_px: f32,
    /// Transition length in seconds
    pub duration_s: f32,
    /// Wait before the transition starts, in seconds
    pub delay_s: f32,
}

impl Default for FadeIn {
    fn default() -> Self {
        Self {
            initial_opacity: 0.0,
            initial_offset_px: 20.0,
            target_opacity: 1.0,
            target_offset_px: 0.0,
            duration_s: 0.8,
            delay_s: 0.0,
        }
    }
}

impl FadeIn {
    /// Default fade-in starting after `delay_s` seconds.
    pub fn delayed(delay_s: f32) -> Self {
        Self {
            delay_s,
            ..Self::default()
        }
    }

    /// Inline `style` value carrying the animation as CSS custom properties.
    pub fn style(&self) -> String {
        format!(
            "--reveal-from-opacity: {}; --reveal-offset: {}px; --reveal-to-opacity: {}; --reveal-to-offset: {}px; --reveal-duration: {}s; --reveal-delay: {}s;",
            self.initial_opacity,
            self.initial_offset_px,
            self.target_opacity,
            self.target_offset_px,
            self.duration_s,
            self.delay_s,
        )
    }
}

/// Visibility of one reveal target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    /// Not yet seen in the viewport
    #[default]
    Hidden,
    /// Seen at least once; terminal
    Revealed,
}

/// Emitted once per target, on its hidden → revealed change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Revealed {
    /// Id of the target that was revealed
    pub id: usize,
}

/// Per-target reveal state, keyed by reveal id.
#[derive(Debug, Default)]
pub struct RevealTracker {
    states: HashMap<usize, RevealState>,
}

impl RevealTracker {
    /// Empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking `id` as hidden. Re-registering keeps the current state.
    pub fn register(&mut self, id: usize) {
        self.states.entry(id).or_default();
    }

    /// Record a viewport observation for `id`.
    ///
    /// Returns `Some` only for the observation that reveals the target.
    pub fn observe(&mut self, id: usize, intersecting: bool) -> Option<Revealed> {
        let state = self.states.get_mut(&id)?;
        if !intersecting || *state == RevealState::Revealed {
            return None;
        }
        *state = RevealState::Revealed;
        Some(Revealed { id })
    }

    /// Current state of `id`, if tracked.
    pub fn state(&self, id: usize) -> Option<RevealState> {
        self.states.get(&id).copied()
    }

    /// Number of tracked targets.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether no target is tracked.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Number of targets still hidden.
    pub fn hidden(&self) -> usize {
        self.states
            .values()
            .filter(|s| **s == RevealState::Hidden)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn targets_start_hidden() {
        let mut tracker = RevealTracker::new();
        tracker.register(0);
        tracker.register(1);

        assert_eq!(tracker.state(0), Some(RevealState::Hidden));
        assert_eq!(tracker.hidden(), 2);
    }

    #[test]
    fn reveals_once_and_never_reverts() {
        let mut tracker = RevealTracker::new();
        tracker.register(3);

        assert_eq!(tracker.observe(3, false), None);
        assert_eq!(tracker.observe(3, true), Some(Revealed { id: 3 }));
        assert_eq!(tracker.observe(3, true), None);
        assert_eq!(tracker.observe(3, false), None);
        assert_eq!(tracker.state(3), Some(RevealState::Revealed));
    }

    #[test]
    fn reregistering_keeps_revealed_state() {
        let mut tracker = RevealTracker::new();
        tracker.register(1);
        tracker.observe(1, true);
        tracker.register(1);

        assert_eq!(tracker.state(1), Some(RevealState::Revealed));
        assert_eq!(tracker.observe(1, true), None);
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut tracker = RevealTracker::new();

        assert_eq!(tracker.observe(7, true), None);
        assert_eq!(tracker.state(7), None);
        assert!(tracker.is_empty());
    }

    #[test]
    fn targets_reveal_independently() {
        let mut tracker = RevealTracker::new();
        for id in 0..3 {
            tracker.register(id);
        }
        tracker.observe(1, true);

        assert_eq!(tracker.len(), 3);
        assert_eq!(tracker.hidden(), 2);
        assert_eq!(tracker.state(0), Some(RevealState::Hidden));
        assert_eq!(tracker.state(2), Some(RevealState::Hidden));
    }

    #[test]
    fn fade_in_defaults_match_entrance_motion() {
        let fade = FadeIn::delayed(0.35);

        assert_eq!(fade.initial_opacity, 0.0);
        assert_eq!(fade.initial_offset_px, 20.0);
        assert_eq!(fade.duration_s, 0.8);
        assert!(fade.style().contains("--reveal-delay: 0.35s;"));
        assert!(fade.style().contains("--reveal-offset: 20px;"));
        assert!(fade.style().contains("--reveal-duration: 0.8s;"));
    }
}
