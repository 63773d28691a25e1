use std::time::Duration;

use thiserror::Error;

/// Fraction of a section that has to be on screen before it animates in.
pub const REVEAL_THRESHOLD: f64 = 0.3;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RevealError {
    #[error("visibility observation is not available")]
    ObserverUnavailable,
}

/// Something that can report how much of a region is visible.
///
/// The browser side is an `IntersectionObserver`; tests use a fake.
pub trait VisibilityObserver {
    fn observe(&mut self) -> Result<(), RevealError>;

    fn unobserve(&mut self);
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealState {
    revealed: bool,
    observing: bool,
}

impl RevealState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn is_observing(&self) -> bool {
        self.observing
    }

    /// Starts watching the section. Without an observer the section is shown
    /// straight away rather than left hidden.
    pub fn attach(&mut self, observer: &mut impl VisibilityObserver) {
        if self.revealed || self.observing {
            return;
        }
        match observer.observe() {
            Ok(()) => self.observing = true,
            Err(e) => {
                log::warn!("{e}, revealing section without animation");
                self.revealed = true;
            }
        }
    }

    /// Feeds one visibility sample. Returns `true` only for the sample that
    /// flips the section to revealed; everything after that is a no-op.
    pub fn on_visibility(&mut self, ratio: f64, observer: &mut impl VisibilityObserver) -> bool {
        if self.revealed || ratio < REVEAL_THRESHOLD {
            return false;
        }
        self.revealed = true;
        self.detach(observer);
        true
    }

    pub fn detach(&mut self, observer: &mut impl VisibilityObserver) {
        if self.observing {
            observer.unobserve();
            self.observing = false;
        }
    }
}

/// Transition delay for the `index`th card of a revealed list. Saturates
/// instead of overflowing.
pub fn stagger_delay(index: usize, step: Duration) -> Duration {
    u32::try_from(index)
        .ok()
        .and_then(|i| step.checked_mul(i))
        .unwrap_or(Duration::MAX)
}

/// CSS `transition-delay` value for [`stagger_delay`].
pub fn stagger_style(index: usize, step: Duration) -> String {
    format!("transition-delay: {}ms", stagger_delay(index, step).as_millis())
}

/// How a card moves into place when its section is revealed.
///
/// The hidden classes sit behind the `hydrated:` variant (see `input.css`), so
/// they only apply once the client has taken over. A page that never hydrates
/// keeps its content visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entrance {
    SlideUp,
    FadeIn,
    FromRight,
    FromLeft,
}

impl Entrance {
    pub const ALL: [Entrance; 4] = [
        Entrance::SlideUp,
        Entrance::FadeIn,
        Entrance::FromRight,
        Entrance::FromLeft,
    ];

    pub fn classes(self, revealed: bool) -> &'static str {
        match (self, revealed) {
            (Entrance::SlideUp, true) => "translate-y-0 opacity-100",
            (Entrance::SlideUp, false) => "hydrated:translate-y-20 hydrated:opacity-0",
            (Entrance::FadeIn, true) => "opacity-100",
            (Entrance::FadeIn, false) => "hydrated:opacity-0",
            (Entrance::FromRight | Entrance::FromLeft, true) => "translate-x-0 opacity-100",
            (Entrance::FromRight, false) => "hydrated:translate-x-20 hydrated:opacity-0",
            (Entrance::FromLeft, false) => "hydrated:-translate-x-20 hydrated:opacity-0",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakeObserver {
        unavailable: bool,
        observing: bool,
        observe_calls: usize,
        unobserve_calls: usize,
    }

    impl VisibilityObserver for FakeObserver {
        fn observe(&mut self) -> Result<(), RevealError> {
            self.observe_calls += 1;
            if self.unavailable {
                return Err(RevealError::ObserverUnavailable);
            }
            self.observing = true;
            Ok(())
        }

        fn unobserve(&mut self) {
            self.unobserve_calls += 1;
            self.observing = false;
        }
    }

    #[test]
    fn starts_hidden() {
        let mut observer = FakeObserver::default();
        let mut state = RevealState::new();
        state.attach(&mut observer);
        assert!(!state.is_revealed());
        assert!(observer.observing);
    }

    #[test]
    fn below_threshold_does_nothing() {
        let mut observer = FakeObserver::default();
        let mut state = RevealState::new();
        state.attach(&mut observer);

        assert!(!state.on_visibility(0.0, &mut observer));
        assert!(!state.on_visibility(0.29, &mut observer));
        assert!(!state.is_revealed());
        assert!(observer.observing);
    }

    #[test]
    fn reveals_exactly_once_and_never_reverts() {
        let mut observer = FakeObserver::default();
        let mut state = RevealState::new();
        state.attach(&mut observer);

        assert!(state.on_visibility(0.3, &mut observer));
        assert!(state.is_revealed());
        assert!(!observer.observing);

        // scrolling away and back again
        assert!(!state.on_visibility(0.0, &mut observer));
        assert!(!state.on_visibility(1.0, &mut observer));
        assert!(state.is_revealed());
        assert_eq!(observer.unobserve_calls, 1);
    }

    #[test]
    fn missing_observer_shows_content() {
        let mut observer = FakeObserver {
            unavailable: true,
            ..Default::default()
        };
        let mut state = RevealState::new();
        state.attach(&mut observer);
        assert!(state.is_revealed());
        assert!(!state.is_observing());

        state.detach(&mut observer);
        assert_eq!(observer.unobserve_calls, 0);
    }

    #[test]
    fn detach_before_reveal_stops_observing() {
        let mut observer = FakeObserver::default();
        let mut state = RevealState::new();
        state.attach(&mut observer);
        state.attach(&mut observer);
        assert_eq!(observer.observe_calls, 1);

        state.detach(&mut observer);
        state.detach(&mut observer);
        assert_eq!(observer.unobserve_calls, 1);
        assert!(!state.is_revealed());
    }

    #[test]
    fn stagger() {
        let step = Duration::from_millis(100);
        assert_eq!(stagger_delay(0, step), Duration::ZERO);
        assert_eq!(stagger_style(3, step), "transition-delay: 300ms");
    }

    #[test]
    fn stagger_saturates() {
        let step = Duration::from_secs(u64::MAX / 2);
        assert_eq!(stagger_delay(3, step), Duration::MAX);
        assert_eq!(stagger_delay(2, Duration::MAX), Duration::MAX);
    }

    #[test]
    fn hidden_state_only_applies_after_hydration() {
        for entrance in Entrance::ALL {
            let hidden = entrance.classes(false);
            assert!(
                hidden.split_whitespace().all(|c| c.starts_with("hydrated:")),
                "{entrance:?} hides content without hydration: {hidden}"
            );
            assert!(entrance.classes(true).contains("opacity-100"));
        }
    }
}
