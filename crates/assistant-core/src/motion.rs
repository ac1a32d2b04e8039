//! Entrance/exit animation descriptors
//!
//! Framework-neutral description of the fade-and-slide each message plays.
//! The web layer turns a [`Phase`] into inline style; nothing here waits on
//! the animation, so content is visible to the DOM as soon as it exists.

use std::time::Duration;

/// Length of the fade/slide
pub const ENTER_DURATION: Duration = Duration::from_millis(300);

/// Extra delay per list position
pub const STAGGER_STEP: Duration = Duration::from_millis(50);

/// One visual state of a message block
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keyframe {
    pub opacity: f32,
    /// Vertical offset in pixels
    pub translate_y: f32,
}

impl Keyframe {
    pub const fn new(opacity: f32, translate_y: f32) -> Self {
        Self { opacity, translate_y }
    }

    pub fn to_css(&self) -> String {
        format!(
            "opacity: {}; transform: translateY({}px)",
            self.opacity, self.translate_y
        )
    }
}

/// Where a block is in its lifecycle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Just mounted, before the first frame
    #[default]
    Initial,
    /// Fully visible
    Entered,
    /// Being removed
    Exiting,
}

/// Start, resting and exit states plus timing
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub initial: Keyframe,
    pub animate: Keyframe,
    pub exit: Keyframe,
    pub duration: Duration,
    pub delay: Duration,
}

impl Transition {
    /// Fade up from 10px below, delayed by `index` stagger steps
    pub fn entrance(index: usize) -> Self {
        let steps = u32::try_from(index).unwrap_or(u32::MAX);
        Self {
            initial: Keyframe::new(0.0, 10.0),
            animate: Keyframe::new(1.0, 0.0),
            exit: Keyframe::new(0.0, -10.0),
            duration: ENTER_DURATION,
            delay: STAGGER_STEP.saturating_mul(steps),
        }
    }

    /// Inline style for a phase.
    ///
    /// `Initial` has no CSS transition so it applies instantly. `Exiting`
    /// ignores the stagger delay.
    pub fn style(&self, phase: Phase) -> String {
        match phase {
            Phase::Initial => self.initial.to_css(),
            Phase::Entered => format!(
                "{}; transition: {}",
                self.animate.to_css(),
                transition_css(self.duration, self.delay)
            ),
            Phase::Exiting => format!(
                "{}; transition: {}",
                self.exit.to_css(),
                transition_css(self.duration, Duration::ZERO)
            ),
        }
    }

    /// How long a leaving block must stay mounted
    pub const fn exit_after(&self) -> Duration {
        self.duration
    }
}

fn transition_css(duration: Duration, delay: Duration) -> String {
    let duration = duration.as_millis();
    let delay = delay.as_millis();
    format!("opacity {duration}ms ease-out {delay}ms, transform {duration}ms ease-out {delay}ms")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_by_index() {
        assert_eq!(Transition::entrance(0).delay, Duration::ZERO);
        assert_eq!(Transition::entrance(1).delay, Duration::from_millis(50));
        assert_eq!(Transition::entrance(4).delay, Duration::from_millis(200));
        assert_eq!(Transition::entrance(4).duration, ENTER_DURATION);
    }

    #[test]
    fn test_huge_index_saturates() {
        let t = Transition::entrance(usize::MAX);
        assert!(t.delay >= STAGGER_STEP);
    }

    #[test]
    fn test_phase_styles() {
        let t = Transition::entrance(2);
        assert_eq!(t.style(Phase::Initial), "opacity: 0; transform: translateY(10px)");
        assert_eq!(
            t.style(Phase::Entered),
            "opacity: 1; transform: translateY(0px); \
             transition: opacity 300ms ease-out 100ms, transform 300ms ease-out 100ms"
        );
        assert_eq!(
            t.style(Phase::Exiting),
            "opacity: 0; transform: translateY(-10px); \
             transition: opacity 300ms ease-out 0ms, transform 300ms ease-out 0ms"
        );
    }

    #[test]
    fn test_exit_reverses_entrance_offset() {
        let t = Transition::entrance(0);
        assert_eq!(t.exit.translate_y, -t.initial.translate_y);
        assert_eq!(t.exit_after(), ENTER_DURATION);
    }
}
