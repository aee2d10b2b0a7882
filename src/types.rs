//! Core types for the timer: operating phases, button samples, and the
//! events derived from them.

/// The discrete operating mode of the timer.
///
/// Exactly one phase is active at any time. The two buzz phases are
/// separate variants rather than a flag on `Working`/`Break`, so the
/// interval that follows the alert is part of the state itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Splash screen is showing; the session auto-starts shortly.
    Idle,

    /// Work duration is being adjusted; the clock is stopped.
    Setting,

    /// A work interval is counting minutes.
    Working,

    /// A break interval is counting minutes.
    Break,

    /// Buzzer alert after a completed work interval, ahead of the break.
    WorkBuzz,

    /// Buzzer alert after a completed break interval, ahead of the next
    /// work interval.
    BreakBuzz,
}

impl Phase {
    /// Returns true for the transient buzzer-alert phases.
    pub fn is_buzz(&self) -> bool {
        matches!(self, Phase::WorkBuzz | Phase::BreakBuzz)
    }

    /// Returns true for the phases that count interval minutes.
    pub fn is_counting(&self) -> bool {
        matches!(self, Phase::Working | Phase::Break)
    }
}

/// Pressed state of both buttons, sampled once per wake cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonSample {
    /// Start button: begin or restart a session.
    pub start: bool,

    /// Adjust button: step the work duration.
    pub adjust: bool,
}

impl ButtonSample {
    /// Neither button pressed.
    pub const RELEASED: Self = Self::new(false, false);

    /// Only the start button pressed.
    pub const START: Self = Self::new(true, false);

    /// Only the adjust button pressed.
    pub const ADJUST: Self = Self::new(false, true);

    /// Both buttons pressed at once.
    pub const BOTH: Self = Self::new(true, true);

    /// Creates a sample from the two raw pressed states.
    #[inline]
    pub const fn new(start: bool, adjust: bool) -> Self {
        Self { start, adjust }
    }

    /// Derives the user intent for this cycle.
    pub fn event(self) -> ButtonEvent {
        ButtonEvent::from(self)
    }
}

/// User intent derived fresh from a [`ButtonSample`] each cycle.
///
/// A button only registers while the other is up; a simultaneous press
/// yields [`ButtonEvent::None`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// No actionable press this cycle.
    None,

    /// Start (or restart) a work session from zero.
    StartPressed,

    /// Enter the setting phase and step the work duration.
    AdjustWorkPressed,
}

impl From<ButtonSample> for ButtonEvent {
    fn from(sample: ButtonSample) -> Self {
        match (sample.start, sample.adjust) {
            (true, false) => ButtonEvent::StartPressed,
            (false, true) => ButtonEvent::AdjustWorkPressed,
            _ => ButtonEvent::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_presses_map_to_events() {
        assert_eq!(ButtonSample::START.event(), ButtonEvent::StartPressed);
        assert_eq!(ButtonSample::ADJUST.event(), ButtonEvent::AdjustWorkPressed);
    }

    #[test]
    fn released_and_simultaneous_presses_yield_no_event() {
        assert_eq!(ButtonSample::RELEASED.event(), ButtonEvent::None);
        assert_eq!(ButtonSample::BOTH.event(), ButtonEvent::None);
    }

    #[test]
    fn constants_match_raw_construction() {
        assert_eq!(ButtonSample::START, ButtonSample::new(true, false));
        assert_eq!(ButtonSample::ADJUST, ButtonSample::new(false, true));
        assert_eq!(ButtonSample::BOTH, ButtonSample::new(true, true));
    }

    #[test]
    fn buzz_phases_are_classified_as_buzz() {
        assert!(Phase::WorkBuzz.is_buzz());
        assert!(Phase::BreakBuzz.is_buzz());
        assert!(!Phase::Idle.is_buzz());
        assert!(!Phase::Working.is_buzz());
    }

    #[test]
    fn counting_phases_are_classified_as_counting() {
        assert!(Phase::Working.is_counting());
        assert!(Phase::Break.is_counting());
        assert!(!Phase::Setting.is_counting());
        assert!(!Phase::WorkBuzz.is_counting());
    }
}
