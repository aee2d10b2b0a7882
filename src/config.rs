//! Session configuration and timing parameters.

use crate::types::Phase;

/// Smallest selectable work duration in minutes.
pub const WORK_MINUTES_MIN: u16 = 5;

/// Largest selectable work duration in minutes.
pub const WORK_MINUTES_MAX: u16 = 60;

/// Step applied by one press of the adjust button.
pub const WORK_MINUTES_STEP: u16 = 5;

/// Work duration after power-up.
pub const DEFAULT_WORK_MINUTES: u16 = 25;

/// Break duration in minutes. Fixed; not user-adjustable.
pub const BREAK_MINUTES: u16 = 10;

/// Configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Work duration outside the selectable range.
    WorkMinutesOutOfRange(u16),

    /// Work duration not a multiple of the adjust step.
    WorkMinutesMisaligned(u16),

    /// A zero poll interval would spin the device instead of sleeping.
    ZeroPollInterval,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::WorkMinutesOutOfRange(minutes) => {
                write!(
                    f,
                    "work duration {} is outside {}..={} minutes",
                    minutes, WORK_MINUTES_MIN, WORK_MINUTES_MAX
                )
            }
            ConfigError::WorkMinutesMisaligned(minutes) => {
                write!(
                    f,
                    "work duration {} is not a multiple of {} minutes",
                    minutes, WORK_MINUTES_STEP
                )
            }
            ConfigError::ZeroPollInterval => {
                write!(f, "poll intervals must be non-zero")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Work and break interval lengths for one session.
///
/// The work duration is kept a multiple of [`WORK_MINUTES_STEP`] within
/// [`WORK_MINUTES_MIN`]`..=`[`WORK_MINUTES_MAX`] at all times; stepping
/// past the maximum wraps back to the minimum. The break duration is a
/// fixed property of the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    work_minutes: u16,
    break_minutes: u16,
}

impl SessionConfig {
    /// Creates a configuration with the given work duration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::WorkMinutesOutOfRange`] outside 5..=60 and
    /// [`ConfigError::WorkMinutesMisaligned`] for values that are not a
    /// multiple of 5.
    pub fn new(work_minutes: u16) -> Result<Self, ConfigError> {
        if !(WORK_MINUTES_MIN..=WORK_MINUTES_MAX).contains(&work_minutes) {
            return Err(ConfigError::WorkMinutesOutOfRange(work_minutes));
        }
        if work_minutes % WORK_MINUTES_STEP != 0 {
            return Err(ConfigError::WorkMinutesMisaligned(work_minutes));
        }
        Ok(Self {
            work_minutes,
            break_minutes: BREAK_MINUTES,
        })
    }

    /// Current work duration in minutes.
    #[inline]
    pub fn work_minutes(&self) -> u16 {
        self.work_minutes
    }

    /// Break duration in minutes.
    #[inline]
    pub fn break_minutes(&self) -> u16 {
        self.break_minutes
    }

    /// Steps the work duration, wrapping past the maximum back to the
    /// minimum. Returns the new value.
    pub fn bump_work_minutes(&mut self) -> u16 {
        self.work_minutes += WORK_MINUTES_STEP;
        if self.work_minutes > WORK_MINUTES_MAX {
            self.work_minutes = WORK_MINUTES_MIN;
        }
        self.work_minutes
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            work_minutes: DEFAULT_WORK_MINUTES,
            break_minutes: BREAK_MINUTES,
        }
    }
}

/// Poll intervals and phase thresholds, in milliseconds.
///
/// A phase's poll interval doubles as the clock step it accumulates per
/// wake cycle, so these six values fully determine the timing behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Poll interval while idle or setting. Short, for input latency.
    pub input_poll_ms: u32,

    /// Poll interval while a work or break interval counts minutes.
    pub count_poll_ms: u32,

    /// Poll interval during a buzz phase. Sets the buzzer toggle rate.
    pub buzz_poll_ms: u32,

    /// How long the splash screen holds before the session auto-starts.
    pub splash_hold_ms: u32,

    /// How long a buzz phase lasts.
    pub buzz_hold_ms: u32,

    /// Length of one counted minute.
    pub minute_ms: u32,
}

impl Timing {
    /// Poll interval for the given phase.
    pub fn poll_ms(&self, phase: Phase) -> u32 {
        match phase {
            Phase::Idle | Phase::Setting => self.input_poll_ms,
            Phase::Working | Phase::Break => self.count_poll_ms,
            Phase::WorkBuzz | Phase::BreakBuzz => self.buzz_poll_ms,
        }
    }

    /// Validates that every poll interval is non-zero.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.input_poll_ms == 0 || self.count_poll_ms == 0 || self.buzz_poll_ms == 0 {
            return Err(ConfigError::ZeroPollInterval);
        }
        Ok(())
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            input_poll_ms: 100,
            count_poll_ms: 1000,
            buzz_poll_ms: 1,
            splash_hold_ms: 2000,
            buzz_hold_ms: 2000,
            minute_ms: 60_000,
        }
    }
}
