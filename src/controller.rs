//! Core timer implementation with phase management and adaptive polling.
//!
//! [`TimerController`] owns the session configuration, the active phase,
//! and the elapsed-time counters. Each wake cycle feeds one
//! [`ButtonSample`] to [`TimerController::tick`], which applies the
//! derived button event, advances the phase clock one step, and returns
//! the side effects to perform plus the poll interval for the next sleep.
//! The controller performs no I/O of its own, so the whole state machine
//! runs unmodified on a host.

use crate::command::{Command, CommandBuf, Screen};
use crate::config::{ConfigError, SessionConfig, Timing};
use crate::types::{ButtonEvent, ButtonSample, Phase};

/// Result of one tick: the side effects to perform and when to wake next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickOutput {
    /// Commands to execute, in emission order.
    pub commands: CommandBuf,

    /// Poll interval to hand to the sleep timer before the next sample.
    pub next_poll_ms: u32,
}

/// Finite-state pomodoro timer driven by periodic ticks.
///
/// The controller keeps time without a clock source: every phase's poll
/// interval is also the number of milliseconds one tick adds to the
/// phase counter, so elapsed time accumulates from the sleep durations
/// the caller honors between ticks. Changing phase therefore always
/// re-derives the poll interval, keeping the two in lockstep.
///
/// Within a tick the button event is applied before the clock step, so a
/// press takes effect in the same cycle it was sampled and the clock
/// step runs against the phase the press selected.
#[derive(Debug)]
pub struct TimerController {
    config: SessionConfig,
    timing: Timing,
    phase: Phase,
    current_minute: u16,
    ms_counter: u32,
    poll_interval_ms: u32,
}

impl TimerController {
    /// Creates a controller in the idle phase with default timing.
    pub fn new(config: SessionConfig) -> Self {
        Self::build(config, Timing::default())
    }

    /// Creates a controller with custom timing parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroPollInterval`] if any poll interval in
    /// `timing` is zero.
    pub fn with_timing(config: SessionConfig, timing: Timing) -> Result<Self, ConfigError> {
        timing.validate()?;
        Ok(Self::build(config, timing))
    }

    fn build(config: SessionConfig, timing: Timing) -> Self {
        let phase = Phase::Idle;
        Self {
            config,
            timing,
            phase,
            current_minute: 0,
            ms_counter: 0,
            poll_interval_ms: timing.poll_ms(phase),
        }
    }

    /// Currently active phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Completed minutes of the interval in progress.
    pub fn current_minute(&self) -> u16 {
        self.current_minute
    }

    /// Milliseconds accumulated toward the active phase's next threshold.
    pub fn ms_counter(&self) -> u32 {
        self.ms_counter
    }

    /// Poll interval of the active phase.
    pub fn poll_interval_ms(&self) -> u32 {
        self.poll_interval_ms
    }

    /// Active session configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Timing parameters the controller was built with.
    pub fn timing(&self) -> &Timing {
        &self.timing
    }

    /// Runs one wake cycle: applies the button event, then advances the
    /// phase clock by one poll interval.
    pub fn tick(&mut self, sample: ButtonSample) -> TickOutput {
        let mut commands = CommandBuf::new();

        self.apply_event(sample.event(), &mut commands);
        self.advance_clock(&mut commands);

        TickOutput {
            commands,
            next_poll_ms: self.poll_interval_ms,
        }
    }

    /// Applies the derived button event, if any.
    fn apply_event(&mut self, event: ButtonEvent, commands: &mut CommandBuf) {
        match event {
            ButtonEvent::None => {}
            ButtonEvent::StartPressed => {
                self.ms_counter = 0;
                self.current_minute = 0;
                self.enter(Phase::Working);
                emit(commands, Command::Render(self.work_screen()));
            }
            ButtonEvent::AdjustWorkPressed => {
                self.enter(Phase::Setting);
                let work_minutes = self.config.bump_work_minutes();
                emit(commands, Command::Render(Screen::Settings { work_minutes }));
            }
        }
    }

    /// Advances the clock of whichever phase is active after event
    /// handling. Setting is the only phase without a clock.
    fn advance_clock(&mut self, commands: &mut CommandBuf) {
        match self.phase {
            Phase::Setting => {}
            Phase::Idle => {
                self.ms_counter = self.ms_counter.saturating_add(self.timing.input_poll_ms);
                if self.ms_counter > self.timing.splash_hold_ms {
                    self.ms_counter = 0;
                    self.current_minute = 0;
                    self.enter(Phase::Working);
                    emit(commands, Command::Render(self.work_screen()));
                }
            }
            Phase::Working => {
                self.ms_counter = self.ms_counter.saturating_add(self.timing.count_poll_ms);
                if self.ms_counter > self.timing.minute_ms {
                    self.ms_counter = 0;
                    self.current_minute += 1;
                    if self.current_minute >= self.config.work_minutes() {
                        self.current_minute = 0;
                        self.enter(Phase::WorkBuzz);
                        emit(commands, Command::Render(self.break_screen()));
                    } else {
                        emit(commands, Command::Render(self.work_screen()));
                    }
                }
            }
            Phase::Break => {
                self.ms_counter = self.ms_counter.saturating_add(self.timing.count_poll_ms);
                if self.ms_counter > self.timing.minute_ms {
                    self.ms_counter = 0;
                    self.current_minute += 1;
                    if self.current_minute >= self.config.break_minutes() {
                        self.current_minute = 0;
                        self.enter(Phase::BreakBuzz);
                        emit(commands, Command::Render(self.work_screen()));
                    } else {
                        emit(commands, Command::Render(self.break_screen()));
                    }
                }
            }
            Phase::WorkBuzz | Phase::BreakBuzz => {
                self.ms_counter = self.ms_counter.saturating_add(self.timing.buzz_poll_ms);
                if self.ms_counter > self.timing.buzz_hold_ms {
                    // ms_counter is not reset here, so the first minute of
                    // the following interval runs correspondingly short.
                    emit(commands, Command::BuzzerSet(false));
                    self.current_minute = 0;
                    if self.phase == Phase::WorkBuzz {
                        self.enter(Phase::Break);
                        emit(commands, Command::Render(self.break_screen()));
                    } else {
                        self.enter(Phase::Working);
                        emit(commands, Command::Render(self.work_screen()));
                    }
                } else {
                    emit(commands, Command::BuzzerToggle);
                }
            }
        }
    }

    /// Switches phase and realigns the poll interval with it.
    fn enter(&mut self, phase: Phase) {
        self.phase = phase;
        self.poll_interval_ms = self.timing.poll_ms(phase);
    }

    fn work_screen(&self) -> Screen {
        Screen::Work {
            elapsed: self.current_minute,
            total: self.config.work_minutes(),
        }
    }

    fn break_screen(&self) -> Screen {
        Screen::Break {
            elapsed: self.current_minute,
            total: self.config.break_minutes(),
        }
    }
}

fn emit(commands: &mut CommandBuf, command: Command) {
    // A tick emits at most two commands; the buffer holds four.
    debug_assert!(!commands.is_full());
    let _ = commands.push(command);
}
