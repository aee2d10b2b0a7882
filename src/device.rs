//! Device assembly: hardware collaborator traits, command dispatch, and
//! the sleep-sample-tick loop.
//!
//! [`PomodoroDevice`] owns a [`TimerController`] together with one
//! implementation of each collaborator trait and runs the wake cycle:
//! sleep for the poll interval, sample the buttons, tick the controller,
//! execute the commands it returned. Firmware hands its peripherals to
//! [`PomodoroDevice::run`]; tests drive [`PomodoroDevice::step`] with
//! mock collaborators instead.

use crate::command::{Command, Screen};
use crate::config::{ConfigError, SessionConfig, Timing};
use crate::controller::TimerController;
use crate::render::Renderer;
use crate::types::ButtonSample;

/// Button sampler.
pub trait InputSource {
    /// Returns the pressed state of both buttons, sampled fresh.
    ///
    /// Called exactly once per wake cycle. Debouncing, if any, is the
    /// implementation's concern; the controller acts on whatever levels
    /// it is handed.
    fn sample(&mut self) -> ButtonSample;
}

/// Low-power millisecond sleep.
pub trait SleepTimer {
    /// Blocks for `ms` milliseconds, ideally in the deepest sleep mode
    /// the platform can wake from. Re-armed with a fresh duration every
    /// cycle, so the interval may change from call to call.
    fn sleep_ms(&mut self, ms: u32);
}

/// On/off buzzer output.
pub trait Buzzer {
    /// Drives the buzzer output to a level.
    fn set(&mut self, on: bool);

    /// Inverts the buzzer output.
    fn toggle(&mut self);
}

/// Performs one controller command against the renderer and buzzer.
///
/// Exposed for integrations that run their own loop instead of
/// [`PomodoroDevice::run`].
pub fn dispatch<R: Renderer, B: Buzzer>(command: Command, renderer: &mut R, buzzer: &mut B) {
    match command {
        Command::Render(screen) => {
            match screen {
                Screen::Splash => renderer.draw_splash(),
                Screen::Work { elapsed, total } => renderer.draw_work(elapsed, total),
                Screen::Break { elapsed, total } => renderer.draw_break(elapsed, total),
                Screen::Settings { work_minutes } => renderer.draw_settings(work_minutes),
            }
            renderer.present();
        }
        Command::BuzzerSet(on) => buzzer.set(on),
        Command::BuzzerToggle => buzzer.toggle(),
    }
}

/// The assembled timer device: controller plus hardware collaborators.
pub struct PomodoroDevice<I, S, R, B> {
    controller: TimerController,
    input: I,
    sleep: S,
    renderer: R,
    buzzer: B,
}

impl<I, S, R, B> PomodoroDevice<I, S, R, B>
where
    I: InputSource,
    S: SleepTimer,
    R: Renderer,
    B: Buzzer,
{
    /// Assembles a device with default timing.
    pub fn new(config: SessionConfig, input: I, sleep: S, renderer: R, buzzer: B) -> Self {
        Self {
            controller: TimerController::new(config),
            input,
            sleep,
            renderer,
            buzzer,
        }
    }

    /// Assembles a device with custom timing parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroPollInterval`] if any poll interval in
    /// `timing` is zero.
    pub fn with_timing(
        config: SessionConfig,
        timing: Timing,
        input: I,
        sleep: S,
        renderer: R,
        buzzer: B,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            controller: TimerController::with_timing(config, timing)?,
            input,
            sleep,
            renderer,
            buzzer,
        })
    }

    /// The controller driving this device.
    pub fn controller(&self) -> &TimerController {
        &self.controller
    }

    /// The renderer collaborator.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// The buzzer collaborator.
    pub fn buzzer(&self) -> &B {
        &self.buzzer
    }

    /// Draws the power-up splash screen.
    pub fn splash(&mut self) {
        dispatch(
            Command::Render(Screen::Splash),
            &mut self.renderer,
            &mut self.buzzer,
        );
    }

    /// Runs one wake cycle without the leading sleep: sample the buttons,
    /// tick the controller, execute the commands. Returns the poll
    /// interval to sleep before the next cycle.
    pub fn step(&mut self) -> u32 {
        let sample = self.input.sample();
        let output = self.controller.tick(sample);
        for command in &output.commands {
            dispatch(*command, &mut self.renderer, &mut self.buzzer);
        }
        output.next_poll_ms
    }

    /// Runs the device forever: splash first, then endless
    /// sleep-sample-tick cycles.
    pub fn run(&mut self) -> ! {
        self.splash();
        let mut poll_ms = self.controller.poll_interval_ms();
        loop {
            self.sleep.sleep_ms(poll_ms);
            poll_ms = self.step();
        }
    }

    /// Tears the device down into its collaborators.
    pub fn into_parts(self) -> (I, S, R, B) {
        (self.input, self.sleep, self.renderer, self.buzzer)
    }
}
