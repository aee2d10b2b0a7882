#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`TimerController`**: The finite-state interval timer; feed it one button sample
//!   per wake cycle and execute the commands it returns
//! - **`Phase`**: The discrete operating mode (idle, setting, working, break and the two buzz alerts)
//! - **`SessionConfig`**: Validated work/break durations with the wrapping adjust step
//! - **`Timing`**: Per-phase poll intervals and the splash/buzz/minute thresholds
//! - **`Command`** / **`Screen`**: Side effects one tick requests
//! - **`InputSource`**, **`SleepTimer`**, **`Renderer`**, **`Buzzer`**: Traits to implement
//!   for your hardware
//! - **`PomodoroDevice`**: Ties a controller to the four collaborators and runs the
//!   sleep-sample-tick loop
//!
//! Each phase's poll interval doubles as the clock step it accumulates per tick, so
//! the controller keeps time from the sleep durations alone and never reads a clock.
//! With the `embedded-graphics` feature, `GraphicsRenderer` composes the screens onto
//! any monochrome draw target.

pub mod types;
pub mod config;
pub mod command;
pub mod controller;
pub mod render;
pub mod device;

#[cfg(feature = "embedded-graphics")]
pub mod graphics;

pub use types::{ButtonEvent, ButtonSample, Phase};
pub use config::{
    BREAK_MINUTES, ConfigError, DEFAULT_WORK_MINUTES, SessionConfig, Timing, WORK_MINUTES_MAX,
    WORK_MINUTES_MIN, WORK_MINUTES_STEP,
};
pub use command::{Command, CommandBuf, MAX_COMMANDS_PER_TICK, Screen};
pub use controller::{TickOutput, TimerController};
pub use render::Renderer;
pub use device::{Buzzer, InputSource, PomodoroDevice, SleepTimer, dispatch};

#[cfg(feature = "embedded-graphics")]
pub use graphics::{GraphicsRenderer, PresentTarget, SpriteSet};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_controller_matches_device_defaults() {
        let controller = TimerController::new(SessionConfig::default());
        assert_eq!(controller.phase(), Phase::Idle);
        assert_eq!(controller.config().work_minutes(), DEFAULT_WORK_MINUTES);
        assert_eq!(controller.poll_interval_ms(), 100);
    }
}
