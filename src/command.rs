//! Side-effect commands emitted by the controller.

use heapless::Vec;

/// Maximum commands a single tick can emit.
///
/// The busiest tick is a buzz exit, which silences the buzzer and
/// renders the next interval's view. Capacity doubles that for headroom.
pub const MAX_COMMANDS_PER_TICK: usize = 4;

/// Bounded buffer of commands produced by one tick.
pub type CommandBuf = Vec<Command, MAX_COMMANDS_PER_TICK>;

/// Which screen to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Screen {
    /// Power-up splash image.
    Splash,
    /// Work view: elapsed of total minutes, progress bar with the
    /// deadline marker.
    Work { elapsed: u16, total: u16 },
    /// Break view: elapsed of total minutes, progress bar with the cup.
    Break { elapsed: u16, total: u16 },
    /// Setting view: the selected work duration readout.
    Settings { work_minutes: u16 },
}

/// One side effect requested by the controller.
///
/// The controller never touches hardware; it emits these and the device
/// loop performs them against the collaborator traits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Draw a screen and present it.
    Render(Screen),
    /// Drive the buzzer output to a level.
    BuzzerSet(bool),
    /// Invert the buzzer output.
    BuzzerToggle,
}
