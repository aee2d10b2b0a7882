//! Screen layout: geometry constants, readout formatting, and the
//! [`Renderer`] trait the device draws through.
//!
//! The controller emits [`Screen`](crate::command::Screen) values and
//! leaves pixels to the renderer. The helpers here pin down the layout
//! shared by every renderer implementation: where the progress bar and
//! readouts sit, how far the bar fills, and how the numbers are printed.

use core::fmt::Write;

use heapless::String;

/// Width of the monochrome panel in pixels.
pub const DISPLAY_WIDTH: u32 = 128;

/// Height of the monochrome panel in pixels.
pub const DISPLAY_HEIGHT: u32 = 128;

/// Top edge of the progress bar.
pub const PROGRESS_TOP: u32 = 70;

/// Bottom edge (exclusive) of the progress bar.
pub const PROGRESS_BOTTOM: u32 = 90;

/// The progress bar spans the full panel width.
pub const PROGRESS_WIDTH: u32 = DISPLAY_WIDTH;

/// Left edge of the numeric readouts.
pub const READOUT_X: i32 = 70;

/// Baseline of the numeric readouts.
pub const READOUT_Y: i32 = 110;

/// Buffer sized for the widest readout.
pub type ReadoutText = String<16>;

/// Filled width of the progress bar for `elapsed` of `total` minutes.
///
/// Integer proportion of [`PROGRESS_WIDTH`]; `total` comes from a
/// validated session and is never zero.
pub fn progress_fill_width(elapsed: u16, total: u16) -> u32 {
    debug_assert!(total > 0);
    PROGRESS_WIDTH * u32::from(elapsed) / u32::from(total)
}

/// Left edge of the deadline marker sprite.
///
/// The marker trails the fill edge by its own width, clamped at the
/// panel's left edge early in the interval.
pub fn marker_x(elapsed: u16, total: u16, marker_width: u32) -> u32 {
    progress_fill_width(elapsed, total).saturating_sub(marker_width)
}

/// Formats the `elapsed / total` minutes readout, each number
/// right-aligned to three columns.
pub fn minutes_text(elapsed: u16, total: u16) -> ReadoutText {
    let mut text = ReadoutText::new();
    let _ = write!(text, "{elapsed:>3} / {total:>3}");
    text
}

/// Formats the setting readout, right-aligned to the same end column as
/// the minutes readout.
pub fn settings_text(work_minutes: u16) -> ReadoutText {
    let mut text = ReadoutText::new();
    let _ = write!(text, "{work_minutes:>9}");
    text
}

/// Screen renderer the device draws through.
///
/// The device loop calls exactly one `draw_*` method followed by
/// [`present`](Renderer::present) per rendered screen. Implementations
/// own the framebuffer and the transfer to the panel; none of these
/// methods can fail, so hardware errors stay inside the implementation.
pub trait Renderer {
    /// Draws the power-up splash.
    fn draw_splash(&mut self);

    /// Draws the work view for `elapsed` of `total` minutes.
    fn draw_work(&mut self, elapsed: u16, total: u16);

    /// Draws the break view for `elapsed` of `total` minutes.
    fn draw_break(&mut self, elapsed: u16, total: u16);

    /// Draws the setting view with the selected work duration.
    fn draw_settings(&mut self, work_minutes: u16);

    /// Pushes the drawn screen onto the panel.
    fn present(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_width_is_proportional() {
        assert_eq!(progress_fill_width(0, 25), 0);
        assert_eq!(progress_fill_width(5, 25), 25);
        assert_eq!(progress_fill_width(25, 50), 64);
        assert_eq!(progress_fill_width(24, 25), 122);
    }

    #[test]
    fn marker_trails_the_fill_edge() {
        // Fill 25 px, marker 10 px wide: marker starts at 15.
        assert_eq!(marker_x(5, 25, 10), 15);
    }

    #[test]
    fn marker_clamps_at_the_left_edge() {
        assert_eq!(marker_x(0, 25, 10), 0);
        assert_eq!(marker_x(1, 25, 10), 0);
    }

    #[test]
    fn minutes_text_right_aligns_both_numbers() {
        assert_eq!(minutes_text(0, 25).as_str(), "  0 /  25");
        assert_eq!(minutes_text(9, 120).as_str(), "  9 / 120");
        assert_eq!(minutes_text(105, 120).as_str(), "105 / 120");
    }

    #[test]
    fn settings_text_aligns_to_the_readout_end_column() {
        assert_eq!(settings_text(25).as_str(), "       25");
        assert_eq!(settings_text(5).as_str(), "        5");
        assert_eq!(settings_text(60).as_str(), "       60");
    }
}
