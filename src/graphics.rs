//! Ready-made screen composition for `embedded-graphics` targets.
//!
//! [`GraphicsRenderer`] implements [`Renderer`] on top of any monochrome
//! draw target, composing the splash, work, break, and setting views
//! from the layout in [`render`](crate::render). Sprite pixel data stays
//! with the integrator; pass the raw images for your panel's artwork in
//! a [`SpriteSet`].

use embedded_graphics::image::{Image, ImageRaw};
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;

use crate::render::{
    PROGRESS_BOTTOM, PROGRESS_TOP, PROGRESS_WIDTH, READOUT_X, READOUT_Y, Renderer, marker_x,
    minutes_text, progress_fill_width, settings_text,
};

/// Draw target that can push its buffer to the panel.
///
/// `embedded-graphics` standardizes drawing but not presenting, so the
/// concrete display supplies the transfer (for a buffered driver this
/// wraps its `flush`). The method cannot fail; hardware errors stay
/// inside the implementation.
pub trait PresentTarget: DrawTarget<Color = BinaryColor> {
    /// Transfers the drawn buffer to the panel.
    fn present(&mut self);
}

/// Sprite set for the composed screens.
///
/// All sprites are 1-bit raw images. The splash covers the whole panel;
/// the desk, cup, and deadline sprites sit on top of the progress bar.
pub struct SpriteSet<'a> {
    /// Full-panel power-up image.
    pub splash: ImageRaw<'a, BinaryColor>,

    /// Goal sprite at the right end of the work progress bar.
    pub desk: ImageRaw<'a, BinaryColor>,

    /// Goal sprite at the right end of the break progress bar.
    pub cup: ImageRaw<'a, BinaryColor>,

    /// Marker that trails the fill edge of the work progress bar.
    pub deadline: ImageRaw<'a, BinaryColor>,
}

/// [`Renderer`] composing screens onto an `embedded-graphics` target.
pub struct GraphicsRenderer<'a, D> {
    target: D,
    sprites: SpriteSet<'a>,
}

impl<'a, D: PresentTarget> GraphicsRenderer<'a, D> {
    /// Wraps a draw target and the artwork to compose onto it.
    pub fn new(target: D, sprites: SpriteSet<'a>) -> Self {
        Self { target, sprites }
    }

    /// The wrapped draw target.
    pub fn target(&self) -> &D {
        &self.target
    }

    /// Tears the renderer down into its draw target.
    pub fn into_target(self) -> D {
        self.target
    }

    fn clear(&mut self) {
        let _ = self.target.clear(BinaryColor::Off);
    }

    fn draw_readout(&mut self, text: &str) {
        let _ = Text::new(text, Point::new(READOUT_X, READOUT_Y), text_style())
            .draw(&mut self.target);
    }

    fn draw_progress_fill(&mut self, fill_width: u32) {
        let bar = Rectangle::new(
            Point::new(0, PROGRESS_TOP as i32),
            Size::new(fill_width, PROGRESS_BOTTOM - PROGRESS_TOP),
        );
        let _ = bar
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut self.target);
    }

    /// Draws a sprite with its bottom edge seated on the progress bar's
    /// top edge.
    fn draw_above_bar(&mut self, sprite: &ImageRaw<'a, BinaryColor>, x: u32) {
        let top = PROGRESS_TOP.saturating_sub(sprite.size().height);
        let _ = Image::new(sprite, Point::new(x as i32, top as i32)).draw(&mut self.target);
    }
}

impl<D: PresentTarget> Renderer for GraphicsRenderer<'_, D> {
    fn draw_splash(&mut self) {
        self.clear();
        let _ = Image::new(&self.sprites.splash, Point::zero()).draw(&mut self.target);
    }

    fn draw_work(&mut self, elapsed: u16, total: u16) {
        self.clear();
        self.draw_readout(minutes_text(elapsed, total).as_str());
        self.draw_progress_fill(progress_fill_width(elapsed, total));

        let desk = self.sprites.desk;
        self.draw_above_bar(&desk, PROGRESS_WIDTH.saturating_sub(desk.size().width));

        let deadline = self.sprites.deadline;
        let x = marker_x(elapsed, total, deadline.size().width);
        self.draw_above_bar(&deadline, x);
    }

    fn draw_break(&mut self, elapsed: u16, total: u16) {
        self.clear();
        self.draw_readout(minutes_text(elapsed, total).as_str());
        self.draw_progress_fill(progress_fill_width(elapsed, total));

        let cup = self.sprites.cup;
        self.draw_above_bar(&cup, PROGRESS_WIDTH.saturating_sub(cup.size().width));
    }

    fn draw_settings(&mut self, work_minutes: u16) {
        self.clear();
        self.draw_readout(settings_text(work_minutes).as_str());
    }

    fn present(&mut self) {
        self.target.present();
    }
}

fn text_style() -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_6X10)
        .text_color(BinaryColor::On)
        .build()
}
