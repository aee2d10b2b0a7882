//! Shared test infrastructure for pomodoro-controller integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use pomodoro_controller::{Buzzer, ButtonSample, InputSource, Renderer, SleepTimer, Timing};

// ============================================================================
// Compressed Timing
// ============================================================================

/// Timing with every threshold compressed to a handful of ticks: splash
/// hold crossed on the 3rd idle tick, one minute per 2 counting ticks,
/// buzz hold crossed on the 4th buzz tick.
pub fn fast_timing() -> Timing {
    Timing {
        input_poll_ms: 100,
        count_poll_ms: 1000,
        buzz_poll_ms: 1,
        splash_hold_ms: 200,
        buzz_hold_ms: 3,
        minute_ms: 1000,
    }
}

// ============================================================================
// Scripted Input
// ============================================================================

/// Input source that replays a fixed script, then reports released
/// buttons forever.
pub struct ScriptedInput {
    script: heapless::Vec<ButtonSample, 16>,
    cursor: usize,
}

impl ScriptedInput {
    pub fn new(script: &[ButtonSample]) -> Self {
        Self {
            script: heapless::Vec::from_slice(script).unwrap(),
            cursor: 0,
        }
    }

    /// Input that never reports a press.
    pub fn silent() -> Self {
        Self::new(&[])
    }

    pub fn samples_taken(&self) -> usize {
        self.cursor
    }
}

impl InputSource for ScriptedInput {
    fn sample(&mut self) -> ButtonSample {
        let sample = self
            .script
            .get(self.cursor)
            .copied()
            .unwrap_or(ButtonSample::RELEASED);
        self.cursor += 1;
        sample
    }
}

// ============================================================================
// Recording Renderer
// ============================================================================

/// One draw call observed by the mock renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawCall {
    Splash,
    Work(u16, u16),
    Break(u16, u16),
    Settings(u16),
}

/// Renderer that records every draw call and present for inspection.
pub struct RecordingRenderer {
    calls: heapless::Vec<DrawCall, 32>,
    presents: usize,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self {
            calls: heapless::Vec::new(),
            presents: 0,
        }
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn presents(&self) -> usize {
        self.presents
    }
}

impl Renderer for RecordingRenderer {
    fn draw_splash(&mut self) {
        let _ = self.calls.push(DrawCall::Splash);
    }

    fn draw_work(&mut self, elapsed: u16, total: u16) {
        let _ = self.calls.push(DrawCall::Work(elapsed, total));
    }

    fn draw_break(&mut self, elapsed: u16, total: u16) {
        let _ = self.calls.push(DrawCall::Break(elapsed, total));
    }

    fn draw_settings(&mut self, work_minutes: u16) {
        let _ = self.calls.push(DrawCall::Settings(work_minutes));
    }

    fn present(&mut self) {
        self.presents += 1;
    }
}

// ============================================================================
// Recording Buzzer
// ============================================================================

/// One buzzer operation observed by the mock buzzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuzzOp {
    Set(bool),
    Toggle,
}

/// Buzzer that tracks its output level and records every operation.
pub struct RecordingBuzzer {
    level: bool,
    ops: heapless::Vec<BuzzOp, 32>,
}

impl RecordingBuzzer {
    pub fn new() -> Self {
        Self {
            level: false,
            ops: heapless::Vec::new(),
        }
    }

    pub fn level(&self) -> bool {
        self.level
    }

    pub fn ops(&self) -> &[BuzzOp] {
        &self.ops
    }

    pub fn toggle_count(&self) -> usize {
        self.ops.iter().filter(|op| **op == BuzzOp::Toggle).count()
    }
}

impl Buzzer for RecordingBuzzer {
    fn set(&mut self, on: bool) {
        self.level = on;
        let _ = self.ops.push(BuzzOp::Set(on));
    }

    fn toggle(&mut self) {
        self.level = !self.level;
        let _ = self.ops.push(BuzzOp::Toggle);
    }
}

// ============================================================================
// Sleep Stub
// ============================================================================

/// Sleep timer that returns immediately; step-driven tests never sleep.
pub struct NoopSleep;

impl SleepTimer for NoopSleep {
    fn sleep_ms(&mut self, _ms: u32) {}
}
