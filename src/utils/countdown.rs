//! Frame-based countdown for on-screen message windows.

/// Counts frames down to zero. Active while frames remain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
}

impl Countdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// (Re)start the window with `frames` frames remaining.
    pub fn start(&mut self, frames: u32) {
        self.remaining = frames;
    }

    /// Advance one frame.
    pub fn tick(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    pub fn is_active(&self) -> bool {
        self.remaining > 0
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn clear(&mut self) {
        self.remaining = 0;
    }
}

/// A message shown for a fixed number of frames.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimedMessage {
    text: String,
    countdown: Countdown,
}

impl TimedMessage {
    pub fn show(&mut self, text: impl Into<String>, frames: u32) {
        self.text = text.into();
        self.countdown.start(frames);
    }

    pub fn tick(&mut self) {
        self.countdown.tick();
        if !self.countdown.is_active() {
            self.text.clear();
        }
    }

    /// The message while its window is open.
    pub fn visible(&self) -> Option<&str> {
        if self.countdown.is_active() {
            Some(&self.text)
        } else {
            None
        }
    }
}
