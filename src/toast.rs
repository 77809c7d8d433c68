//! Toast State
//!
//! A single transient notice. Each `show` bumps a generation counter so that
//! a timer scheduled for an older toast cannot dismiss a newer one, and
//! [`TimerSlot`] keeps only the newest timer alive.

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastState {
    message: Option<String>,
    generation: u32,
}

impl ToastState {
    /// Display `message`, superseding any current toast; returns its generation
    pub fn show(&mut self, message: impl Into<String>) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        self.message = Some(message.into());
        self.generation
    }

    /// Hide the toast if `generation` is still the current one
    pub fn dismiss(&mut self, generation: u32) -> bool {
        if self.generation == generation && self.message.is_some() {
            self.message = None;
            true
        } else {
            false
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }
}

/// Owns at most one pending timer handle
///
/// Handles such as `gloo_timers::callback::Timeout` cancel on drop, so arming
/// a new timer cancels the previous one.
#[derive(Debug)]
pub struct TimerSlot<H> {
    pending: Option<H>,
}

impl<H> Default for TimerSlot<H> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<H> TimerSlot<H> {
    pub fn arm(&mut self, handle: H) {
        self.pending = Some(handle);
    }
}
