//! Scroll tracking for the collapsible header.
//!
//! The header offset follows the *delta* of the scroll position rather than
//! its absolute value: any upward movement starts revealing the header again,
//! no matter how far down the list the user is.

/// Clamped accumulator over input deltas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiffClamp {
    min: f64,
    max: f64,
    last_input: f64,
    value: f64,
}

impl DiffClamp {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            last_input: 0.0,
            value: min,
        }
    }

    /// Feeds one input sample and returns the clamped output.
    pub fn update(&mut self, input: f64) -> f64 {
        let delta = input - self.last_input;
        self.last_input = input;
        self.value = (self.value + delta).clamp(self.min, self.max);
        self.value
    }

    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    #[must_use]
    pub const fn last_input(&self) -> f64 {
        self.last_input
    }

    pub fn reset(&mut self) {
        self.last_input = 0.0;
        self.value = self.min;
    }

    /// Moves the upper bound and pulls the current value back inside it.
    /// The last input is kept so the next sample is still a delta.
    pub fn set_max(&mut self, max: f64) {
        self.max = max;
        self.value = self.value.clamp(self.min, self.max);
    }
}

/// What changed after a scroll sample. The app only re-renders when
/// `has_scrolled_changed`; translation changes go through the animation channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollUpdate {
    pub moved: bool,
    pub translate_changed: bool,
    pub has_scrolled_changed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTracker {
    clamp: DiffClamp,
    has_scrolled: bool,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new(crate::COLLAPSIBLE_HEADER_HEIGHT)
    }
}

impl ScrollTracker {
    #[must_use]
    pub const fn new(header_height: f64) -> Self {
        Self {
            clamp: DiffClamp::new(0.0, header_height),
            has_scrolled: false,
        }
    }

    /// Processes one vertical content offset. Non-finite samples are dropped.
    pub fn sample(&mut self, offset_y: f64) -> ScrollUpdate {
        if !offset_y.is_finite() {
            return ScrollUpdate::default();
        }

        let previous_offset = self.clamp.value();
        let moved = offset_y != self.clamp.last_input();
        let header_offset = self.clamp.update(offset_y);

        let has_scrolled = offset_y > 0.0;
        let has_scrolled_changed = has_scrolled != self.has_scrolled;
        self.has_scrolled = has_scrolled;

        ScrollUpdate {
            moved,
            translate_changed: header_offset != previous_offset,
            has_scrolled_changed,
        }
    }

    /// How far the header is collapsed, in `[0, header_height]`.
    #[must_use]
    pub const fn header_offset(&self) -> f64 {
        self.clamp.value()
    }

    /// Vertical translation to apply to the header (`0` fully shown,
    /// `-header_height` fully hidden).
    #[must_use]
    pub fn translate_y(&self) -> f64 {
        0.0 - self.clamp.value()
    }

    #[must_use]
    pub const fn has_scrolled(&self) -> bool {
        self.has_scrolled
    }

    #[must_use]
    pub const fn header_height(&self) -> f64 {
        self.clamp.max
    }

    pub fn reset(&mut self) {
        self.clamp.reset();
        self.has_scrolled = false;
    }

    /// Changes the collapsible height without forgetting where the list is.
    pub fn resize(&mut self, header_height: f64) {
        self.clamp.set_max(header_height);
    }
}
