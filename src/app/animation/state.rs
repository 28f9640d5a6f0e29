use super::*;

/// Frame-loop flags and counters that the input handlers and the view share.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationState {
    /// Whether the control points are frozen.
    pub paused: bool,
    /// Whether the help overlay is drawn.
    pub show_help: bool,
    /// The curve colour's hue, in degrees (`0..360`).
    pub hue: u16,

    steps: usize,
    initial_steps: usize,
}

impl AnimationState {
    /// Creates a new state with `steps` curve samples per control point.
    /// `steps` is clamped to at least `1`.
    pub fn new(steps: usize, paused: bool) -> Self {
        let steps = steps.max(1);

        Self { paused, show_help: false, hue: 0, steps, initial_steps: steps }
    }

    /// The current number of curve samples per control point. Always `>= 1`.
    pub const fn steps(&self) -> usize {
        self.steps
    }

    /// The value `steps` returns to on restart.
    pub const fn initial_steps(&self) -> usize {
        self.initial_steps
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Adds one sample per control point. There is no upper bound.
    pub fn increase_steps(&mut self) {
        self.steps = self.steps.saturating_add(1);
    }

    /// Removes one sample per control point, stopping at `1`.
    pub fn decrease_steps(&mut self) {
        if self.steps > 1 {
            self.steps -= 1;
        }
    }

    /// Advances the hue by one degree, wrapping at 360.
    pub fn advance_hue(&mut self) {
        self.hue = (self.hue + 1) % HUE_STEPS;
    }

    /// Returns `steps` to its startup value. The pause, help and hue values
    /// are kept.
    pub fn restart(&mut self) {
        self.steps = self.initial_steps;
    }
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new(DEFAULT_STEPS, START_PAUSED)
    }
}
