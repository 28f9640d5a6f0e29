//! The per-frame animation: moving the control points, recomputing the curve
//! and cycling the stroke colour.

use super::*;
use crate::curve::{ControlPointSet, SmoothingEngine, Vector2};
use ::rand::Rng;
use keys::Command;
use nannou::color::LinSrgba;
use std::ops::ControlFlow;

mod state;
pub use state::AnimationState;

/// Everything the view needs to draw one frame.
#[derive(Clone, Copy, Debug)]
pub struct FrameOutput<'a> {
    /// The raw control points, drawn as markers.
    pub control_points: &'a [Vector2],
    /// The smoothed curve, drawn as a closed polyline.
    pub curve: &'a [Vector2],
    /// The stroke colour for the curve.
    pub color: LinSrgba,
}

/// Owns the control points, the smoothing pass and the animation flags.
#[derive(Clone, Debug, Default)]
pub struct Animation {
    points: ControlPointSet,
    engine: SmoothingEngine,
    state: AnimationState,
}

impl Animation {
    pub fn new(state: AnimationState) -> Self {
        Self {
            points: ControlPointSet::new(),
            engine: SmoothingEngine::new(),
            state,
        }
    }

    /// Advances the animation by one frame.
    ///
    /// Unless paused, every control point moves and bounces within
    /// `canvas`. The curve is then recomputed from the current points and
    /// the hue moves on by one degree.
    pub fn tick(&mut self, canvas: Canvas) -> FrameOutput<'_> {
        if !self.state.paused {
            self.points.advance(canvas.width, canvas.height);
        }

        self.engine.compute(self.points.positions(), self.state.steps());
        self.state.advance_hue();

        self.frame()
    }

    /// The output of the most recent [`tick()`](Self::tick).
    pub fn frame(&self) -> FrameOutput<'_> {
        FrameOutput {
            control_points: self.points.positions(),
            curve: self.engine.curve(),
            color: hue_color(self.state.hue),
        }
    }

    /// Adds a control point with an explicit velocity.
    pub fn add_point(&mut self, position: Vector2, velocity: Vector2) {
        log::debug!(
            "adding control point #{} at ({:.1}, {:.1}) moving ({:.2}, {:.2})",
            self.points.len() + 1,
            position.x,
            position.y,
            velocity.x,
            velocity.y,
        );

        self.points.add_point(position, velocity);
    }

    /// Adds a control point at `position` with a random velocity.
    pub fn add_point_at<R: Rng + ?Sized>(
        &mut self,
        position: Vector2,
        rng: &mut R,
    ) {
        self.add_point(position, random_velocity(rng));
    }

    /// Clears all control points and returns the resolution to its startup
    /// value.
    pub fn restart(&mut self) {
        log::info!(
            "restarting with {} samples per point",
            self.state.initial_steps()
        );

        self.points.reset();
        self.engine.clear();
        self.state.restart();
    }

    /// Applies an input command. Breaks if the app should quit.
    pub fn apply(&mut self, command: Command) -> ControlFlow<()> {
        match command {
            Command::Quit => return ControlFlow::Break(()),
            Command::Restart => self.restart(),
            Command::TogglePause => {
                self.state.toggle_pause();
                let status =
                    if self.state.paused { "paused" } else { "resumed" };
                log::info!("{status}");
            }
            Command::IncreaseResolution => {
                self.state.increase_steps();
                log::debug!("samples per point: {}", self.state.steps());
            }
            Command::DecreaseResolution => {
                self.state.decrease_steps();
                log::debug!("samples per point: {}", self.state.steps());
            }
            Command::ToggleHelp => {
                self.state.toggle_help();
                log::debug!("help overlay visible: {}", self.state.show_help);
            }
        }

        ControlFlow::Continue(())
    }

    pub const fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn control_points(&self) -> &ControlPointSet {
        &self.points
    }
}

/// A velocity with each component drawn from `0.0..MAX_INITIAL_SPEED`.
pub fn random_velocity<R: Rng + ?Sized>(rng: &mut R) -> Vector2 {
    Vector2::new(
        rng.random_range(0.0..MAX_INITIAL_SPEED),
        rng.random_range(0.0..MAX_INITIAL_SPEED),
    )
}
