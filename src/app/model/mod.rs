//! The whole app's state.

use super::animation::{Animation, AnimationState};
use super::args::Config;
use super::view::{help, view};
use super::*;
use nannou::prelude::WindowId as Id;

mod constructors;
use constructors::*;

/// The app's model, i.e. its state.
pub struct Model {
    #[allow(dead_code)]
    window: Id,

    /// The canvas size, fixed at startup.
    pub canvas: Canvas,
    /// The control points, curve and animation flags.
    pub animation: Animation,
}

impl Model {
    /// Builds the app's `Model`.
    ///
    /// # Panics
    ///
    /// Panics if a new window cannot be initialized.
    pub fn build(app: &App) -> Self {
        let config = Config::from_env_or_default();
        log::info!(
            "starting with a {}x{} canvas, {} samples per point{}",
            config.width,
            config.height,
            config.steps,
            if config.paused { " (paused)" } else { "" },
        );

        // escape is handled as a regular command so it gets logged
        app.set_exit_on_escape(false);

        let window = build_window(app, config.width, config.height);

        Self {
            window,
            canvas: config.canvas(),
            animation: build_animation(&config),
        }
    }
}

impl Updatable for Model {
    fn update(&mut self, _update: &Update) {
        self.animation.tick(self.canvas);
    }
}

impl Drawable for Model {
    fn draw(&self, draw: &Draw, frame: &Frame) {
        let out = self.animation.frame();

        for &p in out.control_points {
            draw.ellipse()
                .xy(self.canvas.point_to_draw(p))
                .radius(POINT_RADIUS)
                .color(WHITE);
        }

        // closed: the last sample joins back up with the first
        if !out.curve.is_empty() {
            let points = out
                .curve
                .iter()
                .chain(out.curve.first())
                .map(|&p| self.canvas.point_to_draw(p));

            draw.polyline()
                .weight(CURVE_WEIGHT)
                .color(out.color)
                .points(points);
        }

        if self.animation.state().show_help {
            let steps = self.animation.state().steps();
            help::draw_help(draw, frame, self.canvas, steps);
        }
    }
}
