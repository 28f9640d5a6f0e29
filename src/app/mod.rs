//! All app-related state and logic.

use crate::prelude::*;
use nannou::prelude::*;
use crate::prelude::Vector2;
use nannou::LoopMode::RefreshSync;

pub mod animation;
pub mod args;
pub mod keys;
mod model;
pub mod update;
pub mod view;

pub use model::Model;
use update::update;

/// Runs the app via Nannou.
pub fn run_app() {
    nannou::app(model::Model::build)
        .loop_mode(RefreshSync)
        .update(update)
        .run();
}

pub trait Updatable {
    fn update(&mut self, update: &Update);
}

pub trait Drawable {
    fn draw(&self, draw: &Draw, frame: &Frame);
}
