//! App constructors.

use super::*;

/// Builds the app window.
pub fn build_window(app: &App, width: u32, height: u32) -> Id {
    app.new_window()
        .size(width, height)
        .resizable(false)
        .msaa_samples(4)
        .key_pressed(keys::key_pressed)
        .mouse_pressed(keys::mouse_pressed)
        .view(view)
        .title(WINDOW_TITLE)
        .build()
        .expect("failed to build app window!")
}

/// Builds the animation from the startup config.
pub fn build_animation(config: &Config) -> Animation {
    Animation::new(AnimationState::new(config.steps, config.paused))
}
