//! Keyboard and mouse input.

use super::*;

/// A user command, decoded from a key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Quit,
    Restart,
    TogglePause,
    IncreaseResolution,
    DecreaseResolution,
    ToggleHelp,
}

impl Command {
    /// Returns the command bound to `key`, if any.
    pub const fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Escape => Some(Self::Quit),
            Key::R => Some(Self::Restart),
            Key::P => Some(Self::TogglePause),
            Key::NumpadAdd | Key::Plus | Key::Equals => {
                Some(Self::IncreaseResolution)
            }
            Key::NumpadSubtract | Key::Minus => Some(Self::DecreaseResolution),
            Key::F1 => Some(Self::ToggleHelp),
            _ => None,
        }
    }
}

/// The key bindings listed on the help overlay, as `(key, description)`.
pub const KEY_BINDINGS: [(&str, &str); 5] = [
    ("F1", "Show Help"),
    ("R", "Restart"),
    ("P", "Pause/Play"),
    ("Num+", "More points"),
    ("Num-", "Less points"),
];

pub fn key_pressed(app: &App, model: &mut Model, key: Key) {
    let Some(command) = Command::from_key(key) else {
        return;
    };

    if model.animation.apply(command).is_break() {
        log::info!("quitting");
        app.quit();
    }
}

/// Adds a control point under the cursor with a random velocity.
pub fn mouse_pressed(app: &App, model: &mut Model, _button: MouseButton) {
    let (x, y) = model.canvas.to_pixel(app.mouse.position()).to_int();

    let position = Vector2::new(<f64 as From<_>>::from(x), <f64 as From<_>>::from(y));

    model.animation.add_point_at(position, &mut ::rand::rng());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bound_keys() {
        assert_eq!(Command::from_key(Key::Escape), Some(Command::Quit));
        assert_eq!(Command::from_key(Key::R), Some(Command::Restart));
        assert_eq!(Command::from_key(Key::P), Some(Command::TogglePause));
        assert_eq!(Command::from_key(Key::F1), Some(Command::ToggleHelp));
        assert_eq!(
            Command::from_key(Key::NumpadAdd),
            Some(Command::IncreaseResolution)
        );
        assert_eq!(
            Command::from_key(Key::NumpadSubtract),
            Some(Command::DecreaseResolution)
        );
    }

    #[test]
    fn unbound_keys() {
        assert_eq!(Command::from_key(Key::A), None);
        assert_eq!(Command::from_key(Key::Space), None);
    }
}
