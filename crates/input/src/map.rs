//! Key mapping from terminal events to game input.
//!
//! The mapping depends on the mode: in 3D the arrow keys turn the camera and
//! the letter keys move the piece across the floor.

use crate::types::{CameraTurn, Command, Control, GameMode};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key means to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// Held control, applied by the session's repeat gate
    Control(Control),
    /// Lifecycle command, applied once on press
    Command(Command),
    /// 3D camera turn, applied once on press
    Camera(CameraTurn),
}

/// Map a key event for the given mode.
pub fn map_key(key: KeyEvent, mode: GameMode) -> Option<KeyInput> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(KeyInput::Command(Command::Quit));
    }

    if let Some(command) = map_command(key.code) {
        return Some(KeyInput::Command(command));
    }

    match mode {
        GameMode::Single | GameMode::Multi => map_planar(key.code).map(KeyInput::Control),
        GameMode::Volume => map_volume(key.code),
    }
}

fn map_command(code: KeyCode) -> Option<Command> {
    match code {
        KeyCode::Enter => Some(Command::Start),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(Command::Pause),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Reset),
        KeyCode::Char('m') | KeyCode::Char('M') => Some(Command::SwitchMode),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Command::Quit),
        _ => None,
    }
}

fn map_planar(code: KeyCode) -> Option<Control> {
    match code {
        // Movement
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Control::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Control::Right),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Control::Down),

        // Rotation
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Control::RotateCw),
        KeyCode::Char('z') | KeyCode::Char('Z') => Some(Control::RotateCcw),

        KeyCode::Char(' ') => Some(Control::Drop),
        _ => None,
    }
}

fn map_volume(code: KeyCode) -> Option<KeyInput> {
    let input = match code {
        // Camera
        KeyCode::Left => KeyInput::Camera(CameraTurn::YawLeft),
        KeyCode::Right => KeyInput::Camera(CameraTurn::YawRight),
        KeyCode::Up => KeyInput::Camera(CameraTurn::PitchUp),
        KeyCode::Down => KeyInput::Camera(CameraTurn::PitchDown),

        // Movement across the floor
        KeyCode::Char('a') | KeyCode::Char('A') => KeyInput::Control(Control::Left),
        KeyCode::Char('d') | KeyCode::Char('D') => KeyInput::Control(Control::Right),
        KeyCode::Char('w') | KeyCode::Char('W') => KeyInput::Control(Control::Forward),
        KeyCode::Char('s') | KeyCode::Char('S') => KeyInput::Control(Control::Back),
        KeyCode::Char('f') | KeyCode::Char('F') => KeyInput::Control(Control::Down),

        KeyCode::Char(' ') => KeyInput::Control(Control::Drop),
        _ => return None,
    };
    Some(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    fn control(code: KeyCode, mode: GameMode) -> Option<Control> {
        match map_key(key(code), mode) {
            Some(KeyInput::Control(c)) => Some(c),
            _ => None,
        }
    }

    #[test]
    fn test_planar_movement_keys() {
        for mode in [GameMode::Single, GameMode::Multi] {
            assert_eq!(control(KeyCode::Left, mode), Some(Control::Left));
            assert_eq!(control(KeyCode::Right, mode), Some(Control::Right));
            assert_eq!(control(KeyCode::Down, mode), Some(Control::Down));
            assert_eq!(control(KeyCode::Char('A'), mode), Some(Control::Left));
            assert_eq!(control(KeyCode::Char('d'), mode), Some(Control::Right));
            assert_eq!(control(KeyCode::Char('s'), mode), Some(Control::Down));
        }
    }

    #[test]
    fn test_planar_rotation_keys() {
        let mode = GameMode::Single;
        assert_eq!(control(KeyCode::Up, mode), Some(Control::RotateCw));
        assert_eq!(control(KeyCode::Char('w'), mode), Some(Control::RotateCw));
        assert_eq!(control(KeyCode::Char('z'), mode), Some(Control::RotateCcw));
        assert_eq!(control(KeyCode::Char('Z'), mode), Some(Control::RotateCcw));
        assert_eq!(control(KeyCode::Char(' '), mode), Some(Control::Drop));
    }

    #[test]
    fn test_volume_arrows_turn_camera() {
        let mode = GameMode::Volume;
        assert_eq!(
            map_key(key(KeyCode::Left), mode),
            Some(KeyInput::Camera(CameraTurn::YawLeft))
        );
        assert_eq!(
            map_key(key(KeyCode::Up), mode),
            Some(KeyInput::Camera(CameraTurn::PitchUp))
        );
        assert_eq!(
            map_key(key(KeyCode::Down), mode),
            Some(KeyInput::Camera(CameraTurn::PitchDown))
        );
    }

    #[test]
    fn test_volume_letters_move_piece() {
        let mode = GameMode::Volume;
        assert_eq!(control(KeyCode::Char('a'), mode), Some(Control::Left));
        assert_eq!(control(KeyCode::Char('d'), mode), Some(Control::Right));
        assert_eq!(control(KeyCode::Char('w'), mode), Some(Control::Forward));
        assert_eq!(control(KeyCode::Char('s'), mode), Some(Control::Back));
        assert_eq!(control(KeyCode::Char('f'), mode), Some(Control::Down));
        assert_eq!(control(KeyCode::Char('z'), mode), None);
    }

    #[test]
    fn test_command_keys() {
        for mode in [GameMode::Single, GameMode::Multi, GameMode::Volume] {
            assert_eq!(
                map_key(key(KeyCode::Enter), mode),
                Some(KeyInput::Command(Command::Start))
            );
            assert_eq!(
                map_key(key(KeyCode::Char('p')), mode),
                Some(KeyInput::Command(Command::Pause))
            );
            assert_eq!(
                map_key(key(KeyCode::Char('r')), mode),
                Some(KeyInput::Command(Command::Reset))
            );
            assert_eq!(
                map_key(key(KeyCode::Char('m')), mode),
                Some(KeyInput::Command(Command::SwitchMode))
            );
        }
    }

    #[test]
    fn test_quit_keys() {
        let mode = GameMode::Single;
        assert_eq!(
            map_key(key(KeyCode::Char('q')), mode),
            Some(KeyInput::Command(Command::Quit))
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), mode),
            Some(KeyInput::Command(Command::Quit))
        );
        assert_eq!(map_key(key(KeyCode::Char('x')), mode), None);
    }
}
