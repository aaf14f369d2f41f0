//! Key mapping from terminal events to session commands.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key event asks the runner to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    /// Forward to the session
    Action(GameAction),
    /// Leave the game
    Quit,
    /// Start over (honored after game over)
    NewGame,
}

/// Map keyboard input, including its press/repeat/release kind, to a command.
///
/// Only the drop key reacts to repeats and releases: a held key keeps moving
/// the piece down without adding bonus points, and letting go reports
/// `SoftDropRelease`. Every other key acts on press and on repeat.
pub fn handle_key_event(key: KeyEvent) -> Option<InputCommand> {
    if should_quit(key) {
        return (key.kind != KeyEventKind::Release).then_some(InputCommand::Quit);
    }

    if is_drop_key(key.code) {
        let action = match key.kind {
            KeyEventKind::Press => GameAction::SoftDrop,
            KeyEventKind::Repeat => GameAction::MoveDown,
            KeyEventKind::Release => GameAction::SoftDropRelease,
        };
        return Some(InputCommand::Action(action));
    }

    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        KeyCode::Left
        | KeyCode::Char('h')
        | KeyCode::Char('H')
        | KeyCode::Char('a')
        | KeyCode::Char('A') => Some(InputCommand::Action(GameAction::MoveLeft)),
        KeyCode::Right
        | KeyCode::Char('l')
        | KeyCode::Char('L')
        | KeyCode::Char('d')
        | KeyCode::Char('D') => Some(InputCommand::Action(GameAction::MoveRight)),

        // Rotation
        KeyCode::Up
        | KeyCode::Char('r')
        | KeyCode::Char('R')
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(InputCommand::Action(GameAction::Rotate)),

        KeyCode::Char('n') | KeyCode::Char('N') => Some(InputCommand::NewGame),

        _ => None,
    }
}

fn is_drop_key(code: KeyCode) -> bool {
    matches!(
        code,
        KeyCode::Down
            | KeyCode::Char('j')
            | KeyCode::Char('J')
            | KeyCode::Char('s')
            | KeyCode::Char('S')
    )
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
