//! Key mapping and input dispatch for the menu and the active game.

use crate::games::board::{self, BoardInput, BoardKind};
use crate::games::menu::MenuInput;
use crate::games::runner::{self, RunnerInput};
use crate::games::{ActiveGame, ScoreStore};
use crossterm::event::{KeyCode, KeyEvent};

/// Result of handling an in-game key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    BackToMenu,
    /// Continue, showing a one-line message in the status bar.
    Notice(String),
}

pub fn map_menu_key(key: KeyEvent) -> MenuInput {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => MenuInput::Up,
        KeyCode::Down | KeyCode::Char('j') => MenuInput::Down,
        KeyCode::Enter | KeyCode::Char(' ') => MenuInput::Select,
        KeyCode::Char('m') | KeyCode::Char('M') => MenuInput::ToggleMode,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => MenuInput::Quit,
        _ => MenuInput::Other,
    }
}

pub fn map_board_key(key: KeyEvent, kind: BoardKind) -> BoardInput {
    match key.code {
        KeyCode::Up => BoardInput::Up,
        KeyCode::Down => BoardInput::Down,
        KeyCode::Left => BoardInput::Left,
        KeyCode::Right => BoardInput::Right,
        KeyCode::Enter | KeyCode::Char(' ') => BoardInput::Place,
        KeyCode::Char(c @ '1'..='9') => {
            let position = (c as usize) - ('1' as usize);
            if position < kind.move_space() {
                BoardInput::PlaceAt(position)
            } else {
                BoardInput::Other
            }
        }
        KeyCode::Char('n') | KeyCode::Char('N') => BoardInput::NewGame,
        KeyCode::Char('r') | KeyCode::Char('R') => BoardInput::ResetScores,
        KeyCode::Char('m') | KeyCode::Char('M') => BoardInput::ToggleMode,
        _ => BoardInput::Other,
    }
}

pub fn map_runner_key(key: KeyEvent) -> RunnerInput {
    match key.code {
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Char('w') => RunnerInput::Jump,
        KeyCode::Down | KeyCode::Char('s') => RunnerInput::ToggleDuck,
        KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => RunnerInput::Restart,
        _ => RunnerInput::Other,
    }
}

/// Dispatch a key to the active game. Esc always returns to the menu.
pub fn handle_game_input(key: KeyEvent, game: &mut ActiveGame, store: &ScoreStore) -> InputResult {
    if key.code == KeyCode::Esc {
        return InputResult::BackToMenu;
    }

    match game {
        ActiveGame::Board(engine) => {
            let input = map_board_key(key, engine.kind());
            if let Err(e) = board::process_input(engine, input) {
                tracing::debug!(error = %e, "move rejected");
            }
            InputResult::Continue
        }
        ActiveGame::Runner(runner_game) => {
            if matches!(key.code, KeyCode::Char('e') | KeyCode::Char('E')) {
                return match store.export_history(runner_game.skin, &runner_game.scores) {
                    Ok(path) => InputResult::Notice(format!("Exported to {}", path.display())),
                    Err(e) => {
                        tracing::warn!(error = %e, "score export failed");
                        InputResult::Notice(format!("Export failed: {}", e))
                    }
                };
            }
            runner::process_input(runner_game, map_runner_key(key));
            InputResult::Continue
        }
    }
}
