//! Arcade menu: pick a game and, for board games, who plays the second side.

use super::board::PlayMode;
use super::GameType;

/// Input actions for the arcade menu (UI-agnostic).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuInput {
    Up,
    Down,
    Select,     // Enter - start the highlighted game
    ToggleMode, // M - human or computer opponent
    Quit,       // Q/Esc
    Other,
}

/// What the shell should do after a menu input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    None,
    Start(GameType, PlayMode),
    Quit,
}

#[derive(Debug, Clone)]
pub struct MenuState {
    pub selected: usize,
    pub mode: PlayMode,
}

impl Default for MenuState {
    fn default() -> Self {
        Self {
            selected: 0,
            mode: PlayMode::HumanVsComputer,
        }
    }
}

impl MenuState {
    pub fn selected_game(&self) -> GameType {
        GameType::ALL
            .get(self.selected)
            .copied()
            .unwrap_or(GameType::TicTacToe)
    }

    pub fn navigate_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn navigate_down(&mut self) {
        if self.selected + 1 < GameType::ALL.len() {
            self.selected += 1;
        }
    }
}

/// Process a menu input.
pub fn process_input(menu: &mut MenuState, input: MenuInput) -> MenuAction {
    match input {
        MenuInput::Up => menu.navigate_up(),
        MenuInput::Down => menu.navigate_down(),
        MenuInput::ToggleMode => menu.mode = menu.mode.toggled(),
        MenuInput::Select => return MenuAction::Start(menu.selected_game(), menu.mode),
        MenuInput::Quit => return MenuAction::Quit,
        MenuInput::Other => {}
    }
    MenuAction::None
}
