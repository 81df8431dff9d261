pub mod board_scene;
pub mod game_common;
pub mod menu_scene;
pub mod runner_scene;

use crate::games::{ActiveGame, MenuState};
use ratatui::Frame;

/// What the shell is currently showing.
pub enum View<'a> {
    Menu(&'a MenuState),
    Game {
        game: &'a ActiveGame,
        notice: Option<&'a str>,
    },
}

/// Draw one frame.
pub fn draw(frame: &mut Frame, view: View) {
    let area = frame.size();
    match view {
        View::Menu(menu) => menu_scene::render_menu_scene(frame, area, menu),
        View::Game { game, notice } => match game {
            ActiveGame::Board(engine) => board_scene::render_board_scene(frame, area, engine),
            ActiveGame::Runner(runner_game) => {
                runner_scene::render_runner_scene(frame, area, runner_game, notice)
            }
        },
    }
}
