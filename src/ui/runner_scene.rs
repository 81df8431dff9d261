//! Dino Run / Bike Run rendering.
//!
//! Uses a cell buffer for per-character color control. World rectangles are
//! scaled onto the grid, drawn into the buffer, and the buffer is stamped
//! row-by-row as Paragraph widgets.

use super::game_common::{
    create_game_layout, heading, render_game_over_banner, render_info_panel_frame,
    render_status_bar, stat_line, GameResultType,
};
use crate::core::constants::WORLD_WIDTH;
use crate::games::runner::{
    CharacterState, ObstacleKind, ObstacleVariant, Rect as WorldRect, RunnerGame, RunnerSkin,
};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// World units shown above the ground line.
const VIEW_HEIGHT: f64 = 180.0;
const GROUND_CHAR: char = '▓';

/// Render a runner scene. `notice` is an optional one-line message (e.g. the
/// export result) shown in the status bar.
pub fn render_runner_scene(frame: &mut Frame, area: Rect, game: &RunnerGame, notice: Option<&str>) {
    let title = format!(" {} ", game.skin.title());
    let layout = create_game_layout(frame, area, &title, Color::LightYellow, 12, 24);

    render_play_field(frame, layout.content, game);
    render_status_bar_content(frame, layout.status_bar, game, notice);
    render_info_panel(frame, layout.info_panel, game);

    if game.game_over {
        render_result_banner(frame, layout.content, game);
    }
}

#[derive(Clone, Copy)]
struct Cell {
    ch: char,
    fg: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
        }
    }
}

/// Maps world coordinates onto the cell buffer.
struct Viewport {
    width: usize,
    /// Row index of the ground line.
    ground_row: usize,
    x_scale: f64,
    y_scale: f64,
}

impl Viewport {
    fn new(width: u16, height: u16) -> Self {
        let ground_row = height.saturating_sub(1) as usize;
        Self {
            width: width as usize,
            ground_row,
            x_scale: width as f64 / WORLD_WIDTH,
            y_scale: ground_row as f64 / VIEW_HEIGHT,
        }
    }

    /// Cells covered by a world rectangle, as (row, col) pairs.
    fn cells(&self, rect: &WorldRect) -> Vec<(usize, usize)> {
        let col_start = (rect.left * self.x_scale).floor().max(0.0) as usize;
        let col_end = ((rect.right * self.x_scale).ceil().max(0.0) as usize).min(self.width);
        let band_low = (rect.bottom * self.y_scale).floor().max(0.0) as usize;
        let band_high = ((rect.top * self.y_scale).ceil() as usize).max(band_low + 1);

        let mut cells = Vec::new();
        for band in band_low..band_high {
            // Band 0 sits directly above the ground line.
            let Some(row) = self.ground_row.checked_sub(band + 1) else {
                continue;
            };
            for col in col_start..col_end {
                cells.push((row, col));
            }
        }
        cells
    }
}

fn character_glyph(game: &RunnerGame) -> (char, Color) {
    let base = match game.skin {
        RunnerSkin::Dino => Color::LightGreen,
        RunnerSkin::Bike => Color::LightCyan,
    };
    match (game.state, game.skin) {
        (CharacterState::Dead, _) => ('x', Color::Red),
        (CharacterState::Jumping, RunnerSkin::Dino) => ('█', base),
        (CharacterState::Jumping, RunnerSkin::Bike) => ('◆', base),
        (_, RunnerSkin::Dino) if game.animation_frame == 0 => ('█', base),
        (_, RunnerSkin::Dino) => ('▓', base),
        (_, RunnerSkin::Bike) if game.animation_frame == 0 => ('o', base),
        (_, RunnerSkin::Bike) => ('O', base),
    }
}

fn obstacle_glyph(variant: ObstacleVariant, flap_frame: u8) -> (char, Color) {
    match variant {
        ObstacleVariant::Bird if flap_frame == 0 => ('v', Color::Magenta),
        ObstacleVariant::Bird => ('^', Color::Magenta),
        ObstacleVariant::LargeCactus1 | ObstacleVariant::SmallCactus1 => ('|', Color::Green),
        ObstacleVariant::LargeCactus2 | ObstacleVariant::SmallCactus2 => ('¥', Color::Green),
        ObstacleVariant::LargeCactus3 | ObstacleVariant::SmallCactus3 => ('Ψ', Color::Green),
    }
}

fn render_play_field(frame: &mut Frame, area: Rect, game: &RunnerGame) {
    if area.height < 4 || area.width < 10 {
        return;
    }

    let view = Viewport::new(area.width, area.height);
    let mut buffer = vec![vec![Cell::default(); view.width]; area.height as usize];

    for cell in buffer[view.ground_row].iter_mut() {
        *cell = Cell {
            ch: GROUND_CHAR,
            fg: Color::Rgb(120, 100, 70),
        };
    }

    let (ch, fg) = obstacle_glyph(game.obstacle.variant, game.obstacle.flap_frame);
    for (row, col) in view.cells(&game.obstacle.bounds()) {
        buffer[row][col] = Cell { ch, fg };
    }

    let (ch, fg) = character_glyph(game);
    for (row, col) in view.cells(&game.character_bounds()) {
        buffer[row][col] = Cell { ch, fg };
    }

    let distance = format!("{} m", game.stats.distance);
    let start = view.width.saturating_sub(distance.len() + 1);
    for (i, ch) in distance.chars().enumerate() {
        if let Some(cell) = buffer[0].get_mut(start + i) {
            *cell = Cell {
                ch,
                fg: Color::White,
            };
        }
    }

    for (row_idx, row_data) in buffer.iter().enumerate() {
        let mut spans: Vec<Span> = Vec::new();
        let mut current_fg = Color::Reset;
        let mut current_text = String::new();

        for &cell in row_data {
            if cell.fg != current_fg && !current_text.is_empty() {
                spans.push(Span::styled(
                    std::mem::take(&mut current_text),
                    Style::default().fg(current_fg),
                ));
            }
            current_fg = cell.fg;
            current_text.push(cell.ch);
        }
        if !current_text.is_empty() {
            spans.push(Span::styled(current_text, Style::default().fg(current_fg)));
        }

        frame.render_widget(
            Paragraph::new(Line::from(spans)),
            Rect::new(area.x, area.y + row_idx as u16, area.width, 1),
        );
    }
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, game: &RunnerGame, notice: Option<&str>) {
    if game.game_over {
        render_status_bar(
            frame,
            area,
            notice.unwrap_or("Game over"),
            Color::Red,
            &[("[R]", "Restart"), ("[E]", "Export"), ("[Esc]", "Menu")],
        );
        return;
    }

    let duck_hint = if game.is_duck_held() { "Stand" } else { "Duck" };
    let status = match game.obstacle.kind() {
        ObstacleKind::Flying => "Bird incoming!",
        ObstacleKind::Ground => "Run!",
    };
    render_status_bar(
        frame,
        area,
        notice.unwrap_or(status),
        Color::LightYellow,
        &[
            ("[Space/Up]", "Jump"),
            ("[Down]", duck_hint),
            ("[E]", "Export"),
            ("[Esc]", "Menu"),
        ],
    );
}

fn render_info_panel(frame: &mut Frame, area: Rect, game: &RunnerGame) {
    let inner = render_info_panel_frame(frame, area);
    let stats = game.stats;
    let best = game.scores.high_score;

    let lines: Vec<Line> = vec![
        heading("THIS RUN"),
        stat_line("Distance", format!("{} m", stats.distance), Color::White),
        stat_line("Jumps", stats.jumps.to_string(), Color::White),
        stat_line("Max height", format!("{:.2}", stats.max_height), Color::White),
        Line::from(""),
        heading("BEST"),
        stat_line("Distance", format!("{} m", best.distance), Color::Cyan),
        stat_line("Jumps", best.jumps.to_string(), Color::Cyan),
        stat_line("Max height", format!("{:.2}", best.max_height), Color::Cyan),
        Line::from(""),
        stat_line(
            "Runs saved",
            game.scores.history.len().to_string(),
            Color::DarkGray,
        ),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_result_banner(frame: &mut Frame, area: Rect, game: &RunnerGame) {
    let Some(record) = game.last_record else {
        return;
    };
    let best = game.scores.high_score;
    let details = vec![
        format!(
            "{} m  |  {} jumps  |  height {:.2} / {:.2}",
            record.distance, record.jumps, record.max_height, record.min_height
        ),
        format!(
            "Best: {} m  |  {} jumps  |  height {:.2}",
            best.distance, best.jumps, best.max_height
        ),
    ];
    let result_type = if record.distance >= best.distance {
        GameResultType::Win
    } else {
        GameResultType::Loss
    };
    render_game_over_banner(
        frame,
        area,
        result_type,
        "GAME OVER",
        &details,
        "[R] Restart  [E] Export history",
    );
}
