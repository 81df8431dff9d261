//! Tic-Tac-Toe and Connect Four rendering.

use super::game_common::{
    create_game_layout, heading, render_game_over_banner, render_info_panel_frame,
    render_status_bar, render_thinking_status_bar, stat_line, GameResultType,
};
use crate::games::board::{BoardEngine, BoardKind, PlayMode, Player, Status};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const PLAYER_ONE_COLOR: Color = Color::LightCyan;
const PLAYER_TWO_COLOR: Color = Color::LightRed;
const WIN_COLOR: Color = Color::Green;
const CURSOR_BG: Color = Color::DarkGray;

fn player_color(player: Player) -> Color {
    match player {
        Player::One => PLAYER_ONE_COLOR,
        Player::Two => PLAYER_TWO_COLOR,
    }
}

/// Render a board game scene.
pub fn render_board_scene(frame: &mut Frame, area: Rect, engine: &BoardEngine) {
    let kind = engine.kind();
    let title = format!(" {} ", kind.name());
    let layout = create_game_layout(frame, area, &title, Color::Cyan, 9, 24);

    let winning = engine.board.winning_line().unwrap_or_default();
    match kind {
        BoardKind::TicTacToe => render_tic_tac_toe(frame, layout.content, engine, &winning),
        BoardKind::ConnectFour => render_connect_four(frame, layout.content, engine, &winning),
    }

    render_status_bar_content(frame, layout.status_bar, engine);
    render_info_panel(frame, layout.info_panel, engine);

    if engine.board.status.is_terminal() {
        render_result_banner(frame, layout.content, engine);
    }
}

fn render_tic_tac_toe(frame: &mut Frame, area: Rect, engine: &BoardEngine, winning: &[usize]) {
    // Each cell is " X " with │ separators; rows split by ───┼───┼───
    let board_width: u16 = 11;
    let board_height: u16 = 5;
    let x = area.x + area.width.saturating_sub(board_width) / 2;
    let y = area.y + area.height.saturating_sub(board_height) / 2;
    let divider_style = Style::default().fg(Color::DarkGray);
    let in_progress = engine.board.status == Status::InProgress;

    for row in 0..3 {
        let mut spans = Vec::new();
        for col in 0..3 {
            let idx = row * 3 + col;
            let (symbol, mut style) = match engine.board.cells[idx] {
                Some(player) => (
                    engine.kind().mark(player),
                    Style::default()
                        .fg(player_color(player))
                        .add_modifier(Modifier::BOLD),
                ),
                None => ("·", Style::default().fg(Color::DarkGray)),
            };
            if winning.contains(&idx) {
                style = style.fg(WIN_COLOR);
            }
            if in_progress && engine.cursor == idx {
                style = style.bg(CURSOR_BG);
            }
            spans.push(Span::styled(format!(" {} ", symbol), style));
            if col < 2 {
                spans.push(Span::styled("│", divider_style));
            }
        }
        frame.render_widget(
            Paragraph::new(Line::from(spans)),
            Rect::new(x, y + (row as u16) * 2, board_width, 1).intersection(area),
        );
        if row < 2 {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled("───┼───┼───", divider_style))),
                Rect::new(x, y + (row as u16) * 2 + 1, board_width, 1).intersection(area),
            );
        }
    }
}

fn render_connect_four(frame: &mut Frame, area: Rect, engine: &BoardEngine, winning: &[usize]) {
    let shape = engine.board.shape();
    // "● " per column plus a cursor row on top
    let board_width = (shape.cols * 2) as u16;
    let board_height = shape.rows as u16 + 1;
    let x = area.x + area.width.saturating_sub(board_width) / 2;
    let y = area.y + area.height.saturating_sub(board_height) / 2;

    let cursor_spans: Vec<Span> = (0..shape.cols)
        .map(|col| {
            if col == engine.cursor && engine.board.status == Status::InProgress {
                Span::styled(
                    "▼ ",
                    Style::default()
                        .fg(player_color(engine.board.turn))
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled(format!("{} ", col + 1), Style::default().fg(Color::DarkGray))
            }
        })
        .collect();
    frame.render_widget(
        Paragraph::new(Line::from(cursor_spans)),
        Rect::new(x, y, board_width, 1).intersection(area),
    );

    for row in 0..shape.rows {
        let spans: Vec<Span> = (0..shape.cols)
            .map(|col| {
                let idx = engine.board.index(row, col);
                let style = match engine.board.cells[idx] {
                    Some(_) if winning.contains(&idx) => {
                        Style::default().fg(WIN_COLOR).add_modifier(Modifier::BOLD)
                    }
                    Some(player) => Style::default().fg(player_color(player)),
                    None => Style::default().fg(Color::DarkGray),
                };
                let symbol = if engine.board.cells[idx].is_some() {
                    "● "
                } else {
                    "· "
                };
                let style = if engine.board.last_move == Some(idx) {
                    style.add_modifier(Modifier::UNDERLINED)
                } else {
                    style
                };
                Span::styled(symbol, style)
            })
            .collect();
        frame.render_widget(
            Paragraph::new(Line::from(spans)),
            Rect::new(x, y + 1 + row as u16, board_width, 1).intersection(area),
        );
    }
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, engine: &BoardEngine) {
    if engine.is_computer_thinking() {
        render_thinking_status_bar(frame, area, "Computer is thinking...");
        return;
    }

    if engine.board.status.is_terminal() {
        render_status_bar(
            frame,
            area,
            "Game over",
            Color::White,
            &[("[N]", "New game"), ("[R]", "Reset scores"), ("[Esc]", "Menu")],
        );
        return;
    }

    let turn = engine.board.turn;
    let status = format!("{} to move", engine.kind().mark(turn));
    render_status_bar(
        frame,
        area,
        &status,
        player_color(turn),
        &[
            ("[Arrows]", "Move"),
            ("[Enter]", "Place"),
            ("[M]", "Mode"),
            ("[Esc]", "Menu"),
        ],
    );
}

fn render_info_panel(frame: &mut Frame, area: Rect, engine: &BoardEngine) {
    let inner = render_info_panel_frame(frame, area);
    let kind = engine.kind();
    let score = engine.scoreboard;
    let opponent = match engine.mode {
        PlayMode::HumanVsHuman => "Human",
        PlayMode::HumanVsComputer => "Computer",
    };

    let lines: Vec<Line> = vec![
        heading("RULES"),
        Line::from(Span::styled(
            format!("Get {} in a row.", kind.shape().win_length),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        stat_line("Mode", engine.mode.name().to_string(), Color::Cyan),
        stat_line("Opponent", opponent.to_string(), Color::Cyan),
        Line::from(""),
        heading("SCORE"),
        stat_line(
            kind.mark(Player::One),
            score.wins(Player::One).to_string(),
            PLAYER_ONE_COLOR,
        ),
        stat_line(
            kind.mark(Player::Two),
            score.wins(Player::Two).to_string(),
            PLAYER_TWO_COLOR,
        ),
        stat_line("Ties", score.ties.to_string(), Color::Yellow),
        Line::from(""),
        Line::from(Span::styled(
            format!("[1-{}] quick place", kind.move_space()),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_result_banner(frame: &mut Frame, area: Rect, engine: &BoardEngine) {
    let kind = engine.kind();
    let (result_type, title) = match engine.board.status {
        Status::Won(player) => {
            let result_type = if engine.mode == PlayMode::HumanVsComputer && player == engine.computer {
                GameResultType::Loss
            } else {
                GameResultType::Win
            };
            (result_type, format!("{} wins!", kind.mark(player)))
        }
        Status::Tied => (GameResultType::Draw, "It's a tie!".to_string()),
        Status::InProgress => return,
    };
    let score = engine.scoreboard;
    let details = vec![format!(
        "{} {} - {} {}  (ties {})",
        kind.mark(Player::One),
        score.one_wins,
        score.two_wins,
        kind.mark(Player::Two),
        score.ties
    )];
    render_game_over_banner(frame, area, result_type, &title, &details, "[N] Play again");
}
