//! Arcade main menu.

use super::game_common::{create_game_layout, heading, render_info_panel_frame, render_status_bar, stat_line};
use crate::games::{GameType, MenuState};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render_menu_scene(frame: &mut Frame, area: Rect, menu: &MenuState) {
    let layout = create_game_layout(frame, area, " Arcade ", Color::Magenta, 6, 30);

    let lines: Vec<Line> = GameType::ALL
        .iter()
        .enumerate()
        .map(|(i, game)| {
            if i == menu.selected {
                Line::from(Span::styled(
                    format!(" > {} ", game.name()),
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(
                    format!("   {} ", game.name()),
                    Style::default().fg(Color::White),
                ))
            }
        })
        .collect();
    let top = layout.content.y + 1;
    frame.render_widget(
        Paragraph::new(lines),
        Rect::new(
            layout.content.x + 2,
            top,
            layout.content.width.saturating_sub(2),
            layout.content.height.saturating_sub(1),
        ),
    );

    render_status_bar(
        frame,
        layout.status_bar,
        "Pick a game",
        Color::White,
        &[
            ("[Up/Down]", "Select"),
            ("[Enter]", "Play"),
            ("[M]", "Mode"),
            ("[Q]", "Quit"),
        ],
    );

    let inner = render_info_panel_frame(frame, layout.info_panel);
    let selected = menu.selected_game();
    let mut info = vec![
        heading("ABOUT"),
        Line::from(Span::styled(
            selected.description(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
    ];
    if selected.uses_play_mode() {
        info.push(stat_line("Mode", menu.mode.name().to_string(), Color::Cyan));
    }
    frame.render_widget(
        Paragraph::new(info).wrap(ratatui::widgets::Wrap { trim: true }),
        inner,
    );
}
