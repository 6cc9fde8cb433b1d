use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::game::{Cell, Game, Phase};
use crate::metrics::SessionStats;

// Gruvbox-flavoured palette
const DARK_GREEN: Color = Color::Rgb(121, 116, 14);
const LIGHT_GREEN: Color = Color::Rgb(152, 151, 26);
const ORANGE: Color = Color::Rgb(175, 58, 3);

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, game: &Game, stats: &SessionStats) {
        let chunks = Layout::vertical([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Playfield
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

        let header = self.render_header(chunks[0], game, stats);
        frame.render_widget(header, chunks[0]);

        // Center the playfield horizontally
        let field_area = Layout::horizontal([
            Constraint::Percentage(10),
            Constraint::Percentage(80),
            Constraint::Percentage(10),
        ])
        .split(chunks[1])[1];

        let field = self.render_playfield(field_area, game);
        frame.render_widget(field, field_area);

        let footer = self.render_footer(chunks[2], game);
        frame.render_widget(footer, chunks[2]);
    }

    fn render_playfield(&self, _area: Rect, game: &Game) -> Paragraph<'_> {
        let paused = game.is_paused();
        let snake = game.snake();
        let side = game.grid_size();

        let dim = |style: Style| {
            if paused {
                style.add_modifier(Modifier::DIM)
            } else {
                style
            }
        };

        let mut lines = Vec::with_capacity(side);
        for y in 0..side {
            let mut spans = Vec::with_capacity(side);

            for x in 0..side {
                let cell = Cell::new(x as i32, y as i32);

                let span = if cell == snake.head() {
                    Span::styled(
                        "■ ",
                        dim(Style::default()
                            .fg(LIGHT_GREEN)
                            .add_modifier(Modifier::BOLD)),
                    )
                } else if snake.occupies(cell) {
                    Span::styled("■ ", dim(Style::default().fg(DARK_GREEN)))
                } else if cell == game.food().position {
                    Span::styled(
                        "● ",
                        dim(Style::default().fg(ORANGE).add_modifier(Modifier::BOLD)),
                    )
                } else {
                    Span::styled("· ", dim(Style::default().fg(Color::DarkGray)))
                };

                spans.push(span);
            }

            lines.push(Line::from(spans));
        }

        // The caption swaps to PAUSED rather than overlaying the board
        let title = if paused { " PAUSED " } else { " GRUVY SNAKE " };

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(ORANGE))
                    .title(Span::styled(
                        title,
                        Style::default().fg(ORANGE).add_modifier(Modifier::BOLD),
                    )),
            )
            .alignment(Alignment::Center)
    }

    fn render_header(&self, _area: Rect, game: &Game, stats: &SessionStats) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(ORANGE)),
            Span::styled(
                game.score().to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(ORANGE)),
            Span::styled(
                stats.best_score.to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(ORANGE)),
            Span::styled(stats.format_time(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_footer(&self, _area: Rect, game: &Game) -> Paragraph<'_> {
        let mut spans = vec![
            Span::styled("↑↓←→", Style::default().fg(LIGHT_GREEN)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(LIGHT_GREEN)),
            Span::raw(" to steer | "),
            Span::styled("P", Style::default().fg(LIGHT_GREEN)),
            Span::raw(" to pause | "),
            Span::styled("Q", Style::default().fg(ORANGE)),
            Span::raw(" to quit"),
        ];

        if game.phase() == Phase::Idle {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                "press a direction key to play",
                Style::default()
                    .fg(LIGHT_GREEN)
                    .add_modifier(Modifier::BOLD),
            ));
        }

        Paragraph::new(vec![Line::from(spans)]).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
