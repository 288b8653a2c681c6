//! Chess board widget rendering

use crate::styles;
use board_core::{GameController, Square};
use iced::widget::{button, column, container, row, text};
use iced::{Color, Element, Length};

/// Message type for board interactions
#[derive(Debug, Clone)]
pub enum BoardMessage {
    SquareClicked(Square),
}

/// Renders the board straight from controller state
pub struct BoardView<'a> {
    game: &'a GameController,
    flipped: bool,
    show_highlights: bool,
    square_size: f32,
}

impl<'a> BoardView<'a> {
    pub fn new(game: &'a GameController, flipped: bool) -> Self {
        Self {
            game,
            flipped,
            show_highlights: true,
            square_size: 70.0,
        }
    }

    pub fn show_highlights(mut self, show: bool) -> Self {
        self.show_highlights = show;
        self
    }

    pub fn square_size(mut self, size: f32) -> Self {
        self.square_size = size;
        self
    }

    /// Create the board view element
    pub fn view(&self) -> Element<'a, BoardMessage> {
        let mut board_column = column![].spacing(0);

        for r in 0..8u8 {
            let display_row = if self.flipped { 7 - r } else { r };
            let mut board_row = row![].spacing(0);

            for c in 0..8u8 {
                let display_col = if self.flipped { 7 - c } else { c };
                if let Ok(sq) = Square::new(display_row, display_col) {
                    board_row = board_row.push(self.render_square(sq));
                }
            }

            board_column = board_column.push(board_row);
        }

        container(board_column)
            .style(|_theme| container::Style {
                border: iced::Border {
                    color: styles::BOARD_BORDER,
                    width: 2.0,
                    radius: 0.0.into(),
                },
                ..Default::default()
            })
            .into()
    }

    /// Render a single square
    fn render_square(&self, sq: Square) -> Element<'a, BoardMessage> {
        let size = self.square_size;
        let mut bg_color = if sq.is_light() {
            styles::LIGHT_SQUARE
        } else {
            styles::DARK_SQUARE
        };

        let is_target = self.show_highlights && self.game.is_highlighted(sq);
        if self.game.selected() == Some(sq) {
            bg_color = styles::SELECTED_SQUARE;
        } else if is_target {
            bg_color = blend_colors(bg_color, styles::HIGHLIGHT_SQUARE);
        }

        let content: Element<'a, BoardMessage> = match self.game.board().piece_at(sq) {
            Some(piece) => text(piece.glyph().to_string())
                .size(size * 0.75)
                .center()
                .into(),
            // Dot on empty squares the selected piece may go to
            None if is_target => text("●")
                .size(size * 0.3)
                .color(styles::TARGET_DOT)
                .center()
                .into(),
            None => text("").into(),
        };

        button(
            container(content)
                .width(size)
                .height(size)
                .center_x(Length::Fill)
                .center_y(Length::Fill),
        )
        .width(size)
        .height(size)
        .style(move |_theme, status| {
            let hover_overlay = match status {
                button::Status::Hovered => 0.1,
                button::Status::Pressed => 0.2,
                _ => 0.0,
            };
            button::Style {
                background: Some(iced::Background::Color(if hover_overlay > 0.0 {
                    blend_colors(bg_color, Color::from_rgba(1.0, 1.0, 1.0, hover_overlay))
                } else {
                    bg_color
                })),
                border: iced::Border::default(),
                text_color: Color::BLACK,
                ..Default::default()
            }
        })
        .on_press(BoardMessage::SquareClicked(sq))
        .into()
    }
}

/// Blend two colors together
fn blend_colors(base: Color, overlay: Color) -> Color {
    let alpha = overlay.a;
    Color::from_rgb(
        base.r * (1.0 - alpha) + overlay.r * alpha,
        base.g * (1.0 - alpha) + overlay.g * alpha,
        base.b * (1.0 - alpha) + overlay.b * alpha,
    )
}
