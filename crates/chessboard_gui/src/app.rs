//! Main application state and logic

use crate::board::{BoardMessage, BoardView};
use crate::settings::Settings;
use crate::styles::PANEL_WIDTH;

use board_core::{ClickOutcome, GameController};
use iced::widget::{button, column, container, horizontal_rule, row, scrollable, text, vertical_space};
use iced::{Element, Length, Task, Theme};
use tracing::info;

/// Main application state
pub struct ChessApp {
    /// Board, turn, selection and history
    game: GameController,
    /// Board flipped?
    board_flipped: bool,
    settings: Settings,
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // Board interaction
    Board(BoardMessage),

    // Game controls
    Reset,
    Undo,
    FlipBoard,
}

impl ChessApp {
    pub fn new(settings: Settings) -> (Self, Task<Message>) {
        (
            Self {
                game: GameController::new(),
                board_flipped: settings.flipped,
                settings,
            },
            Task::none(),
        )
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Board(BoardMessage::SquareClicked(sq)) => {
                if let ClickOutcome::Moved(record) = self.game.on_square_clicked(sq) {
                    info!(%record, "move played");
                }
            }

            Message::Reset => self.game.on_reset_requested(),

            Message::Undo => {
                if let Some(record) = self.game.on_undo_requested() {
                    info!(%record, "move taken back");
                }
            }

            Message::FlipBoard => {
                self.board_flipped = !self.board_flipped;
            }
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let board = BoardView::new(&self.game, self.board_flipped)
            .show_highlights(self.settings.show_highlights)
            .square_size(self.settings.square_size)
            .view()
            .map(Message::Board);

        row![
            board,
            container(self.control_panel())
                .width(PANEL_WIDTH)
                .height(Length::Fill)
                .padding(15),
        ]
        .spacing(20)
        .padding(20)
        .into()
    }

    /// Render the control panel
    fn control_panel(&self) -> Element<'_, Message> {
        let reset_btn = button(text("Reset Game"))
            .on_press(Message::Reset)
            .style(button::primary)
            .width(Length::Fill);

        // Disabled while there is nothing to take back
        let undo_btn = button(text("Undo Move"))
            .on_press_maybe(self.game.can_undo().then_some(Message::Undo))
            .style(button::secondary)
            .width(Length::Fill);

        let flip_btn = button(text("Flip Board"))
            .on_press(Message::FlipBoard)
            .style(button::secondary)
            .width(Length::Fill);

        let status_text = text(self.game.status_text()).size(16);

        // Move history
        let moves_title = text("Moves").size(16);
        let mut moves_list = column![].spacing(2);

        for (i, chunk) in self.game.history().chunks(2).enumerate() {
            let white_move = chunk[0].to_string();
            let black_move = chunk.get(1).map(|m| m.to_string()).unwrap_or_default();

            moves_list =
                moves_list.push(text(format!("{}. {} {}", i + 1, white_move, black_move)).size(13));
        }

        let moves_scroll = scrollable(moves_list).height(Length::Fill);

        column![
            reset_btn,
            undo_btn,
            flip_btn,
            vertical_space().height(20),
            horizontal_rule(1),
            vertical_space().height(10),
            status_text,
            vertical_space().height(20),
            horizontal_rule(1),
            vertical_space().height(10),
            moves_title,
            moves_scroll,
        ]
        .spacing(5)
        .into()
    }
}
