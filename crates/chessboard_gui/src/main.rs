//! Chessboard GUI Application
//!
//! Click a piece of the side to move, then click where it should go.
//! Reset and undo live in the side panel.

mod app;
mod board;
mod settings;
mod styles;

use app::ChessApp;
use iced::application;
use settings::Settings;
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::load_or_default();
    tracing::info!(?settings, "starting chessboard");

    application("Chessboard", ChessApp::update, ChessApp::view)
        .theme(ChessApp::theme)
        .window_size((settings.window_width, settings.window_height))
        .run_with(move || ChessApp::new(settings))
}
