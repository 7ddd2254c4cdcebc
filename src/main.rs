//! Tic-tac-toe GUI
//!
//! A native window for playing N×N tic-tac-toe with a browsable move history.

use tictactoe::ui::TicTacToeApp;
use tictactoe::WindowConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let window = WindowConfig::default();
    info!(title = %window.title, "starting");

    eframe::run_native(
        "Tic-Tac-Toe",
        window.native_options(),
        Box::new(|cc| Ok(Box::new(TicTacToeApp::new(cc)))),
    )
}
