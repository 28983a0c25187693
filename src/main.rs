// Sokoban in the terminal with ratatui
// Controls: W/A/S/D, I/J/K/L or arrow keys move; click a square to walk there.
// U undo, R restart, N next level, Q quit.
// Level files: '#' wall, 'A' agent, 'B' box, 'S' shelf, '*' box on shelf, '.' empty.

mod config;
mod console_interface;
mod core;
mod input;
mod levels;
mod logging;
mod models;
mod render;
#[cfg(test)]
mod test;

use std::io;
use std::path::PathBuf;

use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::config::GameConfig;
use crate::console_interface::{
    ConsoleInput, TerminalCanvas, cleanup_terminal, handle_input, render_game, setup_terminal,
};
use crate::core::GameEngine;
use crate::levels::FileLevelSource;
use crate::models::GameRenderState;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = GameConfig::load_or_default(config_path.as_deref())?;
    logging::init(&config.log_file)?;

    let source = config.level_source();
    log::info!("reading levels from {}", source.dir().display());
    let canvas = TerminalCanvas::new(config.layout);
    let mut engine = GameEngine::new(source, canvas, &config)?;

    let mut terminal = setup_terminal()?;
    let result = run_interactive(&mut engine, &mut terminal);
    cleanup_terminal()?;

    log::info!(
        "final board:\n{}",
        render::render_board_to_string(engine.grid(), engine.agent())
    );
    if engine.is_solved() {
        println!("Level {} solved in {} moves.", engine.level() + 1, engine.history().len());
    }
    result
}

fn run_interactive(
    engine: &mut GameEngine<FileLevelSource, TerminalCanvas>,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut error: Option<String> = None;
    let mut areas = render_game(terminal, &GameRenderState::capture(engine, None))?;
    engine.renderer_mut().take_dirty();

    loop {
        let mut needs_render = false;
        match handle_input(areas, engine.layout())? {
            ConsoleInput::Quit => break,
            ConsoleInput::Command(command) => {
                error = engine.handle(command).err().map(|err| err.to_string());
                needs_render = true;
            }
            ConsoleInput::Resize => {
                engine.draw();
            }
            ConsoleInput::Timeout | ConsoleInput::Unknown => {}
        }

        if engine.renderer_mut().take_dirty() || needs_render {
            areas = render_game(terminal, &GameRenderState::capture(engine, error.clone()))?;
        }
    }

    Ok(())
}
