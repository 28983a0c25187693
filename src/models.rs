use crate::console_interface::TerminalCanvas;
use crate::core::GameEngine;
use crate::levels::LevelSource;

pub struct GameRenderState {
    pub board: String,
    pub level: usize,
    pub level_count: usize,
    pub solved: bool,
    pub moves: usize,
    pub error: Option<String>,
    pub diagnostics: Vec<String>,
}

impl GameRenderState {
    pub fn capture<S: LevelSource>(engine: &GameEngine<S, TerminalCanvas>, error: Option<String>) -> Self {
        GameRenderState {
            board: engine.renderer().to_text(),
            level: engine.level(),
            level_count: engine.level_count(),
            solved: engine.is_solved(),
            moves: engine.history().len(),
            error,
            diagnostics: engine
                .last_diagnostics()
                .iter()
                .map(|d| d.to_string())
                .collect(),
        }
    }
}
