use crate::core::{AGENT_GLYPH, AgentState, Grid};

/// The board in level-file notation, agent included. One line per row.
pub fn render_board_to_string(grid: &Grid, agent: &AgentState) -> String {
    let mut result = String::with_capacity(grid.rows() * (grid.cols() + 1));
    for row in 0..grid.rows() {
        for (col, square) in grid.row(row).iter().enumerate() {
            let is_agent = agent.position.row == row && agent.position.col == col;
            result.push(if is_agent { AGENT_GLYPH } else { square.glyph() });
        }
        result.push('\n');
    }
    result
}
