use crate::core::{AGENT_GLYPH, Coord, Grid, Square};
use crate::levels::{MalformedCell, ParseError};

#[derive(Debug, Clone)]
pub struct ParsedLevel {
    pub grid: Grid,
    pub agent_start: Coord,
    pub diagnostics: Vec<MalformedCell>,
}

/// Reads the plaintext warehouse format: one line per row, `.` empty, `#` wall,
/// `S` shelf, `B` box, `*` box on shelf, `A` agent start on an empty square.
/// Short rows are padded with `Empty` up to the longest row; trailing blank lines are ignored.
pub fn parse_level(s: &str) -> Result<ParsedLevel, ParseError> {
    let lines: Vec<&str> = s.trim_end_matches(['\n', '\r']).lines().collect();
    if lines.is_empty() || (lines.len() == 1 && lines[0].is_empty()) {
        return Err(ParseError::Empty);
    }
    let rows = lines.len();
    let cols = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);

    let mut grid = Grid::new(rows, cols, Square::Empty);
    let mut agent_start = None;
    let mut diagnostics = Vec::new();

    for (row, line) in lines.iter().enumerate() {
        for (col, ch) in line.chars().enumerate() {
            let pos = Coord { row, col };
            if ch == AGENT_GLYPH {
                match agent_start {
                    None => agent_start = Some(pos),
                    Some(first) => log::warn!(
                        "extra agent start at {:?}, keeping {:?}",
                        pos,
                        first
                    ),
                }
                continue;
            }
            match Square::from_glyph(ch) {
                Some(square) => grid[&pos] = square,
                None => {
                    let bad = MalformedCell { row, col, ch };
                    log::warn!("{}", bad);
                    diagnostics.push(bad);
                }
            }
        }
    }

    let agent_start = agent_start.ok_or(ParseError::NoAgent)?;
    Ok(ParsedLevel {
        grid,
        agent_start,
        diagnostics,
    })
}
