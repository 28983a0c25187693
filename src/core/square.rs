use std::sync::LazyLock;

use bimap::BiMap;

/// Contents of one warehouse cell. The agent is tracked separately and never stored here.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Square {
    Empty,
    Wall,
    Box,
    Shelf,
    BoxOnShelf,
}

impl Square {
    pub fn has_box(self) -> bool {
        matches!(self, Square::Box | Square::BoxOnShelf)
    }

    /// Whether the agent (or a pushed box) may move onto this square
    pub fn is_free(self) -> bool {
        matches!(self, Square::Empty | Square::Shelf)
    }

    /// The square left behind when a box is pushed off it
    pub fn move_off(self) -> Square {
        match self {
            Square::Box => Square::Empty,
            Square::BoxOnShelf => Square::Shelf,
            other => other,
        }
    }

    /// The square that results from pushing a box onto it
    pub fn move_on(self) -> Square {
        match self {
            Square::Empty => Square::Box,
            Square::Shelf => Square::BoxOnShelf,
            other => other,
        }
    }

    pub fn glyph(self) -> char {
        *SQUARE_GLYPHS
            .get_by_right(&self)
            .expect("every square has a glyph")
    }

    pub fn from_glyph(ch: char) -> Option<Square> {
        SQUARE_GLYPHS.get_by_left(&ch).copied()
    }
}

/// Level file character for the agent's start. The square underneath is `Empty`.
pub const AGENT_GLYPH: char = 'A';

static SQUARE_GLYPHS: LazyLock<BiMap<char, Square>> = LazyLock::new(|| {
    let mut glyphs = BiMap::new();
    glyphs.insert('.', Square::Empty);
    glyphs.insert('#', Square::Wall);
    glyphs.insert('B', Square::Box);
    glyphs.insert('S', Square::Shelf);
    glyphs.insert('*', Square::BoxOnShelf);
    glyphs
});
