#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Direction {
    Up,
    Down,
    #[default]
    Left,
    Right,
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// (row, col) step for this direction
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// A grid position. Rows grow downwards, columns grow to the right.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Coord {
        Coord { row, col }
    }

    /// The neighbouring position in `dir`, or `None` when that would step above row 0 or left of col 0.
    /// The far edges are checked by the grid itself.
    pub fn next(self, dir: Direction) -> Option<Coord> {
        let (di, dj) = dir.delta();
        let row = self.row.checked_add_signed(di)?;
        let col = self.col.checked_add_signed(dj)?;
        Some(Coord { row, col })
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct AgentState {
    pub position: Coord,
    pub facing: Direction,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ActionKind {
    Move,
    Push,
}

/// One entry on the undo stack.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ActionRecord {
    pub kind: ActionKind,
    pub direction: Direction,
    /// facing before the action ran, restored by undo
    pub prior_facing: Direction,
}
