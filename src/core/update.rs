use crate::core::Square::Shelf;
use crate::core::{ActionKind, AgentState, Coord, Direction, Grid, Square};

/// Cells touched by a successful step, so callers can redraw just those.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepChange {
    pub kind: ActionKind,
    pub from: Coord,
    pub to: Coord,
    /// cell the box landed on (push) or was pulled off (pull)
    pub box_cell: Option<Coord>,
}

/// Square at `pos`, with anything off the grid reading as `None`
fn square_at(grid: &Grid, pos: Option<Coord>) -> Option<Square> {
    pos.and_then(|p| grid.get(&p).copied())
}

pub fn is_free(grid: &Grid, pos: Option<Coord>) -> bool {
    square_at(grid, pos).is_some_and(Square::is_free)
}

fn has_box(grid: &Grid, pos: Option<Coord>) -> bool {
    square_at(grid, pos).is_some_and(Square::has_box)
}

/// Moves or pushes the agent one square in `dir`.
/// The agent turns to face `dir` even when nothing else changes.
pub fn step(grid: &mut Grid, agent: &mut AgentState, dir: Direction) -> Option<StepChange> {
    agent.facing = dir;
    let from = agent.position;
    let target = from.next(dir);
    let beyond = target.and_then(|t| t.next(dir));

    if has_box(grid, target) && is_free(grid, beyond) {
        let (target, beyond) = (target?, beyond?);
        grid[&target] = grid[&target].move_off();
        grid[&beyond] = grid[&beyond].move_on();
        agent.position = target;
        log::debug!("Push {:?}", dir);
        return Some(StepChange {
            kind: ActionKind::Push,
            from,
            to: target,
            box_cell: Some(beyond),
        });
    }

    walk(grid, agent, dir)
}

/// Plain move, never pushes.
pub fn walk(grid: &Grid, agent: &mut AgentState, dir: Direction) -> Option<StepChange> {
    agent.facing = dir;
    let from = agent.position;
    let target = from.next(dir);
    if !is_free(grid, target) {
        return None;
    }
    let target = target?;
    agent.position = target;
    log::debug!("Move {:?}", dir);
    Some(StepChange {
        kind: ActionKind::Move,
        from,
        to: target,
        box_cell: None,
    })
}

/// Reverses a push that was made in `pushed`: the agent steps back and the box follows it.
pub fn pull(grid: &mut Grid, agent: &mut AgentState, pushed: Direction) -> Option<StepChange> {
    let from = agent.position;
    let box_cell = from.next(pushed).filter(|b| grid.contains(b))?;
    let to = from.next(pushed.opposite()).filter(|t| grid.contains(t))?;

    grid[&box_cell] = grid[&box_cell].move_off();
    grid[&from] = grid[&from].move_on();
    agent.position = to;
    log::debug!("Pull {:?}", pushed.opposite());
    Some(StepChange {
        kind: ActionKind::Push,
        from,
        to,
        box_cell: Some(box_cell),
    })
}

/// Next greedy step toward `goal`: vertical correction first, then horizontal,
/// each only when the neighbouring square is free.
pub fn walk_direction(grid: &Grid, from: Coord, goal: Coord) -> Option<Direction> {
    let wanted = [
        (Direction::Up, from.row > goal.row),
        (Direction::Down, from.row < goal.row),
        (Direction::Left, from.col > goal.col),
        (Direction::Right, from.col < goal.col),
    ];
    wanted
        .into_iter()
        .find(|&(dir, reduces)| reduces && is_free(grid, from.next(dir)))
        .map(|(dir, _)| dir)
}

/// Solved when no bare shelf is left.
pub fn is_solved(grid: &Grid) -> bool {
    !grid.iter().any(|&s| s == Shelf)
}
