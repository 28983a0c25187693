use crate::core::{AgentState, Coord, Direction, Grid, Square, StepChange};
use crate::render::BoardLayout;

/// One image placed on the graphics pane, `width` x `height` pixels at (`x`, `y`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawImage {
    pub image: &'static str,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Graphics pane supplied by the front-end.
pub trait Renderer {
    fn clear(&mut self);
    fn draw_image(&mut self, request: DrawImage);
    /// Called once a batch of draws is complete
    fn repaint(&mut self);
}

pub fn square_image(square: Square) -> &'static str {
    match square {
        Square::Empty => "empty.gif",
        Square::Wall => "wall.gif",
        Square::Box => "box.gif",
        Square::Shelf => "shelf.gif",
        Square::BoxOnShelf => "boxOnShelf.gif",
    }
}

pub fn agent_image(facing: Direction) -> &'static str {
    match facing {
        Direction::Up => "agent-up.gif",
        Direction::Down => "agent-down.gif",
        Direction::Left => "agent-left.gif",
        Direction::Right => "agent-right.gif",
    }
}

/// Turns game state into draw requests for a [`Renderer`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderAdapter {
    layout: BoardLayout,
}

impl RenderAdapter {
    pub fn new(layout: BoardLayout) -> Self {
        RenderAdapter { layout }
    }

    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    /// Clears the pane and draws every square, then the agent.
    pub fn draw_all(&self, renderer: &mut impl Renderer, grid: &Grid, agent: &AgentState) {
        renderer.clear();
        for pos in grid.positions() {
            self.draw_square(renderer, grid, pos);
        }
        self.draw_agent(renderer, agent);
        renderer.repaint();
    }

    /// Redraws only the cells a single move or push touched.
    pub fn draw_step(
        &self,
        renderer: &mut impl Renderer,
        grid: &Grid,
        agent: &AgentState,
        change: &StepChange,
    ) {
        self.draw_square(renderer, grid, change.from);
        self.draw_square(renderer, grid, change.to);
        if let Some(box_cell) = change.box_cell {
            self.draw_square(renderer, grid, box_cell);
        }
        self.draw_agent(renderer, agent);
        renderer.repaint();
    }

    fn draw_square(&self, renderer: &mut impl Renderer, grid: &Grid, pos: Coord) {
        let Some(&square) = grid.get(&pos) else {
            return;
        };
        self.draw_at(renderer, square_image(square), pos);
    }

    fn draw_agent(&self, renderer: &mut impl Renderer, agent: &AgentState) {
        self.draw_at(renderer, agent_image(agent.facing), agent.position);
    }

    fn draw_at(&self, renderer: &mut impl Renderer, image: &'static str, pos: Coord) {
        let (x, y) = self.layout.origin_of(pos);
        renderer.draw_image(DrawImage {
            image,
            x,
            y,
            width: self.layout.square_size,
            height: self.layout.square_size,
        });
    }
}
