mod bounded_grid;
mod consts;
mod engine;
mod models;
mod square;
mod update;

pub use bounded_grid::BoundedGrid;
pub use consts::*;
pub use engine::GameEngine;
pub use models::{ActionKind, ActionRecord, AgentState, Coord, Direction};
pub use square::{AGENT_GLYPH, Square};
pub use update::StepChange;

pub type Grid = BoundedGrid<Square>;
