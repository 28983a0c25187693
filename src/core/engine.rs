use crate::config::GameConfig;
use crate::core::update::{is_solved, pull, step, walk, walk_direction};
use crate::core::{ActionKind, ActionRecord, AgentState, Coord, Direction, Grid, Square};
use crate::input::Command;
use crate::levels::{LevelSource, LoadError, MalformedCell, ParsedLevel, parse_level};
use crate::render::{BoardLayout, RenderAdapter, Renderer};

/// Owns the warehouse, the agent and the undo history, and is the only thing that changes them.
///
/// Level text comes from the injected [`LevelSource`]; every state change is pushed
/// to the injected [`Renderer`]. Rejected actions are silent: nothing changes and
/// nothing is recorded.
pub struct GameEngine<S, R> {
    source: S,
    renderer: R,
    adapter: RenderAdapter,
    grid: Grid,
    agent: AgentState,
    history: Vec<ActionRecord>,
    level: usize,
    level_count: usize,
    max_walk_steps: usize,
    diagnostics: Vec<MalformedCell>,
}

fn read_level(source: &impl LevelSource, index: usize) -> Result<ParsedLevel, LoadError> {
    let text = source.read_level(index)?;
    parse_level(&text).map_err(|source| LoadError::Invalid { index, source })
}

impl<S: LevelSource, R: Renderer> GameEngine<S, R> {
    /// Loads level 0 and draws it.
    pub fn new(source: S, renderer: R, config: &GameConfig) -> Result<Self, LoadError> {
        let parsed = read_level(&source, 0)?;
        let mut engine = GameEngine {
            source,
            renderer,
            adapter: RenderAdapter::new(config.layout),
            grid: Grid::new(0, 0, Square::Empty),
            agent: AgentState::default(),
            history: Vec::new(),
            level: 0,
            level_count: config.level_count.max(1),
            max_walk_steps: config.max_walk_steps,
            diagnostics: Vec::new(),
        };
        engine.install(0, parsed);
        Ok(engine)
    }

    /// Replaces the current level with level `index`.
    /// On failure the current grid, agent, history and level number are kept.
    pub fn load_level(&mut self, index: usize) -> Result<(), LoadError> {
        match read_level(&self.source, index) {
            Ok(parsed) => {
                self.install(index, parsed);
                Ok(())
            }
            Err(err) => {
                log::error!("failed to load level {}: {}", index, err);
                Err(err)
            }
        }
    }

    fn install(&mut self, index: usize, parsed: ParsedLevel) {
        self.grid = parsed.grid;
        self.agent = AgentState {
            position: parsed.agent_start,
            facing: Direction::default(),
        };
        self.history.clear();
        self.level = index;
        self.diagnostics = parsed.diagnostics;
        log::info!(
            "loaded level {} ({}x{}, {} malformed cells)",
            index,
            self.grid.rows(),
            self.grid.cols(),
            self.diagnostics.len()
        );
        self.draw();
    }

    pub fn restart(&mut self) -> Result<(), LoadError> {
        self.load_level(self.level)
    }

    /// Advances to the next level, wrapping back to 0 after the last.
    pub fn next_level(&mut self) -> Result<(), LoadError> {
        self.load_level((self.level + 1) % self.level_count)
    }

    /// Pushes a box when one is in front with a free square behind it, otherwise moves
    /// when the square in front is free. The agent faces `dir` either way.
    pub fn perform_action(&mut self, dir: Direction) -> Option<ActionKind> {
        let prior_facing = self.agent.facing;
        let change = step(&mut self.grid, &mut self.agent, dir)?;
        self.history.push(ActionRecord {
            kind: change.kind,
            direction: dir,
            prior_facing,
        });
        self.adapter
            .draw_step(&mut self.renderer, &self.grid, &self.agent, &change);
        Some(change.kind)
    }

    /// Reverts the most recent move or push. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(record) = self.history.pop() else {
            return false;
        };
        let reversed = match record.kind {
            ActionKind::Move => match self.agent.position.next(record.direction.opposite()) {
                Some(back) => {
                    self.agent.position = back;
                    true
                }
                None => false,
            },
            ActionKind::Push => pull(&mut self.grid, &mut self.agent, record.direction).is_some(),
        };
        // Every recorded step is reversible; a record that is not stays on the stack.
        if !reversed {
            log::warn!("cannot undo {:?} at {:?}", record, self.agent.position);
            self.history.push(record);
            return false;
        }
        self.agent.facing = record.prior_facing;
        self.draw();
        true
    }

    /// Walks greedily toward `goal` one move at a time, stopping on arrival or when no
    /// free neighbour brings the agent closer. Every step is undoable on its own.
    /// Returns the number of steps taken.
    pub fn walk_toward(&mut self, goal: Coord) -> usize {
        let mut steps = 0;
        while steps < self.max_walk_steps && self.agent.position != goal {
            let Some(dir) = walk_direction(&self.grid, self.agent.position, goal) else {
                log::debug!("walk stuck at {:?} short of {:?}", self.agent.position, goal);
                break;
            };
            let prior_facing = self.agent.facing;
            let Some(change) = walk(&self.grid, &mut self.agent, dir) else {
                break;
            };
            self.history.push(ActionRecord {
                kind: ActionKind::Move,
                direction: dir,
                prior_facing,
            });
            self.adapter
                .draw_step(&mut self.renderer, &self.grid, &self.agent, &change);
            steps += 1;
        }
        steps
    }

    pub fn handle(&mut self, command: Command) -> Result<(), LoadError> {
        match command {
            Command::NewLevel => self.next_level()?,
            Command::Restart => self.restart()?,
            Command::Undo => {
                self.undo();
            }
            Command::Step(dir) => {
                self.perform_action(dir);
            }
            Command::WalkTo(goal) => {
                self.walk_toward(goal);
            }
        }
        Ok(())
    }

    /// Full redraw of the board and agent.
    pub fn draw(&mut self) {
        self.adapter
            .draw_all(&mut self.renderer, &self.grid, &self.agent);
    }

    pub fn is_solved(&self) -> bool {
        is_solved(&self.grid)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn agent(&self) -> &AgentState {
        &self.agent
    }

    pub fn history(&self) -> &[ActionRecord] {
        &self.history
    }

    pub fn level(&self) -> usize {
        self.level
    }

    pub fn level_count(&self) -> usize {
        self.level_count
    }

    /// Malformed cells reported by the most recent successful load
    pub fn last_diagnostics(&self) -> &[MalformedCell] {
        &self.diagnostics
    }

    pub fn layout(&self) -> &BoardLayout {
        self.adapter.layout()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::test_util::GameTestState;

    #[test]
    fn irreversible_record_stays_on_the_stack() {
        let mut game = GameTestState::new("#.A");
        let record = ActionRecord {
            kind: ActionKind::Push,
            direction: Direction::Right,
            prior_facing: Direction::Up,
        };
        game.engine.history.push(record);
        game.renderer().events.clear();

        assert!(!game.engine.undo());
        assert_eq!(vec![record], game.engine.history);
        assert_eq!(Coord::new(0, 2), game.engine.agent.position);
        assert_eq!(Direction::Left, game.engine.agent.facing);
        assert!(game.renderer().events.is_empty());
        game.assert_matches("#.A");
    }
}
