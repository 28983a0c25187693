use std::collections::HashMap;
use std::io;

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton,
    MouseEvent, MouseEventKind,
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::core::Coord;
use crate::input::{Button, Command, MouseAction};
use crate::models::GameRenderState;
use crate::render::{BoardLayout, DrawImage, Renderer};

/// A [`Renderer`] that keeps one glyph per board square, so draw requests made in
/// pixel space can be shown as text.
pub struct TerminalCanvas {
    layout: BoardLayout,
    cells: HashMap<Coord, char>,
    dirty: bool,
}

impl TerminalCanvas {
    pub fn new(layout: BoardLayout) -> Self {
        TerminalCanvas {
            layout,
            cells: HashMap::new(),
            dirty: true,
        }
    }

    /// True once per completed batch of draws
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn to_text(&self) -> String {
        let rows = self.cells.keys().map(|c| c.row + 1).max().unwrap_or(0);
        let cols = self.cells.keys().map(|c| c.col + 1).max().unwrap_or(0);
        let mut result = String::new();
        for row in 0..rows {
            for col in 0..cols {
                result.push(*self.cells.get(&Coord { row, col }).unwrap_or(&' '));
            }
            result.push('\n');
        }
        result
    }
}

fn image_glyph(image: &str) -> char {
    match image {
        "empty.gif" => '.',
        "wall.gif" => '#',
        "box.gif" => 'B',
        "shelf.gif" => 'S',
        "boxOnShelf.gif" => '*',
        "agent-up.gif" => '^',
        "agent-down.gif" => 'v',
        "agent-left.gif" => '<',
        "agent-right.gif" => '>',
        _ => '?',
    }
}

impl Renderer for TerminalCanvas {
    fn clear(&mut self) {
        self.cells.clear();
    }

    fn draw_image(&mut self, request: DrawImage) {
        let Some(pos) = self.layout.cell_at(f64::from(request.x), f64::from(request.y)) else {
            log::warn!("draw outside the board: {:?}", request);
            return;
        };
        self.cells.insert(pos, image_glyph(request.image));
    }

    fn repaint(&mut self) {
        self.dirty = true;
    }
}

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, Box<dyn std::error::Error>>
{
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(
        io::stdout(),
        crossterm::terminal::EnterAlternateScreen,
        EnableMouseCapture
    )?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> Result<(), Box<dyn std::error::Error>> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(
        io::stdout(),
        DisableMouseCapture,
        crossterm::terminal::LeaveAlternateScreen
    )?;
    Ok(())
}

/// Where the last frame put the clickable parts of the screen.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScreenAreas {
    pub board: Rect,
    /// The single line holding the button bar
    pub buttons: Rect,
}

fn button_bar() -> String {
    Button::ALL
        .iter()
        .map(|b| format!("[{}]", b.label()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Label of the button drawn under (`column`, `row`), matching the layout of [`button_bar`].
fn button_at(buttons: Rect, column: u16, row: u16) -> Option<&'static str> {
    if !buttons.contains((column, row).into()) {
        return None;
    }
    let mut x = buttons.x;
    for button in Button::ALL {
        let width = button.label().len() as u16 + 2;
        if (x..x + width).contains(&column) {
            return Some(button.label());
        }
        x += width + 1;
    }
    None
}

/// Draws the board, button bar and status lines. Returns the screen areas needed to map
/// mouse clicks back onto squares and buttons.
pub fn render_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &GameRenderState,
) -> Result<ScreenAreas, Box<dyn std::error::Error>> {
    let mut areas = ScreenAreas::default();
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(5)])
            .split(f.area());

        let title = format!("Sokoban - level {}/{}", state.level + 1, state.level_count);
        let block = Block::default().borders(Borders::ALL).title(title);
        areas.board = block.inner(chunks[0]);
        let game_paragraph = Paragraph::new(state.board.as_str())
            .block(block)
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Left);
        f.render_widget(game_paragraph, chunks[0]);

        let headline = if state.solved {
            "Solved! Press n for the next level.".to_string()
        } else {
            "Put the boxes away.".to_string()
        };
        let headline = match &state.error {
            Some(err) => format!("{} | Error: {}", headline, err),
            None => headline,
        };
        let headline = if state.diagnostics.is_empty() {
            headline
        } else {
            format!("{} | {}", headline, state.diagnostics.join(", "))
        };
        let instructions = format!(
            "{}\n{}\nWASD/IJKL or arrows move, click to walk, u undo, r restart, n new level, q quit | moves: {}",
            button_bar(),
            headline,
            state.moves
        );

        let block = Block::default().borders(Borders::ALL).title("Instructions");
        let inner = block.inner(chunks[1]);
        areas.buttons = Rect::new(inner.x, inner.y, inner.width, inner.height.min(1));
        let instruction_paragraph = Paragraph::new(instructions)
            .block(block)
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Left);
        f.render_widget(instruction_paragraph, chunks[1]);
    })?;
    Ok(areas)
}

pub enum ConsoleInput {
    Command(Command),
    Quit,
    Timeout,
    Resize,
    Unknown,
}

/// Polls for one terminal event and translates it into a game command.
/// `areas` is where the last frame was drawn.
pub fn handle_input(areas: ScreenAreas, layout: &BoardLayout) -> Result<ConsoleInput, Box<dyn std::error::Error>> {
    if !event::poll(std::time::Duration::from_millis(50))? {
        return Ok(ConsoleInput::Timeout);
    }
    Ok(match event::read()? {
        Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) => key_input(code),
        Event::Mouse(MouseEvent {
            kind, column, row, ..
        }) => match kind {
            MouseEventKind::Down(MouseButton::Left) => {
                click_input(areas, layout, MouseAction::Pressed, column, row)
            }
            MouseEventKind::Up(MouseButton::Left) => {
                click_input(areas, layout, MouseAction::Released, column, row)
            }
            _ => ConsoleInput::Unknown,
        },
        Event::Resize(_, _) => ConsoleInput::Resize,
        _ => ConsoleInput::Unknown,
    })
}

fn key_input(code: KeyCode) -> ConsoleInput {
    let button = match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return ConsoleInput::Quit,
        KeyCode::Char('n') | KeyCode::Char('N') => Button::NewLevel,
        KeyCode::Char('r') | KeyCode::Char('R') => Button::Restart,
        KeyCode::Char('u') | KeyCode::Char('U') => Button::Undo,
        KeyCode::Up => Button::Up,
        KeyCode::Down => Button::Down,
        KeyCode::Left => Button::Left,
        KeyCode::Right => Button::Right,
        KeyCode::Char(c) => {
            return match Command::from_key(c) {
                Some(command) => ConsoleInput::Command(command),
                None => ConsoleInput::Unknown,
            };
        }
        _ => return ConsoleInput::Unknown,
    };
    ConsoleInput::Command(button.command())
}

/// Buttons fire on release. On the board, terminal cells are squares and the click is
/// handed on as the centre pixel of that square.
fn click_input(
    areas: ScreenAreas,
    layout: &BoardLayout,
    action: MouseAction,
    column: u16,
    row: u16,
) -> ConsoleInput {
    if let Some(label) = button_at(areas.buttons, column, row) {
        return match Command::from_button(label) {
            Some(command) if action == MouseAction::Released => ConsoleInput::Command(command),
            _ => ConsoleInput::Unknown,
        };
    }
    let board_area = areas.board;
    if !board_area.contains((column, row).into()) {
        return ConsoleInput::Unknown;
    }
    let square = Coord::new(usize::from(row - board_area.y), usize::from(column - board_area.x));
    let (x, y) = layout.origin_of(square);
    let half = layout.square_size / 2;
    match Command::from_mouse(
        action,
        f64::from(x + half),
        f64::from(y + half),
        layout,
    ) {
        Some(command) => ConsoleInput::Command(command),
        None => ConsoleInput::Unknown,
    }
}
