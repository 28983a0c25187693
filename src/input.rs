use crate::core::{Coord, Direction};
use crate::render::BoardLayout;

/// Everything the player can ask the game to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    NewLevel,
    Restart,
    Undo,
    Step(Direction),
    WalkTo(Coord),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    NewLevel,
    Restart,
    Undo,
    Left,
    Up,
    Down,
    Right,
}

impl Button {
    pub const ALL: [Button; 7] = [
        Button::NewLevel,
        Button::Restart,
        Button::Undo,
        Button::Left,
        Button::Up,
        Button::Down,
        Button::Right,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Button::NewLevel => "New Level",
            Button::Restart => "Restart",
            Button::Undo => "Undo",
            Button::Left => "left",
            Button::Up => "up",
            Button::Down => "down",
            Button::Right => "right",
        }
    }

    pub fn from_label(label: &str) -> Option<Button> {
        Button::ALL.into_iter().find(|b| b.label() == label)
    }

    pub fn command(self) -> Command {
        match self {
            Button::NewLevel => Command::NewLevel,
            Button::Restart => Command::Restart,
            Button::Undo => Command::Undo,
            Button::Left => Command::Step(Direction::Left),
            Button::Up => Command::Step(Direction::Up),
            Button::Down => Command::Step(Direction::Down),
            Button::Right => Command::Step(Direction::Right),
        }
    }
}

const KEY_DIRECTIONS: [(char, Direction); 8] = [
    ('i', Direction::Up),
    ('k', Direction::Down),
    ('j', Direction::Left),
    ('l', Direction::Right),
    ('w', Direction::Up),
    ('s', Direction::Down),
    ('a', Direction::Left),
    ('d', Direction::Right),
];

/// IJKL and WASD, either case.
pub fn key_direction(key: char) -> Option<Direction> {
    let key = key.to_ascii_lowercase();
    KEY_DIRECTIONS
        .iter()
        .find(|&&(k, _)| k == key)
        .map(|&(_, dir)| dir)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseAction {
    Pressed,
    Released,
}

impl Command {
    pub fn from_button(label: &str) -> Option<Command> {
        Button::from_label(label).map(Button::command)
    }

    pub fn from_key(key: char) -> Option<Command> {
        key_direction(key).map(Command::Step)
    }

    /// Only a release walks; the pixel is converted to the grid square underneath it.
    /// Margin clicks walk toward the nearest edge square.
    pub fn from_mouse(action: MouseAction, x: f64, y: f64, layout: &BoardLayout) -> Option<Command> {
        if action != MouseAction::Released {
            return None;
        }
        layout.nearest_cell(x, y).map(Command::WalkTo)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn button_labels_round_trip() {
        for button in Button::ALL {
            assert_eq!(Some(button), Button::from_label(button.label()));
        }
        assert_eq!(None, Button::from_label("Left"));
    }

    #[test]
    fn buttons_map_to_commands() {
        assert_eq!(Some(Command::NewLevel), Command::from_button("New Level"));
        assert_eq!(Some(Command::Undo), Command::from_button("Undo"));
        assert_eq!(Some(Command::Step(Direction::Up)), Command::from_button("up"));
        assert_eq!(None, Command::from_button("Quit"));
    }

    #[test]
    fn keys_map_both_cases_of_both_layouts() {
        for (keys, dir) in [
            ("wWiI", Direction::Up),
            ("sSkK", Direction::Down),
            ("aAjJ", Direction::Left),
            ("dDlL", Direction::Right),
        ] {
            for key in keys.chars() {
                assert_eq!(Some(Command::Step(dir)), Command::from_key(key), "key {}", key);
            }
        }
        assert_eq!(None, Command::from_key('x'));
        assert_eq!(None, Command::from_key('q'));
    }

    #[test]
    fn only_mouse_release_walks() {
        let layout = BoardLayout::default();
        assert_eq!(
            Some(Command::WalkTo(Coord::new(2, 1))),
            Command::from_mouse(MouseAction::Released, 70.0, 95.0, &layout)
        );
        assert_eq!(None, Command::from_mouse(MouseAction::Pressed, 70.0, 95.0, &layout));
        assert_eq!(
            Some(Command::WalkTo(Coord::new(0, 0))),
            Command::from_mouse(MouseAction::Released, 0.0, 0.0, &layout)
        );
        assert_eq!(
            Some(Command::WalkTo(Coord::new(0, 1))),
            Command::from_mouse(MouseAction::Released, 70.0, 5.0, &layout)
        );
    }
}
