use serde::Deserialize;

use crate::core::{Coord, LEFT_MARGIN, SQUARE_SIZE, TOP_MARGIN};

/// Pixel placement of the board on the graphics pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BoardLayout {
    pub left_margin: i32,
    pub top_margin: i32,
    pub square_size: i32,
}

impl Default for BoardLayout {
    fn default() -> Self {
        BoardLayout {
            left_margin: LEFT_MARGIN,
            top_margin: TOP_MARGIN,
            square_size: SQUARE_SIZE,
        }
    }
}

impl BoardLayout {
    /// Top-left pixel of the square at `pos`
    pub fn origin_of(&self, pos: Coord) -> (i32, i32) {
        (
            self.left_margin + self.square_size * pos.col as i32,
            self.top_margin + self.square_size * pos.row as i32,
        )
    }

    /// Grid position under the pixel (x, y), or `None` above or left of the board.
    pub fn cell_at(&self, x: f64, y: f64) -> Option<Coord> {
        let size = f64::from(self.square_size.max(1));
        let row = ((y - f64::from(self.top_margin)) / size).floor();
        let col = ((x - f64::from(self.left_margin)) / size).floor();
        if row < 0.0 || col < 0.0 || !row.is_finite() || !col.is_finite() {
            return None;
        }
        Some(Coord::new(row as usize, col as usize))
    }

    /// Like [`cell_at`](Self::cell_at), but a pixel above or left of the board lands on
    /// row or column 0, so every finite pixel names the square nearest to it.
    pub fn nearest_cell(&self, x: f64, y: f64) -> Option<Coord> {
        if !x.is_finite() || !y.is_finite() {
            return None;
        }
        self.cell_at(x.max(f64::from(self.left_margin)), y.max(f64::from(self.top_margin)))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn origin_uses_margins_and_square_size() {
        let layout = BoardLayout::default();
        assert_eq!((40, 40), layout.origin_of(Coord::new(0, 0)));
        assert_eq!((40 + 3 * 25, 40 + 2 * 25), layout.origin_of(Coord::new(2, 3)));
    }

    #[test]
    fn cell_at_floors_pixel_offsets() {
        let layout = BoardLayout::default();
        assert_eq!(Some(Coord::new(0, 0)), layout.cell_at(40.0, 40.0));
        assert_eq!(Some(Coord::new(0, 0)), layout.cell_at(64.9, 64.9));
        assert_eq!(Some(Coord::new(1, 2)), layout.cell_at(90.0, 65.0));
    }

    #[test]
    fn cell_at_in_margin_is_none() {
        let layout = BoardLayout::default();
        assert_eq!(None, layout.cell_at(39.0, 60.0));
        assert_eq!(None, layout.cell_at(60.0, 10.0));
    }

    #[test]
    fn nearest_cell_clamps_margin_pixels() {
        let layout = BoardLayout::default();
        assert_eq!(Some(Coord::new(0, 0)), layout.nearest_cell(0.0, 0.0));
        assert_eq!(Some(Coord::new(0, 2)), layout.nearest_cell(90.0, -100.0));
        assert_eq!(Some(Coord::new(3, 0)), layout.nearest_cell(39.0, 115.0));
        assert_eq!(Some(Coord::new(1, 2)), layout.nearest_cell(90.0, 65.0));
        assert_eq!(None, layout.nearest_cell(f64::NAN, 65.0));
    }
}
