use crate::node::Coordinate;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Renderer side of the cursor: told about every selection so it can move
/// its highlight.
pub trait SelectionObserver {
    fn selection_changed(&mut self, selection: Coordinate);
}

/// Current (wire, column) selection clamped to the grid bounds.
#[derive(Clone, Debug)]
pub struct GridCursor {
    selection: Coordinate,
    max_wires: usize,
    max_columns: usize,
}

impl GridCursor {
    pub fn new(max_wires: usize, max_columns: usize) -> Self {
        Self {
            selection: Coordinate::new(0, 0),
            max_wires,
            max_columns,
        }
    }

    pub fn selection(&self) -> Coordinate {
        self.selection
    }

    /// Callers only pass coordinates that are already inside the grid.
    pub fn move_to(&mut self, wire: usize, column: usize, observer: &mut dyn SelectionObserver) {
        debug_assert!(
            wire < self.max_wires && column < self.max_columns,
            "selection ({wire}, {column}) outside {}x{} grid",
            self.max_wires,
            self.max_columns
        );
        self.selection = Coordinate::new(wire, column);
        observer.selection_changed(self.selection);
    }

    pub fn move_dir(&mut self, direction: Direction, observer: &mut dyn SelectionObserver) {
        let Coordinate { mut wire, mut column } = self.selection;
        match direction {
            Direction::Left if column > 0 => column -= 1,
            Direction::Right if column + 1 < self.max_columns => column += 1,
            Direction::Up if wire > 0 => wire -= 1,
            Direction::Down if wire + 1 < self.max_wires => wire += 1,
            _ => {}
        }
        // Notify even when the move was clamped.
        self.move_to(wire, column, observer);
    }
}
