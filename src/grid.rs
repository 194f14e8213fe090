use crate::cursor::{Direction, GridCursor};
use crate::model::GridModel;
use crate::node::{Coordinate, GateKind};
use crate::render::GridView;
use crate::resolver::{Edit, GateDeletionResolver};

/// The editable circuit grid: selection, highlight and the editing commands.
///
/// The model is owned by the caller and lent for each command.
pub struct CircuitGrid {
    cursor: GridCursor,
    pub view: GridView,
}

impl CircuitGrid {
    pub fn new<M: GridModel>(model: &M) -> Self {
        let mut grid = Self {
            cursor: GridCursor::new(model.max_wires(), model.max_columns()),
            view: GridView::default(),
        };
        grid.cursor.move_to(0, 0, &mut grid.view);
        grid
    }

    pub fn selection(&self) -> Coordinate {
        self.cursor.selection()
    }

    pub fn move_selection(&mut self, direction: Direction) {
        self.cursor.move_dir(direction, &mut self.view);
        log::trace!("move {direction:?} -> {}", self.selection());
    }

    pub fn place_gate<M: GridModel>(&self, model: &mut M, kind: GateKind) -> Edit {
        let edit = GateDeletionResolver::place_gate(model, self.selection(), kind);
        log_edit("place", self.selection(), &edit);
        edit
    }

    pub fn delete_at_selection<M: GridModel>(&self, model: &mut M) -> Edit {
        let edit = GateDeletionResolver::handle_delete(model, self.selection());
        log_edit("delete", self.selection(), &edit);
        edit
    }

    pub fn attach_control<M: GridModel>(&self, model: &mut M) -> Edit {
        let edit = GateDeletionResolver::attach_control(model, self.selection());
        log_edit("control", self.selection(), &edit);
        edit
    }
}

fn log_edit(command: &str, at: Coordinate, edit: &Edit) {
    match edit {
        Edit::Ignored(_) => log::trace!("{command} at {at}: {edit}"),
        _ => log::debug!("{command} at {at}: {edit}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CircuitGridModel;
    use crate::node::GatePart;

    fn grid(wires: usize, columns: usize) -> (CircuitGridModel, CircuitGrid) {
        let model = CircuitGridModel::new(wires, columns).unwrap();
        let grid = CircuitGrid::new(&model);
        (model, grid)
    }

    #[test]
    fn selection_starts_at_origin_and_is_highlighted() {
        let (_, grid) = grid(3, 5);
        assert_eq!(grid.selection(), Coordinate::new(0, 0));
        assert_eq!(grid.view.selection(), Coordinate::new(0, 0));
    }

    #[test]
    fn view_follows_selection() {
        let (_, mut grid) = grid(3, 5);
        grid.move_selection(Direction::Down);
        grid.move_selection(Direction::Right);
        grid.move_selection(Direction::Right);
        assert_eq!(grid.selection(), Coordinate::new(1, 2));
        assert_eq!(grid.view.selection(), grid.selection());
    }

    #[test]
    fn place_x_at_selection() {
        let (mut model, mut grid) = grid(3, 5);
        grid.move_selection(Direction::Right);
        let edit = grid.place_gate(&mut model, GateKind::X);
        assert!(matches!(edit, Edit::Placed { .. }));
        assert_eq!(model.node_gate_part(0, 1), GatePart::Gate(GateKind::X));

        let again = grid.place_gate(&mut model, GateKind::H);
        assert!(matches!(again, Edit::Ignored(_)));
        assert_eq!(model.node_gate_part(0, 1), GatePart::Gate(GateKind::X));
    }

    #[test]
    fn delete_at_selection_twice_matches_once() {
        let (mut model, mut grid) = grid(4, 3);
        model
            .place_controlled_gate(1, 3, GateKind::Z, Some(0), None)
            .unwrap();
        grid.move_selection(Direction::Right);

        grid.delete_at_selection(&mut model);
        let once = model.clone();
        grid.delete_at_selection(&mut model);

        let cells = |m: &CircuitGridModel| m.column(1).map(|n| n.part).collect::<Vec<_>>();
        assert_eq!(cells(&model), cells(&once));
        assert!(model.column(1).all(|n| n.part.is_empty()));
    }

    #[test]
    fn attach_then_delete_from_control() {
        let (mut model, mut grid) = grid(3, 2);
        grid.move_selection(Direction::Down);
        grid.place_gate(&mut model, GateKind::H);
        grid.attach_control(&mut model);
        assert_eq!(model.node_gate_part(0, 0), GatePart::Control);

        grid.move_selection(Direction::Up);
        let edit = grid.delete_at_selection(&mut model);
        assert_eq!(edit, Edit::Cleared { column: 0, wires: 0..=1 });
    }
}
