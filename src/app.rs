use crate::config::GridConfig;
use crate::grid::CircuitGrid;
use crate::menu::Command;
use crate::model::{CircuitGridModel, GridModel, GridResult};
use crate::node::{GateKind, GatePart};
use crate::resolver::Edit;

pub struct App {
    pub model: CircuitGridModel,
    pub grid: CircuitGrid,
    pub status_msg: String,
}

impl App {
    pub fn new(config: &GridConfig) -> GridResult<Self> {
        let mut model = CircuitGridModel::new(config.wires, config.columns)?;
        if config.demo {
            seed_demo(&mut model)?;
        }
        let grid = CircuitGrid::new(&model);

        Ok(App {
            model,
            grid,
            status_msg: String::new(),
        })
    }

    /// Applies one command; returns true when the app should quit.
    pub fn apply(&mut self, command: Command) -> bool {
        let edit = match command {
            Command::Quit => return true,
            Command::Move(direction) => {
                self.grid.move_selection(direction);
                return false;
            }
            Command::Place(kind) => self.grid.place_gate(&mut self.model, kind),
            Command::AttachControl => self.grid.attach_control(&mut self.model),
            Command::Delete => self.grid.delete_at_selection(&mut self.model),
        };
        if let Edit::Ignored(reason) = edit {
            self.status_msg = reason.to_string();
        }
        false
    }
}

// A CNOT-style gate on the last wire controlled from wire 0, plus an H.
fn seed_demo(model: &mut CircuitGridModel) -> GridResult<()> {
    model.set_node(0, 0, GatePart::Gate(GateKind::H));
    if model.max_wires() > 1 && model.max_columns() > 1 {
        let target = model.max_wires() - 1;
        model.place_controlled_gate(1, target, GateKind::X, Some(0), None)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Direction;
    use crate::node::Coordinate;
    use std::path::PathBuf;

    fn config(wires: usize, columns: usize, demo: bool) -> GridConfig {
        GridConfig {
            wires,
            columns,
            log_dir: PathBuf::from("/tmp"),
            log_level: "info".to_string(),
            demo,
        }
    }

    #[test]
    fn demo_seeds_controlled_gate() {
        let app = App::new(&config(3, 4, true)).unwrap();
        assert_eq!(app.model.node_gate_part(0, 0), GatePart::Gate(GateKind::H));
        assert_eq!(app.model.node_gate_part(0, 1), GatePart::Control);
        assert_eq!(app.model.node_gate_part(1, 1), GatePart::Trace);
        assert_eq!(app.model.node_gate_part(2, 1), GatePart::Gate(GateKind::X));
    }

    #[test]
    fn demo_on_single_wire() {
        let app = App::new(&config(1, 4, true)).unwrap();
        assert_eq!(app.model.node_gate_part(0, 0), GatePart::Gate(GateKind::H));
        assert_eq!(app.model.node_gate_part(0, 1), GatePart::Empty);
    }

    #[test]
    fn commands_drive_the_grid() {
        let mut app = App::new(&config(3, 4, false)).unwrap();
        assert!(!app.apply(Command::Move(Direction::Down)));
        assert!(!app.apply(Command::Place(GateKind::Y)));
        assert_eq!(app.grid.selection(), Coordinate::new(1, 0));
        assert_eq!(app.model.node_gate_part(1, 0), GatePart::Gate(GateKind::Y));
        assert!(app.status_msg.is_empty());

        app.apply(Command::Place(GateKind::Z));
        assert_eq!(app.status_msg, "cell already holds Y");
        assert!(app.apply(Command::Quit));
    }

    #[test]
    fn deleted_gate_frees_the_cell() {
        let mut app = App::new(&config(2, 2, false)).unwrap();
        app.apply(Command::Place(GateKind::X));
        app.apply(Command::Delete);
        assert_eq!(app.model.node_gate_part(0, 0), GatePart::Empty);
        assert!(app.status_msg.is_empty());

        app.apply(Command::Place(GateKind::H));
        assert_eq!(app.model.node_gate_part(0, 0), GatePart::Gate(GateKind::H));
        assert!(app.status_msg.is_empty());
    }

    #[test]
    fn deleting_demo_gate_from_control() {
        let mut app = App::new(&config(3, 4, true)).unwrap();
        app.apply(Command::Move(Direction::Right));
        app.apply(Command::Delete);
        assert!(app.model.column(1).all(|n| n.part.is_empty()));
        assert_eq!(app.model.node_gate_part(0, 0), GatePart::Gate(GateKind::H));
    }
}
