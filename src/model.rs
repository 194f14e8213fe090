use thiserror::Error;

use crate::node::{Coordinate, GateKind, GatePart, Node};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid must have at least one wire and one column (got {wires}x{columns})")]
    EmptyGrid { wires: usize, columns: usize },
    #[error("{0} is outside the grid")]
    OutOfRange(Coordinate),
    #[error("control wire {control} conflicts with gate wire {gate} or the other control")]
    ConflictingControl { gate: usize, control: usize },
    #[error("control cell {at} already holds {part}")]
    ControlOccupied { at: Coordinate, part: GatePart },
}

pub type GridResult<T> = Result<T, GridError>;

/// Read/write access to the cells of a circuit grid.
///
/// Coordinates passed in are expected to be inside `max_wires() x max_columns()`.
pub trait GridModel {
    fn max_wires(&self) -> usize;
    fn max_columns(&self) -> usize;
    fn node(&self, wire: usize, column: usize) -> &Node;
    /// Overwrites the cell with a fresh node; any control references are dropped.
    fn set_node(&mut self, wire: usize, column: usize, part: GatePart);
    /// Wire of the gate in `column` that lists `wire` as one of its controls.
    fn gate_wire_for_control_node(&self, wire: usize, column: usize) -> Option<usize>;
    /// Records `ctrl` in the first free control slot of the gate at
    /// (`gate_wire`, `column`); false when both slots are taken. The caller
    /// writes the control marker itself.
    fn set_control(&mut self, gate_wire: usize, column: usize, ctrl: usize) -> bool;

    fn node_gate_part(&self, wire: usize, column: usize) -> GatePart {
        self.node(wire, column).part
    }

    fn contains(&self, coord: Coordinate) -> bool {
        coord.wire < self.max_wires() && coord.column < self.max_columns()
    }
}

#[derive(Clone, Debug)]
pub struct CircuitGridModel {
    max_wires: usize,
    max_columns: usize,
    nodes: Vec<Node>,
}

impl CircuitGridModel {
    pub fn new(max_wires: usize, max_columns: usize) -> GridResult<Self> {
        if max_wires == 0 || max_columns == 0 {
            return Err(GridError::EmptyGrid {
                wires: max_wires,
                columns: max_columns,
            });
        }
        Ok(Self {
            max_wires,
            max_columns,
            nodes: vec![Node::default(); max_wires * max_columns],
        })
    }

    fn index(&self, wire: usize, column: usize) -> usize {
        debug_assert!(wire < self.max_wires && column < self.max_columns);
        wire * self.max_columns + column
    }

    fn check(&self, wire: usize, column: usize) -> GridResult<()> {
        let coord = Coordinate::new(wire, column);
        if self.contains(coord) {
            Ok(())
        } else {
            Err(GridError::OutOfRange(coord))
        }
    }

    /// Writes a gate together with its control markers and the trace cells
    /// connecting them.
    pub fn place_controlled_gate(
        &mut self,
        column: usize,
        gate_wire: usize,
        kind: GateKind,
        ctrl_a: Option<usize>,
        ctrl_b: Option<usize>,
    ) -> GridResult<()> {
        self.check(gate_wire, column)?;
        for ctrl in ctrl_a.into_iter().chain(ctrl_b) {
            self.check(ctrl, column)?;
            if ctrl == gate_wire {
                return Err(GridError::ConflictingControl {
                    gate: gate_wire,
                    control: ctrl,
                });
            }
            let part = self.node_gate_part(ctrl, column);
            if !part.is_empty() {
                return Err(GridError::ControlOccupied {
                    at: Coordinate::new(ctrl, column),
                    part,
                });
            }
        }
        if let (Some(a), Some(b)) = (ctrl_a, ctrl_b) {
            if a == b {
                return Err(GridError::ConflictingControl {
                    gate: gate_wire,
                    control: b,
                });
            }
        }

        for ctrl in ctrl_a.into_iter().chain(ctrl_b) {
            let (lo, hi) = (gate_wire.min(ctrl), gate_wire.max(ctrl));
            for wire in lo + 1..hi {
                if self.node_gate_part(wire, column).is_empty() {
                    self.set_node(wire, column, GatePart::Trace);
                }
            }
            self.set_node(ctrl, column, GatePart::Control);
        }

        let idx = self.index(gate_wire, column);
        self.nodes[idx] = Node {
            part: GatePart::Gate(kind),
            ctrl_a,
            ctrl_b,
        };
        Ok(())
    }

    pub fn column(&self, column: usize) -> impl Iterator<Item = &Node> {
        (0..self.max_wires).map(move |wire| self.node(wire, column))
    }
}

impl GridModel for CircuitGridModel {
    fn max_wires(&self) -> usize {
        self.max_wires
    }

    fn max_columns(&self) -> usize {
        self.max_columns
    }

    fn node(&self, wire: usize, column: usize) -> &Node {
        &self.nodes[self.index(wire, column)]
    }

    fn set_node(&mut self, wire: usize, column: usize, part: GatePart) {
        let idx = self.index(wire, column);
        self.nodes[idx] = Node::new(part);
    }

    fn set_control(&mut self, gate_wire: usize, column: usize, ctrl: usize) -> bool {
        let idx = self.index(gate_wire, column);
        let node = &mut self.nodes[idx];
        if node.ctrl_a.is_none() {
            node.ctrl_a = Some(ctrl);
        } else if node.ctrl_b.is_none() {
            node.ctrl_b = Some(ctrl);
        } else {
            return false;
        }
        true
    }

    fn gate_wire_for_control_node(&self, wire: usize, column: usize) -> Option<usize> {
        self.column(column).position(|node| {
            matches!(node.part, GatePart::Gate(_) | GatePart::Swap) && node.is_controlled_by(wire)
        })
    }
}
