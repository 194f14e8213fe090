use std::fmt;
use std::ops::RangeInclusive;

use crate::model::GridModel;
use crate::node::{Coordinate, GateKind, GatePart};

/// Outcome of an editing command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Edit {
    Placed { at: Coordinate, part: GatePart },
    Cleared { column: usize, wires: RangeInclusive<usize> },
    Ignored(Ignored),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ignored {
    Occupied(GatePart),
    Structural(GatePart),
    NoOwningGate,
    NoAnchorControl,
    NotAGate(GatePart),
    NoFreeWire,
    ControlsFull,
    AlreadyEmpty,
}

impl fmt::Display for Edit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edit::Placed { at, part } => write!(f, "placed {part} at {at}"),
            Edit::Cleared { column, wires } => write!(
                f,
                "cleared wires {}..={} in column {column}",
                wires.start(),
                wires.end()
            ),
            Edit::Ignored(reason) => write!(f, "ignored: {reason}"),
        }
    }
}

impl fmt::Display for Ignored {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ignored::Occupied(part) => write!(f, "cell already holds {part}"),
            Ignored::Structural(part) => write!(f, "{part} goes away with its gate"),
            Ignored::NoOwningGate => f.write_str("control has no gate"),
            Ignored::NoAnchorControl => f.write_str("no single farthest control"),
            Ignored::NotAGate(part) => write!(f, "{part} is not a gate"),
            Ignored::NoFreeWire => f.write_str("no free wire next to the gate"),
            Ignored::ControlsFull => f.write_str("gate already has two controls"),
            Ignored::AlreadyEmpty => f.write_str("cell is empty"),
        }
    }
}

/// Decides which cells change for place and delete commands.
pub struct GateDeletionResolver;

impl GateDeletionResolver {
    /// Never overwrites: anything but an empty cell is left alone.
    pub fn place_gate<M: GridModel>(model: &mut M, at: Coordinate, kind: GateKind) -> Edit {
        debug_assert!(model.contains(at));
        let part = model.node_gate_part(at.wire, at.column);
        if !part.is_empty() {
            return Edit::Ignored(Ignored::Occupied(part));
        }
        let part = GatePart::Gate(kind);
        model.set_node(at.wire, at.column, part);
        Edit::Placed { at, part }
    }

    pub fn handle_delete<M: GridModel>(model: &mut M, at: Coordinate) -> Edit {
        debug_assert!(model.contains(at));
        match model.node_gate_part(at.wire, at.column) {
            GatePart::Gate(_) if model.node(at.wire, at.column).controls().next().is_none() => {
                model.set_node(at.wire, at.column, GatePart::Empty);
                Edit::Cleared {
                    column: at.column,
                    wires: at.wire..=at.wire,
                }
            }
            GatePart::Gate(_) => Self::delete_controls_for_gate(model, at.wire, at.column),
            GatePart::Control => match model.gate_wire_for_control_node(at.wire, at.column) {
                Some(gate_wire) => Self::delete_controls_for_gate(model, gate_wire, at.column),
                None => Edit::Ignored(Ignored::NoOwningGate),
            },
            part if part.is_structural() => Edit::Ignored(Ignored::Structural(part)),
            _ => {
                model.set_node(at.wire, at.column, GatePart::Empty);
                Edit::Ignored(Ignored::AlreadyEmpty)
            }
        }
    }

    /// Clears the run of cells between the gate and its farther control.
    ///
    /// Only one side is cleared: with two controls the nearer control's run
    /// stays in place, and with controls at equal distance (or none at all)
    /// nothing is cleared. Uncontrolled gates are cleared by `handle_delete`.
    pub fn delete_controls_for_gate<M: GridModel>(
        model: &mut M,
        gate_wire: usize,
        column: usize,
    ) -> Edit {
        let node = model.node(gate_wire, column);
        let distance = |ctrl: Option<usize>| ctrl.map_or(0, |c| c.abs_diff(gate_wire));
        let (dist_a, dist_b) = (distance(node.ctrl_a), distance(node.ctrl_b));

        let anchor = if dist_a > dist_b {
            node.ctrl_a
        } else if dist_a < dist_b {
            node.ctrl_b
        } else {
            None
        };

        let Some(anchor) = anchor else {
            return Edit::Ignored(Ignored::NoAnchorControl);
        };

        let wires = gate_wire.min(anchor)..=gate_wire.max(anchor);
        for wire in wires.clone() {
            model.set_node(wire, column, GatePart::Empty);
        }
        Edit::Cleared { column, wires }
    }

    /// Adds a control on the wire directly above the gate, or below when
    /// above is taken.
    pub fn attach_control<M: GridModel>(model: &mut M, at: Coordinate) -> Edit {
        debug_assert!(model.contains(at));
        let node = *model.node(at.wire, at.column);
        if !matches!(node.part, GatePart::Gate(_)) {
            return Edit::Ignored(Ignored::NotAGate(node.part));
        }
        if node.ctrl_a.is_some() && node.ctrl_b.is_some() {
            return Edit::Ignored(Ignored::ControlsFull);
        }

        let candidates = [at.wire.checked_sub(1), Some(at.wire + 1)];
        let free = candidates.into_iter().flatten().find(|&wire| {
            wire < model.max_wires()
                && !node.is_controlled_by(wire)
                && model.node_gate_part(wire, at.column).is_empty()
        });
        let Some(ctrl) = free else {
            return Edit::Ignored(Ignored::NoFreeWire);
        };

        if !model.set_control(at.wire, at.column, ctrl) {
            return Edit::Ignored(Ignored::ControlsFull);
        }
        model.set_node(ctrl, at.column, GatePart::Control);
        Edit::Placed {
            at: Coordinate::new(ctrl, at.column),
            part: GatePart::Control,
        }
    }
}
