use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub wire: usize,
    pub column: usize,
}

impl Coordinate {
    pub const fn new(wire: usize, column: usize) -> Self {
        Self { wire, column }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(wire {}, column {})", self.wire, self.column)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GateKind {
    H,
    X,
    Y,
    Z,
}

impl GateKind {
    pub fn symbol(self) -> &'static str {
        match self {
            GateKind::H => "H",
            GateKind::X => "X",
            GateKind::Y => "Y",
            GateKind::Z => "Z",
        }
    }
}

/// What occupies a single grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GatePart {
    #[default]
    Empty,
    Gate(GateKind),
    Control,
    Swap,
    /// Vertical connector between a gate and one of its controls.
    Trace,
    Identity,
}

impl GatePart {
    pub fn is_empty(self) -> bool {
        self == GatePart::Empty
    }

    /// Placeholders that only disappear together with their owning gate.
    pub fn is_structural(self) -> bool {
        matches!(self, GatePart::Identity | GatePart::Swap | GatePart::Trace)
    }
}

impl fmt::Display for GatePart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatePart::Empty => f.write_str("EMPTY"),
            GatePart::Gate(kind) => f.write_str(kind.symbol()),
            GatePart::Control => f.write_str("CTRL"),
            GatePart::Swap => f.write_str("SWAP"),
            GatePart::Trace => f.write_str("TRACE"),
            GatePart::Identity => f.write_str("IDEN"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Node {
    pub part: GatePart,
    pub ctrl_a: Option<usize>,
    pub ctrl_b: Option<usize>,
}

impl Node {
    pub fn new(part: GatePart) -> Self {
        Self {
            part,
            ctrl_a: None,
            ctrl_b: None,
        }
    }

    pub fn controls(&self) -> impl Iterator<Item = usize> {
        self.ctrl_a.into_iter().chain(self.ctrl_b)
    }

    pub fn is_controlled_by(&self, wire: usize) -> bool {
        self.ctrl_a == Some(wire) || self.ctrl_b == Some(wire)
    }
}
