use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::cursor::SelectionObserver;
use crate::menu;
use crate::model::{CircuitGridModel, GridModel};
use crate::node::{Coordinate, GateKind, GatePart, Node};

// ── Colors ─────────────────────────────────────────────────────────────────

const BLUE: Color = Color::Rgb(122, 162, 247);
const GREEN: Color = Color::Rgb(158, 206, 106);
const ORANGE: Color = Color::Rgb(255, 158, 100);
const YELLOW: Color = Color::Rgb(224, 175, 104);
const DARK_BLUE: Color = Color::Rgb(192, 202, 245);

// ── Layout constants ────────────────────────────────────────────────────────

const CELL_W: usize = 9;
const CELL_H: usize = 3;
const LABEL_W: usize = 7; // "q[N]  ──"
const GATE_NAME_W: usize = 3;
const HEADER_H: usize = 1;

// ── Cursor highlight ────────────────────────────────────────────────────────

/// Screen-side state of the grid: where it is drawn, which columns are in
/// view and where the cursor highlight sits.
#[derive(Clone, Debug)]
pub struct GridView {
    origin: Position,
    first_column: usize,
    visible_columns: usize,
    selection: Coordinate,
    anchor: Position,
}

impl Default for GridView {
    fn default() -> Self {
        Self {
            origin: Position::default(),
            first_column: 0,
            visible_columns: usize::MAX,
            selection: Coordinate::new(0, 0),
            anchor: Position::new(LABEL_W as u16, HEADER_H as u16),
        }
    }
}

impl GridView {
    pub fn selection(&self) -> Coordinate {
        self.selection
    }

    pub fn anchor(&self) -> Position {
        self.anchor
    }

    pub fn first_column(&self) -> usize {
        self.first_column
    }

    pub fn visible_columns(&self, max_columns: usize) -> std::ops::Range<usize> {
        self.first_column..self.first_column.saturating_add(self.visible_columns).min(max_columns)
    }

    /// Called each frame with the area the grid is drawn into.
    pub fn set_viewport(&mut self, area: Rect) {
        self.origin = Position::new(area.x, area.y);
        self.visible_columns = ((area.width as usize).saturating_sub(LABEL_W) / CELL_W).max(1);
        self.place_highlight();
    }

    /// Top-left corner of the cell at `coord`, assuming its column is in view.
    pub fn anchor_for(&self, coord: Coordinate) -> Position {
        let col = coord.column.saturating_sub(self.first_column);
        let x = self.origin.x as usize + LABEL_W + CELL_W * col;
        let y = self.origin.y as usize + HEADER_H + CELL_H * coord.wire;
        Position::new(clamp_u16(x), clamp_u16(y))
    }

    pub fn highlight_rect(&self) -> Rect {
        Rect::new(self.anchor.x, self.anchor.y, CELL_W as u16, CELL_H as u16)
    }

    fn place_highlight(&mut self) {
        let column = self.selection.column;
        if column < self.first_column {
            self.first_column = column;
        } else if column >= self.first_column.saturating_add(self.visible_columns) {
            self.first_column = column + 1 - self.visible_columns;
        }
        self.anchor = self.anchor_for(self.selection);
    }
}

impl SelectionObserver for GridView {
    fn selection_changed(&mut self, selection: Coordinate) {
        self.selection = selection;
        self.place_highlight();
    }
}

fn clamp_u16(v: usize) -> u16 {
    u16::try_from(v).unwrap_or(u16::MAX)
}

// ── Main render entry point ─────────────────────────────────────────────────

pub fn render(f: &mut Frame, app: &mut App) {
    let size = f.area();

    let ctrl_height = 3u16;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(ctrl_height)])
        .split(size);

    render_circuit_panel(f, app, chunks[0]);
    render_controls_panel(f, chunks[1]);
}

// ── Circuit Panel ─────────────────────────────────────────────────────────────

fn render_circuit_panel(f: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ORANGE))
        .title(Span::styled("Circuit Grid", Style::default().fg(ORANGE).add_modifier(Modifier::BOLD)));

    let inner = block.inner(area);
    f.render_widget(block, area);

    app.grid.view.set_viewport(inner);
    let view = &app.grid.view;

    let lines = build_grid_lines(&app.model, view, &app.status_msg);
    let text: Vec<Line> = lines.into_iter().map(Line::raw).collect();
    f.render_widget(Paragraph::new(Text::from(text)).style(Style::default().fg(DARK_BLUE)), inner);

    let highlight = view.highlight_rect().intersection(inner);
    if !highlight.is_empty() {
        let cursor = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(GREEN).add_modifier(Modifier::BOLD));
        f.render_widget(cursor, highlight);
    }
}

fn build_grid_lines(model: &CircuitGridModel, view: &GridView, status_msg: &str) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let columns = view.visible_columns(model.max_columns());

    let mut col_hdr = " ".repeat(LABEL_W);
    for column in columns.clone() {
        col_hdr.push_str(&pad_center(&format!("{column}"), CELL_W));
    }
    lines.push(col_hdr);

    for wire in 0..model.max_wires() {
        let mut top_line = " ".repeat(LABEL_W);
        let label = format!("q[{wire}]");
        let mut mid_line = format!("{:<5}", label) + "──";
        let mut bot_line = " ".repeat(LABEL_W);

        for column in columns.clone() {
            let (top, mid, bot) = render_cell(model, wire, column);
            top_line.push_str(&top);
            mid_line.push_str(&mid);
            bot_line.push_str(&bot);
        }

        lines.push(top_line);
        lines.push(mid_line);
        lines.push(bot_line);
    }

    let selection = view.selection();
    let mut status = format!(
        "  Position: Wire {}, Column {}  [{}]",
        selection.wire,
        selection.column,
        model.node_gate_part(selection.wire, selection.column)
    );
    if !status_msg.is_empty() {
        status.push_str(&format!("  │  {status_msg}"));
    }
    lines.push(status);

    lines
}

fn render_cell(model: &CircuitGridModel, wire: usize, column: usize) -> (String, String, String) {
    let empty = " ".repeat(CELL_W);
    let half = CELL_W / 2;
    let vert_row = " ".repeat(half) + "│" + &" ".repeat(CELL_W - half - 1);

    let dash_l = (CELL_W - 1) / 2;
    let dash_r = CELL_W - dash_l - 1;
    let on_wire = |sym: &str| "─".repeat(dash_l) + sym + &"─".repeat(dash_r);
    let vert = |yes: bool| if yes { vert_row.clone() } else { empty.clone() };

    let node = model.node(wire, column);
    match node.part {
        GatePart::Gate(kind) if node.ctrl_a.is_some() || node.ctrl_b.is_some() => {
            let (above, below) = links(node, wire);
            (vert(above), on_wire(target_symbol(kind)), vert(below))
        }
        GatePart::Gate(kind) => {
            let margin = (CELL_W - GATE_NAME_W - 2) / 2;
            let rmargin = CELL_W - margin - GATE_NAME_W - 2;
            let name = pad_center(kind.symbol(), GATE_NAME_W);
            let top = " ".repeat(margin) + "┌" + &"─".repeat(GATE_NAME_W) + "┐" + &" ".repeat(rmargin);
            let mid = "─".repeat(margin) + "┤" + &name + "├" + &"─".repeat(rmargin);
            let bot = " ".repeat(margin) + "└" + &"─".repeat(GATE_NAME_W) + "┘" + &" ".repeat(rmargin);
            (top, mid, bot)
        }
        GatePart::Control => {
            let gate = model.gate_wire_for_control_node(wire, column);
            let above = gate.is_some_and(|g| g < wire);
            let below = gate.is_some_and(|g| g > wire);
            (vert(above), on_wire("●"), vert(below))
        }
        GatePart::Trace => (vert_row.clone(), on_wire("┼"), vert_row.clone()),
        GatePart::Swap => (empty.clone(), on_wire("×"), empty.clone()),
        GatePart::Identity | GatePart::Empty => (empty.clone(), "─".repeat(CELL_W), empty.clone()),
    }
}

/// Whether a controlled gate connects upward and/or downward.
fn links(node: &Node, wire: usize) -> (bool, bool) {
    let above = node.controls().any(|c| c < wire);
    let below = node.controls().any(|c| c > wire);
    (above, below)
}

fn target_symbol(kind: GateKind) -> &'static str {
    match kind {
        GateKind::X => "⊕",
        other => other.symbol(),
    }
}

fn pad_center(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len >= width {
        return s.chars().take(width).collect();
    }
    let total = width - len;
    let left = total / 2;
    let right = total - left;
    " ".repeat(left) + s + &" ".repeat(right)
}

// ── Controls Panel ─────────────────────────────────────────────────────────────

fn render_controls_panel(f: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BLUE));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let p = Paragraph::new(Span::styled(menu::help_line(), Style::default().fg(YELLOW)));
    f.render_widget(p, inner);
}
