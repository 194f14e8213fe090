use crossterm::event::KeyCode;

use crate::cursor::Direction;
use crate::node::GateKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Place(GateKind),
    AttachControl,
    Delete,
    Quit,
}

#[derive(Clone, Debug)]
pub struct KeyBinding {
    pub keys: &'static [KeyCode],
    pub label: &'static str,
    pub help: &'static str,
    pub command: Command,
}

pub static KEY_BINDINGS: &[KeyBinding] = &[
    KeyBinding { keys: &[KeyCode::Left],  label: "←", help: "Column", command: Command::Move(Direction::Left) },
    KeyBinding { keys: &[KeyCode::Right], label: "→", help: "Column", command: Command::Move(Direction::Right) },
    KeyBinding { keys: &[KeyCode::Up],    label: "↑", help: "Wire",   command: Command::Move(Direction::Up) },
    KeyBinding { keys: &[KeyCode::Down],  label: "↓", help: "Wire",   command: Command::Move(Direction::Down) },
    KeyBinding { keys: &[KeyCode::Char('h'), KeyCode::Char('H')], label: "h", help: "Hadamard", command: Command::Place(GateKind::H) },
    KeyBinding { keys: &[KeyCode::Char('x'), KeyCode::Char('X')], label: "x", help: "Pauli-X",  command: Command::Place(GateKind::X) },
    KeyBinding { keys: &[KeyCode::Char('y'), KeyCode::Char('Y')], label: "y", help: "Pauli-Y",  command: Command::Place(GateKind::Y) },
    KeyBinding { keys: &[KeyCode::Char('z'), KeyCode::Char('Z')], label: "z", help: "Pauli-Z",  command: Command::Place(GateKind::Z) },
    KeyBinding { keys: &[KeyCode::Char('c'), KeyCode::Char('C')], label: "c", help: "Control",  command: Command::AttachControl },
    KeyBinding { keys: &[KeyCode::Backspace, KeyCode::Delete],    label: "Bksp", help: "Del",   command: Command::Delete },
    KeyBinding { keys: &[KeyCode::Char('q')],                     label: "q", help: "Quit",     command: Command::Quit },
];

pub fn command_for(code: KeyCode) -> Option<Command> {
    KEY_BINDINGS
        .iter()
        .find(|binding| binding.keys.contains(&code))
        .map(|binding| binding.command)
}

/// One-line help for the controls panel.
pub fn help_line() -> String {
    let mut help = String::from("Nav: ←→ Column  ↑↓ Wire ");
    for binding in KEY_BINDINGS {
        if matches!(binding.command, Command::Move(_)) {
            continue;
        }
        help.push_str(&format!(" {} {} ", binding.label, binding.help));
    }
    help
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive_for_gates() {
        assert_eq!(command_for(KeyCode::Char('x')), Some(Command::Place(GateKind::X)));
        assert_eq!(command_for(KeyCode::Char('X')), Some(Command::Place(GateKind::X)));
        assert_eq!(command_for(KeyCode::Delete), Some(Command::Delete));
        assert_eq!(command_for(KeyCode::Up), Some(Command::Move(Direction::Up)));
        assert_eq!(command_for(KeyCode::Char('w')), None);
    }

    #[test]
    fn help_mentions_every_action() {
        let help = help_line();
        for name in ["Hadamard", "Pauli-X", "Control", "Del", "Quit"] {
            assert!(help.contains(name), "{name} missing from {help}");
        }
    }
}
