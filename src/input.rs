//! Translation of keyboard keys and keypad buttons into commands.
//!
//! Presentation layers receive raw key names (as reported by the browser or
//! terminal) and button identifiers. Both map onto [`Command`] here so the
//! calculator itself only ever sees typed commands.

use crate::core::{Command, Operator};

/// Map a key name to the command it triggers.
///
/// Returns `None` for keys the calculator ignores.
///
/// # Example
///
/// ```rust
/// use pocketcalc::core::{Command, Operator};
/// use pocketcalc::input::command_for_key;
///
/// assert_eq!(command_for_key("7"), Some(Command::Digit(7)));
/// assert_eq!(command_for_key("x"), Some(Command::Operator(Operator::Multiply)));
/// assert_eq!(command_for_key("Enter"), Some(Command::Equals));
/// assert_eq!(command_for_key("Tab"), None);
/// ```
pub fn command_for_key(key: &str) -> Option<Command> {
    match key {
        "Enter" | "=" => Some(Command::Equals),
        "Escape" | "c" | "C" => Some(Command::Clear),
        "Backspace" | "Delete" => Some(Command::Backspace),
        "." | "," => Some(Command::DecimalPoint),
        _ => single_char(key).and_then(command_for_char),
    }
}

/// Map a keypad button identifier to the command it triggers.
pub fn command_for_button(id: &str) -> Option<Command> {
    if let Some(digit) = id.strip_prefix("btn") {
        return single_char(digit)
            .and_then(|c| c.to_digit(10))
            .map(|d| Command::Digit(d as u8));
    }

    let command = match id {
        "decimalBtn" => Command::DecimalPoint,
        "addBtn" => Command::Operator(Operator::Add),
        "subtractBtn" => Command::Operator(Operator::Subtract),
        "multiplyBtn" => Command::Operator(Operator::Multiply),
        "divideBtn" => Command::Operator(Operator::Divide),
        "percentBtn" => Command::Operator(Operator::Percent),
        "equalsBtn" => Command::Equals,
        "clearBtn" => Command::Clear,
        "backspaceBtn" => Command::Backspace,
        _ => return None,
    };
    Some(command)
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

fn command_for_char(c: char) -> Option<Command> {
    if let Some(d) = c.to_digit(10) {
        return Some(Command::Digit(d as u8));
    }
    Operator::from_symbol(c).map(Command::Operator)
}
