//! Key label table.

use crate::error::{ShortcutError, ShortcutResult};

/// Numeric key code as reported by keyboard events.
pub type KeyCode = u32;

/// Static key table: (lower-case label, key code, display name).
///
/// When several labels share a code, the first one is canonical for display.
const KEY_TABLE: &[(&str, KeyCode, &str)] = &[
    ("esc", 27, "Esc"),
    ("escape", 27, "Escape"),
    // Function keys
    ("f1", 112, "F1"),
    ("f2", 113, "F2"),
    ("f3", 114, "F3"),
    ("f4", 115, "F4"),
    ("f5", 116, "F5"),
    ("f6", 117, "F6"),
    ("f7", 118, "F7"),
    ("f8", 119, "F8"),
    ("f9", 120, "F9"),
    ("f10", 121, "F10"),
    ("f11", 122, "F11"),
    ("f12", 123, "F12"),
    ("tab", 9, "Tab"),
    ("enter", 13, "Enter"),
    ("return", 13, "Return"),
    ("backspace", 8, "Backspace"),
    // Locks
    ("scrolllock", 145, "ScrollLock"),
    ("capslock", 20, "CapsLock"),
    ("numlock", 144, "NumLock"),
    ("pause", 19, "Pause"),
    ("break", 19, "Break"),
    // Navigation
    ("insert", 45, "Insert"),
    ("home", 36, "Home"),
    ("delete", 46, "Delete"),
    ("end", 35, "End"),
    ("space", 32, "Space"),
    ("pageup", 33, "PageUp"),
    ("pagedown", 34, "PageDown"),
    ("left", 37, "Left"),
    ("up", 38, "Up"),
    ("right", 39, "Right"),
    ("down", 40, "Down"),
    // Letters
    ("a", 65, "A"),
    ("b", 66, "B"),
    ("c", 67, "C"),
    ("d", 68, "D"),
    ("e", 69, "E"),
    ("f", 70, "F"),
    ("g", 71, "G"),
    ("h", 72, "H"),
    ("i", 73, "I"),
    ("j", 74, "J"),
    ("k", 75, "K"),
    ("l", 76, "L"),
    ("m", 77, "M"),
    ("n", 78, "N"),
    ("o", 79, "O"),
    ("p", 80, "P"),
    ("q", 81, "Q"),
    ("r", 82, "R"),
    ("s", 83, "S"),
    ("t", 84, "T"),
    ("u", 85, "U"),
    ("v", 86, "V"),
    ("w", 87, "W"),
    ("x", 88, "X"),
    ("y", 89, "Y"),
    ("z", 90, "Z"),
    // Digits
    ("0", 48, "0"),
    ("1", 49, "1"),
    ("2", 50, "2"),
    ("3", 51, "3"),
    ("4", 52, "4"),
    ("5", 53, "5"),
    ("6", 54, "6"),
    ("7", 55, "7"),
    ("8", 56, "8"),
    ("9", 57, "9"),
    // Numeric keypad
    ("pad0", 96, "Pad0"),
    ("pad1", 97, "Pad1"),
    ("pad2", 98, "Pad2"),
    ("pad3", 99, "Pad3"),
    ("pad4", 100, "Pad4"),
    ("pad5", 101, "Pad5"),
    ("pad6", 102, "Pad6"),
    ("pad7", 103, "Pad7"),
    ("pad8", 104, "Pad8"),
    ("pad9", 105, "Pad9"),
    ("padminus", 109, "PadMinus"),
    ("padplus", 107, "PadPlus"),
    ("pad/", 111, "Pad/"),
    ("pad*", 106, "Pad*"),
    // Punctuation. "+" itself separates chord tokens, hence the names.
    ("backtick", 192, "Backtick"),
    ("minus", 189, "Minus"),
    ("plus", 187, "Plus"),
    ("[", 219, "["),
    ("]", 221, "]"),
    (";", 186, ";"),
    ("'", 222, "'"),
    (",", 188, ","),
    (".", 190, "."),
    ("/", 191, "/"),
];

/// Look up the key code for a label, case-insensitively.
///
/// ```
/// use chord_shortcuts::parse_key;
///
/// assert_eq!(parse_key("PageUp").unwrap(), 33);
/// assert!(parse_key("hyper").is_err());
/// ```
///
/// # Errors
///
/// Returns [`ShortcutError::UnrecognizedKey`] if the label is not in the table.
pub fn parse_key(label: &str) -> ShortcutResult<KeyCode> {
    let lower = label.to_lowercase();
    KEY_TABLE
        .iter()
        .find(|(name, _, _)| *name == lower)
        .map(|(_, code, _)| *code)
        .ok_or_else(|| ShortcutError::UnrecognizedKey(label.to_string()))
}

/// Canonical display name for a key code, if the table knows it.
pub fn key_label(code: KeyCode) -> Option<&'static str> {
    KEY_TABLE
        .iter()
        .find(|(_, c, _)| *c == code)
        .map(|(_, _, display)| *display)
}

/// All labels accepted by [`parse_key`].
pub fn key_labels() -> impl Iterator<Item = &'static str> {
    KEY_TABLE.iter().map(|(name, _, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_letters_and_digits() {
        assert_eq!(parse_key("a").unwrap(), 65);
        assert_eq!(parse_key("Z").unwrap(), 90);
        assert_eq!(parse_key("0").unwrap(), 48);
        assert_eq!(parse_key("9").unwrap(), 57);
    }

    #[test]
    fn test_parse_named_keys() {
        assert_eq!(parse_key("Esc").unwrap(), 27);
        assert_eq!(parse_key("ENTER").unwrap(), 13);
        assert_eq!(parse_key("return").unwrap(), 13);
        assert_eq!(parse_key("Delete").unwrap(), 46);
        assert_eq!(parse_key("break").unwrap(), 19);
        assert_eq!(parse_key("ScrollLock").unwrap(), 145);
    }

    #[test]
    fn test_parse_function_keys() {
        assert_eq!(parse_key("f1").unwrap(), 112);
        assert_eq!(parse_key("F12").unwrap(), 123);
        assert!(parse_key("f13").is_err());
    }

    #[test]
    fn test_parse_keypad_and_punctuation() {
        assert_eq!(parse_key("pad5").unwrap(), 101);
        assert_eq!(parse_key("Pad*").unwrap(), 106);
        assert_eq!(parse_key("plus").unwrap(), 187);
        assert_eq!(parse_key("/").unwrap(), 191);
        assert_eq!(parse_key("'").unwrap(), 222);
    }

    #[test]
    fn test_unrecognized_key_keeps_label_as_written() {
        match parse_key("Hyper") {
            Err(ShortcutError::UnrecognizedKey(label)) => assert_eq!(label, "Hyper"),
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(parse_key("").is_err());
    }

    #[test]
    fn test_key_label_round_trip() {
        for label in key_labels() {
            let code = parse_key(label).unwrap();
            let display = key_label(code).unwrap();
            assert_eq!(parse_key(display).unwrap(), code);
        }
        assert_eq!(key_label(13), Some("Enter"));
        assert_eq!(key_label(1), None);
    }
}
