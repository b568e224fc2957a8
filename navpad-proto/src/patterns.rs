//! Built-in button codes for the nav remote.
//!
//! Captured from the wire; frames are 11 or 12 bytes. Note that some
//! joystick diagonal frames do NOT end with 0xFF (kept as-is).

use crate::types::{Button, Pattern};

/// Maximum frame length in bytes. No known button code is longer than
/// 12 bytes; the headroom absorbs line noise before overflow recovery
/// kicks in.
pub const MAX_FRAME: usize = 24;

/// Pattern table capacity: built-ins plus reserved custom slots.
pub const MAX_PATTERNS: usize = 48;

// Main button codes
const OFF: &[u8] = &[0x00, 0x4B, 0x4B, 0xCB, 0x4B, 0x7B, 0x7B, 0xCB, 0x7B, 0x7B, 0x4F];
const DISP: &[u8] = &[0x00, 0x4B, 0x4B, 0xCB, 0x4B, 0xCB, 0xCB, 0x7B, 0x4F, 0x4F, 0xCB];
const INFO: &[u8] = &[0x00, 0x4B, 0x4B, 0xCB, 0x4B, 0x4B, 0x7B, 0x7B, 0x4F, 0x7B, 0xFB];
const BACK: &[u8] = &[0x00, 0x4B, 0x4B, 0xCB, 0x4B, 0x4B, 0x4F, 0xCF, 0xCF, 0xCB, 0x4F, 0xFF];
const MENU: &[u8] = &[0x00, 0x4B, 0x4B, 0xCB, 0x4B, 0xCB, 0xCF, 0xCB, 0xCF, 0x4B, 0x4F, 0xFF];
const DEST: &[u8] = &[0x00, 0x4B, 0x4B, 0xCB, 0x4B, 0x7B, 0x7B, 0x7B, 0xCB, 0x7B, 0xCB];
const MAP: &[u8] = &[0x00, 0x4B, 0x4B, 0xCB, 0x4B, 0x7B, 0xCF, 0xCB, 0x4F, 0xCB, 0x4F, 0xFF];
const MINUS: &[u8] = &[0x00, 0x4B, 0x4B, 0xCB, 0x4B, 0x7B, 0xCB, 0x7B, 0x7B, 0x4F, 0xCB];
const PLUS: &[u8] = &[0x00, 0x4B, 0x4B, 0xCB, 0x4B, 0x4B, 0x7B, 0xCF, 0xCF, 0xCF, 0x7B, 0xFB];
const UP: &[u8] = &[0x00, 0x4B, 0x4B, 0xCB, 0x4B, 0x4B, 0x4B, 0xCF, 0xCF, 0xCF, 0x4F, 0xFF];
const DOWN: &[u8] = &[0x00, 0x4B, 0x4B, 0xCB, 0x4B, 0x7B, 0x4B, 0xCF, 0x7B, 0xCF, 0x4F, 0xFF];
const RIGHT: &[u8] = &[0x00, 0x4B, 0x4B, 0xCB, 0x4B, 0xCB, 0x4B, 0xCF, 0x4F, 0xCF, 0x4F, 0xFF];
const LEFT: &[u8] = &[0x00, 0x4B, 0x4B, 0xCB, 0x4B, 0x7B, 0x4B, 0xCF, 0xCB, 0xCF, 0x4F, 0xFF];
const ENTER: &[u8] = &[0x00, 0x4B, 0x4B, 0xCB, 0x4B, 0x4B, 0x4F, 0xCF, 0xCF, 0x4F, 0x4F, 0xFF];

// Joystick diagonal codes
const UP_RIGHT: &[u8] = &[0x00, 0x4B, 0x4B, 0xCB, 0x4B, 0x4B, 0x4B, 0xCF, 0x4F, 0xCF, 0xCB]; // no 0xFF
const UP_LEFT: &[u8] = &[0x00, 0x4B, 0x4B, 0xCB, 0x4B, 0xCB, 0x4F, 0x7B, 0x4F, 0xCF, 0x4F, 0xFF];
const DOWN_RIGHT: &[u8] = &[0x00, 0x4B, 0x4B, 0xCB, 0x4B, 0x7B, 0x4F, 0x7B, 0x7B, 0xCF, 0x4F, 0xFF];
const DOWN_LEFT: &[u8] = &[0x00, 0x4B, 0x4B, 0xCB, 0x4B, 0x7B, 0x4F, 0x7B, 0x4B, 0xCF, 0xCB]; // no 0xFF

/// The built-in pattern table, in match precedence order.
///
/// The decoder scans this table front to back and the first match wins,
/// so the order here is part of the protocol contract.
pub const BUILTIN: &[Pattern] = &[
    Pattern::new("OFF", OFF, Button::Off),
    Pattern::new("DISP", DISP, Button::Disp),
    Pattern::new("INFO", INFO, Button::Info),
    Pattern::new("BACK", BACK, Button::Back),
    Pattern::new("MENU", MENU, Button::Menu),
    Pattern::new("DEST", DEST, Button::Dest),
    Pattern::new("MAP", MAP, Button::Map),
    Pattern::new("MINUS", MINUS, Button::Minus),
    Pattern::new("PLUS", PLUS, Button::Plus),
    Pattern::new("UP", UP, Button::Up),
    Pattern::new("DOWN", DOWN, Button::Down),
    Pattern::new("RIGHT", RIGHT, Button::Right),
    Pattern::new("LEFT", LEFT, Button::Left),
    Pattern::new("ENTER", ENTER, Button::Enter),
    Pattern::new("UP-RIGHT", UP_RIGHT, Button::UpRight),
    Pattern::new("UP-LEFT", UP_LEFT, Button::UpLeft),
    Pattern::new("DOWN-RIGHT", DOWN_RIGHT, Button::DownRight),
    Pattern::new("DOWN-LEFT", DOWN_LEFT, Button::DownLeft),
];

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn test_table_shape() {
        assert_eq!(BUILTIN.len(), 18);
        assert!(BUILTIN.len() <= MAX_PATTERNS);
        for p in BUILTIN {
            assert!(!p.bytes().is_empty());
            assert!(p.bytes().len() <= MAX_FRAME);
        }
    }

    #[test]
    fn test_ids_follow_table_order() {
        for (i, p) in BUILTIN.iter().enumerate() {
            assert_eq!(p.id().code() as usize, i);
        }
    }

    #[test]
    fn test_no_duplicate_byte_sequences() {
        for (i, a) in BUILTIN.iter().enumerate() {
            for b in &BUILTIN[i + 1..] {
                assert!(!a.matches(b.bytes()), "{} duplicates {}", a.name(), b.name());
            }
        }
    }

    #[test]
    fn test_enter_code() {
        let enter = BUILTIN.iter().find(|p| p.name() == "ENTER").unwrap();
        assert_eq!(enter.id(), Button::Enter);
        assert_eq!(
            enter.bytes(),
            &[0x00, 0x4B, 0x4B, 0xCB, 0x4B, 0x4B, 0x4F, 0xCF, 0xCF, 0x4F, 0x4F, 0xFF]
        );
    }
}
