//! Button identifiers and the pattern record.

/// Symbolic identifier for a remote button.
///
/// The named variants cover every key of the stock remote, joystick
/// diagonals included. [`Button::Custom`] carries the numeric code of a
/// user-registered pattern; custom codes start at
/// [`Button::CUSTOM_BASE`] so they can never collide with a built-in.
///
/// # Example
///
/// ```
/// use navpad_proto::Button;
///
/// assert_eq!(Button::Enter.code(), 13);
/// assert_eq!(Button::from_code(13), Some(Button::Enter));
/// assert_eq!(Button::from_code(100), Some(Button::Custom(100)));
/// assert_eq!(Button::from_code(42), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    Off,
    Disp,
    Info,
    Back,
    Menu,
    Dest,
    Map,
    Minus,
    Plus,
    Up,
    Down,
    Right,
    Left,
    Enter,
    UpRight,
    UpLeft,
    DownRight,
    DownLeft,
    /// User-registered pattern. Codes are `>= CUSTOM_BASE`.
    Custom(u16),
}

impl Button {
    /// First numeric code reserved for user-defined patterns.
    pub const CUSTOM_BASE: u16 = 100;

    /// Stable numeric code for this button.
    ///
    /// Built-in buttons are numbered 0..=17 in table order; custom
    /// buttons carry their registered code.
    #[must_use]
    pub const fn code(self) -> u16 {
        match self {
            Button::Off => 0,
            Button::Disp => 1,
            Button::Info => 2,
            Button::Back => 3,
            Button::Menu => 4,
            Button::Dest => 5,
            Button::Map => 6,
            Button::Minus => 7,
            Button::Plus => 8,
            Button::Up => 9,
            Button::Down => 10,
            Button::Right => 11,
            Button::Left => 12,
            Button::Enter => 13,
            Button::UpRight => 14,
            Button::UpLeft => 15,
            Button::DownRight => 16,
            Button::DownLeft => 17,
            Button::Custom(code) => code,
        }
    }

    /// Button for a numeric code, or `None` for the reserved gap
    /// between the built-in range and [`Button::CUSTOM_BASE`].
    #[must_use]
    pub const fn from_code(code: u16) -> Option<Self> {
        Some(match code {
            0 => Button::Off,
            1 => Button::Disp,
            2 => Button::Info,
            3 => Button::Back,
            4 => Button::Menu,
            5 => Button::Dest,
            6 => Button::Map,
            7 => Button::Minus,
            8 => Button::Plus,
            9 => Button::Up,
            10 => Button::Down,
            11 => Button::Right,
            12 => Button::Left,
            13 => Button::Enter,
            14 => Button::UpRight,
            15 => Button::UpLeft,
            16 => Button::DownRight,
            17 => Button::DownLeft,
            c if c >= Button::CUSTOM_BASE => Button::Custom(c),
            _ => return None,
        })
    }
}

/// A reference byte sequence bound to a button identifier.
///
/// Patterns are matched by exact length and content; there are no
/// wildcards and no partial matches. The byte storage is borrowed for
/// the program lifetime, so pattern tables can be built entirely from
/// constants with no copying.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pattern {
    name: &'static str,
    bytes: &'static [u8],
    id: Button,
}

impl Pattern {
    /// Create a pattern. Length limits are enforced at registration,
    /// not here, so tables of constants stay const-constructible.
    #[must_use]
    pub const fn new(name: &'static str, bytes: &'static [u8], id: Button) -> Self {
        Self { name, bytes, id }
    }

    /// Display name used in diagnostic output.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The reference byte sequence.
    #[must_use]
    pub const fn bytes(&self) -> &'static [u8] {
        self.bytes
    }

    /// The button this pattern decodes to.
    #[must_use]
    pub const fn id(&self) -> Button {
        self.id
    }

    /// Exact length-and-content equality against a completed frame.
    #[inline]
    #[must_use]
    pub fn matches(&self, frame: &[u8]) -> bool {
        self.bytes == frame
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn test_code_round_trip_for_builtins() {
        for code in 0..=17 {
            let button = Button::from_code(code).unwrap();
            assert_eq!(button.code(), code);
        }
    }

    #[test]
    fn test_reserved_code_gap() {
        assert_eq!(Button::from_code(18), None);
        assert_eq!(Button::from_code(99), None);
    }

    #[test]
    fn test_custom_codes_start_at_base() {
        assert_eq!(
            Button::from_code(Button::CUSTOM_BASE),
            Some(Button::Custom(100))
        );
        assert_eq!(Button::Custom(250).code(), 250);
    }

    #[test]
    fn test_pattern_matches_exact_only() {
        let p = Pattern::new("T", &[0x01, 0x02, 0x03], Button::Custom(100));
        assert!(p.matches(&[0x01, 0x02, 0x03]));
        // Same prefix, different length.
        assert!(!p.matches(&[0x01, 0x02]));
        assert!(!p.matches(&[0x01, 0x02, 0x03, 0x04]));
        // Same length, different content.
        assert!(!p.matches(&[0x01, 0x02, 0x04]));
    }
}
