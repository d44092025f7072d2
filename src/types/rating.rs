//! The closed rating scales: coffee quality, wifi quality, and power-socket
//! availability, each with six display choices (a blank plus five levels).
//!
//! Rows persist the display string; handlers and the validator work with the
//! `Rating` enum so an out-of-enumeration value can never reach storage.

/// Which amenity a rating applies to. The display glyph differs per scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    Coffee,
    Wifi,
    Socket,
}

/// Display choices as the form presents them. Index 0 is the blank
/// "no selection" option; the single-cup coffee glyph carries a variation
/// selector the repeated forms do not.
const COFFEE_CHOICES: [&str; 6] = [" ", "☕️", "☕☕", "☕☕☕", "☕☕☕☕", "☕☕☕☕☕"];
const WIFI_CHOICES: [&str; 6] = [" ", "🛜", "🛜🛜", "🛜🛜🛜", "🛜🛜🛜🛜", "🛜🛜🛜🛜🛜"];
const SOCKET_CHOICES: [&str; 6] = [" ", "🔌", "🔌🔌", "🔌🔌🔌", "🔌🔌🔌🔌", "🔌🔌🔌🔌🔌"];

impl Scale {
    /// The six-entry choice table for this scale, blank option first.
    pub const fn choices(self) -> &'static [&'static str; 6] {
        match self {
            Scale::Coffee => &COFFEE_CHOICES,
            Scale::Wifi => &WIFI_CHOICES,
            Scale::Socket => &SOCKET_CHOICES,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Scale::Coffee => "Coffee rating",
            Scale::Wifi => "Wifi rating",
            Scale::Socket => "Socket available",
        }
    }
}

/// A selected rating level. The blank choice has no `Rating` value; it is
/// rejected by the required-field rule before construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rating {
    One,
    Two,
    Three,
    Four,
    Five,
}

impl Rating {
    const ALL: [Rating; 5] = [
        Rating::One,
        Rating::Two,
        Rating::Three,
        Rating::Four,
        Rating::Five,
    ];

    /// Map a submitted string to a level on `scale`. The blank choice and
    /// anything outside the table map to `None`.
    pub fn parse(scale: Scale, raw: &str) -> Option<Rating> {
        let idx = scale.choices().iter().position(|c| *c == raw)?;
        // idx 0 is the blank option
        idx.checked_sub(1).map(|i| Self::ALL[i])
    }

    /// The exact display string for this level on `scale`.
    pub fn display(self, scale: Scale) -> &'static str {
        scale.choices()[self.level() as usize]
    }

    pub fn level(self) -> u8 {
        match self {
            Rating::One => 1,
            Rating::Two => 2,
            Rating::Three => 3,
            Rating::Four => 4,
            Rating::Five => 5,
        }
    }
}
