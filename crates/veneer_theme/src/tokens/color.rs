//! Color tokens for the shared palette

use std::fmt;

/// Semantic color token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorToken {
    /// Brand color (buttons, accents)
    Primary,
    /// Card and panel background
    Surface,
    /// Foreground text
    Text,
}

/// A six-digit hex color literal (`#rrggbb`)
///
/// The literal text is the canonical form. Style composition downstream is
/// textual (the outlined card border appends an alpha suffix directly to
/// this string), so the value is kept exactly as written rather than being
/// decoded into channels.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct HexColor(&'static str);

impl HexColor {
    pub const fn new(value: &'static str) -> Self {
        Self(value)
    }

    /// The literal `#rrggbb` text
    pub const fn as_str(&self) -> &'static str {
        self.0
    }

    /// The hex digits parsed as a 24-bit integer; malformed digits read as zero
    pub fn value(&self) -> u32 {
        u32::from_str_radix(self.0.trim_start_matches('#'), 16).unwrap_or(0)
    }

    /// `#` followed by exactly six case-insensitive hex digits
    pub fn is_wellformed(&self) -> bool {
        match self.0.strip_prefix('#') {
            Some(digits) => digits.len() == 6 && digits.bytes().all(|b| b.is_ascii_hexdigit()),
            None => false,
        }
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Complete set of semantic color tokens
#[derive(Clone, Copy, Debug)]
pub struct ColorTokens {
    pub primary: HexColor,
    pub surface: HexColor,
    pub text: HexColor,
}

impl ColorTokens {
    /// Get a color by token key
    pub fn get(&self, token: ColorToken) -> HexColor {
        match token {
            ColorToken::Primary => self.primary,
            ColorToken::Surface => self.surface,
            ColorToken::Text => self.text,
        }
    }
}

impl Default for ColorTokens {
    fn default() -> Self {
        COLORS
    }
}

/// The design palette, fixed at compile time and shared by all consumers
pub const COLORS: ColorTokens = ColorTokens {
    primary: HexColor::new("#0f766e"),
    surface: HexColor::new("#020617"),
    text: HexColor::new("#e5e7eb"),
};
