//! Color token handling.
//!
//! Reserved keywords are styled by stylesheet classes only; any other token
//! becomes an inline background color.

use tagdom::Color;

/// Keywords that map to stylesheet classes instead of an inline color.
pub const RESERVED_COLORS: [&str; 4] = ["blue", "red", "green", "yellow"];

pub fn is_reserved(token: &str) -> bool {
    RESERVED_COLORS.contains(&token)
}

/// Normalize a token: blank tokens count as absent.
pub fn normalize(token: Option<&str>) -> Option<&str> {
    token.map(str::trim).filter(|t| !t.is_empty())
}

/// Inline background for a color token, if it is not reserved.
pub fn inline_background(token: Option<&str>) -> Option<Color> {
    let token = normalize(token)?;
    if is_reserved(token) {
        None
    } else {
        Some(Color::parse(token))
    }
}
