use palette::Srgb;

/// A resolved or pass-through color value.
///
/// Tokens that are neither hex nor a CSS color name are kept verbatim as
/// `Var`, so the renderer can still hand them to a stylesheet engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Color {
    Rgb { r: u8, g: u8, b: u8 },
    Var(String),
}

impl Color {
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    pub fn var(name: impl Into<String>) -> Self {
        Self::Var(name.into())
    }

    /// Parse a free-form color token. Never fails.
    pub fn parse(token: &str) -> Self {
        let token = token.trim();

        if token.starts_with('#') {
            if let Ok(rgb) = token.parse::<Srgb<u8>>() {
                let (r, g, b) = rgb.into_components();
                return Self::rgb(r, g, b);
            }
        } else if let Some(rgb) = palette::named::from_str(&token.to_ascii_lowercase()) {
            let (r, g, b) = rgb.into_components();
            return Self::rgb(r, g, b);
        }

        Self::var(token)
    }

    /// CSS value for an inline style declaration.
    pub fn to_dsl(&self) -> String {
        match self {
            Self::Rgb { r, g, b } => format!("rgb({r}, {g}, {b})"),
            Self::Var(name) => name.clone(),
        }
    }
}
