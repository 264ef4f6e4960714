use super::Color;

/// Inline style of an element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    pub background: Option<Color>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.background.is_none()
    }

    /// Render as an inline `style` attribute value.
    pub fn to_inline(&self) -> String {
        match &self.background {
            Some(color) => format!("background-color: {}", color.to_dsl()),
            None => String::new(),
        }
    }
}
