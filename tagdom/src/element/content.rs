#[derive(Debug, Clone, Default, PartialEq)]
pub enum Content {
    #[default]
    None,
    Text(String),
    /// A glyph looked up by kind, e.g. `"cross"`.
    Icon(String),
    Children(Vec<super::Element>),
}
