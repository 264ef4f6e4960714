use std::fmt;

/// Ordered set of class names.
///
/// Insertion order is kept so composed class strings are stable across
/// renders; duplicates are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    names: Vec<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, name: impl Into<String>) {
        let name = name.into();
        if name.is_empty() || self.contains(&name) {
            return;
        }
        self.names.push(name);
    }

    pub fn add_if(&mut self, name: impl Into<String>, condition: bool) {
        if condition {
            self.add(name);
        }
    }

    /// Union in a whitespace-separated class string.
    pub fn extend_str(&mut self, classes: &str) {
        for name in classes.split_whitespace() {
            self.add(name);
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.names.join(" "))
    }
}

impl<S: Into<String>> FromIterator<S> for ClassList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = Self::new();
        for name in iter {
            list.add(name);
        }
        list
    }
}
