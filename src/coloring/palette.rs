//! Named colors for rendering
//!
//! The greedy engine is not bounded by the palette size: a graph may need
//! more colors than there are names. Indices past the end resolve to an
//! explicit overflow marker instead of extending the palette.

use super::Color;

/// Names used by the default palette, in index order
pub const DEFAULT_NAMES: [&str; 7] = ["blue", "red", "green", "yellow", "orange", "purple", "pink"];

/// Marker used for indices the palette has no name for
pub const DEFAULT_OVERFLOW: &str = "gray";

/// Mapping from color index to a Graphviz color name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    names: Vec<String>,
    overflow: String,
}

impl Palette {
    pub fn new(names: Vec<String>, overflow: impl Into<String>) -> Self {
        Palette {
            names,
            overflow: overflow.into(),
        }
    }

    /// Number of named entries
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn overflow(&self) -> &str {
        &self.overflow
    }

    /// Name for `color`, or the overflow marker when out of range
    pub fn resolve(&self, color: Color) -> &str {
        self.names
            .get(color)
            .map(String::as_str)
            .unwrap_or(self.overflow.as_str())
    }

    pub fn is_overflow(&self, color: Color) -> bool {
        color >= self.names.len()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette::new(
            DEFAULT_NAMES.iter().map(|name| name.to_string()).collect(),
            DEFAULT_OVERFLOW,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette() {
        let palette = Palette::default();
        assert_eq!(palette.len(), 7);
        assert_eq!(palette.resolve(0), "blue");
        assert_eq!(palette.resolve(1), "red");
        assert_eq!(palette.resolve(6), "pink");
    }

    #[test]
    fn test_overflow_is_explicit() {
        let palette = Palette::default();
        assert!(!palette.is_overflow(6));
        assert!(palette.is_overflow(7));
        assert_eq!(palette.resolve(7), DEFAULT_OVERFLOW);
        assert_eq!(palette.resolve(1_000), DEFAULT_OVERFLOW);
    }

    #[test]
    fn test_custom_palette() {
        let palette = Palette::new(vec!["black".to_string()], "white");
        assert_eq!(palette.resolve(0), "black");
        assert_eq!(palette.resolve(1), "white");
        assert_eq!(palette.overflow(), "white");

        let empty = Palette::new(Vec::new(), "white");
        assert!(empty.is_empty());
        assert_eq!(empty.resolve(0), "white");
    }
}
