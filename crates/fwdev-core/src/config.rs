//! Text dump configuration.

/// Default number of spaces before each key.
pub const DEFAULT_INDENT: usize = 2;

/// Default column the values are aligned to, counted from the start of the key.
pub const DEFAULT_KEY_WIDTH: usize = 20;

/// Layout settings for [`Renderer`](crate::render::Renderer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Spaces before each key.
    pub indent: usize,

    /// Keys shorter than this are padded so values line up.
    pub key_width: usize,
}

impl RenderConfig {
    /// Create a configuration with the default layout.
    pub fn new() -> Self {
        Self {
            indent: DEFAULT_INDENT,
            key_width: DEFAULT_KEY_WIDTH,
        }
    }

    /// Set the indent.
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Set the key column width.
    pub fn with_key_width(mut self, key_width: usize) -> Self {
        self.key_width = key_width;
        self
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new()
    }
}
