//! Rendering options and configuration.

/// Options for rendering a document to an HTML page.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Escape HTML-significant characters in document text and titles.
    ///
    /// When disabled, run text is copied into the markup verbatim and
    /// documents containing `<` or `&` produce broken or unsafe pages.
    /// Disable only for trusted content that must pass through untouched.
    pub escape_text: bool,

    /// Extra CSS appended after the base stylesheet inside the style block.
    pub extra_css: Option<String>,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable HTML escaping of document text.
    pub fn with_escaping(mut self, escape: bool) -> Self {
        self.escape_text = escape;
        self
    }

    /// Append extra CSS to the page stylesheet.
    pub fn with_extra_css(mut self, css: impl Into<String>) -> Self {
        self.extra_css = Some(css.into());
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            escape_text: true,
            extra_css: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = RenderOptions::new();
        assert!(options.escape_text);
        assert!(options.extra_css.is_none());
    }

    #[test]
    fn test_render_options_builder() {
        let options = RenderOptions::new()
            .with_escaping(false)
            .with_extra_css("p { color: red; }");

        assert!(!options.escape_text);
        assert_eq!(options.extra_css.as_deref(), Some("p { color: red; }"));
    }
}
