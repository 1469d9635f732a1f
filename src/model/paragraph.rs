//! Paragraph and text-level types.

use serde::{Deserialize, Serialize};

/// A paragraph of styled text runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paragraph {
    /// Named paragraph style (normal text or heading level)
    pub style: NamedStyle,

    /// Text runs in visual order
    pub runs: Vec<TextRun>,
}

impl Paragraph {
    /// Create a new empty paragraph with normal style.
    pub fn new() -> Self {
        Self {
            style: NamedStyle::Normal,
            runs: Vec::new(),
        }
    }

    /// Create a paragraph with a single plain text run.
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut p = Self::new();
        p.add_text(text);
        p
    }

    /// Create a heading paragraph.
    ///
    /// Levels outside 1-3 fall back to normal style.
    pub fn heading(text: impl Into<String>, level: u8) -> Self {
        let mut p = Self::with_text(text);
        p.style = NamedStyle::from_level(level);
        p
    }

    /// Add a plain text run to the paragraph.
    pub fn add_text(&mut self, text: impl Into<String>) {
        self.runs.push(TextRun::new(text));
    }

    /// Add a styled text run.
    pub fn add_run(&mut self, run: TextRun) {
        self.runs.push(run);
    }

    /// Get the plain text of the paragraph: run texts concatenated in order,
    /// with no separators inserted.
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }

    /// Check if the paragraph has no visible content.
    ///
    /// A paragraph whose runs hold only whitespace counts as empty, whatever
    /// its named style.
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty() || self.plain_text().trim().is_empty()
    }

    /// Check if this paragraph is a heading.
    pub fn is_heading(&self) -> bool {
        self.style.is_heading()
    }
}

impl Default for Paragraph {
    fn default() -> Self {
        Self::new()
    }
}

/// Paragraph-level named style.
///
/// The recognized set is deliberately small: normal body text and heading
/// levels 1-3. Provider style names outside this set degrade to `Normal`
/// through [`NamedStyle::from_name`] instead of failing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamedStyle {
    /// Normal body text
    #[default]
    Normal,

    /// Level-1 heading
    Heading1,

    /// Level-2 heading
    Heading2,

    /// Level-3 heading
    Heading3,
}

impl NamedStyle {
    /// Map a provider style name onto the recognized set.
    ///
    /// Unrecognized names (titles, subtitles, deeper heading levels, future
    /// styles) are treated as normal text.
    pub fn from_name(name: &str) -> Self {
        match name {
            "NORMAL_TEXT" => NamedStyle::Normal,
            "HEADING_1" => NamedStyle::Heading1,
            "HEADING_2" => NamedStyle::Heading2,
            "HEADING_3" => NamedStyle::Heading3,
            _ => NamedStyle::Normal,
        }
    }

    /// Map a numeric heading level onto the recognized set.
    pub fn from_level(level: u8) -> Self {
        match level {
            1 => NamedStyle::Heading1,
            2 => NamedStyle::Heading2,
            3 => NamedStyle::Heading3,
            _ => NamedStyle::Normal,
        }
    }

    /// Get the heading level (1-3) or None for normal text.
    pub fn heading_level(&self) -> Option<u8> {
        match self {
            NamedStyle::Normal => None,
            NamedStyle::Heading1 => Some(1),
            NamedStyle::Heading2 => Some(2),
            NamedStyle::Heading3 => Some(3),
        }
    }

    /// Check if this style is a heading.
    pub fn is_heading(&self) -> bool {
        self.heading_level().is_some()
    }
}

/// A run of text with uniform styling.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextRun {
    /// The text content
    pub text: String,

    /// Bold text
    pub bold: bool,

    /// Italic text
    pub italic: bool,

    /// Underlined text
    pub underline: bool,
}

impl TextRun {
    /// Create a new text run with no styling.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Mark the run bold.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Mark the run italic.
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Mark the run underlined.
    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    /// Check if any styling is applied.
    pub fn has_styling(&self) -> bool {
        self.bold || self.italic || self.underline
    }

    /// Check if this run is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
