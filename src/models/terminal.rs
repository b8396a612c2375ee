//! Terminal-related data types for output rendering.

/// Foreground display style for a span of output.
///
/// Mirrors the 16-color console palette. [`Style::Default`] leaves the
/// terminal's own foreground untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Style {
    #[default]
    Default,
    White,
    Gray,
    DarkGray,
    Blue,
    Green,
    Cyan,
    DarkCyan,
    Magenta,
    Yellow,
    DarkYellow,
    Red,
}

impl Style {
    /// Style for directory names in listings.
    pub const DIRECTORY: Style = Style::Blue;
    /// Style for operational errors.
    pub const ERROR: Style = Style::Red;
    /// Style for completed operations.
    pub const SUCCESS: Style = Style::Green;

    /// ANSI SGR parameter for this style, if it changes the foreground.
    pub fn sgr(self) -> Option<&'static str> {
        match self {
            Self::Default => None,
            Self::White => Some("97"),
            Self::Gray => Some("37"),
            Self::DarkGray => Some("90"),
            Self::Blue => Some("94"),
            Self::Green => Some("92"),
            Self::Cyan => Some("96"),
            Self::DarkCyan => Some("36"),
            Self::Magenta => Some("95"),
            Self::Yellow => Some("93"),
            Self::DarkYellow => Some("33"),
            Self::Red => Some("91"),
        }
    }
}

/// A run of text printed in a single style.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: Style,
}

impl Span {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Style::Default)
    }
}

/// A single line of terminal output made of styled spans.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OutputLine {
    pub spans: Vec<Span>,
}

impl OutputLine {
    pub fn text(s: impl Into<String>) -> Self {
        Self::styled(s, Style::Default)
    }

    pub fn error(s: impl Into<String>) -> Self {
        Self::styled(s, Style::ERROR)
    }

    pub fn success(s: impl Into<String>) -> Self {
        Self::styled(s, Style::SUCCESS)
    }

    pub fn styled(s: impl Into<String>, style: Style) -> Self {
        Self {
            spans: vec![Span::new(s, style)],
        }
    }

    /// Append a span, returning the extended line.
    pub fn push(mut self, span: Span) -> Self {
        self.spans.push(span);
        self
    }

    /// The line's text with all styling removed.
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    /// Whether any span is rendered in the error style.
    pub fn is_error(&self) -> bool {
        self.spans.iter().any(|s| s.style == Style::ERROR)
    }
}
