//! Source unit: the text of one file plus its line-ending convention.

/// Line-ending convention of a source unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    /// Bare line feed (`\n`).
    #[default]
    Lf,
    /// Carriage return + line feed (`\r\n`).
    CrLf,
}

impl LineEnding {
    /// Detect the convention from the terminator of the first line.
    ///
    /// Text without any `\n` falls back to [`LineEnding::Lf`].
    pub fn detect(text: &str) -> Self {
        match text.find('\n') {
            Some(pos) if text[..pos].ends_with('\r') => Self::CrLf,
            _ => Self::Lf,
        }
    }

    /// The literal separator for this convention.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }
}

/// One file's text, immutable for the duration of a check.
#[derive(Debug, Clone, Copy)]
pub struct SourceUnit<'a> {
    text: &'a str,
    line_ending: LineEnding,
}

impl<'a> SourceUnit<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            line_ending: LineEnding::detect(text),
        }
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// Map a byte offset to a 1-based `(line, column)` pair.
    ///
    /// Columns count characters, not bytes, so multibyte text reports the
    /// position an editor would show. Offsets past the end clamp to the end.
    pub fn line_col(&self, offset: usize) -> (usize, usize) {
        let mut offset = offset.min(self.text.len());
        while !self.text.is_char_boundary(offset) {
            offset -= 1;
        }
        let before = &self.text[..offset];
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |pos| pos + 1);
        let column = before[line_start..].chars().count() + 1;
        (line, column)
    }
}
