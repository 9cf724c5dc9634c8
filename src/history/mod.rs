// Expression history and output transcript

/// Append-only log of submitted expressions
///
/// Every expression is recorded before evaluation starts, so failed input is
/// kept alongside successful input in submission order.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<String>,
}

impl History {
    pub fn new() -> Self {
        History {
            entries: Vec::new(),
        }
    }

    /// Append an expression exactly as submitted
    pub fn record(&mut self, expression: &str) {
        self.entries.push(expression.to_string());
    }

    /// Raw expressions, oldest first
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Expressions paired with their 1-based display index
    pub fn list(&self) -> Vec<(usize, &str)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (i + 1, entry.as_str()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// How a transcript line should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Info,
    Result,
    Error,
}

/// A line of calculator output
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptLine {
    pub text: String,
    pub kind: LineKind,
}

/// Captured display output of a calculator session
///
/// Stack commands and the batch runner write here instead of printing, so the
/// TUI and the line-mode shell can render the same text.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    lines: Vec<TranscriptLine>,
}

impl Transcript {
    pub fn new() -> Self {
        Transcript { lines: Vec::new() }
    }

    pub fn info(&mut self, text: impl Into<String>) {
        self.push(text.into(), LineKind::Info);
    }

    pub fn result(&mut self, text: impl Into<String>) {
        self.push(text.into(), LineKind::Result);
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.push(text.into(), LineKind::Error);
    }

    fn push(&mut self, text: String, kind: LineKind) {
        self.lines.push(TranscriptLine { text, kind });
    }

    pub fn lines(&self) -> &[TranscriptLine] {
        &self.lines
    }

    /// Position to pass to [`Transcript::since`] later
    pub fn mark(&self) -> usize {
        self.lines.len()
    }

    /// Lines appended after `mark`
    pub fn since(&self, mark: usize) -> &[TranscriptLine] {
        self.lines.get(mark..).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
