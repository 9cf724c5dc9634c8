//! Single-line input editing for the TUI prompt

/// Input buffer with a cursor
///
/// The cursor is a byte offset that always sits on a char boundary.
#[derive(Clone, Debug, Default)]
pub struct InputLine {
    buffer: String,
    cursor: usize,
}

impl InputLine {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
        }
    }

    pub fn content(&self) -> &str {
        &self.buffer
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Number of characters before the cursor, for placing the terminal cursor
    pub fn cursor_column(&self) -> usize {
        self.buffer[..self.cursor].chars().count()
    }

    /// Replace the contents and move the cursor to the end
    pub fn set(&mut self, s: &str) {
        self.buffer = s.to_string();
        self.cursor = self.buffer.len();
    }

    /// Take the contents, leaving the buffer empty
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.buffer)
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    pub fn insert_char(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.buffer.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    /// Delete the character under the cursor
    pub fn delete(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.buffer.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.cursor = next;
        }
    }

    pub fn move_to_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_to_end(&mut self) {
        self.cursor = self.buffer.len();
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.buffer[..self.cursor]
            .chars()
            .next_back()
            .map(|c| self.cursor - c.len_utf8())
    }

    fn next_boundary(&self) -> Option<usize> {
        self.buffer[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
    }
}
