/// Single-line text editing state.
///
/// `cursor` counts characters, not bytes, and always lies in
/// `0..=text.chars().count()`. Byte offsets are derived on demand so every
/// edit stays on a UTF-8 boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextEditState {
    text: String,
    cursor: usize,
}

impl TextEditState {
    /// State holding `text` with the cursor at the end.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in characters.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[inline]
    pub fn len_chars(&self) -> usize {
        self.text.chars().count()
    }

    /// Text left of the cursor.
    pub fn before_cursor(&self) -> &str {
        &self.text[..self.byte_at(self.cursor)]
    }

    /// Text right of the cursor.
    pub fn after_cursor(&self) -> &str {
        &self.text[self.byte_at(self.cursor)..]
    }

    /// Replaces the text and moves the cursor to its end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        *self = Self::new(text);
    }

    // ── cursor movement ───────────────────────────────────────────────────

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.len_chars());
    }

    /// Skips whitespace, then the word before it.
    pub fn move_word_left(&mut self) {
        self.cursor = self.prev_word();
    }

    /// Skips whitespace, then the word after it.
    pub fn move_word_right(&mut self) {
        self.cursor = self.next_word();
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.len_chars();
    }

    // ── editing ───────────────────────────────────────────────────────────

    /// Inserts `s` at the cursor and moves past it.
    pub fn insert_str(&mut self, s: &str) {
        let at = self.byte_at(self.cursor);
        self.text.insert_str(at, s);
        self.cursor += s.chars().count();
    }

    /// Backspace: removes the character before the cursor.
    pub fn delete_backward(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let start = self.byte_at(self.cursor - 1);
        let end = self.byte_at(self.cursor);
        self.text.drain(start..end);
        self.cursor -= 1;
    }

    /// Word backspace: removes everything back to where
    /// [`move_word_left`](Self::move_word_left) would land.
    pub fn delete_word_backward(&mut self) {
        let target = self.prev_word();
        let start = self.byte_at(target);
        let end = self.byte_at(self.cursor);
        self.text.drain(start..end);
        self.cursor = target;
    }

    /// Delete key: removes the character after the cursor.
    pub fn delete_forward(&mut self) {
        if self.cursor >= self.len_chars() {
            return;
        }
        let start = self.byte_at(self.cursor);
        let end = self.byte_at(self.cursor + 1);
        self.text.drain(start..end);
    }

    // ── private ───────────────────────────────────────────────────────────

    /// Byte offset of character index `i`, clamped to the end of the text.
    fn byte_at(&self, i: usize) -> usize {
        self.text.char_indices().nth(i).map_or(self.text.len(), |(b, _)| b)
    }

    fn prev_word(&self) -> usize {
        let chars: Vec<char> = self.text.chars().collect();
        let mut i = self.cursor.min(chars.len());
        while i > 0 && chars[i - 1].is_whitespace() {
            i -= 1;
        }
        while i > 0 && !chars[i - 1].is_whitespace() {
            i -= 1;
        }
        i
    }

    fn next_word(&self) -> usize {
        let chars: Vec<char> = self.text.chars().collect();
        let mut i = self.cursor.min(chars.len());
        while i < chars.len() && chars[i].is_whitespace() {
            i += 1;
        }
        while i < chars.len() && !chars[i].is_whitespace() {
            i += 1;
        }
        i
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(text: &str, cursor: usize) -> TextEditState {
        let mut s = TextEditState::new(text);
        s.cursor = cursor;
        s
    }

    // ── movement ──────────────────────────────────────────────────────────

    #[test]
    fn left_right_clamp_at_ends() {
        let mut s = TextEditState::new("ab");
        s.move_right();
        assert_eq!(s.cursor(), 2);
        s.move_left();
        s.move_left();
        s.move_left();
        assert_eq!(s.cursor(), 0);
    }

    #[test]
    fn word_left_skips_trailing_space_then_word() {
        let mut s = TextEditState::new("hello world ");
        s.move_word_left();
        assert_eq!(s.cursor(), 6);
        s.move_word_left();
        assert_eq!(s.cursor(), 0);
    }

    #[test]
    fn word_right_skips_space_then_word() {
        let mut s = at("hello world", 5);
        s.move_word_right();
        assert_eq!(s.cursor(), 11);
        let mut s = at("hello world", 0);
        s.move_word_right();
        assert_eq!(s.cursor(), 5);
    }

    // ── editing ───────────────────────────────────────────────────────────

    #[test]
    fn insert_in_the_middle() {
        let mut s = TextEditState::new("abc");
        s.move_left();
        s.move_left();
        s.insert_str("X");
        assert_eq!(s.text(), "aXbc");
        assert_eq!(s.cursor(), 2);
    }

    #[test]
    fn multibyte_characters_count_once() {
        let mut s = TextEditState::new("héllo");
        assert_eq!(s.cursor(), 5);
        s.move_home();
        s.move_right();
        s.move_right();
        assert_eq!(s.before_cursor(), "hé");
        assert_eq!(s.after_cursor(), "llo");
        s.delete_backward();
        assert_eq!(s.text(), "hllo");
        assert_eq!(s.cursor(), 1);
    }

    #[test]
    fn delete_forward_keeps_cursor() {
        let mut s = at("abc", 1);
        s.delete_forward();
        assert_eq!(s.text(), "ac");
        assert_eq!(s.cursor(), 1);
        s.move_end();
        s.delete_forward();
        assert_eq!(s.text(), "ac");
    }

    #[test]
    fn backspace_at_start_is_noop() {
        let mut s = at("abc", 0);
        s.delete_backward();
        assert_eq!(s.text(), "abc");
    }

    #[test]
    fn word_backspace_removes_previous_word() {
        let mut s = TextEditState::new("one two  ");
        s.delete_word_backward();
        assert_eq!(s.text(), "one ");
        assert_eq!(s.cursor(), 4);
    }
}
