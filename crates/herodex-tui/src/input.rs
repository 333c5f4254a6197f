/// Single-line text input with a byte-offset cursor, used by the hero
/// form fields.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    buffer: String,
    cursor: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_char(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = self.buffer[..self.cursor].chars().next_back() {
            self.cursor -= prev.len_utf8();
            self.buffer.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = self.buffer[..self.cursor].chars().next_back() {
            self.cursor -= prev.len_utf8();
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = self.buffer[self.cursor..].chars().next() {
            self.cursor += next.len_utf8();
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    pub fn set(&mut self, text: String) {
        self.buffer = text;
        self.cursor = self.buffer.len();
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_take() {
        let mut input = InputState::new();
        for c in "Zatanna".chars() {
            input.insert_char(c);
        }
        assert_eq!(input.as_str(), "Zatanna");
        assert_eq!(input.take(), "Zatanna");
        assert!(input.is_empty());
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut input = InputState::new();
        input.backspace();
        assert!(input.is_empty());
    }

    #[test]
    fn test_cursor_movement_and_mid_edit() {
        let mut input = InputState::new();
        input.set("ac".to_string());
        input.move_left();
        input.insert_char('b');
        assert_eq!(input.as_str(), "abc");

        input.move_right();
        input.backspace();
        assert_eq!(input.as_str(), "ab");
    }

    #[test]
    fn test_multibyte_chars() {
        let mut input = InputState::new();
        input.set("héroé".to_string());
        input.backspace();
        assert_eq!(input.as_str(), "héro");
        input.move_left();
        input.move_left();
        input.insert_char('é');
        assert_eq!(input.as_str(), "hééro");
    }
}
