//! Stateful cursor over chromosome text.

/// Character cursor with whitespace-insensitive token helpers.
pub struct Cursor {
    pub src: Vec<char>,
    pub pos: usize,
}

impl Cursor {
    pub fn new(src: &str) -> Self {
        Self {
            src: src.chars().collect(),
            pos: 0,
        }
    }

    /// Current character, if any.
    pub fn current(&self) -> Option<char> {
        self.src.get(self.pos).copied()
    }

    /// Skip any whitespace, including newlines.
    pub fn skip_ws(&mut self) {
        while self.current().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
    }

    /// Skip whitespace, then consume `ch` if it is next. Returns true if consumed.
    pub fn consume(&mut self, ch: char) -> bool {
        self.skip_ws();
        if self.current() == Some(ch) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Skip whitespace, then consume whichever of `choices` comes next.
    pub fn consume_any(&mut self, choices: &[char]) -> Option<char> {
        self.skip_ws();
        let ch = self.current().filter(|c| choices.contains(c))?;
        self.pos += 1;
        Some(ch)
    }

    /// Skip whitespace, then match an unsigned decimal integer.
    ///
    /// Leaves the cursor untouched (past the whitespace) when no digit follows
    /// or the value does not fit in `u32`.
    pub fn match_uint(&mut self) -> Option<u32> {
        self.skip_ws();
        let start = self.pos;
        let mut end = start;
        while self.src.get(end).is_some_and(char::is_ascii_digit) {
            end += 1;
        }
        if end == start {
            return None;
        }
        let digits: String = self.src[start..end].iter().collect();
        let value = digits.parse::<u32>().ok()?;
        self.pos = end;
        Some(value)
    }

    /// Describe what sits at the cursor, for error messages.
    pub fn describe_current(&self) -> String {
        match self.current() {
            Some(ch) => format!("'{ch}'"),
            None => "end of input".to_string(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_chromosome_cursor.rs"]
mod tests;
