/// Counts the scorer needs from a block of text.
#[derive(Debug, Clone)]
pub struct TextStats {
    pub lowered: String,
    pub word_count: usize,
    pub char_count: usize,
    /// Non-blank comma-separated segments; used as a skill count.
    pub segment_count: usize,
}

impl TextStats {
    pub fn from_text(text: &str) -> Self {
        Self {
            lowered: text.to_lowercase(),
            word_count: text.split_whitespace().count(),
            char_count: text.chars().count(),
            segment_count: text.split(',').filter(|s| !s.trim().is_empty()).count(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.word_count == 0
    }

    /// Characters per word, or `None` for blank text.
    pub fn average_word_length(&self) -> Option<f64> {
        if self.word_count == 0 {
            return None;
        }
        Some(self.char_count as f64 / self.word_count as f64)
    }
}
