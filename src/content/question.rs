use serde::{Deserialize, Serialize};

/// Sequence-memory question: the sequence is shown briefly, then the
/// question is asked with multiple-choice options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryQuestion {
    /// Symbols shown transiently before the question
    pub sequence: Vec<String>,
    /// Prompt text, e.g. "What was the first fruit?"
    pub question: String,
    /// Answer options. Labels must be unique.
    pub options: Vec<String>,
    /// Index of the correct entry in `options`
    pub correct: usize,
}

impl MemoryQuestion {
    /// Label of the correct option, if `correct` is in range
    pub fn correct_option(&self) -> Option<&str> {
        self.options.get(self.correct).map(String::as_str)
    }
}

/// Quick-count question: `count` copies of `image` are shown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountQuestion {
    /// Singular object label, e.g. "apple"
    pub object: String,
    /// Number of images shown (the expected answer)
    pub count: u32,
    /// Image reference repeated `count` times
    pub image: String,
}

impl CountQuestion {
    /// "apple" or "apples" depending on the count
    pub fn object_label(&self) -> String {
        if self.count == 1 {
            self.object.clone()
        } else {
            format!("{}s", self.object)
        }
    }

    pub fn prompt(&self) -> String {
        format!("How many {}s do you see?", self.object)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Question {
    Memory(MemoryQuestion),
    QuickCount(CountQuestion),
}

/// Ordered questions for one `(mode, level)`. Order is play order.
pub type QuestionSet = Vec<Question>;
