use super::numbers::extract_number;
use super::types::{Answer, Intent};
use crate::game::GameMode;

/// The slice of controller state the interpreter needs
#[derive(Debug, Clone, Copy, Default)]
pub struct Snapshot<'a> {
    pub mode: Option<GameMode>,
    pub awaiting_answer: bool,
    pub awaiting_next: bool,
    /// Option labels as currently displayed (memory mode)
    pub options: &'a [String],
}

/// Classify a normalized (lowercase, trimmed) utterance.
pub fn interpret(utterance: &str, snapshot: &Snapshot<'_>) -> Option<Intent> {
    let text = utterance;

    if text.contains("memory") || text.contains("remember") {
        return Some(Intent::SelectMode(GameMode::Memory));
    }
    if text.contains("quickcount") || text.contains("count") {
        return Some(Intent::SelectMode(GameMode::QuickCount));
    }

    if text.contains("back") || text.contains("home") {
        return Some(Intent::ReturnToDashboard);
    }

    if text.contains("start") {
        return Some(Intent::StartGame);
    }

    if text.contains("next") {
        return snapshot.awaiting_next.then_some(Intent::NextQuestion);
    }

    if !snapshot.awaiting_answer {
        return None;
    }

    match snapshot.mode? {
        GameMode::QuickCount => extract_number(text).map(|n| Intent::AnswerGiven(Answer::Number(n))),
        GameMode::Memory => {
            match_option(text, snapshot.options).map(|i| Intent::AnswerGiven(Answer::Option(i)))
        }
    }
}

/// Index of the first displayed option whose keyword the utterance contains
pub fn match_option(text: &str, options: &[String]) -> Option<usize> {
    options
        .iter()
        .position(|option| option_keywords(option).iter().any(|kw| text.contains(kw.as_str())))
}

/// Lowercase alphabetic words of an option label ("🍎 Apple" -> ["apple"])
pub fn option_keywords(option: &str) -> Vec<String> {
    option
        .split(|c: char| !c.is_alphabetic())
        .filter(|word| word.chars().count() >= 3)
        .map(str::to_lowercase)
        .collect()
}
