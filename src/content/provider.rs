use super::question::{CountQuestion, MemoryQuestion, Question, QuestionSet};
use crate::game::GameMode;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

/// Supplies question sets by `(mode, level)`
pub trait ContentProvider: Send + Sync {
    /// Questions for a mode and level, in play order.
    ///
    /// An unknown key yields an empty set, which the controller treats as
    /// an already completed level.
    fn question_set(&self, mode: GameMode, level: u32) -> QuestionSet;
}

/// In-memory content, either built in or loaded from JSON
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StaticContent {
    #[serde(default)]
    memory: BTreeMap<u32, Vec<MemoryQuestion>>,
    #[serde(default)]
    quickcount: BTreeMap<u32, Vec<CountQuestion>>,
}

impl StaticContent {
    pub fn new(
        memory: BTreeMap<u32, Vec<MemoryQuestion>>,
        quickcount: BTreeMap<u32, Vec<CountQuestion>>,
    ) -> Self {
        Self { memory, quickcount }
    }

    /// Load content from a JSON file shaped like
    /// `{"memory": {"1": [...]}, "quickcount": {"1": [...]}}`
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read content file {}", path.display()))?;
        let content: StaticContent = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse content file {}", path.display()))?;

        info!(
            "Loaded content from {}: {} memory level(s), {} quickcount level(s)",
            path.display(),
            content.memory.len(),
            content.quickcount.len()
        );

        Ok(content)
    }

    /// The level-1 question sets the game ships with
    pub fn builtin() -> Self {
        let memory = vec![
            MemoryQuestion {
                sequence: strings(&["🍎", "🍌", "🍊"]),
                question: "What was the first fruit?".to_string(),
                options: strings(&["🍌 Banana", "🍎 Apple", "🍊 Orange", "🍇 Grape"]),
                correct: 1,
            },
            MemoryQuestion {
                sequence: strings(&["🐱", "🐶", "🐠"]),
                question: "What was in the middle?".to_string(),
                options: strings(&["🐱 Cat", "🐶 Dog", "🐠 Fish", "🐦 Bird"]),
                correct: 1,
            },
        ];

        let quickcount = [
            ("apple", 3),
            ("star", 5),
            ("heart", 2),
            ("circle", 4),
            ("triangle", 1),
        ]
        .into_iter()
        .map(|(object, count)| CountQuestion {
            object: object.to_string(),
            count,
            image: format!("assets/{}.svg", object),
        })
        .collect();

        Self {
            memory: BTreeMap::from([(1, memory)]),
            quickcount: BTreeMap::from([(1, quickcount)]),
        }
    }
}

impl ContentProvider for StaticContent {
    fn question_set(&self, mode: GameMode, level: u32) -> QuestionSet {
        match mode {
            GameMode::Memory => self
                .memory
                .get(&level)
                .map(|qs| qs.iter().cloned().map(Question::Memory).collect())
                .unwrap_or_default(),
            GameMode::QuickCount => self
                .quickcount
                .get(&level)
                .map(|qs| qs.iter().cloned().map(Question::QuickCount).collect())
                .unwrap_or_default(),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
