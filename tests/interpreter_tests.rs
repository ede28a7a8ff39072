use voice_quiz::game::GameMode;
use voice_quiz::intent::{interpret, match_option, option_keywords, Answer, Intent, PointerEvent, Snapshot};

fn options() -> Vec<String> {
    ["🐱 Cat", "🐶 Dog", "🐠 Fish", "🐦 Bird"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

#[test]
fn test_mode_selection_is_always_recognized() {
    let idle = Snapshot::default();
    assert_eq!(
        interpret("let's play memory", &idle),
        Some(Intent::SelectMode(GameMode::Memory))
    );
    assert_eq!(
        interpret("i remember", &idle),
        Some(Intent::SelectMode(GameMode::Memory))
    );
    assert_eq!(
        interpret("quickcount please", &idle),
        Some(Intent::SelectMode(GameMode::QuickCount))
    );

    let answering = Snapshot {
        mode: Some(GameMode::QuickCount),
        awaiting_answer: true,
        ..Snapshot::default()
    };
    // "count" shadows the number in the same utterance
    assert_eq!(
        interpret("count to three", &answering),
        Some(Intent::SelectMode(GameMode::QuickCount))
    );
}

#[test]
fn test_priority_order() {
    let idle = Snapshot::default();
    // mode selection beats navigation
    assert_eq!(
        interpret("go back to memory", &idle),
        Some(Intent::SelectMode(GameMode::Memory))
    );
    // navigation beats start
    assert_eq!(interpret("start over at home", &idle), Some(Intent::ReturnToDashboard));
    assert_eq!(interpret("start game", &idle), Some(Intent::StartGame));
}

#[test]
fn test_next_is_gated_on_awaiting_next() {
    let idle = Snapshot::default();
    assert_eq!(interpret("next", &idle), None);

    let answering = Snapshot {
        mode: Some(GameMode::QuickCount),
        awaiting_answer: true,
        ..Snapshot::default()
    };
    // dropped, not treated as an answer
    assert_eq!(interpret("next one", &answering), None);

    let waiting = Snapshot {
        mode: Some(GameMode::QuickCount),
        awaiting_next: true,
        ..Snapshot::default()
    };
    assert_eq!(interpret("next please", &waiting), Some(Intent::NextQuestion));
}

#[test]
fn test_quickcount_answers() {
    let answering = Snapshot {
        mode: Some(GameMode::QuickCount),
        awaiting_answer: true,
        ..Snapshot::default()
    };

    assert_eq!(
        interpret("i see three apples", &answering),
        Some(Intent::AnswerGiven(Answer::Number(3)))
    );
    assert_eq!(
        interpret("7", &answering),
        Some(Intent::AnswerGiven(Answer::Number(7)))
    );
    assert_eq!(interpret("lots of apples", &answering), None);

    let not_answering = Snapshot {
        mode: Some(GameMode::QuickCount),
        ..Snapshot::default()
    };
    assert_eq!(interpret("three", &not_answering), None);
}

#[test]
fn test_memory_answers_match_displayed_options() {
    let options = options();
    let answering = Snapshot {
        mode: Some(GameMode::Memory),
        awaiting_answer: true,
        options: &options,
        ..Snapshot::default()
    };

    assert_eq!(
        interpret("it was the dog", &answering),
        Some(Intent::AnswerGiven(Answer::Option(1)))
    );
    assert_eq!(interpret("a banana", &answering), None);
}

#[test]
fn test_first_displayed_option_wins() {
    let options = options();
    assert_eq!(match_option("the dog or the cat", &options), Some(0));
    assert_eq!(match_option("fish then bird", &options), Some(2));
}

#[test]
fn test_option_keywords_strip_symbols() {
    assert_eq!(option_keywords("🍎 Apple"), vec!["apple"]);
    assert_eq!(option_keywords("🔴 Big Red"), vec!["big", "red"]);
    assert!(option_keywords("🍎").is_empty());
}

#[test]
fn test_unrecognized_utterances_yield_nothing() {
    let answering = Snapshot {
        mode: Some(GameMode::Memory),
        awaiting_answer: true,
        ..Snapshot::default()
    };
    assert_eq!(interpret("", &answering), None);
    assert_eq!(interpret("hmm what", &answering), None);
    assert_eq!(interpret("hmm what", &Snapshot::default()), None);
}

#[test]
fn test_pointer_events_map_to_intents() {
    assert_eq!(
        PointerEvent::OptionClicked(2).intent(),
        Some(Intent::AnswerGiven(Answer::Option(2)))
    );
    assert_eq!(PointerEvent::Back.intent(), Some(Intent::ReturnToDashboard));
    assert_eq!(
        PointerEvent::SelectGame(GameMode::QuickCount).intent(),
        Some(Intent::SelectMode(GameMode::QuickCount))
    );
    assert_eq!(PointerEvent::ToggleVoice.intent(), None);
}
