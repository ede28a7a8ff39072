use anyhow::Result;
use std::io::Write;
use tempfile::NamedTempFile;
use voice_quiz::content::{ContentProvider, Question, StaticContent};
use voice_quiz::GameMode;

#[test]
fn test_builtin_content() {
    let content = StaticContent::builtin();

    let memory = content.question_set(GameMode::Memory, 1);
    assert_eq!(memory.len(), 2);
    let Question::Memory(first) = &memory[0] else {
        panic!("expected a memory question");
    };
    assert_eq!(first.correct_option(), Some("🍎 Apple"));

    let counts: Vec<u32> = content
        .question_set(GameMode::QuickCount, 1)
        .into_iter()
        .filter_map(|q| match q {
            Question::QuickCount(q) => Some(q.count),
            _ => None,
        })
        .collect();
    assert_eq!(counts, vec![3, 5, 2, 4, 1]);
}

#[test]
fn test_missing_level_is_empty() {
    let content = StaticContent::builtin();
    assert!(content.question_set(GameMode::Memory, 2).is_empty());
    assert!(content.question_set(GameMode::QuickCount, 0).is_empty());
}

#[test]
fn test_load_from_json() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    write!(
        file,
        r#"{{
            "quickcount": {{
                "2": [{{"object": "star", "count": 7, "image": "assets/star.svg"}}]
            }}
        }}"#
    )?;

    let content = StaticContent::from_json_file(file.path())?;

    assert!(content.question_set(GameMode::QuickCount, 1).is_empty());
    assert!(content.question_set(GameMode::Memory, 2).is_empty());
    match content.question_set(GameMode::QuickCount, 2).as_slice() {
        [Question::QuickCount(q)] => {
            assert_eq!(q.count, 7);
            assert_eq!(q.object_label(), "stars");
            assert_eq!(q.prompt(), "How many stars do you see?");
        }
        other => panic!("unexpected set: {:?}", other),
    }
    Ok(())
}

#[test]
fn test_shipped_content_file_matches_builtin() -> Result<()> {
    let content = StaticContent::from_json_file("config/questions.json")?;
    let builtin = StaticContent::builtin();

    for mode in GameMode::ALL {
        assert_eq!(content.question_set(mode, 1), builtin.question_set(mode, 1));
    }
    Ok(())
}

#[test]
fn test_bad_json_is_an_error() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    write!(file, "{{ not json")?;

    assert!(StaticContent::from_json_file(file.path()).is_err());
    assert!(StaticContent::from_json_file("does/not/exist.json").is_err());
    Ok(())
}
