/// Number words in lookup order. The first one contained in the utterance wins.
const NUMBER_WORDS: [(&str, u32); 11] = [
    ("zero", 0),
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
];

/// Extract a spoken number from an utterance.
///
/// Number words "zero".."ten" are checked by containment first, then the
/// first standalone run of digits. `None` means "not an answer yet", not a
/// wrong answer.
pub fn extract_number(text: &str) -> Option<u32> {
    NUMBER_WORDS
        .iter()
        .find(|(word, _)| text.contains(word))
        .map(|(_, value)| *value)
        .or_else(|| first_digit_run(text))
}

/// First run of ASCII digits bounded by non-word characters
fn first_digit_run(text: &str) -> Option<u32> {
    let chars: Vec<char> = text.chars().collect();
    let is_word = |c: char| c.is_alphanumeric() || c == '_';

    let mut i = 0;
    while i < chars.len() {
        if !chars[i].is_ascii_digit() {
            i += 1;
            continue;
        }

        let start = i;
        while i < chars.len() && chars[i].is_ascii_digit() {
            i += 1;
        }

        let left_ok = start == 0 || !is_word(chars[start - 1]);
        let right_ok = i == chars.len() || !is_word(chars[i]);
        if left_ok && right_ok {
            let run: String = chars[start..i].iter().collect();
            if let Ok(value) = run.parse() {
                return Some(value);
            }
        }
    }

    None
}
