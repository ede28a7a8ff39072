use rand::Rng;

/// Options in shuffled order plus where the correct one ended up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShuffledOptions {
    pub options: Vec<String>,
    pub correct_index: Option<usize>,
}

/// Fisher-Yates shuffle of `options`, then locate the original correct
/// value in the result.
///
/// Labels must be unique for the lookup to be unambiguous. An out-of-range
/// `correct` yields `correct_index == None`.
pub fn shuffle_options<R: Rng + ?Sized>(
    options: &[String],
    correct: usize,
    rng: &mut R,
) -> ShuffledOptions {
    let correct_value = options.get(correct).cloned();
    let mut shuffled = options.to_vec();

    for i in (1..shuffled.len()).rev() {
        let j = rng.random_range(0..=i);
        shuffled.swap(i, j);
    }

    let correct_index = correct_value.and_then(|value| shuffled.iter().position(|o| *o == value));

    ShuffledOptions {
        options: shuffled,
        correct_index,
    }
}
