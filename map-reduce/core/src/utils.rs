use rand::Rng;

const SEPARATORS: [&str; 6] = [" ", ", ", "! ", " - ", "\t", "... "];

/// Generate a random lower-case word of 1..=max_length letters
pub fn generate_random_word(rng: &mut impl Rng, max_length: usize) -> String {
    let length = rng.random_range(1..=max_length);
    (0..length)
        .map(|_| {
            let c = rng.random_range(b'a'..=b'z');
            c as char
        })
        .collect()
}

/// Generate a line of up to `max_words` words with mixed case, punctuation and digits
pub fn generate_random_record(
    rng: &mut impl Rng,
    max_words: usize,
    max_word_length: usize,
) -> String {
    let words = rng.random_range(0..=max_words);
    let mut record = String::new();
    for _ in 0..words {
        let mut word = generate_random_word(rng, max_word_length);
        if rng.random_bool(0.2) {
            word = word.to_ascii_uppercase();
        }
        record.push_str(&word);
        if rng.random_bool(0.1) {
            record.push_str(&rng.random_range(0..100).to_string());
        }
        record.push_str(SEPARATORS[rng.random_range(0..SEPARATORS.len())]);
    }
    record
}

/// Generate `count` random records
pub fn generate_corpus(
    rng: &mut impl Rng,
    count: usize,
    max_words: usize,
    max_word_length: usize,
) -> Vec<String> {
    (0..count)
        .map(|_| generate_random_record(rng, max_words, max_word_length))
        .collect()
}
