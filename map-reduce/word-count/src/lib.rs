mod tokenizer;
pub use tokenizer::tokenize;

mod word_count_job;
pub use word_count_job::WordCountJob;

mod ranking;
pub use ranking::{format_ranking, top_words, RankedWord};
