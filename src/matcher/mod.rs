// Ingredient matching: query tokenization and set-containment search
pub mod search;
pub mod tokenizer;

pub use search::{ingredient_set, search, search_with, Normalization, SearchOptions};
pub use tokenizer::{normalize_token, tokenize};
