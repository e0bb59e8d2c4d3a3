//! Text cleaning module.
//!
//! Normalizes raw post text and pulls hashtags out of it.

mod cleaner;

pub use cleaner::{clean, extract_hashtags, is_valid, preprocess, DEFAULT_MIN_LENGTH};
