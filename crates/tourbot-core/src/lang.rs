//! Script-based language tagging for incoming queries.
//!
//! The tag is informational only: answer selection is purely vector-based
//! and must not branch on it.

use serde::{Deserialize, Serialize};

/// Tamil Unicode block.
const TAMIL_START: char = '\u{0B80}';
const TAMIL_END: char = '\u{0BFF}';

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Lang {
    Ta,
    En,
}

impl Lang {
    pub fn as_str(self) -> &'static str {
        match self {
            Lang::Ta => "ta",
            Lang::En => "en",
        }
    }
}

/// Tag text as Tamil if it contains at least one code point in
/// U+0B80..=U+0BFF, English otherwise. Empty text tags as English.
pub fn detect_language(text: &str) -> Lang {
    if text.chars().any(|c| (TAMIL_START..=TAMIL_END).contains(&c)) {
        Lang::Ta
    } else {
        Lang::En
    }
}
