use crate::model::WordColor;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

pub const DEFAULT_RED_WORDS: &[&str] = &["lorem", "dolor", "tempor", "labore", "magna"];
pub const DEFAULT_BLUE_WORDS: &[&str] = &["ipsum", "sit", "amet", "consectetur", "adipiscing"];
pub const DEFAULT_GREEN_WORDS: &[&str] = &["sed", "eiusmod", "incididunt", "dolore", "aliqua"];

static STRIP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[.,!?;:]").expect("punctuation class is a valid pattern"));

/// Static word-to-colour membership tables.
#[derive(Debug, Clone)]
pub struct Palette {
    red: HashSet<String>,
    blue: HashSet<String>,
    green: HashSet<String>,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(DEFAULT_RED_WORDS, DEFAULT_BLUE_WORDS, DEFAULT_GREEN_WORDS)
    }
}

impl Palette {
    pub fn new<S: AsRef<str>>(red: &[S], blue: &[S], green: &[S]) -> Self {
        let table = |words: &[S]| words.iter().map(|w| normalize(w.as_ref())).collect();
        Self {
            red: table(red),
            blue: table(blue),
            green: table(green),
        }
    }

    pub fn classify(&self, word: &str) -> WordColor {
        let key = normalize(word);
        if self.red.contains(&key) {
            WordColor::Red
        } else if self.blue.contains(&key) {
            WordColor::Blue
        } else if self.green.contains(&key) {
            WordColor::Green
        } else {
            WordColor::Default
        }
    }
}

/// Lowercase with `.,!?;:` removed.
pub fn normalize(word: &str) -> String {
    STRIP.replace_all(&word.to_lowercase(), "").into_owned()
}
