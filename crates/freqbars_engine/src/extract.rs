use std::fmt;
use std::str::FromStr;

use freqbars_core::FrequencyTable;
use once_cell::sync::Lazy;
use regex::Regex;

/// Maximal runs of at least two ASCII letters.
static WORD_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-zA-Z]{2,}").unwrap());

/// Reserved words counted by the `keywords` target.
pub const KEYWORDS: [&str; 25] = [
    "break", "default", "func", "interface", "select",
    "case", "defer", "go", "map", "struct",
    "chan", "else", "goto", "package", "switch",
    "const", "fallthrough", "if", "range", "type",
    "continue", "for", "import", "return", "var",
];

const SKIPPED_CHARS: [char; 3] = ['\t', '\n', ' '];

pub trait TokenExtractor {
    /// Tokens found in `line`, left to right.
    fn tokens<'a>(&self, line: &'a str) -> Vec<&'a str>;

    /// Counts every token of `line` into `table` and returns how many were added.
    fn extract(&self, line: &str, table: &mut FrequencyTable) -> usize {
        let tokens = self.tokens(line);
        for token in &tokens {
            table.increment(token);
        }
        tokens.len()
    }
}

/// Every codepoint except tab, newline and space.
#[derive(Debug, Default, Clone, Copy)]
pub struct CharExtractor;

impl TokenExtractor for CharExtractor {
    fn tokens<'a>(&self, line: &'a str) -> Vec<&'a str> {
        line.char_indices()
            .filter(|(_, c)| !SKIPPED_CHARS.contains(c))
            .map(|(at, c)| &line[at..at + c.len_utf8()])
            .collect()
    }
}

/// Runs of two or more ASCII letters, case preserved.
#[derive(Debug, Default, Clone, Copy)]
pub struct WordExtractor;

impl TokenExtractor for WordExtractor {
    fn tokens<'a>(&self, line: &'a str) -> Vec<&'a str> {
        WORD_REGEX.find_iter(line).map(|m| m.as_str()).collect()
    }
}

/// Letter runs that are one of [`KEYWORDS`].
#[derive(Debug, Default, Clone, Copy)]
pub struct KeywordExtractor;

impl TokenExtractor for KeywordExtractor {
    fn tokens<'a>(&self, line: &'a str) -> Vec<&'a str> {
        WORD_REGEX
            .find_iter(line)
            .map(|m| m.as_str())
            .filter(|word| KEYWORDS.contains(word))
            .collect()
    }
}

/// Which token class to chart. Chosen once at startup.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    #[default]
    Chars,
    Words,
    Keywords,
}

impl Target {
    pub fn name(self) -> &'static str {
        match self {
            Target::Chars => "chars",
            Target::Words => "words",
            Target::Keywords => "keywords",
        }
    }
}

impl TokenExtractor for Target {
    fn tokens<'a>(&self, line: &'a str) -> Vec<&'a str> {
        match self {
            Target::Chars => CharExtractor.tokens(line),
            Target::Words => WordExtractor.tokens(line),
            Target::Keywords => KeywordExtractor.tokens(line),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown target `{0}` (valid values: chars|ch, words|w, keywords|kw|go)")]
pub struct UnknownTarget(pub String);

impl FromStr for Target {
    type Err = UnknownTarget;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "chars" | "ch" => Ok(Target::Chars),
            "words" | "w" => Ok(Target::Words),
            "keywords" | "kw" | "go" => Ok(Target::Keywords),
            other => Err(UnknownTarget(other.to_string())),
        }
    }
}
