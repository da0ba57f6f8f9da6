use regex::{Regex, RegexBuilder};

use crate::error::SearchError;

pub const HIGHLIGHT_OPEN: &str = "<mark>";
pub const HIGHLIGHT_CLOSE: &str = "</mark>";

/// Case-insensitive matcher for a literal query.
///
/// Regex metacharacters in the query are escaped, so `c++` or `a.b` match
/// only themselves.
#[derive(Debug, Clone)]
pub struct Highlighter {
    pattern: Regex,
}

impl Highlighter {
    pub fn new(query: &str) -> Result<Self, SearchError> {
        let pattern = RegexBuilder::new(&regex::escape(query)).case_insensitive(true).build()?;
        Ok(Self { pattern })
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    /// Wrap every occurrence in highlight markers, keeping the original casing
    pub fn highlight(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, |caps: &regex::Captures<'_>| {
                format!("{}{}{}", HIGHLIGHT_OPEN, &caps[0], HIGHLIGHT_CLOSE)
            })
            .into_owned()
    }
}
