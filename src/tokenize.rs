//! Delimiter-based tokenization.
//!
//! A token is a maximal, non-empty run of characters containing no delimiter.
//! Runs of consecutive delimiters never produce empty tokens, so
//! `"a..b"` and `"a.b"` tokenize identically.

use crate::error::{Error, Result};

/// Delimiters used when turning prose into words before shingling.
pub const WORD_DELIMITERS: &str = " .,\"\n\r()";

/// Delimiters used when reading a comma-delimited shingle list.
pub const SHINGLE_LIST_DELIMITERS: &str = ",";

/// A set of delimiter characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delimiters {
    chars: Vec<char>,
}

impl Delimiters {
    /// Build a delimiter set from the characters of `chars`.
    ///
    /// Duplicate characters are collapsed. An empty set is rejected.
    pub fn new(chars: &str) -> Result<Self> {
        let mut set: Vec<char> = Vec::with_capacity(chars.len());
        for c in chars.chars() {
            if !set.contains(&c) {
                set.push(c);
            }
        }
        if set.is_empty() {
            return Err(Error::InvalidParam("delimiter set must not be empty"));
        }
        Ok(Self { chars: set })
    }

    /// The word delimiter set (space, period, comma, double quote, CR, LF, parentheses).
    pub fn words() -> Self {
        Self {
            chars: WORD_DELIMITERS.chars().collect(),
        }
    }

    /// The single-comma delimiter set.
    pub fn shingle_list() -> Self {
        Self {
            chars: SHINGLE_LIST_DELIMITERS.chars().collect(),
        }
    }

    /// True if `c` is a delimiter.
    #[inline]
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// The delimiter characters, in first-seen order.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }
}

impl Default for Delimiters {
    fn default() -> Self {
        Self::words()
    }
}

/// Lazily split `text` into tokens.
///
/// Tokens borrow from `text`; order follows position in the source.
pub fn tokenize<'a>(
    text: &'a str,
    delimiters: &'a Delimiters,
) -> impl Iterator<Item = &'a str> + 'a {
    text.split(move |c: char| delimiters.contains(c))
        .filter(|t| !t.is_empty())
}

/// Eagerly split `text` into owned tokens.
pub fn tokenize_owned(text: &str, delimiters: &Delimiters) -> Vec<String> {
    tokenize(text, delimiters).map(str::to_owned).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_every_delimiter() {
        let d = Delimiters::new(".,").unwrap();
        let toks: Vec<&str> = tokenize("a.b,c", &d).collect();
        assert_eq!(toks, vec!["a", "b", "c"]);
    }

    #[test]
    fn consecutive_delimiters_yield_no_empty_tokens() {
        let d = Delimiters::words();
        let toks = tokenize_owned("  (the) \"cat\",,sat.\r\n", &d);
        assert_eq!(toks, vec!["the", "cat", "sat"]);
    }

    #[test]
    fn empty_and_all_delimiter_inputs_have_no_tokens() {
        let d = Delimiters::words();
        assert_eq!(tokenize("", &d).count(), 0);
        assert_eq!(tokenize(" ..,\n", &d).count(), 0);
    }

    #[test]
    fn empty_delimiter_set_is_rejected() {
        assert!(matches!(Delimiters::new(""), Err(Error::InvalidParam(_))));
    }

    #[test]
    fn duplicate_delimiters_collapse() {
        let d = Delimiters::new(",,.").unwrap();
        assert_eq!(d.chars(), &[',', '.']);
    }

    #[test]
    fn non_ascii_text_is_kept_intact() {
        let d = Delimiters::new(" ").unwrap();
        let toks: Vec<&str> = tokenize("café naïve", &d).collect();
        assert_eq!(toks, vec!["café", "naïve"]);
    }

    #[test]
    fn tokenization_is_deterministic() {
        let d = Delimiters::shingle_list();
        let a = tokenize_owned("x y,y z,x y", &d);
        let b = tokenize_owned("x y,y z,x y", &d);
        assert_eq!(a, b);
        assert_eq!(a, vec!["x y", "y z", "x y"]);
    }
}
