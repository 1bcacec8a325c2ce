//! Class string tokenizer.

use std::fmt;
use std::ops::Deref;

/// A single utility-class token.
///
/// Tokens are never empty and never contain whitespace; only [`tokenize`]
/// creates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token<'a>(&'a str);

impl<'a> Token<'a> {
    /// The token text.
    #[inline]
    pub fn as_str(&self) -> &'a str {
        self.0
    }
}

impl Deref for Token<'_> {
    type Target = str;

    fn deref(&self) -> &str {
        self.0
    }
}

impl AsRef<str> for Token<'_> {
    fn as_ref(&self) -> &str {
        self.0
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Split a class string into tokens.
///
/// Leading and trailing whitespace is ignored and runs of whitespace count as
/// a single separator, so blank input yields no tokens.
///
/// ```
/// use horizon_classname::tokenize;
///
/// let tokens = tokenize("  p-4\t bg-red\nr-2 ");
/// let text: Vec<&str> = tokens.iter().map(|t| t.as_str()).collect();
/// assert_eq!(text, ["p-4", "bg-red", "r-2"]);
/// ```
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    tokens(input).collect()
}

/// Lazily iterate over the tokens of a class string.
pub fn tokens(input: &str) -> impl Iterator<Item = Token<'_>> {
    input.trim().split_whitespace().map(Token)
}
