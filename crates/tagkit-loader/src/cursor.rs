//! Token cursor over directive arguments.
//!
//! Directive grammars consume tokens from the front and occasionally need to
//! return one unconsumed token when modifier scanning overshoots. The cursor
//! makes both explicit: end-of-input is `None`, never an error.

use std::collections::VecDeque;

/// Cursor over the whitespace-separated tokens of a directive's arguments.
///
/// Commas are not semantically significant in directive syntax and are
/// stripped before splitting.
///
/// # Example
///
/// ```
/// use tagkit_loader::TokenCursor;
///
/// let mut cursor = TokenCursor::new("lib1 into ns, lib2");
/// assert_eq!(cursor.pop().as_deref(), Some("lib1"));
/// assert_eq!(cursor.pop().as_deref(), Some("into"));
///
/// cursor.push_back("into".to_owned());
/// assert_eq!(cursor.pop().as_deref(), Some("into"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TokenCursor {
    tokens: VecDeque<String>,
}

impl TokenCursor {
    /// Tokenize directive arguments (commas stripped, whitespace split).
    #[must_use]
    pub fn new(args: &str) -> Self {
        let stripped = args.replace(',', "");
        Self {
            tokens: stripped.split_whitespace().map(str::to_owned).collect(),
        }
    }

    /// Consume the next token, or `None` when the stream is exhausted.
    pub fn pop(&mut self) -> Option<String> {
        self.tokens.pop_front()
    }

    /// Return a token to the front of the stream.
    ///
    /// The next [`pop`](Self::pop) yields it again. Used when modifier
    /// scanning reads one token too far.
    pub fn push_back(&mut self, token: String) {
        self.tokens.push_front(token);
    }

    /// True if no tokens remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenizes_on_whitespace() {
        let mut cursor = TokenCursor::new("lib1 from app1  as  name");
        let mut tokens = Vec::new();
        while let Some(token) = cursor.pop() {
            tokens.push(token);
        }
        assert_eq!(tokens, ["lib1", "from", "app1", "as", "name"]);
    }

    #[test]
    fn test_strips_commas() {
        let mut cursor = TokenCursor::new("lib1 into a, lib2 into b");
        let mut tokens = Vec::new();
        while let Some(token) = cursor.pop() {
            tokens.push(token);
        }
        assert_eq!(tokens, ["lib1", "into", "a", "lib2", "into", "b"]);
    }

    #[test]
    fn test_empty_input() {
        let mut cursor = TokenCursor::new("");
        assert!(cursor.is_empty());
        assert_eq!(cursor.pop(), None);

        let mut cursor = TokenCursor::new("   ");
        assert_eq!(cursor.pop(), None);
    }

    #[test]
    fn test_pop_past_end_stays_none() {
        let mut cursor = TokenCursor::new("one");
        assert_eq!(cursor.pop().as_deref(), Some("one"));
        assert_eq!(cursor.pop(), None);
        assert_eq!(cursor.pop(), None);
    }

    #[test]
    fn test_push_back_restores_front() {
        let mut cursor = TokenCursor::new("a b");
        let first = cursor.pop().unwrap();
        cursor.push_back(first);
        assert_eq!(cursor.pop().as_deref(), Some("a"));
        assert_eq!(cursor.pop().as_deref(), Some("b"));
        assert!(cursor.is_empty());
    }
}
