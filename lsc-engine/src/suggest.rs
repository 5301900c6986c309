//! Prefix completion over the composed text.
//!
//! The word being typed is the run of non-whitespace characters at the end of
//! the text. Completing it splices the chosen word over that run and appends a
//! single space, leaving everything before it untouched.

use crate::dict::WordList;

/// The word currently being typed.
///
/// Empty when the text is empty or ends in whitespace.
pub fn current_token(text: &str) -> &str {
    text.rsplit(char::is_whitespace).next().unwrap_or_default()
}

/// Dictionary words completing the current token, in dictionary order.
///
/// An empty current token matches every word.
pub fn recompute(text: &str, words: &WordList) -> Vec<String> {
    words
        .prefix_matches(current_token(text))
        .map(str::to_string)
        .collect()
}

/// Replace the current token with `choice` and append a space.
pub fn apply_selection(text: &str, choice: &str) -> String {
    let token = current_token(text);
    let head = &text[..text.len() - token.len()];
    let mut out = String::with_capacity(head.len() + choice.len() + 1);
    out.push_str(head);
    out.push_str(choice);
    out.push(' ');
    out
}
