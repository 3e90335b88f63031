//! Split text on single spaces, discarding empty tokens.

/// Split `source` into non-empty, space-delimited tokens.
///
/// Only the literal space character is a delimiter; tabs and newlines are
/// kept inside tokens. Consecutive spaces and spaces at either end of the
/// input produce no tokens. Order follows the input left to right.
pub fn split(source: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    for c in source.chars() {
        if c == ' ' {
            if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
        } else {
            current.push(c);
        }
    }

    // Trailing segment after the last space (or the whole string).
    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}
