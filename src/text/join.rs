//! Join tokens back into a single-space-separated string.

/// Concatenate `tokens` in order, separated by exactly one space.
///
/// Inverse of [`super::split`] for clean inputs: splitting the result of
/// `join` yields the original token sequence.
pub fn join<S: AsRef<str>>(tokens: &[S]) -> String {
    let mut result = String::new();
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push_str(token.as_ref());
    }
    result
}
