//! Rendering token sequences for stdout.

use serde::Serialize;

/// How the token sequence is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One token per line.
    Lines,
    /// A JSON object with the tokens and their count.
    Json,
    /// Tokens re-joined with single spaces.
    Joined,
}

impl OutputFormat {
    /// Parse a format name from configuration.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "lines" => Some(OutputFormat::Lines),
            "json" => Some(OutputFormat::Json),
            "joined" => Some(OutputFormat::Joined),
            _ => None,
        }
    }
}

/// JSON report for the `json` format.
#[derive(Debug, Serialize)]
struct TokenReport<'a> {
    count: usize,
    tokens: &'a [String],
}

/// Render tokens in the given format.
///
/// The result carries no trailing newline; the caller decides how to
/// terminate it.
pub fn format_tokens(tokens: &[String], format: OutputFormat) -> String {
    match format {
        OutputFormat::Lines => tokens.join("\n"),
        OutputFormat::Joined => crate::text::join(tokens),
        OutputFormat::Json => {
            let report = TokenReport {
                count: tokens.len(),
                tokens,
            };
            serde_json::to_string(&report).unwrap_or_else(|_| {
                // Fallback if serialization fails
                format!(r#"{{"count":{},"tokens":[]}}"#, tokens.len())
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_parse_format() {
        assert_eq!(OutputFormat::parse("lines"), Some(OutputFormat::Lines));
        assert_eq!(OutputFormat::parse("json"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::parse("joined"), Some(OutputFormat::Joined));
        assert_eq!(OutputFormat::parse("yaml"), None);
    }

    #[test]
    fn test_lines_format() {
        let out = format_tokens(&tokens(&["a", "b", "c"]), OutputFormat::Lines);
        assert_eq!(out, "a\nb\nc");
    }

    #[test]
    fn test_lines_format_empty() {
        let out = format_tokens(&[], OutputFormat::Lines);
        assert_eq!(out, "");
    }

    #[test]
    fn test_joined_format() {
        let out = format_tokens(&tokens(&["a", "b", "c"]), OutputFormat::Joined);
        assert_eq!(out, "a b c");
    }

    #[test]
    fn test_json_format() {
        let out = format_tokens(&tokens(&["a", "b"]), OutputFormat::Json);
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["count"], 2);
        assert_eq!(parsed["tokens"][0], "a");
        assert_eq!(parsed["tokens"][1], "b");
    }

    #[test]
    fn test_json_format_empty() {
        let out = format_tokens(&[], OutputFormat::Json);
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["count"], 0);
        assert!(parsed["tokens"].as_array().unwrap().is_empty());
    }
}
