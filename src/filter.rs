//! Post-split token filtering.

use crate::config::CompiledConfig;

/// Apply the configured keep/drop patterns to a token sequence.
///
/// Runs after splitting; the splitter itself never filters beyond
/// discarding empty tokens. Order of surviving tokens is unchanged.
pub fn apply_filters(tokens: Vec<String>, config: &CompiledConfig) -> Vec<String> {
    if config.keep_patterns.is_empty() && config.drop_patterns.is_empty() {
        return tokens;
    }
    tokens
        .into_iter()
        .filter(|t| config.retains(t))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn compiled(keep: &[&str], drop: &[&str]) -> CompiledConfig {
        Config {
            keep: keep.iter().map(|p| p.to_string()).collect(),
            drop: drop.iter().map(|p| p.to_string()).collect(),
            ..Default::default()
        }
        .compile()
        .unwrap()
    }

    #[test]
    fn test_no_filters_passes_through() {
        let config = compiled(&[], &[]);
        let input = tokens(&["a", "b"]);
        assert_eq!(apply_filters(input.clone(), &config), input);
    }

    #[test]
    fn test_keep_filter() {
        let config = compiled(&[r"^\d+$"], &[]);
        let result = apply_filters(tokens(&["1", "two", "3"]), &config);
        assert_eq!(result, tokens(&["1", "3"]));
    }

    #[test]
    fn test_drop_filter() {
        let config = compiled(&[], &["^-"]);
        let result = apply_filters(tokens(&["-v", "file", "--all"]), &config);
        assert_eq!(result, tokens(&["file"]));
    }

    #[test]
    fn test_order_unchanged() {
        let config = compiled(&[r"^[a-z]+$"], &[]);
        let result = apply_filters(tokens(&["z", "9", "a", "m"]), &config);
        assert_eq!(result, tokens(&["z", "a", "m"]));
    }

    #[test]
    fn test_all_filtered_out() {
        let config = compiled(&["^x$"], &[]);
        let result = apply_filters(tokens(&["a", "b"]), &config);
        assert!(result.is_empty());
    }
}
