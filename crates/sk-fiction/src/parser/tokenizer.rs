//! Splitting raw input into normalised tokens.

/// Split input into lowercase tokens.
///
/// Any Unicode whitespace separates tokens, so tabs and newlines work like
/// spaces. Punctuation is trimmed from both ends of each token and tokens
/// left empty are dropped. A lone `?` survives as the help alias.
pub fn tokenize(input: &str) -> Vec<String> {
    input
        .split_whitespace()
        .filter_map(|raw| {
            if raw == "?" {
                return Some(raw.to_string());
            }
            let trimmed = raw.trim_matches(|c: char| !c.is_alphanumeric());
            (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
        })
        .collect()
}
