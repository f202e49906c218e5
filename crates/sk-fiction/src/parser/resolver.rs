//! Item resolution and "did you mean" suggestions.

use sk_core::{Item, MatchMode, ParserTier};
use strsim::jaro_winkler;

use super::command::Verb;

/// Minimum similarity score for suggestions (0.0-1.0).
pub const FUZZY_THRESHOLD: f64 = 0.8;

/// How strictly item names are matched at a tier.
pub fn match_mode(tier: ParserTier) -> MatchMode {
    if tier.understands_synonyms() {
        MatchMode::Fuzzy
    } else {
        MatchMode::Exact
    }
}

/// Index of the item that best matches the phrase.
///
/// Ties go to the item listed first.
pub fn resolve_item(items: &[Item], phrase: &str, mode: MatchMode) -> Option<usize> {
    let mut best: Option<(usize, usize)> = None;
    for (index, item) in items.iter().enumerate() {
        let strength = item.match_strength(phrase, mode);
        if strength > 0 && best.is_none_or(|(_, s)| strength > s) {
            best = Some((index, strength));
        }
    }
    best.map(|(index, _)| index)
}

/// The verb whose spelling or synonym is closest to a misspelt word.
pub fn suggest_verb(word: &str) -> Option<Verb> {
    let word = word.to_lowercase();
    let mut best: Option<(Verb, f64)> = None;
    for verb in Verb::ALL {
        let spellings = std::iter::once(verb.canonical()).chain(verb.synonyms().iter().copied());
        for spelling in spellings {
            // Single letters are too short to judge.
            if spelling.len() < 2 {
                continue;
            }
            let score = jaro_winkler(&word, spelling);
            if score >= FUZZY_THRESHOLD && best.is_none_or(|(_, s)| score > s) {
                best = Some((verb, score));
            }
        }
    }
    best.map(|(verb, _)| verb)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<Item> {
        vec![
            Item::new("flashlight", "LED flashlight", "A light.").with_keywords(["flashlight", "light"]),
            Item::new("layer", "Embedding Layer", "A sphere.").with_keywords(["embedding"]),
            Item::new("neural", "Neural Network Layer", "A lattice.").with_keywords(["neural"]),
        ]
    }

    #[test]
    fn exact_match() {
        let items = items();
        assert_eq!(resolve_item(&items, "flashlight", MatchMode::Exact), Some(0));
        assert_eq!(resolve_item(&items, "flash", MatchMode::Exact), None);
    }

    #[test]
    fn fuzzy_prefers_stronger_match() {
        let items = items();
        assert_eq!(resolve_item(&items, "flash", MatchMode::Fuzzy), Some(0));
        assert_eq!(resolve_item(&items, "layer", MatchMode::Fuzzy), Some(1));
        assert_eq!(resolve_item(&items, "neural layer", MatchMode::Fuzzy), Some(2));
        assert_eq!(resolve_item(&items, "banana", MatchMode::Fuzzy), None);
    }

    #[test]
    fn mode_follows_tier() {
        assert_eq!(match_mode(ParserTier::BASIC), MatchMode::Exact);
        assert_eq!(match_mode(ParserTier::TOKENIZED), MatchMode::Exact);
        assert_eq!(match_mode(ParserTier::SEMANTIC), MatchMode::Fuzzy);
    }

    #[test]
    fn suggests_close_verbs() {
        assert_eq!(suggest_verb("tkae"), Some(Verb::Take));
        assert_eq!(suggest_verb("atack"), Some(Verb::Attack));
        assert_eq!(suggest_verb("inventroy"), Some(Verb::Inventory));
        assert_eq!(suggest_verb("zzzz"), None);
    }
}
