use std::fmt;

/// Articles ignored when matching multi-word item phrases.
const ARTICLES: &[&str] = &["a", "an", "the"];

/// Stable identity of an item, stored as a lowercase slug.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(String);

impl ItemId {
    /// Create an item ID from a slug. The slug is lowercased.
    pub fn new(slug: impl Into<String>) -> Self {
        Self(slug.into().to_lowercase())
    }

    /// The slug as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The nine pieces of the shattered AI model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ComponentKind {
    /// Splits text into tokens.
    Tokenizer,
    /// Maps tokens into vector space.
    Embedding,
    /// Decides what to focus on.
    Attention,
    /// A stack of transformation layers.
    NeuralLayer,
    /// The corpus the model learns from.
    TrainingData,
    /// Applies gradient updates.
    Optimizer,
    /// Generates predictions.
    Inference,
    /// How much the model can remember at once.
    Context,
    /// Specialises a pre-trained model.
    FineTuning,
}

impl ComponentKind {
    /// Every component kind, in the order the world introduces them.
    pub const ALL: [Self; 9] = [
        Self::Tokenizer,
        Self::Embedding,
        Self::Attention,
        Self::NeuralLayer,
        Self::TrainingData,
        Self::Optimizer,
        Self::Inference,
        Self::Context,
        Self::FineTuning,
    ];

    /// Machine-friendly name, also used as the component's item ID.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Tokenizer => "tokenizer",
            Self::Embedding => "embedding",
            Self::Attention => "attention",
            Self::NeuralLayer => "neural_layer",
            Self::TrainingData => "training_data",
            Self::Optimizer => "optimizer",
            Self::Inference => "inference",
            Self::Context => "context",
            Self::FineTuning => "fine_tuning",
        }
    }

    /// A single word the player can type to refer to the component.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Tokenizer => "tokenizer",
            Self::Embedding => "embedding",
            Self::Attention => "attention",
            Self::NeuralLayer => "neural",
            Self::TrainingData => "training",
            Self::Optimizer => "optimizer",
            Self::Inference => "inference",
            Self::Context => "context",
            Self::FineTuning => "finetuning",
        }
    }

    /// Upper-case label used in system notices.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Tokenizer => "TOKENIZER",
            Self::Embedding => "EMBEDDING",
            Self::Attention => "ATTENTION",
            Self::NeuralLayer => "NEURAL LAYER",
            Self::TrainingData => "TRAINING DATA",
            Self::Optimizer => "OPTIMIZER",
            Self::Inference => "INFERENCE",
            Self::Context => "CONTEXT",
            Self::FineTuning => "FINE TUNING",
        }
    }

    /// Parse a kind from its slug.
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.slug() == slug)
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The payload carried by an AI component item.
#[derive(Debug, Clone, PartialEq)]
pub struct AiComponent {
    /// Which part of the model this is.
    pub kind: ComponentKind,
    /// Educational note shown when the component is examined.
    pub lesson: String,
}

/// How strictly an input phrase must match an item's keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// The phrase must equal a keyword or the full name.
    Exact,
    /// Any significant word may be a substring of a keyword or the name.
    Fuzzy,
}

/// Something that can lie in a room or be carried.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    /// Stable identity.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// Text shown on examination.
    pub description: String,
    /// Lowercase words and phrases that refer to this item.
    pub keywords: Vec<String>,
    /// Whether the item can be picked up.
    pub takeable: bool,
    /// Present when the item is one of the AI components.
    pub component: Option<AiComponent>,
}

impl Item {
    /// Create a takeable item whose only keyword is its lowercased name.
    pub fn new(id: impl Into<String>, name: impl Into<String>, description: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: ItemId::new(id),
            keywords: vec![name.to_lowercase()],
            name,
            description: description.into(),
            takeable: true,
            component: None,
        }
    }

    /// Create an AI component item. Its ID is the kind's slug.
    pub fn component(
        kind: ComponentKind,
        name: impl Into<String>,
        description: impl Into<String>,
        lesson: impl Into<String>,
    ) -> Self {
        let mut item = Self::new(kind.slug(), name, description);
        item.keywords.push(kind.keyword().to_string());
        item.component = Some(AiComponent {
            kind,
            lesson: lesson.into(),
        });
        item
    }

    /// Add extra keywords (lowercased, duplicates skipped).
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for kw in keywords {
            let kw = kw.into().to_lowercase();
            if !self.keywords.contains(&kw) {
                self.keywords.push(kw);
            }
        }
        self
    }

    /// Mark the item as fixed scenery that cannot be taken.
    pub fn fixed(mut self) -> Self {
        self.takeable = false;
        self
    }

    /// Whether this item is an AI component.
    pub fn is_component(&self) -> bool {
        self.component.is_some()
    }

    /// The component kind, if this item is an AI component.
    pub fn component_kind(&self) -> Option<ComponentKind> {
        self.component.as_ref().map(|c| c.kind)
    }

    /// Full examination text.
    pub fn examine(&self) -> String {
        match &self.component {
            Some(component) => format!(
                "{}\n\n{}\n\n[This is a critical AI component: {}]",
                self.description.trim_end(),
                component.lesson.trim(),
                component.kind.label()
            ),
            None => self.description.clone(),
        }
    }

    /// Whether the phrase refers to this item under the given mode.
    pub fn matches(&self, phrase: &str, mode: MatchMode) -> bool {
        self.match_strength(phrase, mode) > 0
    }

    /// How well the phrase refers to this item; 0 means no match.
    ///
    /// An exact keyword or name match beats any fuzzy match. A fuzzy match
    /// scores one point per significant word found inside a keyword or the
    /// name, so "neural layer" prefers the neural layer over anything that
    /// merely contains "layer".
    pub fn match_strength(&self, phrase: &str, mode: MatchMode) -> usize {
        let phrase = phrase.trim().to_lowercase();
        if phrase.is_empty() {
            return 0;
        }

        let name = self.name.to_lowercase();
        if phrase == name || self.keywords.iter().any(|k| *k == phrase) {
            return usize::MAX;
        }

        if mode == MatchMode::Exact {
            return 0;
        }

        phrase
            .split_whitespace()
            .filter(|w| !ARTICLES.contains(w))
            .filter(|w| name.contains(w) || self.keywords.iter().any(|k| k.contains(w)))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flashlight() -> Item {
        Item::new("flashlight", "LED flashlight", "A small but powerful light.")
            .with_keywords(["flashlight", "light", "led"])
    }

    fn tokenizer() -> Item {
        Item::component(
            ComponentKind::Tokenizer,
            "Tokenizer Core",
            "A crystalline cube.",
            "Tokenizers split text into tokens.",
        )
    }

    #[test]
    fn exact_keyword_and_name() {
        let item = flashlight();
        assert!(item.matches("flashlight", MatchMode::Exact));
        assert!(item.matches("LED Flashlight", MatchMode::Exact));
        assert!(!item.matches("flash", MatchMode::Exact));
    }

    #[test]
    fn fuzzy_substring() {
        let item = tokenizer();
        assert!(!item.matches("token", MatchMode::Exact));
        assert!(item.matches("token", MatchMode::Fuzzy));
        assert!(item.matches("the glowing tokenizer", MatchMode::Fuzzy));
        assert!(!item.matches("embedding", MatchMode::Fuzzy));
    }

    #[test]
    fn articles_alone_do_not_match() {
        let item = flashlight();
        assert!(!item.matches("the", MatchMode::Fuzzy));
        assert!(!item.matches("   ", MatchMode::Fuzzy));
    }

    #[test]
    fn exact_beats_fuzzy() {
        let item = tokenizer();
        assert!(item.match_strength("tokenizer", MatchMode::Fuzzy) > item.match_strength("tok core", MatchMode::Fuzzy));
    }

    #[test]
    fn component_identity() {
        let item = tokenizer();
        assert_eq!(item.id, ItemId::new("tokenizer"));
        assert_eq!(item.component_kind(), Some(ComponentKind::Tokenizer));
        assert!(item.keywords.contains(&"tokenizer core".to_string()));
        assert!(item.examine().contains("[This is a critical AI component: TOKENIZER]"));
    }

    #[test]
    fn plain_items_examine_to_description() {
        let item = flashlight();
        assert!(!item.is_component());
        assert_eq!(item.examine(), "A small but powerful light.");
    }

    #[test]
    fn slugs_round_trip() {
        for kind in ComponentKind::ALL {
            assert_eq!(ComponentKind::from_slug(kind.slug()), Some(kind));
        }
        assert_eq!(ComponentKind::from_slug("virus"), None);
    }
}
