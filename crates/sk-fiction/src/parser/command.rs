//! Tiered command grammar.
//!
//! Each parser tier is a [`Grammar`]: a stop-word list applied to the tokens
//! and an ordered list of matchers. The first matcher that recognises the
//! tokens wins. Higher tiers swap in more forgiving matchers.

use std::fmt;

use sk_core::{Direction, ParserTier};

use super::resolver::suggest_verb;
use super::tokenizer::tokenize;
use crate::error::{FictionError, FictionResult};

/// Canonical verbs understood by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    /// Move through an exit.
    Go,
    /// Pick up an item.
    Take,
    /// Put down a carried item.
    Drop,
    /// Describe the room or examine an item.
    Look,
    /// List carried items.
    Inventory,
    /// Use a carried item.
    Use,
    /// Show help.
    Help,
    /// End the game.
    Quit,
    /// Start the boss fight.
    Attack,
    /// Talk to something.
    Talk,
}

impl Verb {
    /// Every verb.
    pub const ALL: [Self; 10] = [
        Self::Go,
        Self::Take,
        Self::Drop,
        Self::Look,
        Self::Inventory,
        Self::Use,
        Self::Help,
        Self::Quit,
        Self::Attack,
        Self::Talk,
    ];

    /// The canonical spelling.
    pub fn canonical(&self) -> &'static str {
        match self {
            Self::Go => "go",
            Self::Take => "take",
            Self::Drop => "drop",
            Self::Look => "look",
            Self::Inventory => "inventory",
            Self::Use => "use",
            Self::Help => "help",
            Self::Quit => "quit",
            Self::Attack => "attack",
            Self::Talk => "talk",
        }
    }

    /// Short aliases accepted at every tier.
    fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Inventory => &["i"],
            Self::Look => &["l"],
            Self::Quit => &["q"],
            Self::Help => &["?"],
            _ => &[],
        }
    }

    /// Synonyms understood once the embedding layer is restored.
    pub fn synonyms(&self) -> &'static [&'static str] {
        match self {
            Self::Go => &["move", "walk", "run", "travel", "head"],
            Self::Take => &["get", "grab", "pick", "acquire"],
            Self::Drop => &["leave", "discard", "put"],
            Self::Look => &["examine", "inspect", "check", "view", "describe", "x"],
            Self::Inventory => &["inv", "items"],
            Self::Use => &["activate", "apply"],
            Self::Help => &["commands"],
            Self::Quit => &["exit"],
            Self::Attack => &["fight", "hit", "strike", "kill"],
            Self::Talk => &["speak", "chat", "say"],
        }
    }

    /// Match the canonical spelling or a short alias.
    pub fn exact(word: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|v| v.canonical() == word || v.aliases().contains(&word))
    }

    /// Match canonical spellings, aliases and synonyms.
    pub fn semantic(word: &str) -> Option<Self> {
        Self::exact(word).or_else(|| {
            Self::ALL
                .into_iter()
                .find(|v| v.synonyms().contains(&word))
        })
    }

    /// Question asked when the verb needs an object and got none.
    fn missing_object(&self) -> &'static str {
        match self {
            Self::Go => "Go where?",
            Self::Take => "Take what?",
            Self::Drop => "Drop what?",
            Self::Use => "Use what?",
            Self::Attack => "Attack what?",
            Self::Talk => "Talk to whom?",
            Self::Look | Self::Inventory | Self::Help | Self::Quit => "What?",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical().to_uppercase())
    }
}

/// A parsed player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Move through an exit.
    Go(Direction),
    /// Pick up the item matching the phrase.
    Take(String),
    /// Put down the carried item matching the phrase.
    Drop(String),
    /// Describe the room, or examine the item matching the phrase.
    Look(Option<String>),
    /// List carried items.
    Inventory,
    /// Use the carried item matching the phrase.
    Use(String),
    /// Show help.
    Help,
    /// End the game.
    Quit,
    /// Attack the target matching the phrase.
    Attack(String),
    /// Talk to the target matching the phrase.
    Talk(String),
    /// Choose a combat action by its 1-based menu number.
    Select(usize),
}

/// Hint shown at tier 0.
pub const BASIC_HINT: &str = "Try using simple two-word commands like 'GO NORTH' or 'TAKE ITEM'.";
/// Hint shown from tier 1 on.
pub const GENERAL_HINT: &str = "I don't understand that command. Type HELP for available commands.";
/// Hint shown for unrecognised input during combat.
pub const COMBAT_HINT: &str = "Enter the number of the action you want to use, or 'help' for options.";

const STOPWORDS: &[&str] = &["a", "an", "the", "to"];
const EXTENDED_STOPWORDS: &[&str] = &["a", "an", "the", "to", "at", "with", "on", "in", "from"];

type Matcher = fn(&[String]) -> Option<FictionResult<Command>>;

struct Grammar {
    stopwords: &'static [&'static str],
    matchers: &'static [Matcher],
}

const BASIC: Grammar = Grammar {
    stopwords: &[],
    matchers: &[bare_direction, exact_command],
};

const TOKENIZED: Grammar = Grammar {
    stopwords: STOPWORDS,
    matchers: &[bare_direction, exact_command],
};

const SEMANTIC: Grammar = Grammar {
    stopwords: EXTENDED_STOPWORDS,
    matchers: &[bare_direction, leading_direction, free_form],
};

fn grammar(tier: ParserTier) -> &'static Grammar {
    if tier.understands_synonyms() {
        &SEMANTIC
    } else if tier.strips_stopwords() {
        &TOKENIZED
    } else {
        &BASIC
    }
}

/// Parse player input at the given tier.
///
/// Returns `Ok(None)` for empty or whitespace-only input, which the session
/// ignores silently. Anything else the grammar rejects is a
/// [`FictionError::ParseFailure`] carrying a tier-appropriate hint.
pub fn parse(input: &str, tier: ParserTier) -> FictionResult<Option<Command>> {
    if input.trim().is_empty() {
        return Ok(None);
    }

    let grammar = grammar(tier);
    let tokens: Vec<String> = tokenize(input)
        .into_iter()
        .filter(|t| !grammar.stopwords.contains(&t.as_str()))
        .collect();
    log::trace!("tier {tier} parsing {tokens:?}");

    for matcher in grammar.matchers {
        if let Some(result) = matcher(&tokens) {
            return result.map(Some);
        }
    }

    Err(FictionError::ParseFailure {
        hint: failure_hint(&tokens, tier),
    })
}

/// Parse input while a fight is in progress.
///
/// Only action numbers, help and quit mean anything here.
pub fn parse_combat(input: &str) -> FictionResult<Option<Command>> {
    let Some(first) = input.split_whitespace().next() else {
        return Ok(None);
    };

    // Digits past usize::MAX still name an action, just not an existing one.
    if first.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(Some(Command::Select(first.parse().unwrap_or(usize::MAX))));
    }
    if let Ok(n) = first.parse::<i64>() {
        return Ok(Some(Command::Select(usize::try_from(n).unwrap_or(0))));
    }

    match tokenize(first).first().map(String::as_str) {
        Some("help" | "?") => Ok(Some(Command::Help)),
        Some("quit" | "q" | "exit") => Ok(Some(Command::Quit)),
        _ => Err(FictionError::ParseFailure {
            hint: COMBAT_HINT.to_string(),
        }),
    }
}

fn failure_hint(tokens: &[String], tier: ParserTier) -> String {
    if tier.level() == 0 {
        return BASIC_HINT.to_string();
    }
    let suggestion = tokens
        .first()
        .filter(|word| tier.understands_synonyms() && Verb::semantic(word).is_none())
        .and_then(|word| suggest_verb(word.as_str()));
    match suggestion {
        Some(verb) => format!("{GENERAL_HINT} Did you mean '{verb}'?"),
        None => GENERAL_HINT.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Matchers
// ---------------------------------------------------------------------------

/// A lone direction word.
fn bare_direction(tokens: &[String]) -> Option<FictionResult<Command>> {
    match tokens {
        [word] => Direction::parse(word).map(|d| Ok(Command::Go(d))),
        _ => None,
    }
}

/// Exactly `VERB` or `VERB NOUN` with canonical verbs.
fn exact_command(tokens: &[String]) -> Option<FictionResult<Command>> {
    let (first, rest) = tokens.split_first()?;
    if rest.len() > 1 {
        return None;
    }
    let verb = Verb::exact(first)?;
    let object = rest.first().map(String::as_str);
    match (verb, object) {
        (Verb::Go, Some(word)) => Direction::parse(word).map(|d| Ok(Command::Go(d))),
        (Verb::Inventory | Verb::Help | Verb::Quit, Some(_)) => None,
        (verb, object) => Some(build(verb, object.map(str::to_string))),
    }
}

/// A direction followed by anything: "north please".
fn leading_direction(tokens: &[String]) -> Option<FictionResult<Command>> {
    let direction = Direction::parse(tokens.first()?)?;
    Some(Ok(Command::Go(direction)))
}

/// A verb or synonym followed by an object phrase of any length.
fn free_form(tokens: &[String]) -> Option<FictionResult<Command>> {
    let (first, mut rest) = tokens.split_first()?;
    let verb = Verb::semantic(first)?;

    if verb == Verb::Take && first == "pick" && rest.first().is_some_and(|w| w == "up") {
        rest = &rest[1..];
    }

    if verb == Verb::Go {
        return match rest.first() {
            Some(word) => Direction::parse(word).map(|d| Ok(Command::Go(d))),
            None => Some(build(verb, None)),
        };
    }

    let object = (!rest.is_empty()).then(|| rest.join(" "));
    Some(build(verb, object))
}

fn build(verb: Verb, object: Option<String>) -> FictionResult<Command> {
    let incomplete = || FictionError::Incomplete {
        prompt: verb.missing_object(),
    };
    Ok(match verb {
        Verb::Go => return Err(incomplete()),
        Verb::Look => Command::Look(object),
        Verb::Inventory => Command::Inventory,
        Verb::Help => Command::Help,
        Verb::Quit => Command::Quit,
        Verb::Take => Command::Take(object.ok_or_else(incomplete)?),
        Verb::Drop => Command::Drop(object.ok_or_else(incomplete)?),
        Verb::Use => Command::Use(object.ok_or_else(incomplete)?),
        Verb::Attack => Command::Attack(object.ok_or_else(incomplete)?),
        Verb::Talk => Command::Talk(object.ok_or_else(incomplete)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const T0: ParserTier = ParserTier::BASIC;
    const T1: ParserTier = ParserTier::TOKENIZED;
    const T2: ParserTier = ParserTier::SEMANTIC;

    fn ok(input: &str, tier: ParserTier) -> Command {
        parse(input, tier).unwrap().unwrap()
    }

    fn hint(input: &str, tier: ParserTier) -> String {
        match parse(input, tier) {
            Err(FictionError::ParseFailure { hint }) => hint,
            other => panic!("expected parse failure, got {other:?}"),
        }
    }

    #[test]
    fn empty_input_is_silent() {
        assert!(parse("", T0).unwrap().is_none());
        assert!(parse(" \t\n ", T2).unwrap().is_none());
    }

    #[test]
    fn tier0_two_word_commands() {
        assert_eq!(ok("GO NORTH", T0), Command::Go(Direction::North));
        assert_eq!(ok("go ne", T0), Command::Go(Direction::Northeast));
        assert_eq!(ok("take flashlight", T0), Command::Take("flashlight".into()));
        assert_eq!(ok("look", T0), Command::Look(None));
        assert_eq!(ok("i", T0), Command::Inventory);
        assert_eq!(ok("?", T0), Command::Help);
    }

    #[test]
    fn bare_direction_at_every_tier() {
        for tier in [T0, T1, T2] {
            assert_eq!(ok("n", tier), Command::Go(Direction::North));
            assert_eq!(ok("Southeast", tier), Command::Go(Direction::Southeast));
        }
    }

    #[test]
    fn tier0_rejects_filler() {
        assert_eq!(hint("go to the north", T0), BASIC_HINT);
        assert_eq!(hint("take the flashlight", T0), BASIC_HINT);
        assert_eq!(hint("grab flashlight", T0), BASIC_HINT);
    }

    #[test]
    fn tier1_strips_articles() {
        assert_eq!(ok("GO TO THE NORTH", T1), Command::Go(Direction::North));
        assert_eq!(ok("take the flashlight", T1), Command::Take("flashlight".into()));
        assert_eq!(hint("grab flashlight", T1), GENERAL_HINT);
        assert_eq!(hint("north please", T1), GENERAL_HINT);
    }

    #[test]
    fn tier2_synonyms_and_phrases() {
        assert_eq!(ok("grab the led flashlight", T2), Command::Take("led flashlight".into()));
        assert_eq!(ok("pick up the key", T2), Command::Take("key".into()));
        assert_eq!(ok("examine the strange device carefully", T2), Command::Look(Some("strange device carefully".into())));
        assert_eq!(ok("walk north", T2), Command::Go(Direction::North));
        assert_eq!(ok("north please", T2), Command::Go(Direction::North));
        assert_eq!(ok("fight the virus", T2), Command::Attack("virus".into()));
        assert_eq!(ok("go up", T2), Command::Go(Direction::Up));
    }

    #[test]
    fn missing_objects_ask() {
        assert!(matches!(parse("take", T0), Err(FictionError::Incomplete { prompt: "Take what?" })));
        assert!(matches!(parse("attack", T2), Err(FictionError::Incomplete { prompt: "Attack what?" })));
        assert!(matches!(parse("go", T1), Err(FictionError::Incomplete { prompt: "Go where?" })));
    }

    #[test]
    fn symbol_only_is_a_failure() {
        assert_eq!(hint("!!!", T0), BASIC_HINT);
        assert_eq!(hint("@#$%", T2), GENERAL_HINT);
    }

    #[test]
    fn tier2_suggests_close_verbs() {
        let h = hint("tkae flashlight", T2);
        assert!(h.contains("Did you mean 'TAKE'?"), "{h}");
        assert_eq!(hint("tkae flashlight", T1), GENERAL_HINT);
    }

    #[test]
    fn combat_parsing() {
        assert_eq!(parse_combat("2").unwrap(), Some(Command::Select(2)));
        assert_eq!(parse_combat(" 0 ").unwrap(), Some(Command::Select(0)));
        assert_eq!(parse_combat("-3").unwrap(), Some(Command::Select(0)));
        assert_eq!(
            parse_combat("99999999999999999999").unwrap(),
            Some(Command::Select(usize::MAX))
        );
        assert_eq!(parse_combat("HELP").unwrap(), Some(Command::Help));
        assert_eq!(parse_combat("quit").unwrap(), Some(Command::Quit));
        assert!(parse_combat("").unwrap().is_none());
        assert!(matches!(parse_combat("go north"), Err(FictionError::ParseFailure { .. })));
    }

    proptest! {
        #[test]
        fn parse_is_total(input in ".{0,200}", level in 0usize..10) {
            let _ = parse(&input, ParserTier::from_components(level));
            let _ = parse_combat(&input);
        }

        #[test]
        fn whitespace_never_fails(input in "[ \t\n\r]{0,50}") {
            prop_assert!(parse(&input, T0).unwrap().is_none());
        }
    }
}
