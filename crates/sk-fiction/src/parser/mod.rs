//! Command parsing and item resolution.

mod command;
mod resolver;
mod tokenizer;

pub use command::{BASIC_HINT, COMBAT_HINT, Command, GENERAL_HINT, Verb, parse, parse_combat};
pub use resolver::{FUZZY_THRESHOLD, match_mode, resolve_item, suggest_verb};
pub use tokenizer::tokenize;
