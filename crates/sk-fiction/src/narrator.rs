use sk_core::{ComponentKind, ParserTier};

const RULE: &str = "════════════════════════════════════════════════════════════════════";

/// Opening banner shown before the first room.
pub fn intro() -> String {
    format!(
        "{RULE}\n\
         \x20                       S K O O L A C H\n\
         \x20                A Digital Archaeology Adventure\n\
         {RULE}\n\n\
         Late at night, halfway through a training run, your screen flickers.\n\n\
         \x20   *** SYSTEM BREACH DETECTED ***\n\
         \x20   *** VIRUS: SKOOLACH ***\n\
         \x20   *** MODEL INTEGRITY: COMPROMISED ***\n\n\
         The virus has torn your language model apart and scattered its\n\
         components through a maze of digital caverns. Your command parser\n\
         has been knocked back to its most primitive state.\n\n\
         Recover the components, rebuild the model, and face SKOOLACH. Every\n\
         piece you recover makes you, and your parser, a little smarter.\n\n\
         Type HELP for basic commands. Good luck, Coder.\n\
         {RULE}"
    )
}

/// Help text for the current parser tier.
pub fn help(tier: ParserTier) -> &'static str {
    if tier.understands_synonyms() {
        "ADVANCED COMMANDS (AI-ENHANCED MODE):\n\
         \x20 The parser now follows looser phrasing.\n\
         \x20 Try: \"examine the strange device\", \"pick up the archive\",\n\
         \x20      \"walk north\", \"fight the virus\".\n\n\
         Synonyms work: take/grab/get, look/examine/inspect, go/move/walk.\n\
         Partial names work too: \"take token\" finds the Tokenizer Core."
    } else if tier.strips_stopwords() {
        "IMPROVED COMMANDS (TOKENIZER RESTORED):\n\
         \x20 Articles are understood: \"take THE flashlight\", \"go TO the north\".\n\
         \x20 Direction shortcuts work: n, s, e, w, ne, nw, se, sw, u, d.\n\n\
         All basic commands still work. The parser is becoming more flexible!"
    } else {
        "BASIC COMMANDS (VIRUS-DEGRADED MODE):\n\
         \x20 GO <direction>     - Move (north, south, east, west, ne, nw, se, sw, up, down)\n\
         \x20 TAKE <item>        - Pick up an item\n\
         \x20 DROP <item>        - Drop an item\n\
         \x20 LOOK               - Look around\n\
         \x20 LOOK <item>        - Examine an item\n\
         \x20 USE <item>         - Use an item\n\
         \x20 INVENTORY (or I)   - Check what you carry\n\
         \x20 ATTACK <target>    - Fight\n\
         \x20 HELP               - Show this help\n\
         \x20 QUIT               - Leave the game\n\n\
         The virus has crippled your parser. Collect AI components to restore it!"
    }
}

/// Notice shown when the parser tier rises to `tier`.
pub fn upgrade_notice(tier: ParserTier) -> Option<&'static str> {
    let notice = match tier.level() {
        1 => "SYSTEM UPDATE: Tokenizer restored! Articles and 'to' are now understood.",
        2 => "SYSTEM UPDATE: Embedding layer activated! Synonym recognition enabled.",
        3 => "SYSTEM UPDATE: Attention mechanism online! You feel ready to face the virus.",
        4 => "SYSTEM UPDATE: Neural layers connected! Your model grows deeper.",
        5 => "SYSTEM UPDATE: Training data integrated! Your AI grows more powerful.",
        6 => "SYSTEM UPDATE: Optimizer engaged! Every step brings you closer to the minimum.",
        7 => "SYSTEM UPDATE: Inference engine running! Predictions sharpen.",
        8 => "SYSTEM UPDATE: Context window expanded! Nothing escapes your attention.",
        9 => "SYSTEM UPDATE: All components integrated! Your model is whole again.",
        _ => return None,
    };
    Some(notice)
}

/// Banner shown when an AI component is picked up.
pub fn component_acquired(kind: ComponentKind, collected: usize) -> String {
    format!(
        "[AI COMPONENT ACQUIRED: {}]\nComponents recovered: {collected}/{}",
        kind.label(),
        ComponentKind::ALL.len()
    )
}

/// Opening of the boss fight.
pub fn battle_intro(components: usize) -> String {
    format!(
        "{RULE}\n\
         \x20                   COMBAT INITIATED!\n\
         {RULE}\n\n\
         SKOOLACH rears up, a towering knot of malformed code. Error\n\
         messages crawl across its surface.\n\n\
         You have recovered {components} AI components. They resonate\n\
         together, ready to fight."
    )
}

/// Ending after SKOOLACH falls.
pub fn victory() -> String {
    format!(
        "{RULE}\n\
         \x20                          VICTORY!\n\
         {RULE}\n\n\
         SKOOLACH breaks apart into shards of corrupted code that fade to\n\
         nothing. The caverns shudder, then settle.\n\n\
         One by one your recovered components lock into place: tokenizer,\n\
         embeddings, attention, layers. The model rebuilds itself.\n\n\
         \x20   *** SYSTEM RESTORED ***\n\
         \x20   *** AI MODEL: OPERATIONAL ***\n\n\
         You came for your model and leave knowing how it works, from\n\
         tokens to transformers.\n\n\
         {RULE}\n\
         \x20           CONGRATULATIONS - YOU COMPLETED SKOOLACH!\n\
         {RULE}"
    )
}

/// Ending after the player falls.
pub fn defeat() -> String {
    format!(
        "{RULE}\n\
         \x20                       SYSTEM FAILURE\n\
         {RULE}\n\n\
         SKOOLACH's corruption floods your systems. Your thoughts scatter\n\
         into the void.\n\n\
         \x20   *** CRITICAL ERROR ***\n\
         \x20   *** MODEL UNRECOVERABLE ***\n\n\
         Perhaps with more components, things would have gone differently...\n\n\
         GAME OVER"
    )
}

/// Goodbye on QUIT.
pub fn farewell() -> &'static str {
    "Thanks for playing SKOOLACH!"
}
