use proptest::prelude::*;
use sk_content::{ids, room_id};
use sk_fiction::{GameConfig, GameSession, ResponseKind};

fn session() -> GameSession {
    GameSession::standard(GameConfig::default().with_seed(11)).unwrap()
}

const CORRIDOR_FULL: &str = "A long hallway built from shimmering data streams.";
const CORRIDOR_SHORT: &str = "The translucent Memory Corridor, the central hub.";

#[test]
fn full_description_on_first_visit_short_on_return() {
    let mut session = session();

    let response = session.process_command("GO NORTH");
    assert_eq!(response.kind, ResponseKind::Success);
    assert!(response.text.contains(CORRIDOR_FULL));
    assert_eq!(response.status.room, "Memory Corridor");

    let look = session.process_command("LOOK");
    assert!(look.text.contains(CORRIDOR_FULL));

    session.process_command("GO SOUTH");
    session.process_command("GO NORTH");
    let look = session.process_command("LOOK");
    assert!(look.text.contains(CORRIDOR_SHORT));
    assert!(!look.text.contains(CORRIDOR_FULL));
}

#[test]
fn room_listing_shows_items_and_exits() {
    let mut session = session();
    let look = session.process_command("look");
    assert!(look.text.contains("You can see: LED flashlight, broken keyboard"));
    assert!(look.text.contains("Exits: north"));
}

#[test]
fn unknown_exit_leaves_player_in_place() {
    let mut session = session();
    let response = session.process_command("go down");
    assert_eq!(response.kind, ResponseKind::Failure);
    assert_eq!(response.text, "You can't go that way.");
    assert_eq!(session.player().location, room_id(ids::CRASH_SITE));
}

#[test]
fn archives_stay_gated_on_every_traversal() {
    let mut session = session();
    for cmd in ["take flashlight", "n", "w", "e", "drop flashlight"] {
        assert_eq!(session.process_command(cmd).kind, ResponseKind::Success, "{cmd}");
    }
    let response = session.process_command("w");
    assert_eq!(response.kind, ResponseKind::Failure);
    assert_eq!(session.player().location, room_id(ids::MEMORY_CORRIDOR));
}

#[test]
fn tier_zero_is_strict_and_tier_one_is_not() {
    let mut session = session();
    let response = session.process_command("go to the north");
    assert_eq!(
        response.text,
        "Try using simple two-word commands like 'GO NORTH' or 'TAKE ITEM'."
    );

    for cmd in ["n", "n", "take tokenizer", "s"] {
        session.process_command(cmd);
    }
    assert_eq!(session.player().component_count(), 1);
    let response = session.process_command("go to the east");
    assert_eq!(response.kind, ResponseKind::Success);
    assert_eq!(session.player().location, room_id(ids::EMBEDDING_SPACE));
}

#[test]
fn partial_names_after_embedding() {
    let mut session = session();
    for cmd in ["n", "n", "take tokenizer", "s", "e", "take embedding", "w", "se"] {
        session.process_command(cmd);
    }
    assert_eq!(session.player().component_count(), 2);
    let response = session.process_command("grab the lattice");
    assert_eq!(response.kind, ResponseKind::Success, "{}", response.text);
    assert!(response.text.contains("NEURAL LAYER"));

    let response = session.process_command("examine token");
    assert!(response.text.contains("TOKENIZER"));
}

proptest! {
    #[test]
    fn any_input_is_handled(input in "\\PC{0,300}") {
        let mut session = session();
        let response = session.process_command(&input);
        prop_assert!(response.status.health == 100);
    }

    #[test]
    fn inventory_never_exceeds_capacity(cmds in proptest::collection::vec(
        prop_oneof![
            Just("take flashlight"), Just("drop flashlight"), Just("n"), Just("s"),
            Just("e"), Just("w"), Just("ne"), Just("sw"), Just("se"), Just("nw"),
            Just("take tokenizer"), Just("take embedding"), Just("take attention"),
            Just("grab layer"), Just("drop token"), Just("look"),
        ],
        0..60,
    )) {
        let mut session = session();
        let mut last_tier = session.player().parser_tier();
        for cmd in cmds {
            session.process_command(cmd);
            prop_assert!(session.player().inventory.len() <= 10);
            let tier = session.player().parser_tier();
            prop_assert!(tier >= last_tier);
            last_tier = tier;
        }
    }
}

#[test]
fn adversarial_inputs() {
    let mut session = session();
    let long = "x".repeat(1000);
    for input in ["", "!!!???***", "take\tflashlight", "go\nnorth", long.as_str(), "\u{0}\u{1b}[2J", "🦀 crab"] {
        let response = session.process_command(input);
        assert!(!response.game_over, "{input:?}");
    }
}
