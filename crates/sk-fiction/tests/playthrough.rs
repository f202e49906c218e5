use sk_content::{BOSS_ID, ids, room_id};
use sk_core::{ItemContainer, ItemId};
use sk_fiction::{Ending, GameConfig, GameSession, Response, ResponseKind};
use sk_mechanics::CombatConfig;

fn session(config: GameConfig) -> GameSession {
    GameSession::standard(config).unwrap()
}

fn ok(session: &mut GameSession, input: &str) -> Response {
    let response = session.process_command(input);
    assert_eq!(
        response.kind,
        ResponseKind::Success,
        "`{input}` failed: {}",
        response.text
    );
    response
}

fn fail(session: &mut GameSession, input: &str) -> Response {
    let response = session.process_command(input);
    assert_eq!(response.kind, ResponseKind::Failure, "`{input}` succeeded: {}", response.text);
    response
}

/// Walk from the crash site to the lair with three components.
fn reach_lair(session: &mut GameSession) {
    ok(session, "TAKE FLASHLIGHT");
    ok(session, "GO NORTH");
    ok(session, "GO NORTH");
    ok(session, "TAKE TOKENIZER");
    ok(session, "GO TO THE SOUTH");
    ok(session, "GO EAST");
    ok(session, "TAKE THE EMBEDDING");
    ok(session, "walk west");
    ok(session, "head northeast");
    ok(session, "grab the attention head");
    assert_eq!(session.player().component_count(), 3);
    ok(session, "sw");

    // Detour through the training wing for the debugger.
    ok(session, "se");
    ok(session, "s");
    ok(session, "e");
    assert_eq!(session.player().location, room_id(ids::FINETUNING_LAB));
    ok(session, "take the quantum debugger");
    ok(session, "w");
    ok(session, "n");
    ok(session, "nw");
    assert_eq!(session.player().location, room_id(ids::MEMORY_CORRIDOR));
    assert_eq!(session.player().component_count(), 3);

    // The archives are dark without the flashlight.
    ok(session, "drop flashlight");
    let blocked = fail(session, "go west");
    assert!(blocked.text.contains("LED flashlight"), "{}", blocked.text);
    assert_eq!(session.player().location, room_id(ids::MEMORY_CORRIDOR));
    ok(session, "pick up the flashlight");
    ok(session, "go west");
    assert_eq!(session.player().location, room_id(ids::DARK_ARCHIVES));

    ok(session, "nw");
    assert_eq!(session.player().location, room_id(ids::CORRUPTED_GATEWAY));

    // The corrupted code only parts for the debugger.
    ok(session, "drop debugger");
    let blocked = fail(session, "nw");
    assert!(blocked.text.contains("quantum debugger"), "{}", blocked.text);
    assert_eq!(session.player().location, room_id(ids::CORRUPTED_GATEWAY));
    ok(session, "take debugger");
    ok(session, "nw");
    assert_eq!(session.player().location, room_id(ids::VIRUS_LAIR));
}

/// Walk to the lair at tier 0, picking up only the flashlight and debugger.
fn walk_to_lair(session: &mut GameSession) {
    for step in [
        "take flashlight",
        "n",
        "se",
        "s",
        "e",
        "take debugger",
        "w",
        "n",
        "nw",
        "w",
        "nw",
        "nw",
    ] {
        ok(session, step);
    }
    assert_eq!(session.player().location, room_id(ids::VIRUS_LAIR));
}

/// Fight with Focused Attention until the fight is decided.
fn fight_with_attention(session: &mut GameSession) -> Response {
    let response = ok(session, "attack skoolach");
    assert!(response.text.contains("COMBAT INITIATED"));
    assert!(response.text.contains("4. Focused Attention"));
    assert!(session.in_combat());
    assert!(response.status.combat.is_some());

    for _ in 0..50 {
        let response = ok(session, "4");
        if response.game_over {
            return response;
        }
    }
    panic!("fight did not end within 50 turns");
}

#[test]
fn full_playthrough_to_victory() {
    // Default health and boss: three components are enough for most seeds.
    let mut won = None;
    for seed in 0..20 {
        let mut session = session(GameConfig::default().with_seed(seed));
        reach_lair(&mut session);
        assert_eq!(session.player().health, 100);

        let response = fight_with_attention(&mut session);
        match session.ending() {
            Some(Ending::Victory) => {
                assert!(response.text.contains("VICTORY"));
                won = Some(session);
                break;
            }
            Some(Ending::Defeat) => assert!(response.text.contains("GAME OVER")),
            other => panic!("unexpected ending {other:?}"),
        }
    }

    let mut session = won.expect("no seed in 0..20 won at default settings");
    assert_eq!(session.ending(), Some(Ending::Victory));
    assert!(session.player().health > 0);
    assert!(session.combat().is_some_and(|c| c.boss().health <= 0));
    let boss = ItemId::new(BOSS_ID);
    assert!(!session.current_room().unwrap().contains(&boss));
    assert!(session.process_command("look").is_silent());
}

#[test]
fn defeat_ends_the_game() {
    let mut session = session(GameConfig::default().with_seed(5).with_starting_health(1));
    reach_lair(&mut session);
    ok(&mut session, "attack virus");

    let response = ok(&mut session, "1");
    assert!(response.game_over);
    assert!(response.text.contains("GAME OVER"));
    assert_eq!(session.ending(), Some(Ending::Defeat));
}

#[test]
fn combat_input_handling() {
    let mut session = session(GameConfig::default().with_seed(9));
    reach_lair(&mut session);
    ok(&mut session, "fight skoolach");

    let response = fail(&mut session, "9");
    assert_eq!(response.text, "Invalid action number. Choose 1-4.");
    assert_eq!(session.combat().map(|c| c.turn()), Some(0));
    assert_eq!(session.player().health, 100);

    let response = fail(&mut session, "99999999999999999999");
    assert_eq!(response.text, "Invalid action number. Choose 1-4.");
    assert_eq!(session.combat().map(|c| c.turn()), Some(0));

    let response = fail(&mut session, "look around");
    assert!(response.text.contains("number of the action"));

    let response = ok(&mut session, "help");
    assert!(response.text.contains("1. Debug Attack"));

    assert!(session.process_command("   ").is_silent());

    ok(&mut session, "2");
    assert_eq!(session.combat().map(|c| c.turn()), Some(1));

    let response = ok(&mut session, "quit");
    assert!(response.game_over);
    assert_eq!(session.ending(), Some(Ending::Quit));
}

#[test]
fn weak_player_is_turned_away() {
    let mut session = session(GameConfig::default().with_seed(1));
    walk_to_lair(&mut session);

    let response = fail(&mut session, "attack skoolach");
    assert!(response.text.contains("too weak"));
    assert!(response.text.contains("only collected 0"));
    assert!(session.combat().is_none());
    assert_eq!(session.player().health, 100);
}

#[test]
fn easier_boss_config_is_respected() {
    let config = GameConfig::default()
        .with_seed(3)
        .with_combat(CombatConfig::default().with_min_components(0).with_boss_health(5));
    let mut session = session(config);
    walk_to_lair(&mut session);
    ok(&mut session, "attack skoolach");
    let response = ok(&mut session, "1");
    assert!(response.game_over);
    assert_eq!(session.ending(), Some(Ending::Victory));
}
