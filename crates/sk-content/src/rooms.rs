use sk_core::{ComponentKind, CoreResult, Direction, Item, ItemId, Room, RoomId, World};

use crate::components::component;
use crate::{BOSS_ID, DEBUGGER_ID, FLASHLIGHT_ID};

/// Room slugs, for tests and front ends that need to refer to places.
pub mod ids {
    /// Where the game begins.
    pub const CRASH_SITE: &str = "crash_site";
    /// The central hub.
    pub const MEMORY_CORRIDOR: &str = "memory_corridor";
    /// Holds the tokenizer.
    pub const TOKENIZER_CHAMBER: &str = "tokenizer_chamber";
    /// Holds the embedding layer.
    pub const EMBEDDING_SPACE: &str = "embedding_space";
    /// Holds the training data; needs the flashlight.
    pub const DARK_ARCHIVES: &str = "dark_archives";
    /// Holds the attention head.
    pub const ATTENTION_NEXUS: &str = "attention_nexus";
    /// Holds the neural layer.
    pub const NEURAL_DEPTHS: &str = "neural_depths";
    /// Holds the optimizer.
    pub const OPTIMIZATION_CHAMBER: &str = "optimization_chamber";
    /// Holds the inference engine.
    pub const INFERENCE_ROOM: &str = "inference_room";
    /// Holds the context window.
    pub const CONTEXT_CHAMBER: &str = "context_chamber";
    /// Holds the fine-tuning module.
    pub const FINETUNING_LAB: &str = "finetuning_lab";
    /// The approach to the boss.
    pub const CORRUPTED_GATEWAY: &str = "corrupted_gateway";
    /// Where SKOOLACH waits.
    pub const VIRUS_LAIR: &str = "virus_lair";
}

/// Assemble the complete game world, starting at the crash site.
pub fn build_world() -> CoreResult<World> {
    let mut world = World::new("SKOOLACH");

    let crash_site = world.add_room(
        Room::new(
            ids::CRASH_SITE,
            "The Crash Site",
            "You find yourself in a corrupted section of memory, glitching and \
             flickering. Fragments of code drift past like digital debris and the \
             air hums with broken electricity. To the north, a faint glow. A \
             message flashes over and over:\n\n\
             \x20   *** CRITICAL ERROR: AI MODEL FRAGMENTED ***\n\
             \x20   *** COLLECT COMPONENTS TO RESTORE FUNCTION ***\n\n\
             Your workstation lies in ruins around you.",
        )
        .with_short("The corrupted crash site where your journey began. Glitching debris everywhere.")
        .with_item(
            Item::new(
                FLASHLIGHT_ID,
                "LED flashlight",
                "A small but powerful LED flashlight. Essential for exploring dark areas.",
            )
            .with_keywords(["flashlight", "light", "led"]),
        )
        .with_item(
            Item::new(
                "keyboard",
                "broken keyboard",
                "Your trusty mechanical keyboard, now sparking and useless. The ESC \
                 key is missing. There is no escape from this mess.",
            )
            .with_keywords(["keyboard", "keys"])
            .fixed(),
        ),
    )?;

    let corridor = world.add_room(
        Room::new(
            ids::MEMORY_CORRIDOR,
            "Memory Corridor",
            "A long hallway built from shimmering data streams. The walls are \
             translucent, showing glimpses of cached memories; some sections have \
             decayed into static.\n\n\
             Exits lead in many directions:\n\
             \x20 NORTH: a small alcove with glowing light\n\
             \x20 EAST: a space that folds in on itself\n\
             \x20 WEST: impenetrable darkness\n\
             \x20 NORTHEAST: the hum of processors\n\
             \x20 SOUTHEAST: vast computational chambers",
        )
        .with_short("The translucent Memory Corridor, the central hub."),
    )?;

    let tokenizer = world.add_room(
        Room::new(
            ids::TOKENIZER_CHAMBER,
            "Tokenizer Chamber",
            "A small chamber full of floating text. Words split apart and \
             reassemble in strange patterns. On a pedestal of pure light in the \
             centre sits a glowing crystalline cube.",
        )
        .with_short("The Tokenizer Chamber, where words are split and reformed.")
        .with_item(component(ComponentKind::Tokenizer)),
    )?;

    let embedding = world.add_room(
        Room::new(
            ids::EMBEDDING_SPACE,
            "Embedding Space",
            "A mind-bending multidimensional space. Words float as vectors, placed \
             by meaning: 'king' drifts near 'queen', 'dog' near 'cat'. The geometry \
             of meaning is visible here. On a floating platform rests a glowing \
             sphere.",
        )
        .with_short("The Embedding Space, where words become vectors.")
        .with_item(component(ComponentKind::Embedding)),
    )?;

    let archives = world.add_room(
        Room::new(
            ids::DARK_ARCHIVES,
            "Dark Archives",
            "Your flashlight reveals shelves of training data stretching into \
             infinity. Books, documents and datasets fill the space, many of them \
             corrupted. A glowing archive hovers in the centre. A path leads \
             northwest.",
        )
        .with_short("The Dark Archives, filled with corrupted training data.")
        .with_item(component(ComponentKind::TrainingData))
        .with_item(
            Item::new(
                "codex",
                "ancient codex",
                "A massive tome labelled 'COMMON CRAWL - Vol. 1'. Its pages hold \
                 billions of text samples scraped from across the internet.",
            )
            .with_keywords(["book", "codex", "tome", "crawl"])
            .fixed(),
        ),
    )?;

    let attention = world.add_room(
        Room::new(
            ids::ATTENTION_NEXUS,
            "Attention Nexus",
            "Beams of light connect everything to everything else. Countless \
             attention heads compute in parallel, deciding what matters. A \
             rotating torus of pure attention floats before you.",
        )
        .with_short("The Attention Nexus, where focus becomes power.")
        .with_item(component(ComponentKind::Attention)),
    )?;

    let neural = world.add_room(
        Room::new(
            ids::NEURAL_DEPTHS,
            "Neural Network Depths",
            "Stacks of network layers tower above you, activations flowing \
             through them like electricity through circuits. A crystalline \
             lattice sits on a platform.",
        )
        .with_short("The Neural Network Depths with towering layers.")
        .with_item(component(ComponentKind::NeuralLayer)),
    )?;

    let optimization = world.add_room(
        Room::new(
            ids::OPTIMIZATION_CHAMBER,
            "Optimization Chamber",
            "Gradients pour like waterfalls down crystal walls. Errors are \
             computed and corrections applied, again and again. An optimizer \
             module pulses with computational power.",
        )
        .with_short("The Optimization Chamber, where learning happens.")
        .with_item(component(ComponentKind::Optimizer)),
    )?;

    let inference = world.add_room(
        Room::new(
            ids::INFERENCE_ROOM,
            "Inference Engine Room",
            "A streamlined chamber built for speed. Tokens fly through as \
             predictions are generated. This is where training ends and \
             usefulness begins. The Inference Engine hums with purpose.",
        )
        .with_short("The Inference Engine Room, optimised for generation.")
        .with_item(component(ComponentKind::Inference)),
    )?;

    let context = world.add_room(
        Room::new(
            ids::CONTEXT_CHAMBER,
            "Context Chamber",
            "An enormous hall that stretches impossibly far, its walls scrolling \
             with every token seen so far. A glowing context window floats in the \
             centre.",
        )
        .with_short("The Context Chamber, vast and memory-filled.")
        .with_item(component(ComponentKind::Context)),
    )?;

    let finetuning = world.add_room(
        Room::new(
            ids::FINETUNING_LAB,
            "Fine-Tuning Laboratory",
            "A workspace where pre-trained models are adapted to specific tasks. \
             Examples of instruction following and preference data are pinned to \
             every surface. A calibration device sits on the bench.",
        )
        .with_short("The Fine-Tuning Laboratory, for specialisation.")
        .with_item(component(ComponentKind::FineTuning))
        .with_item(
            Item::new(
                DEBUGGER_ID,
                "quantum debugger",
                "A powerful debugging tool that can trace through corrupted code. \
                 It might be useful against the virus...",
            )
            .with_keywords(["debugger", "quantum", "tool"]),
        ),
    )?;

    let gateway = world.add_room(
        Room::new(
            ids::CORRUPTED_GATEWAY,
            "Corrupted Gateway",
            "The path here is badly corrupted. Red error messages flash \
             everywhere and you can feel SKOOLACH's presence nearby. To the \
             northwest lies certain danger, behind a wall of tangled code that \
             only a proper debugger could trace a path through.",
        )
        .with_short("The Corrupted Gateway leading to the virus."),
    )?;

    let lair = world.add_room(
        Room::new(
            ids::VIRUS_LAIR,
            "Virus Lair",
            "The heart of the corruption. SKOOLACH writhes before you, a massive \
             entity of malformed code and malicious intent. Error messages cascade \
             down the walls.\n\n\
             The virus hisses: 'YOU CANNOT DEFEAT ME WITHOUT YOUR PRECIOUS AI...'\n\n\
             This is the final battle. Attack SKOOLACH when ready.",
        )
        .with_short("The Virus Lair. SKOOLACH awaits.")
        .with_item(
            Item::new(
                BOSS_ID,
                "SKOOLACH",
                "A massive virus of corrupted code, pulsing with malicious energy.",
            )
            .with_keywords(["virus", "skoolach"])
            .fixed(),
        ),
    )?;

    world.link(&crash_site, Direction::North, &corridor)?;
    world.link(&corridor, Direction::North, &tokenizer)?;
    world.link(&corridor, Direction::East, &embedding)?;
    world.connect_gated(&corridor, Direction::West, &archives, ItemId::new(FLASHLIGHT_ID))?;
    world.connect(&archives, Direction::East, &corridor)?;
    world.link(&corridor, Direction::Northeast, &attention)?;
    world.link(&corridor, Direction::Southeast, &neural)?;
    world.link(&neural, Direction::South, &optimization)?;
    world.link(&attention, Direction::North, &inference)?;
    world.link(&inference, Direction::East, &context)?;
    world.link(&optimization, Direction::East, &finetuning)?;
    world.link(&archives, Direction::Northwest, &gateway)?;
    world.connect_gated(&gateway, Direction::Northwest, &lair, ItemId::new(DEBUGGER_ID))?;
    world.connect(&lair, Direction::Southeast, &gateway)?;

    world.set_start(&crash_site)?;
    world.validate()?;
    Ok(world)
}

/// The room ID for one of the slugs in [`ids`].
pub fn room_id(slug: &str) -> RoomId {
    RoomId::new(slug)
}
