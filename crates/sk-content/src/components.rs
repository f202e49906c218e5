use sk_core::{ComponentKind, Item};

/// Build the item for one AI component.
pub fn component(kind: ComponentKind) -> Item {
    match kind {
        ComponentKind::Tokenizer => Item::component(
            kind,
            "Tokenizer Core",
            "A crystalline cube pulsing with soft blue light. Inside, sentences \
             split into words and word fragments, over and over.",
            "TOKENIZER\n\
             The first step in processing language. Raw text is cut into tokens:\n\
             whole words, pieces of words, punctuation. \"Hello, world!\" might\n\
             become [\"Hello\", \",\", \" world\", \"!\"].\n\
             Subword schemes such as BPE or WordPiece keep the vocabulary finite\n\
             while still handling words the model has never seen.",
        )
        .with_keywords(["cube", "core"]),
        ComponentKind::Embedding => Item::component(
            kind,
            "Embedding Layer",
            "A sphere threaded with a dense web of connections. Every word inside \
             hangs at a point in a space with far too many dimensions.",
            "EMBEDDINGS\n\
             Each token becomes a vector of numbers, often hundreds of them.\n\
             Words used in similar contexts end up with similar vectors, which is\n\
             why king - man + woman lands near queen. Embeddings are learned\n\
             during training and turn language into something math can touch.",
        )
        .with_keywords(["sphere", "layer"]),
        ComponentKind::Attention => Item::component(
            kind,
            "Attention Head",
            "A rotating torus. Beams of light leap between points on its surface, \
             brightest where two points matter most to each other.",
            "ATTENTION\n\
             For every token, attention asks which other tokens are relevant and\n\
             mixes their information in proportion. Queries are compared with keys,\n\
             the scores become weights, and the weights average the values.\n\
             Many heads run side by side, each learning a different kind of focus.",
        )
        .with_keywords(["torus", "head"]),
        ComponentKind::NeuralLayer => Item::component(
            kind,
            "Neural Network Layer",
            "A crystalline lattice of nodes and weighted edges. Activations ripple \
             through it like current through a circuit.",
            "NEURAL LAYERS\n\
             A layer multiplies its input by a weight matrix, adds a bias, and\n\
             applies a non-linear activation. Stacking layers lets the network\n\
             build complex features out of simple ones. A transformer block pairs\n\
             attention with a feed-forward layer and repeats dozens of times.",
        )
        .with_keywords(["lattice", "layer", "network"]),
        ComponentKind::TrainingData => Item::component(
            kind,
            "Training Data Archive",
            "A glowing archive of compressed text. Books, articles, code and \
             conversations flicker across its surface.",
            "TRAINING DATA\n\
             A model only knows what its data shows it. Pre-training corpora hold\n\
             billions of tokens of web pages, books and code. Quality matters as\n\
             much as quantity: duplicates, noise and bias in the data all end up\n\
             in the model.",
        )
        .with_keywords(["archive", "data"]),
        ComponentKind::Optimizer => Item::component(
            kind,
            "Optimizer Module",
            "A module wrapped in descending gradients. It hums a little quieter \
             every time the loss goes down.",
            "OPTIMIZERS\n\
             Training measures the error with a loss function, backpropagation\n\
             computes the gradient of that loss for every weight, and the optimizer\n\
             nudges each weight downhill. Adam adds momentum and per-weight step\n\
             sizes; the learning rate decides how big each nudge is.",
        )
        .with_keywords(["module", "gradient"]),
        ComponentKind::Inference => Item::component(
            kind,
            "Inference Engine",
            "A streamlined engine spitting out predictions one token at a time, \
             each fed back in as input for the next.",
            "INFERENCE\n\
             Once trained, the model generates text autoregressively: predict a\n\
             distribution over the next token, pick one, append it, repeat.\n\
             Temperature and top-p sampling trade predictability for variety, and\n\
             caching past keys and values keeps generation fast.",
        )
        .with_keywords(["engine"]),
        ComponentKind::Context => Item::component(
            kind,
            "Context Window",
            "A glowing frame holding a scrolling ribbon of text. Words fall off \
             the far end as new ones arrive.",
            "CONTEXT WINDOW\n\
             The context window is how many tokens the model can see at once.\n\
             Everything outside it is simply gone. Attention cost grows with the\n\
             square of the length, which is why long contexts need tricks such as\n\
             sparse attention or retrieval.",
        )
        .with_keywords(["window", "frame"]),
        ComponentKind::FineTuning => Item::component(
            kind,
            "Fine-tuning Module",
            "A calibration device covered in small dials, each one adjusted by \
             hand to match an example.",
            "FINE-TUNING\n\
             A pre-trained model knows language but not your task. Fine-tuning\n\
             continues training on a smaller, focused dataset: instructions,\n\
             preferred answers, a specific domain. Techniques such as RLHF and\n\
             low-rank adapters make it cheaper and steer behaviour.",
        )
        .with_keywords(["fine-tuning", "tuning", "calibration", "device"]),
    }
}
