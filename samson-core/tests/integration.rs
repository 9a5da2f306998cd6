//! Integration Tests — End-to-End Conversation Flows
//!
//! These tests drive the public API the way the terminal front-end does:
//! greet, ingest user lines, walk, and check the walk only ever follows
//! successor pairs that exist in history.

use std::collections::HashSet;

use rand::SeedableRng;
use rand::rngs::StdRng;

use samson_core::config::SamsonConfig;
use samson_core::memory::SequenceMemory;
use samson_core::reply::{ReplyGenerator, WalkOutcome};
use samson_core::session::ChatSession;
use samson_core::types::Token;

/// Every adjacent (token, successor) pair in the memory, markers included.
fn successor_pairs(memory: &SequenceMemory) -> HashSet<(Token, Token)> {
    let tokens: Vec<Token> = memory.tokens().cloned().collect();
    tokens
        .windows(2)
        .map(|pair| (pair[0].clone(), pair[1].clone()))
        .collect()
}

/// Check that `reply` is a chain of known successor pairs starting after a
/// marker and, when it ended on one, finishing before a marker.
fn assert_walk_follows_history(memory: &SequenceMemory, words: &[String], outcome: WalkOutcome) {
    let pairs = successor_pairs(memory);
    let mut prev = Token::EndOfMessage;
    for word in words {
        let next = Token::word(word.as_str());
        assert!(
            pairs.contains(&(prev.clone(), next.clone())),
            "walk used unknown successor {prev:?} -> {next:?}"
        );
        prev = next;
    }
    if outcome == WalkOutcome::EndOfMessage {
        assert!(
            pairs.contains(&(prev.clone(), Token::EndOfMessage)),
            "walk ended after {prev:?}, which never closed a message"
        );
    }
}

// ---------------------------------------------------------------------------
// The cat scenario
// ---------------------------------------------------------------------------

#[test]
fn cat_scenario_walks_known_successors_and_terminates() {
    let mut memory = SequenceMemory::new();
    memory.ingest_message("the cat sat");
    memory.ingest_message("the cat ran");

    let generator = ReplyGenerator::new(Some(50));
    for seed in 0..64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let reply = generator.generate(&memory, &mut rng).expect("walk");

        // Every path through this history is "the cat (sat|ran)".
        assert_eq!(reply.outcome, WalkOutcome::EndOfMessage, "seed {seed}");
        assert_eq!(reply.tokens.len(), 3, "seed {seed}");
        assert_eq!(reply.tokens[0], "the");
        assert_eq!(reply.tokens[1], "cat");
        assert!(reply.tokens[2] == "sat" || reply.tokens[2] == "ran");
        assert_walk_follows_history(&memory, &reply.tokens, reply.outcome);
    }
}

#[test]
fn cat_scenario_reaches_both_endings() {
    let mut memory = SequenceMemory::new();
    memory.ingest_message("the cat sat");
    memory.ingest_message("the cat ran");

    let generator = ReplyGenerator::default();
    let endings: HashSet<String> = (0..200)
        .map(|seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            generator.generate(&memory, &mut rng).expect("walk").text()
        })
        .collect();

    assert!(endings.contains("the cat sat"));
    assert!(endings.contains("the cat ran"));
    assert_eq!(endings.len(), 2);
}

// ---------------------------------------------------------------------------
// Structure after many messages
// ---------------------------------------------------------------------------

#[test]
fn sequence_length_matches_token_counts() {
    let messages = ["hello world", "", "  a  b ", "one", "x y z w"];
    let mut memory = SequenceMemory::new();
    let mut words = 0;
    for msg in messages {
        words += memory.ingest_message(msg);
    }

    assert_eq!(words, 9);
    assert_eq!(memory.len(), 1 + words + messages.len());
    assert_eq!(memory.message_count(), messages.len());

    // One marker closes each message; the empty one leaves two in a row.
    let markers = memory.positions_of(&Token::EndOfMessage);
    assert_eq!(markers, &[0, 3, 4, 7, 9, 14]);
}

// ---------------------------------------------------------------------------
// Session flow
// ---------------------------------------------------------------------------

#[test]
fn conversation_replies_only_use_history() {
    let config = SamsonConfig::default();
    let mut session = ChatSession::from_seed(&config, 2024);
    session.greet();

    let lines = [
        "hello Samson",
        "I am a person",
        "are you a simple chatbot?",
        "",
        "I am fine, thanks. :)",
    ];
    for line in lines {
        let reply = session.respond(line).expect("respond");
        assert_walk_follows_history(session.memory(), &reply.tokens, reply.outcome);
        assert!(reply.tokens.len() <= 256);
    }

    let stats = session.stats();
    assert_eq!(stats.turns, lines.len() as u64);
    assert_eq!(session.memory().message_count(), lines.len() + 1);
}

#[test]
fn uncapped_session_still_terminates_under_fixed_seed() {
    let mut config = SamsonConfig::default();
    config.generation.max_reply_tokens = 0;
    let mut session = ChatSession::from_seed(&config, 7);
    session.greet();
    for line in ["I am I am I am", "a a a a", "am I?"] {
        let reply = session.respond(line).expect("respond");
        assert_ne!(reply.outcome, WalkOutcome::LengthCap);
    }
}

#[test]
fn capped_session_stops_at_cap() {
    let mut config = SamsonConfig::default();
    config.generation.max_reply_tokens = 1;
    let mut session = ChatSession::from_seed(&config, 3);
    session.greet();
    let reply = session.respond("anything").expect("respond");
    // The earlier markers are followed by the greeting or by
    // "anything", neither of which ends the message immediately.
    assert_eq!(reply.tokens.len(), 1);
    assert_eq!(reply.outcome, WalkOutcome::LengthCap);
}
