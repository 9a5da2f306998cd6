//! Shared fixtures for the Samson benchmarks.

use samson_core::memory::SequenceMemory;

const WORDS: [&str; 12] = [
    "the", "cat", "sat", "on", "a", "mat", "and", "dog", "ran", "to", "its", "hat",
];

/// A pseudo-conversational line built from a fixed vocabulary.
#[must_use]
pub fn make_message(i: usize) -> String {
    let len = 3 + i % 9;
    (0..len)
        .map(|k| WORDS[(i * 7 + k * 5) % WORDS.len()])
        .collect::<Vec<_>>()
        .join(" ")
}

/// A memory holding `messages` ingested lines.
#[must_use]
pub fn make_memory(messages: usize) -> SequenceMemory {
    let mut memory = SequenceMemory::new();
    for i in 0..messages {
        memory.ingest_message(&make_message(i));
    }
    memory
}
