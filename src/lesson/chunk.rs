use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ChunkData {
    /// chunk id, unique within the lesson
    pub id: String,

    /// original span of source text
    pub text: String,

    /// `text` with selected words replaced by the blank marker
    pub recall_text: String,

    /// one descriptor per blanked word, in word order
    pub blanks: Vec<Blank>,
}

/// A word hidden in the recall text. `start_index`/`end_index` are character
/// offsets of the word within the chunk's `text`, half-open.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Blank {
    pub word: String,
    pub start_index: usize,
    pub end_index: usize,
}
