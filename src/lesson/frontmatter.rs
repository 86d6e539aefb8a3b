use serde::Serialize;

#[derive(Serialize, Debug)]
#[serde(untagged)]
pub enum Frontmatter<'a> {
    Title(&'a str),
    Id(&'a str),
    PageNumber(usize),
    Chunks(Vec<ChunkMeta<'a>>),
}

#[derive(Serialize, Debug)]
pub struct ChunkMeta<'a> {
    id: &'a str,
    word_count: usize,
    blank_count: usize,
}

impl<'a> ChunkMeta<'a> {
    pub fn new(id: &'a str, word_count: usize, blank_count: usize) -> Self {
        Self {
            id,
            word_count,
            blank_count,
        }
    }
}
