use serde::{Deserialize, Serialize};

use super::ChunkData;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LessonData {
    /// lesson id, slugged from the title
    pub id: String,

    pub title: String,

    /// raw source text the lesson was built from
    pub content: String,

    /// one page per source paragraph, in source order
    pub pages: Vec<PageData>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PageData {
    pub id: String,

    /// 1-based position in the source text
    pub page_number: usize,

    /// ordered recall units for this page
    pub chunks: Vec<ChunkData>,
}
