use std::collections::BTreeMap;

use thiserror::Error;

use super::frontmatter::{ChunkMeta, Frontmatter};
use super::page::{LessonData, PageData};

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("failed to render page frontmatter: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("failed to render lesson JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Renders the lesson as the pretty-printed JSON blob the app persists.
pub fn serialize_lesson(lesson: &LessonData) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(lesson)?)
}

/// Renders one page as Markdown with YAML frontmatter. Each chunk's text is
/// followed by its recall variant as a blockquote.
pub fn serialize_page(page: &PageData, lesson_title: &str) -> Result<String, ExportError> {
    let mut fm: BTreeMap<&str, Frontmatter> = BTreeMap::new();
    fm.insert("title", Frontmatter::Title(lesson_title));
    fm.insert("id", Frontmatter::Id(page.id.as_str()));
    fm.insert("page_number", Frontmatter::PageNumber(page.page_number));

    let mut chunks = Vec::<ChunkMeta>::new();
    let mut page_body = String::with_capacity(200 * page.chunks.len());

    page.chunks.iter().for_each(|chunk| {
        chunks.push(ChunkMeta::new(
            chunk.id.as_str(),
            chunk.text.split(' ').count(),
            chunk.blanks.len(),
        ));

        page_body.push_str(&format!("{}\n\n> {}\n\n", chunk.text, chunk.recall_text));
    });

    fm.insert("chunks", Frontmatter::Chunks(chunks));

    Ok(format!(
        r#"---
{}---

{}"#,
        serde_yaml_ng::to_string(&fm)?,
        page_body
    ))
}
