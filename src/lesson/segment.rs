use rand::Rng;
use regex::Regex;

use super::chunk::ChunkData;
use super::page::{LessonData, PageData};
use super::recall::generate_recall;

/// Words per chunk the packer aims for. A single longer sentence still forms
/// its own chunk, so this is a target, not a cap.
const TARGET_WORD_COUNT: usize = 16;

/// Builds a full lesson from a title and raw text. The id is slugged from
/// the title; pages come from [`segment`].
pub fn build_lesson<R: Rng>(title: &str, content: &str, rng: &mut R) -> LessonData {
    let mut slugger = github_slugger::Slugger::default();

    LessonData {
        id: slugger.slug(title),
        title: title.to_string(),
        content: content.to_string(),
        pages: segment(content, rng),
    }
}

/// Splits raw text into pages (one per paragraph) of recall-ready chunks.
///
/// Paragraphs are blank-line separated; whitespace-only paragraphs are
/// dropped. Empty input yields an empty page list, which callers treat as
/// "no content" rather than an error. The page/chunk partition is
/// deterministic; only blank selection consumes the rng.
pub fn segment<R: Rng>(text: &str, rng: &mut R) -> Vec<PageData> {
    let paragraph_boundary = Regex::new(r"\n\s*\n").unwrap();

    paragraph_boundary
        .split(text)
        .filter(|paragraph| !paragraph.trim().is_empty())
        .enumerate()
        .map(|(index, paragraph)| PageData {
            id: format!("page-{}", index + 1),
            page_number: index + 1,
            chunks: chunk_paragraph(paragraph, index + 1, rng),
        })
        .collect()
}

/// Greedily packs a paragraph's sentences into chunks of roughly
/// TARGET_WORD_COUNT words each.
fn chunk_paragraph<R: Rng>(paragraph: &str, page_number: usize, rng: &mut R) -> Vec<ChunkData> {
    let sentences = split_sentences(paragraph);

    let mut chunks: Vec<ChunkData> = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut current_word_count = 0;

    for sentence in &sentences {
        let sentence_word_count = sentence.split_whitespace().count();

        // an empty chunk always accepts the sentence, so nothing is dropped
        if current_word_count + sentence_word_count <= TARGET_WORD_COUNT || current.is_empty() {
            current.push(sentence);
            current_word_count += sentence_word_count;
        } else {
            chunks.push(create_chunk(
                &current.join(" "),
                page_number,
                chunks.len() + 1,
                rng,
            ));
            current = vec![sentence];
            current_word_count = sentence_word_count;
        }
    }

    if !current.is_empty() {
        chunks.push(create_chunk(
            &current.join(" "),
            page_number,
            chunks.len() + 1,
            rng,
        ));
    }

    chunks
}

/// Sentence boundary = terminal punctuation followed by whitespace, with the
/// punctuation kept on the preceding sentence.
fn split_sentences(paragraph: &str) -> Vec<String> {
    let sentence_boundary = Regex::new(r"([.?!])\s+").unwrap();
    let marked = sentence_boundary.replace_all(paragraph, "$1\u{1f}");

    marked
        .split('\u{1f}')
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .map(str::to_string)
        .collect()
}

fn create_chunk<R: Rng>(text: &str, page_number: usize, ordinal: usize, rng: &mut R) -> ChunkData {
    let recall = generate_recall(text, rng);

    ChunkData {
        id: format!("page-{}-chunk-{}", page_number, ordinal),
        text: text.to_string(),
        recall_text: recall.text,
        blanks: recall.blanks,
    }
}
