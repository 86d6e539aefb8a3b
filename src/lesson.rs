mod chunk;
mod export;
mod frontmatter;
mod page;
mod recall;
mod segment;

pub use chunk::{Blank, ChunkData};
pub use export::{serialize_lesson, serialize_page, ExportError};
pub use page::{LessonData, PageData};
pub use recall::{
    blanked_word_indices, check_recall, generate_recall, RecallResult, RecallText, BLANK_MARKER,
};
pub use segment::{build_lesson, segment};
