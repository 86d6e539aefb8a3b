use std::io::Write;
use std::{
    env,
    fs::{self, OpenOptions},
    path::Path,
};

use anyhow::Context;
use memty::lesson::{build_lesson, serialize_lesson, serialize_page, LessonData, PageData};

const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";
const DEFAULT_OUTPUT_DIR: &str = "output/lesson";

pub struct Config {
    pub input_path: String,
    pub title: Option<String>,
    pub output_dir: String,
}

fn parse_config(mut args: impl Iterator<Item = String>) -> anyhow::Result<Config> {
    let input_path = args
        .next()
        .context("input file is required, pass a path to a plain-text lesson source")?;
    let title = args.next();
    let output_dir = args.next().unwrap_or(DEFAULT_OUTPUT_DIR.to_string());

    Ok(Config {
        input_path,
        title,
        output_dir,
    })
}

fn main() -> anyhow::Result<()> {
    let args = env::args().skip(1);

    let config = match parse_config(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Usage: cargo run --bin build_lesson <input.txt> [title] [output_dir]");
            return Err(e);
        }
    };

    let content = fs::read_to_string(&config.input_path)
        .context(format!("failed to read {}", config.input_path))?;

    let title = config.title.clone().unwrap_or_else(|| {
        Path::new(&config.input_path)
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| String::from("untitled"))
    });

    let mut rng = rand::thread_rng();
    let lesson = build_lesson(&title, &content, &mut rng);

    create_output_dir(&config.output_dir).context("failed to create output directory")?;

    write_lesson_json(&lesson, &config.output_dir).context("failed to write lesson.json")?;

    for page in &lesson.pages {
        write_page(page, &lesson.title, &config.output_dir)
            .context(format!("failed to write page {}", page.id))?;
    }

    let chunk_count: usize = lesson.pages.iter().map(|page| page.chunks.len()).sum();
    println!(
        "created {BOLD}{}{RESET} pages ({BOLD}{}{RESET} chunks) in {BOLD}{}{RESET}",
        lesson.pages.len(),
        chunk_count,
        &config.output_dir
    );

    Ok(())
}

fn write_lesson_json(lesson: &LessonData, output_dir: &str) -> anyhow::Result<()> {
    let mut file = OpenOptions::new()
        .create_new(true)
        .write(true)
        .open(format!("{}/lesson.json", output_dir))
        .context("failed to open file for lesson.json")?;

    let content = serialize_lesson(lesson).context("failed to serialize lesson")?;
    write!(file, "{}", content)?;

    Ok(())
}

fn write_page(page: &PageData, lesson_title: &str, output_dir: &str) -> anyhow::Result<()> {
    let mut file = OpenOptions::new()
        .create_new(true)
        .write(true)
        .open(format!("{}/{}.md", output_dir, page.id))
        .context(format!("failed to open file for {}", page.id))?;

    let content = serialize_page(page, lesson_title).context("failed to serialize page")?;
    write!(file, "{}", content)?;

    Ok(())
}

fn create_output_dir(output_dir: &str) -> anyhow::Result<()> {
    if fs::metadata(output_dir).is_ok() {
        fs::remove_dir_all(output_dir)?;
    }

    fs::create_dir_all(output_dir)?;
    Ok(())
}
