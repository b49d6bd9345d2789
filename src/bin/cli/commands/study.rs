use std::path::Path;

use anyhow::Result;
use chrono::Utc;
use runku_lib::StudyMode;

use crate::app::App;
use crate::render::terminal::{paint, truncate, Color};
use crate::OutputFormat;

pub fn run(
    app: &App,
    mode: StudyMode,
    vocabulary_path: Option<&Path>,
    limit: Option<usize>,
    format: &OutputFormat,
    use_color: bool,
) -> Result<()> {
    let vocabulary = app.require_vocabulary(vocabulary_path)?;
    let records = app.load_records()?;

    let mut words = vocabulary.filter(mode, &records, Utc::now());
    let matched = words.len();
    if let Some(limit) = limit {
        words.truncate(limit);
    }

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&words)?);
        }
        OutputFormat::Plain => {
            if words.is_empty() {
                println!("No words to study in {:?} mode.", mode);
                return Ok(());
            }

            let word_width = words.iter().map(|w| w.english.chars().count()).max().unwrap_or(4).min(30).max(4);

            for word in &words {
                let padding = " ".repeat(word_width.saturating_sub(word.english.chars().count().min(word_width)));
                let category = word
                    .category
                    .as_deref()
                    .map(|c| paint(&format!(" ({})", c), Color::DIM, use_color))
                    .unwrap_or_default();
                println!("{}{} {}{}",
                    paint(&truncate(&word.english, word_width), Color::BOLD, use_color),
                    padding,
                    word.chinese,
                    category);
            }

            if matched > words.len() {
                println!("\n{} of {} words shown", words.len(), matched);
            } else {
                println!("\n{} words", matched);
            }
        }
    }

    Ok(())
}
