use anyhow::Result;
use chrono::Utc;
use runku_lib::due_words;

use crate::app::App;
use crate::render::terminal::{familiarity_label, paint, truncate, Color};
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let records = app.load_records()?;
    let mut due = due_words(&records, Utc::now());

    // Never-scheduled words first, then oldest due date
    due.sort_by(|a, b| {
        a.record
            .next_review
            .cmp(&b.record.next_review)
            .then_with(|| a.word.cmp(&b.word))
    });

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&due)?);
        }
        OutputFormat::Plain => {
            if due.is_empty() {
                println!("Nothing due. {} words scheduled.", records.len());
                return Ok(());
            }

            let word_width = due.iter().map(|d| d.word.chars().count()).max().unwrap_or(4).min(30).max(4);
            let rating_width = 8;

            println!("{:<ww$} {:<rw$} {:>7} {}",
                "Word", "Rating", "Reviews", "Due since",
                ww = word_width, rw = rating_width);
            println!("{} {} {} {}",
                "\u{2500}".repeat(word_width),
                "\u{2500}".repeat(rating_width),
                "\u{2500}".repeat(7),
                "\u{2500}".repeat(16));

            for item in &due {
                let since = match item.record.next_review {
                    Some(next) => next.format("%Y-%m-%d %H:%M").to_string(),
                    None => paint("never scheduled", Color::DIM, use_color),
                };
                // Pad the plain label so colors don't break alignment
                let label = familiarity_label(item.record.familiarity, false);
                let padding = " ".repeat(rating_width.saturating_sub(label.chars().count()));
                println!("{:<ww$} {}{} {:>7} {}",
                    truncate(&item.word, word_width),
                    familiarity_label(item.record.familiarity, use_color),
                    padding,
                    item.record.review_count,
                    since,
                    ww = word_width);
            }

            println!("\n{} words due", due.len());
        }
    }

    Ok(())
}
