use anyhow::{Context, Result};
use chrono::Utc;
use runku_lib::srs::algorithm::format_interval;
use runku_lib::Familiarity;

use crate::app::App;
use crate::render::terminal::{familiarity_label, paint, Color};
use crate::OutputFormat;

pub fn run(
    app: &App,
    word: &str,
    rating: Familiarity,
    format: &OutputFormat,
    use_color: bool,
) -> Result<()> {
    let now = Utc::now();
    let record = app
        .session()
        .rate(word, rating.value(), now)
        .with_context(|| format!("Failed to rate '{}'", word))?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "word": word,
                "record": record,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!(
                "Rated {} as {}",
                paint(word, Color::BOLD, use_color),
                familiarity_label(record.familiarity, use_color)
            );
            println!("  Review #{}", record.review_count);
            if let Some(next) = record.next_review {
                println!(
                    "  Next review in {} ({})",
                    format_interval(record.last_interval),
                    next.format("%Y-%m-%d %H:%M UTC")
                );
            }
        }
    }

    Ok(())
}
