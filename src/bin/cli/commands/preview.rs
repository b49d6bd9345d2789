use anyhow::Result;
use runku_lib::srs::algorithm::{format_interval, preview_intervals};
use runku_lib::Familiarity;

use crate::app::App;
use crate::render::terminal::familiarity_label;
use crate::OutputFormat;

pub fn run(app: &App, word: &str, format: &OutputFormat, use_color: bool) -> Result<()> {
    let records = app.load_records()?;
    let record = records.get(word).cloned().unwrap_or_default();
    let intervals = preview_intervals(record.review_count, record.last_interval);

    match format {
        OutputFormat::Json => {
            let options: Vec<serde_json::Value> = Familiarity::ALL
                .iter()
                .zip(intervals.iter())
                .map(|(level, days)| {
                    serde_json::json!({
                        "rating": level.value(),
                        "label": level.label(),
                        "interval_days": days,
                    })
                })
                .collect();
            let output = serde_json::json!({
                "word": word,
                "is_new": !records.contains_key(word),
                "review_count": record.review_count,
                "options": options,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            if records.contains_key(word) {
                println!("{} (reviewed {} times, last interval {})",
                    word, record.review_count, format_interval(record.last_interval));
            } else {
                println!("{} (new word)", word);
            }
            for (level, days) in Familiarity::ALL.iter().zip(intervals.iter()) {
                // Pad the plain label so colors don't break alignment
                let padding = " ".repeat(8usize.saturating_sub(level.label().len()));
                println!("  {} {}{}{}",
                    level.value(),
                    familiarity_label(level.value(), use_color),
                    padding,
                    format_interval(*days));
            }
        }
    }

    Ok(())
}
