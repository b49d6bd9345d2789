use std::path::Path;

use anyhow::Result;
use chrono::Utc;
use runku_lib::storage::recent_activity;
use runku_lib::srs::study_stats_at;

use crate::app::App;
use crate::render::terminal::{bar, paint, Color};
use crate::OutputFormat;

const BAR_WIDTH: usize = 30;

pub fn run(
    app: &App,
    vocabulary_path: Option<&Path>,
    format: &OutputFormat,
    use_color: bool,
) -> Result<()> {
    let now = Utc::now();
    let records = app.load_records()?;
    let stats = study_stats_at(&records, now);
    let vocabulary = app.load_vocabulary(vocabulary_path)?;
    let unseen = vocabulary.as_ref().map(|v| stats.unseen(v.len()));

    let daily = app.load_daily_stats()?;
    let recent = recent_activity(&daily, now, app.config.recent_days);

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "stats": stats,
                "unseen": unseen,
                "recent": recent,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!("{}", paint("Study stats", Color::BOLD, use_color));
            println!("  Words studied  {}", stats.total);
            println!("  Learning       {}", paint(&stats.learning.to_string(), Color::RED, use_color));
            println!("  Review         {}", paint(&stats.review.to_string(), Color::YELLOW, use_color));
            println!("  Mastered       {}", paint(&stats.mastered.to_string(), Color::GREEN, use_color));
            println!("  Due now        {}", paint(&stats.due_today.to_string(), Color::CYAN, use_color));
            if let Some(unseen) = unseen {
                println!("  Not studied    {}", unseen);
            }

            println!();
            println!("{}", paint(&format!("Last {} days", recent.len()), Color::BOLD, use_color));

            let total_reviewed: u32 = recent.iter().map(|d| d.reviewed).sum();
            if total_reviewed == 0 {
                println!("  No reviews yet.");
                return Ok(());
            }

            let max_reviewed = recent.iter().map(|d| d.reviewed).max().unwrap_or(1).max(1);
            for day in &recent {
                let mut line = format!(
                    "  {}  {:<bw$} {:>3} reviewed",
                    day.date.format("%m-%d"),
                    bar(day.reviewed, max_reviewed, BAR_WIDTH),
                    day.reviewed,
                    bw = BAR_WIDTH
                );
                if day.new_words > 0 {
                    line.push_str(&format!(", {} new", day.new_words));
                }
                if day.speaking_practice > 0 {
                    line.push_str(&format!(", {} spoken", day.speaking_practice));
                }
                println!("{}", line);
            }

            println!("\n{} reviews total", total_reviewed);
        }
    }

    Ok(())
}
