use anyhow::{Context, Result};
use chrono::Utc;
use runku_lib::storage::{day_key, ActivityKind};

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat) -> Result<()> {
    let now = Utc::now();
    app.session()
        .log_activity(ActivityKind::SpeakingPractice, now)
        .context("Failed to record speaking practice")?;

    let daily = app.load_daily_stats()?;
    let today = daily.get(&day_key(now.date_naive())).copied().unwrap_or_default();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&today)?);
        }
        OutputFormat::Plain => {
            println!("Speaking practice recorded ({} today)", today.speaking_practice);
        }
    }

    Ok(())
}
