use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::Utc;
use runku_lib::storage::backup;

use crate::app::App;
use crate::OutputFormat;

pub fn run_export(app: &App, path: Option<PathBuf>, format: &OutputFormat) -> Result<()> {
    let now = Utc::now();
    let path = path.unwrap_or_else(|| PathBuf::from(backup::default_backup_file_name(now)));

    let bundle = backup::export(&app.store, now).context("Failed to read learning data")?;
    backup::write_backup(&path, &bundle)
        .with_context(|| format!("Failed to write backup to {}", path.display()))?;

    let record_count = bundle.learning_records.as_ref().map_or(0, |r| r.len());
    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "path": path.to_string_lossy(),
                "records": record_count,
                "exported_at": now.to_rfc3339(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!("Exported {} words to {}", record_count, path.display());
        }
    }

    Ok(())
}

pub fn run_import(app: &App, path: &Path, format: &OutputFormat) -> Result<()> {
    let bundle = backup::read_backup(path)
        .with_context(|| format!("Failed to read backup {}", path.display()))?;
    backup::import(&app.store, &bundle).context("Failed to import learning data")?;

    let record_count = bundle.learning_records.as_ref().map(|r| r.len());
    let day_count = bundle.daily_stats.as_ref().map(|s| s.len());
    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "records": record_count,
                "days": day_count,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            match record_count {
                Some(count) => println!("Imported {} words", count),
                None => println!("Backup has no learning records, kept existing ones"),
            }
            if let Some(days) = day_count {
                println!("Imported activity for {} days", days);
            }
        }
    }

    Ok(())
}

pub fn run_clear(app: &App, confirmed: bool) -> Result<()> {
    if !confirmed {
        bail!("This deletes all learning records and cannot be undone. Re-run with --yes to confirm.");
    }

    app.store.clear().context("Failed to clear learning data")?;
    println!("Cleared all learning data in {}", app.data_dir.display());
    Ok(())
}
