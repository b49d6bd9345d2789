use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use runku_lib::storage::DailyStats;
use runku_lib::{Config, FileStore, LearningStore, RecordCollection, ReviewSession, Vocabulary};

/// Shared application state for CLI commands
pub struct App {
    pub config: Config,
    pub data_dir: PathBuf,
    pub store: LearningStore<FileStore>,
}

impl App {
    /// Load config and open the learning store
    pub fn new(data_dir: Option<&Path>, config_path: Option<&Path>) -> Result<Self> {
        let config_path = match config_path {
            Some(path) => path.to_path_buf(),
            None => Config::default_path().context("Failed to get config directory")?,
        };
        let config = Config::load(&config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

        let data_dir = config
            .resolve_data_dir(data_dir)
            .context("Failed to get data directory")?;
        log::debug!("Using data directory {}", data_dir.display());

        let store = LearningStore::new(FileStore::new(data_dir.clone()));

        Ok(Self {
            config,
            data_dir,
            store,
        })
    }

    pub fn session(&self) -> ReviewSession<'_, FileStore> {
        ReviewSession::new(&self.store)
    }

    pub fn load_records(&self) -> Result<RecordCollection> {
        self.store
            .load_records()
            .context("Failed to load learning records")
    }

    pub fn load_daily_stats(&self) -> Result<DailyStats> {
        self.store
            .load_daily_stats()
            .context("Failed to load daily stats")
    }

    /// Word list from an explicit path or the configured one, if any
    pub fn load_vocabulary(&self, path: Option<&Path>) -> Result<Option<Vocabulary>> {
        let Some(path) = path.or(self.config.vocabulary_path.as_deref()) else {
            return Ok(None);
        };

        let vocabulary = Vocabulary::load(path)
            .with_context(|| format!("Failed to load word list from {}", path.display()))?;
        Ok(Some(vocabulary))
    }

    /// Word list that must be available for the command to run
    pub fn require_vocabulary(&self, path: Option<&Path>) -> Result<Vocabulary> {
        match self.load_vocabulary(path)? {
            Some(vocabulary) => Ok(vocabulary),
            None => bail!("No word list given. Pass --vocabulary or set vocabulary_path in config."),
        }
    }
}
