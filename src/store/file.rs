//! JSON file persistence.

use async_trait::async_trait;
use chrono::Utc;
use std::path::PathBuf;
use tokio::fs;

use super::{Persistence, StoreResult};
use crate::household::HouseholdData;

/// Stores the household document as pretty-printed JSON at `path`.
#[derive(Debug, Clone)]
pub struct FilePersistence {
    path: PathBuf,
}

impl FilePersistence {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Where an unparsable document is moved before starting over.
    fn backup_path(&self) -> PathBuf {
        let stamp = Utc::now().format("%Y%m%dT%H%M%S%.3f");
        self.path.with_extension(format!("json.corrupt-{stamp}"))
    }
}

#[async_trait]
impl Persistence for FilePersistence {
    fn is_persistent(&self) -> bool {
        true
    }

    /// A missing file is created with the default document. A file that does
    /// not parse is renamed to a `.json.corrupt-<timestamp>` backup first, so
    /// no later write can overwrite it.
    async fn load(&self) -> StoreResult<HouseholdData> {
        match fs::read(&self.path).await {
            Ok(bytes) => match serde_json::from_slice::<HouseholdData>(&bytes) {
                Ok(data) => Ok(data),
                Err(e) => {
                    let backup = self.backup_path();
                    fs::rename(&self.path, &backup).await?;
                    tracing::warn!(
                        error = %e,
                        backup = %backup.display(),
                        "Household data at {} did not parse, moved it aside and starting empty",
                        self.path.display()
                    );
                    let data = HouseholdData::default();
                    self.save(&data).await?;
                    Ok(data)
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("No household data at {}, creating it", self.path.display());
                let data = HouseholdData::default();
                self.save(&data).await?;
                Ok(data)
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn save(&self, data: &HouseholdData) -> StoreResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }
        let bytes = serde_json::to_vec_pretty(data)?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, bytes).await?;
        fs::rename(&tmp_path, &self.path).await?;
        Ok(())
    }
}
