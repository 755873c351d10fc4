use super::TableSource;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Table stored on the local filesystem
pub struct LocalTableSource {
    path: PathBuf,
    display: String,
}

impl LocalTableSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let display = path.display().to_string();
        Self { path, display }
    }
}

#[async_trait]
impl TableSource for LocalTableSource {
    async fn fetch(&self) -> Result<Vec<u8>> {
        tokio::fs::read(&self.path)
            .await
            .with_context(|| format!("failed to read {}", self.display))
    }

    fn describe(&self) -> &str {
        &self.display
    }
}
