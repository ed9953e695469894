use super::error::InfrastructureError;
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::fs;
use tokio::io::AsyncWriteExt;

// 同時に保存されても一時ファイルが衝突しないように
static STAGING_SEQ: AtomicU64 = AtomicU64::new(0);

/// Keeps the most recently coloured artwork on local disk so it can be
/// previewed and downloaded after the fill request returns.
pub struct LocalFileStorage {
    artwork_path: PathBuf,
}

impl LocalFileStorage {
    pub fn new(artwork_path: impl Into<PathBuf>) -> Self {
        Self { artwork_path: artwork_path.into() }
    }

    /// Replaces the stored artwork. Readers see either the old file or the new
    /// one, never a partly written PNG.
    pub async fn save_artwork(&self, data: &[u8]) -> Result<(), InfrastructureError> {
        let staging = self.staging_path(STAGING_SEQ.fetch_add(1, Ordering::Relaxed));
        let mut file = fs::File::create(&staging).await.map_err(InfrastructureError::IoError)?;
        file.write_all(data).await.map_err(InfrastructureError::IoError)?;
        file.flush().await.map_err(InfrastructureError::IoError)?;
        drop(file);

        if let Err(e) = fs::rename(&staging, &self.artwork_path).await {
            let _ = fs::remove_file(&staging).await;
            return Err(InfrastructureError::IoError(e));
        }
        Ok(())
    }

    // 同じディレクトリに置く (rename は同一ファイルシステム内でのみ原子的)
    fn staging_path(&self, seq: u64) -> PathBuf {
        let mut name = self.artwork_path.file_name().map(OsString::from).unwrap_or_default();
        name.push(format!(".{}.{}.tmp", std::process::id(), seq));
        self.artwork_path.with_file_name(name)
    }

    pub async fn read_artwork(&self) -> Result<Vec<u8>, InfrastructureError> {
        match fs::read(&self.artwork_path).await {
            Ok(data) => Ok(data),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(InfrastructureError::FileStorageError(
                "no artwork has been coloured yet".to_string(),
            )),
            Err(e) => Err(InfrastructureError::IoError(e)),
        }
    }
}
