use std::path::{Path, PathBuf};

use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{info, warn};

use crate::error::AppError;

/// Writes a calendar payload to `path`, replacing any existing file.
///
/// The payload goes to a sibling `.tmp` file first and is renamed into place,
/// so a partial write never leaves a truncated calendar behind.
pub async fn download(payload: &str, path: impl AsRef<Path>) -> Result<PathBuf, AppError> {
    let path = path.as_ref();
    if payload.is_empty() {
        return Err(AppError::export_failure("refusing to write an empty calendar"));
    }

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| AppError::export_failure(format!("invalid file path '{}'", path.display())))?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    if !dir.exists() {
        fs::create_dir_all(&dir).await?;
    }

    let target = dir.join(file_name);
    let temp = dir.join(format!("{file_name}.tmp"));

    let written = async {
        write_temp(&temp, payload).await?;
        fs::rename(&temp, &target).await
    }
    .await;

    if let Err(e) = written {
        if let Err(cleanup) = fs::remove_file(&temp).await
            && cleanup.kind() != std::io::ErrorKind::NotFound
        {
            warn!("Could not remove {}: {cleanup}", temp.display());
        }
        return Err(e.into());
    }

    info!("Calendar written to {}", target.display());
    Ok(target)
}

async fn write_temp(temp: &Path, payload: &str) -> std::io::Result<()> {
    let mut file = fs::File::create(temp).await?;
    file.write_all(payload.as_bytes()).await?;
    file.flush().await?;
    file.sync_all().await
}
