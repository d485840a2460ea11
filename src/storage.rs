use crate::errors::AppError;
use crate::models::Document;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{error, warn};

/// Reads the document at `path`. A missing, unreadable, or malformed file
/// yields an empty store; a malformed one is first moved to `<path>.corrupt`
/// so the next persist cannot overwrite it.
pub async fn load_document(path: &Path) -> Document {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(data) => data,
            Err(err) => {
                error!("failed to parse data file {}: {err}", path.display());
                let backup = sibling_path(path, "corrupt");
                match fs::rename(path, &backup).await {
                    Ok(()) => warn!("moved unparseable data file to {}", backup.display()),
                    Err(err) => error!("failed to move aside data file: {err}"),
                }
                Document::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Document::default(),
        Err(err) => {
            error!("failed to read data file {}: {err}", path.display());
            Document::default()
        }
    }
}

/// Rewrites the whole document. The payload goes to a sibling file first
/// and is renamed into place.
pub async fn persist_document(path: &Path, data: &Document) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(data).map_err(AppError::internal)?;
    let tmp = sibling_path(path, "tmp");
    fs::write(&tmp, payload).await?;
    fs::rename(&tmp, path).await?;
    Ok(())
}

fn sibling_path(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_else(|| "db.json".into());
    name.push(".");
    name.push(suffix);
    path.with_file_name(name)
}
