use crate::errors::AppError;
use crate::models::Document;
use crate::storage::persist_document;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub data: Arc<Mutex<Document>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, data: Document) -> Self {
        Self {
            data_path,
            data: Arc::new(Mutex::new(data)),
        }
    }

    pub async fn read<T>(&self, view: impl FnOnce(&Document) -> T) -> T {
        let data = self.data.lock().await;
        view(&data)
    }

    /// Applies `change` to a copy of the document, writes the copy to disk and
    /// only then swaps it in. The lock is held throughout, so writes are
    /// serialized and a failed write leaves memory as it was.
    pub async fn update<T, E>(
        &self,
        change: impl FnOnce(&mut Document) -> Result<T, E>,
    ) -> Result<T, AppError>
    where
        AppError: From<E>,
    {
        let mut data = self.data.lock().await;
        let mut next = data.clone();
        let output = change(&mut next)?;

        persist_document(&self.data_path, &next)
            .await
            .map_err(|err| err.with_message("Could not save entry."))?;
        *data = next;

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emotes::{record_emote, seed_teams};
    use crate::errors::EmoteError;
    use crate::storage::load_document;
    use axum::http::StatusCode;

    fn unique_dir(label: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!("mood_board_state_{label}_{}_{}", std::process::id(), nanos));
        path
    }

    fn red_state(dir: &std::path::Path) -> AppState {
        let mut data = Document::default();
        seed_teams(&mut data, ["red"]);
        AppState::new(dir.join("db.json"), data)
    }

    #[tokio::test]
    async fn update_commits_after_write() {
        let dir = unique_dir("commit");
        std::fs::create_dir_all(&dir).unwrap();
        let state = red_state(&dir);

        let entry = state
            .update(|data| record_emote(data, "red", "2024-01-01", "joy"))
            .await
            .unwrap();
        assert_eq!(entry.count("joy"), 1);

        let on_disk = load_document(&state.data_path).await;
        assert_eq!(state.read(|data| data.clone()).await, on_disk);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn failed_write_leaves_memory_untouched() {
        let dir = unique_dir("fail");
        let state = red_state(&dir);
        let before = state.read(|data| data.clone()).await;

        let err = state
            .update(|data| record_emote(data, "red", "2024-01-01", "joy"))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, "Could not save entry.");
        assert_eq!(state.read(|data| data.clone()).await, before);
    }

    #[tokio::test]
    async fn rejected_change_skips_the_write() {
        let dir = unique_dir("reject");
        let state = red_state(&dir);

        let err = state
            .update(|data| record_emote(data, "blue", "2024-01-01", "joy"))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert!(!state.data_path.exists());

        let err = state
            .update(|_| Err::<(), _>(EmoteError::MissingField("date")))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }
}
