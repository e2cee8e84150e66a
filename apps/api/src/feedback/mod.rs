//! Feedback sink: appends one line per submission to a flat log file.
//!
//! Line format: `Name: <name>, Email: <email>, Comment: <comment>`.
//! Field contents are not escaped; line breaks inside a field become spaces so
//! every submission stays on a single line.

pub mod handlers;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::info;

#[derive(Debug, Error)]
pub enum FeedbackError {
    #[error("Comment cannot be empty.")]
    EmptyComment,

    #[error("failed to append feedback: {0}")]
    Io(#[from] std::io::Error),
}

/// Append-only feedback log. Clones share one write lock, so appends from
/// concurrent requests never interleave.
#[derive(Debug, Clone)]
pub struct FeedbackSink {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl FeedbackSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends a feedback line. A comment that is blank after trimming is
    /// rejected and nothing is written.
    pub async fn submit(&self, name: &str, email: &str, comment: &str) -> Result<(), FeedbackError> {
        if comment.trim().is_empty() {
            return Err(FeedbackError::EmptyComment);
        }

        let line = format_entry(name, email, comment);

        let _guard = self.write_lock.lock().await;
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;

        info!("Recorded feedback from {email}");
        Ok(())
    }
}

/// Builds one newline-terminated log line.
pub fn format_entry(name: &str, email: &str, comment: &str) -> String {
    format!(
        "Name: {}, Email: {}, Comment: {}\n",
        single_line(name),
        single_line(email),
        single_line(comment)
    )
}

fn single_line(field: &str) -> String {
    field.replace("\r\n", " ").replace(['\r', '\n'], " ")
}
