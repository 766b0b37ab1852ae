use std::path::PathBuf;

use crate::error::{AppError, Result};

/// Rendered list ready to hand to an outside sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListDocument {
    pub title: String,
    pub file_name: String,
    pub content: String,
}

/// Destination for a rendered list: a download, the system share sheet,
/// the clipboard.
pub trait ListSink {
    fn deliver(&self, document: &ListDocument) -> Result<()>;
}

/// Writes the document into a directory under its export file name.
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, document: &ListDocument) -> PathBuf {
        self.dir.join(&document.file_name)
    }
}

impl ListSink for FileSink {
    fn deliver(&self, document: &ListDocument) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.path_for(document);
        std::fs::write(&path, &document.content)?;

        tracing::info!(path = %path.display(), "grocery list exported");

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Shared,
    Copied,
}

/// Share the document, falling back to the clipboard when sharing fails.
pub fn share_or_copy(
    share: &dyn ListSink,
    clipboard: &dyn ListSink,
    document: &ListDocument,
) -> Result<Delivery> {
    match share.deliver(document) {
        Ok(()) => Ok(Delivery::Shared),
        Err(err) => {
            tracing::warn!(error = %err, "share failed, copying to clipboard");
            clipboard
                .deliver(document)
                .map_err(|e| AppError::Sink(format!("clipboard copy failed: {e}")))?;
            Ok(Delivery::Copied)
        }
    }
}
