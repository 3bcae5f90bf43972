use std::sync::{Arc, Mutex};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard write failed: {0}")]
    Write(String),
}

/// Write-only clipboard used when copying a row.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// System clipboard using arboard. Opened on first use.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self { inner: None }
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.inner.is_none() {
            let clipboard = arboard::Clipboard::new()
                .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            self.inner = Some(clipboard);
        }
        match self.inner.as_mut() {
            Some(clipboard) => clipboard
                .set_text(text.to_string())
                .map_err(|e| ClipboardError::Write(e.to_string())),
            None => Err(ClipboardError::Unavailable("not initialized".to_string())),
        }
    }
}

/// In-memory clipboard keeping every write. Clones share the same history.
#[derive(Clone, Default)]
pub struct MemoryClipboard {
    history: Arc<Mutex<Vec<String>>>,
    fail_with: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard whose writes always fail with `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            history: Arc::default(),
            fail_with: Some(reason.into()),
        }
    }

    pub fn history(&self) -> Vec<String> {
        self.history.lock().map(|h| h.clone()).unwrap_or_default()
    }

    pub fn last(&self) -> Option<String> {
        self.history().pop()
    }
}

impl Clipboard for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if let Some(reason) = &self.fail_with {
            return Err(ClipboardError::Write(reason.clone()));
        }
        let mut history = self
            .history
            .lock()
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        history.push(text.to_string());
        Ok(())
    }
}
