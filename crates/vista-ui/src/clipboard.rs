//! Clipboard capability used by text boxes for paste.

use crate::error::UiError;

/// Read access to a text clipboard.
pub trait Clipboard {
    fn read_text(&mut self) -> Result<String, UiError>;
}

/// Platform clipboard through `arboard`.
///
/// The handle is opened on first use and kept afterwards. Opening fails on
/// headless systems, which surfaces as [`UiError::ClipboardUnavailable`].
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for SystemClipboard {
    fn read_text(&mut self) -> Result<String, UiError> {
        let cb = match &mut self.inner {
            Some(cb) => cb,
            slot => slot.insert(
                arboard::Clipboard::new()
                    .map_err(|e| UiError::ClipboardUnavailable(e.to_string()))?,
            ),
        };
        cb.get_text().map_err(|e| UiError::ClipboardUnavailable(e.to_string()))
    }
}

/// In-memory clipboard for tests and scripted input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryClipboard {
    pub text: Option<String>,
}

impl MemoryClipboard {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: Some(text.into()) }
    }

    /// A clipboard whose reads always fail.
    pub fn empty() -> Self {
        Self { text: None }
    }
}

impl Clipboard for MemoryClipboard {
    fn read_text(&mut self) -> Result<String, UiError> {
        self.text
            .clone()
            .ok_or_else(|| UiError::ClipboardUnavailable("clipboard is empty".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_clipboard_reads_its_text() {
        let mut cb = MemoryClipboard::new("hello");
        assert_eq!(cb.read_text(), Ok("hello".to_string()));
    }

    #[test]
    fn empty_memory_clipboard_is_unavailable() {
        let mut cb = MemoryClipboard::empty();
        assert!(matches!(cb.read_text(), Err(UiError::ClipboardUnavailable(_))));
    }
}
