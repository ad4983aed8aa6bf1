//! Clipboard seam used by `Action::Copy`.

/// Destination for copied code. Writes are fire-and-forget: the dispatcher
/// logs a failure and moves on.
pub trait ClipboardSink {
    fn copy(&mut self, text: &str) -> anyhow::Result<()>;
}

/// Keeps every copied payload in memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    copies: Vec<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&str> {
        self.copies.last().map(String::as_str)
    }

    pub fn copies(&self) -> &[String] {
        &self.copies
    }
}

impl ClipboardSink for MemoryClipboard {
    fn copy(&mut self, text: &str) -> anyhow::Result<()> {
        self.copies.push(text.to_string());
        Ok(())
    }
}
