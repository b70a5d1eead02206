use super::types::{EntryDefaults, EntryOptions, QueueEntry};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueueError {
    #[error("No entry at position {position} (queue has {len} entries)")]
    OutOfRange { position: usize, len: usize },
}

/// Ordered list of pending jobs. Positions handed in and out are 1-based, matching the listing.
#[derive(Debug, Clone, Default)]
pub struct Queue {
    entries: Vec<QueueEntry>,
    defaults: EntryDefaults,
}

impl Queue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_defaults(defaults: EntryDefaults) -> Self {
        Self {
            entries: Vec::new(),
            defaults,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn snapshot(&self) -> &[QueueEntry] {
        &self.entries
    }

    /// Whether some entry already uses `name` as its input
    pub fn contains_input(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.input() == name)
    }

    pub fn get(&self, position: usize) -> Result<&QueueEntry, QueueError> {
        let index = self.index_of(position)?;
        Ok(&self.entries[index])
    }

    pub fn add_entry(
        &mut self,
        input: impl Into<String>,
        crf: u32,
        options: EntryOptions,
    ) -> &QueueEntry {
        let entry = QueueEntry::new(input, crf, options, &self.defaults);
        tracing::info!(
            input = entry.input(),
            output = %entry.output,
            crf = entry.crf,
            video_library = %entry.video_library,
            "queued entry"
        );
        self.entries.push(entry);
        &self.entries[self.entries.len() - 1]
    }

    pub fn remove_entry(&mut self, position: usize) -> Result<QueueEntry, QueueError> {
        let index = self.index_of(position)?;
        let removed = self.entries.remove(index);
        tracing::info!(position, input = removed.input(), "removed entry");
        Ok(removed)
    }

    pub fn update_crf(&mut self, position: usize, crf: u32) -> Result<(), QueueError> {
        let index = self.index_of(position)?;
        let entry = &mut self.entries[index];
        tracing::info!(position, old = entry.crf, new = crf, "changed crf");
        entry.crf = crf;
        Ok(())
    }

    fn index_of(&self, position: usize) -> Result<usize, QueueError> {
        if position == 0 || position > self.entries.len() {
            return Err(QueueError::OutOfRange {
                position,
                len: self.entries.len(),
            });
        }
        Ok(position - 1)
    }
}
