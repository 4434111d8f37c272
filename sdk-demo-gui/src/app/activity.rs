/// Ordered record of the events reported by the panels.
///
/// Entries are only ever appended, the whole log can be cleared at once.
/// Display index is the 1-based position of the entry.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ActivityLog(Vec<String>);

impl ActivityLog {
    pub fn append(&mut self, message: impl Into<String>) {
        self.0.push(message.into());
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in display order with their 1-based index.
    pub fn entries(&self) -> impl Iterator<Item = (usize, &str)> {
        self.0.iter().enumerate().map(|(i, m)| (i + 1, m.as_str()))
    }
}
