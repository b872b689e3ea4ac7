//! Ordered record storage

/// Ordered append-only (with pop) container for produced records
///
/// Records keep strict insertion order and are never rolled back on
/// error; the store is cleared once per read cycle, before any line is
/// processed.
#[derive(Debug, Clone)]
pub struct RecordStore<R> {
    records: Vec<R>,
}

impl<R> RecordStore<R> {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a record
    pub fn push(&mut self, record: R) {
        self.records.push(record);
    }

    /// Remove and return the newest record
    pub fn pop(&mut self) -> Option<R> {
        self.records.pop()
    }

    /// Peek at the newest record without removing it
    pub fn last(&self) -> Option<&R> {
        self.records.last()
    }

    /// Ordered view of everything stored
    pub fn all(&self) -> &[R] {
        &self.records
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drop all records; invoked once per read cycle
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Drain the store, leaving it empty
    pub fn take(&mut self) -> Vec<R> {
        core::mem::take(&mut self.records)
    }

    /// Consume the store, yielding the records
    pub fn into_inner(self) -> Vec<R> {
        self.records
    }
}

impl<R> Default for RecordStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_preserved() {
        let mut store = RecordStore::new();
        store.push("a");
        store.push("b");
        store.push("c");

        assert_eq!(store.all(), &["a", "b", "c"]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_pop_returns_newest() {
        let mut store = RecordStore::new();
        store.push(1);
        store.push(2);
        store.push(3);

        assert_eq!(store.pop(), Some(3));
        assert_eq!(store.all(), &[1, 2]);
        assert_eq!(store.last(), Some(&2));
    }

    #[test]
    fn test_empty_store_queries() {
        let mut store: RecordStore<String> = RecordStore::new();
        assert!(store.is_empty());
        assert_eq!(store.pop(), None);
        assert_eq!(store.last(), None);
    }

    #[test]
    fn test_clear_empties_store() {
        let mut store = RecordStore::new();
        store.push("x");
        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn test_take_drains_store() {
        let mut store = RecordStore::new();
        store.push(10);
        store.push(20);

        let drained = store.take();
        assert_eq!(drained, vec![10, 20]);
        assert!(store.is_empty());
    }

    #[test]
    fn test_into_inner_keeps_order() {
        let mut store = RecordStore::new();
        store.push("a");
        store.push("b");
        assert_eq!(store.into_inner(), vec!["a", "b"]);
    }
}
