use captive_dns_application::ports::RecordRepository;
use captive_dns_domain::{DomainName, LocalRecord, RecordTable, DEFAULT_RECORD_CAPACITY};
use std::sync::{PoisonError, RwLock};

/// [`RecordTable`] behind a lock, shared by the serve loop and the record
/// management surface.
pub struct InMemoryRecordRepository<const N: usize = DEFAULT_RECORD_CAPACITY> {
    table: RwLock<RecordTable<N>>,
}

impl InMemoryRecordRepository {
    pub fn new() -> Self {
        Self::with_table(RecordTable::new())
    }
}

impl<const N: usize> InMemoryRecordRepository<N> {
    pub fn with_table(table: RecordTable<N>) -> Self {
        Self {
            table: RwLock::new(table),
        }
    }

    /// Copy of the table as it is now, for enumeration without holding the
    /// lock.
    pub fn snapshot(&self) -> RecordTable<N> {
        self.table
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for InMemoryRecordRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> RecordRepository for InMemoryRecordRepository<N> {
    fn add(&self, record: LocalRecord) -> bool {
        self.table
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .add(record.name, record.address)
            .is_some()
    }

    fn find(&self, name: &DomainName) -> Option<LocalRecord> {
        self.table
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .lookup(name)
    }

    fn clear(&self) {
        self.table
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    fn records(&self) -> Vec<LocalRecord> {
        self.table
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .collect()
    }

    fn capacity(&self) -> usize {
        N
    }
}
