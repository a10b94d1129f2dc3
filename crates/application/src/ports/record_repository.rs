use captive_dns_domain::{DomainName, LocalRecord};

/// Storage for the domain → IPv4 records the responder answers from.
///
/// Implementations provide their own synchronization; the responder and the
/// configuration path may call in from different tasks.
pub trait RecordRepository: Send + Sync {
    /// Stores a record. Returns `false` when it was dropped because the
    /// store is full.
    fn add(&self, record: LocalRecord) -> bool;

    fn find(&self, name: &DomainName) -> Option<LocalRecord>;

    fn clear(&self);

    fn records(&self) -> Vec<LocalRecord>;

    fn capacity(&self) -> usize;
}
