use std::sync::Arc;

use captive_dns_domain::LocalRecord;

use crate::ports::RecordRepository;

pub struct ListLocalRecordsUseCase {
    records: Arc<dyn RecordRepository>,
}

impl ListLocalRecordsUseCase {
    pub fn new(records: Arc<dyn RecordRepository>) -> Self {
        Self { records }
    }

    /// Records in lookup order.
    pub fn execute(&self) -> Vec<LocalRecord> {
        self.records.records()
    }
}
