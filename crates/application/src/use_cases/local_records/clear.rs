use std::sync::Arc;

use tracing::debug;

use crate::ports::RecordRepository;

pub struct ClearLocalRecordsUseCase {
    records: Arc<dyn RecordRepository>,
}

impl ClearLocalRecordsUseCase {
    pub fn new(records: Arc<dyn RecordRepository>) -> Self {
        Self { records }
    }

    pub fn execute(&self) {
        self.records.clear();
        debug!("Local records cleared");
    }
}
