pub mod dns;
pub mod local_records;

pub use dns::HandleDnsQueryUseCase;
pub use local_records::{
    ClearLocalRecordsUseCase, CreateLocalRecordUseCase, ListLocalRecordsUseCase,
};
