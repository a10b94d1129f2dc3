pub mod record_table_repository;

pub use record_table_repository::InMemoryRecordRepository;
