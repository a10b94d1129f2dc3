pub mod clear;
pub mod create;
pub mod list;

pub use clear::ClearLocalRecordsUseCase;
pub use create::CreateLocalRecordUseCase;
pub use list::ListLocalRecordsUseCase;
