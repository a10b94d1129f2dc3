#![allow(dead_code)]
#![allow(unused_imports)]

mod mock_repositories;

pub use mock_repositories::{MockRecordRepository, RecordingObserver};
