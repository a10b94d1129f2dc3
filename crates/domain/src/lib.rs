//! Captive DNS Domain Layer
pub mod config;
pub mod dns_header;
pub mod dns_request;
pub mod domain_name;
pub mod errors;
pub mod record_table;
pub mod reply_code;

pub use config::{
    CliOverrides, Config, ConfigError, DnsConfig, LocalRecordConfig, LogFormat, LoggingConfig,
    ServerConfig,
};
pub use dns_header::{DnsHeader, HEADER_SIZE};
pub use dns_request::DnsRequest;
pub use domain_name::{DomainName, NameTooLong, MAX_NAME_LEN};
pub use errors::DomainError;
pub use record_table::{LocalRecord, RecordCursor, RecordTable, DEFAULT_RECORD_CAPACITY};
pub use reply_code::ReplyCode;
