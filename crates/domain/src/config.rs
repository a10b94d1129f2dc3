mod dns;
mod errors;
mod local_records;
mod logging;
mod root;
mod server;

pub use dns::DnsConfig;
pub use errors::ConfigError;
pub use local_records::LocalRecordConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
