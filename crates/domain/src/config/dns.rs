use super::local_records::LocalRecordConfig;
use crate::ReplyCode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsConfig {
    /// TTL in seconds advertised on every A answer
    #[serde(default = "default_ttl")]
    pub ttl: u32,

    /// Reply code sent when no record matches
    #[serde(default)]
    pub error_reply_code: ReplyCode,

    #[serde(default)]
    pub records: Vec<LocalRecordConfig>,
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            ttl: default_ttl(),
            error_reply_code: ReplyCode::default(),
            records: Vec::new(),
        }
    }
}

fn default_ttl() -> u32 {
    60
}
