use super::wire_query::{self, QueryRejection, MAX_PACKET_SIZE};
use super::wire_response::{self, ResponseBuffer};
use captive_dns_application::use_cases::HandleDnsQueryUseCase;
use captive_dns_domain::{DnsRequest, ReplyCode, HEADER_SIZE};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, trace};

pub const DEFAULT_TTL: u32 = 60;

/// How answers and misses are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ResponsePolicy {
    /// Answer TTL, already in network byte order.
    ttl: [u8; 4],
    error_reply_code: ReplyCode,
}

impl Default for ResponsePolicy {
    fn default() -> Self {
        Self {
            ttl: DEFAULT_TTL.to_be_bytes(),
            error_reply_code: ReplyCode::NonExistentDomain,
        }
    }
}

/// Turns one query datagram into at most one reply datagram.
#[derive(Clone)]
pub struct DnsServerHandler {
    use_case: Arc<HandleDnsQueryUseCase>,
    policy: ResponsePolicy,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<HandleDnsQueryUseCase>) -> Self {
        Self {
            use_case,
            policy: ResponsePolicy::default(),
        }
    }

    pub fn set_ttl(&mut self, seconds: u32) {
        self.policy.ttl = seconds.to_be_bytes();
    }

    pub fn ttl(&self) -> u32 {
        u32::from_be_bytes(self.policy.ttl)
    }

    /// Reply code sent when the name is not in the record table.
    pub fn set_error_reply_code(&mut self, code: ReplyCode) {
        self.policy.error_reply_code = code;
    }

    pub fn error_reply_code(&self) -> ReplyCode {
        self.policy.error_reply_code
    }

    /// Handles one datagram from `client` and returns the reply to send, if
    /// any. The reply borrows `out`.
    pub fn handle_datagram<'b>(
        &self,
        datagram: &[u8],
        client: SocketAddr,
        out: &'b mut ResponseBuffer,
    ) -> Option<&'b [u8]> {
        let len = datagram.len();
        if len == 0 || len > MAX_PACKET_SIZE || len < HEADER_SIZE {
            trace!(client = %client, len, "Dropping datagram with bad size");
            return None;
        }

        let mut scratch = [0u8; MAX_PACKET_SIZE];
        scratch[..len].copy_from_slice(datagram);
        let query = &scratch[..len];

        let parsed = match wire_query::parse_query(query) {
            Ok(parsed) => parsed,
            Err(QueryRejection::Ignore) => {
                trace!(client = %client, "Dropping non-query datagram");
                return None;
            }
            Err(QueryRejection::Reply {
                mut header,
                code,
                question,
            }) => {
                debug!(client = %client, code = %code, "Rejecting query");
                return wire_response::build_error_response(&mut header, code, question, out);
            }
        };

        let mut header = parsed.header;
        let request = DnsRequest::new(&parsed.name, client);

        match self.use_case.execute(&request) {
            Some(address) => {
                debug!(domain = %parsed.name, ip = %address, client = %client, "Answering query");
                wire_response::build_ip_response(
                    &mut header,
                    parsed.question,
                    self.policy.ttl,
                    address,
                    out,
                )
            }
            None => {
                let code = self.policy.error_reply_code;
                debug!(domain = %parsed.name, code = %code, client = %client, "No record for query");
                wire_response::build_error_response(&mut header, code, Some(parsed.question), out)
            }
        }
    }
}
