use super::wire_query::{MAX_PACKET_SIZE, QCLASS_IN, QTYPE_A};
use captive_dns_domain::{DnsHeader, ReplyCode, HEADER_SIZE};
use std::net::Ipv4Addr;

/// NAME (pointer) + TYPE + CLASS + TTL + RDLENGTH + RDATA of one A record.
pub const ANSWER_RECORD_SIZE: usize = 16;

/// Largest response: an echoed maximum-size query plus one answer.
pub const MAX_RESPONSE_SIZE: usize = MAX_PACKET_SIZE + ANSWER_RECORD_SIZE;

/// Compression pointer (top two bits set) to the question name right after
/// the header.
const QUESTION_NAME_POINTER: u16 = 0xC000 | HEADER_SIZE as u16;

const IPV4_RDLENGTH: u16 = 4;

/// Stack-allocated outbound buffer. Every write is bounds-checked; a write
/// that does not fit fails and leaves the previous contents in place.
pub struct ResponseBuffer {
    buf: [u8; MAX_RESPONSE_SIZE],
    len: usize,
}

impl ResponseBuffer {
    pub fn new() -> Self {
        Self {
            buf: [0u8; MAX_RESPONSE_SIZE],
            len: 0,
        }
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn remaining(&self) -> usize {
        MAX_RESPONSE_SIZE - self.len
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) -> Option<()> {
        let end = self.len.checked_add(bytes.len())?;
        self.buf.get_mut(self.len..end)?.copy_from_slice(bytes);
        self.len = end;
        Some(())
    }

    /// Writes `value` in network byte order.
    pub fn write_u16(&mut self, value: u16) -> Option<()> {
        self.write_bytes(&value.to_be_bytes())
    }

    pub fn write_header(&mut self, header: &DnsHeader) -> Option<()> {
        self.write_bytes(&header.encode())
    }
}

impl Default for ResponseBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds an A answer on top of the request header.
///
/// The header is turned into a response in place (QR set, QDCOUNT and
/// ANCOUNT 1, NSCOUNT and ARCOUNT 0); everything else, RCODE included, is
/// echoed. `ttl` is already in network byte order.
///
/// Returns `None` if the result would not fit in `out`, in which case `out`
/// holds a partial message and must not be sent.
pub fn build_ip_response<'b>(
    header: &mut DnsHeader,
    question: &[u8],
    ttl: [u8; 4],
    address: Ipv4Addr,
    out: &'b mut ResponseBuffer,
) -> Option<&'b [u8]> {
    header.response = true;
    header.qd_count = 1;
    header.an_count = 1;
    header.ns_count = 0;
    header.ar_count = 0;

    out.clear();
    if HEADER_SIZE + question.len() + ANSWER_RECORD_SIZE > out.remaining() {
        return None;
    }

    out.write_header(header)?;
    out.write_bytes(question)?;
    out.write_u16(QUESTION_NAME_POINTER)?;
    out.write_u16(QTYPE_A)?;
    out.write_u16(QCLASS_IN)?;
    out.write_bytes(&ttl)?;
    out.write_u16(IPV4_RDLENGTH)?;
    out.write_bytes(&address.octets())?;

    Some(out.as_bytes())
}

/// Builds an error reply carrying `code`, with no answer section.
///
/// QDCOUNT is 1 when `question` is echoed and 0 otherwise. Every other
/// request flag is kept as received.
pub fn build_error_response<'b>(
    header: &mut DnsHeader,
    code: ReplyCode,
    question: Option<&[u8]>,
    out: &'b mut ResponseBuffer,
) -> Option<&'b [u8]> {
    header.response = true;
    header.rcode = code.as_u8();
    header.qd_count = u16::from(question.is_some());
    header.an_count = 0;
    header.ns_count = 0;
    header.ar_count = 0;

    out.clear();
    out.write_header(header)?;
    if let Some(question) = question {
        out.write_bytes(question)?;
    }

    Some(out.as_bytes())
}
