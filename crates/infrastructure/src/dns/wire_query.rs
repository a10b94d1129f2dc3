use captive_dns_domain::dns_header::OPCODE_QUERY;
use captive_dns_domain::{DnsHeader, DomainName, ReplyCode, HEADER_SIZE};

/// Largest datagram the responder accepts (RFC 1035 §2.3.4).
pub const MAX_PACKET_SIZE: usize = 512;

pub const QTYPE_A: u16 = 1;
pub const QTYPE_ANY: u16 = 255;
pub const QCLASS_IN: u16 = 1;
pub const QCLASS_ANY: u16 = 255;

/// Names are only rebuilt when the first length octet is below this value.
const NAME_GUARD: u8 = 0x20;
/// Compression pointers and reserved label types.
const LABEL_TYPE_MASK: u8 = 0xC0;
/// Terminating zero label, QTYPE and QCLASS.
const QUESTION_TRAILER_LEN: usize = 5;

/// A query that passed every check, ready for lookup.
#[derive(Debug)]
pub struct ParsedQuery<'a> {
    pub header: DnsHeader,
    /// Raw question section (labels, terminator, QTYPE, QCLASS) for echoing.
    pub question: &'a [u8],
    pub qtype: u16,
    pub qclass: u16,
    pub name: DomainName,
}

/// Why a datagram did not produce a [`ParsedQuery`].
#[derive(Debug, PartialEq, Eq)]
pub enum QueryRejection<'a> {
    /// Not a query, or too short to carry a header. Drop without reply.
    Ignore,
    /// Answer with `code`, echoing `question` when it was fully delimited.
    Reply {
        header: DnsHeader,
        code: ReplyCode,
        question: Option<&'a [u8]>,
    },
}

impl<'a> QueryRejection<'a> {
    fn reply(header: DnsHeader, code: ReplyCode) -> Self {
        Self::Reply {
            header,
            code,
            question: None,
        }
    }

    fn reply_with_question(header: DnsHeader, code: ReplyCode, question: &'a [u8]) -> Self {
        Self::Reply {
            header,
            code,
            question: Some(question),
        }
    }
}

/// Validates a raw query datagram and extracts its single question.
///
/// Checks run in this order, the first failure deciding the outcome:
///
/// * QR set (a response) → [`QueryRejection::Ignore`]
/// * OPCODE other than QUERY → `NotImplemented`
/// * QDCOUNT ≠ 1 → `FormError`
/// * ANCOUNT, NSCOUNT or ARCOUNT ≠ 0 (EDNS included) → `FormError`
/// * label chain that runs past the datagram, or a compression pointer /
///   reserved label type → `FormError`
/// * fewer than 4 octets after the zero label → `FormError`
/// * QCLASS other than IN/ANY → `NonExistentDomain` with the question echoed
/// * QTYPE other than A/ANY → `NonExistentDomain` with the question echoed
///
/// A name longer than [`captive_dns_domain::MAX_NAME_LEN`] is cut back to the
/// labels that fit and still looked up.
pub fn parse_query(buf: &[u8]) -> Result<ParsedQuery<'_>, QueryRejection<'_>> {
    let header = DnsHeader::decode(buf).ok_or(QueryRejection::Ignore)?;

    if header.response {
        return Err(QueryRejection::Ignore);
    }

    if header.opcode != OPCODE_QUERY {
        return Err(QueryRejection::reply(header, ReplyCode::NotImplemented));
    }

    if header.qd_count != 1 {
        return Err(QueryRejection::reply(header, ReplyCode::FormError));
    }

    if header.an_count != 0 || header.ns_count != 0 || header.ar_count != 0 {
        return Err(QueryRejection::reply(header, ReplyCode::FormError));
    }

    let terminator = walk_labels(buf, HEADER_SIZE)
        .ok_or_else(|| QueryRejection::reply(header, ReplyCode::FormError))?;

    if buf.len() - terminator < QUESTION_TRAILER_LEN {
        return Err(QueryRejection::reply(header, ReplyCode::FormError));
    }

    let question_end = terminator + QUESTION_TRAILER_LEN;
    let question = &buf[HEADER_SIZE..question_end];
    let qtype = u16::from_be_bytes([buf[terminator + 1], buf[terminator + 2]]);
    let qclass = u16::from_be_bytes([buf[terminator + 3], buf[terminator + 4]]);

    if qclass != QCLASS_IN && qclass != QCLASS_ANY {
        return Err(QueryRejection::reply_with_question(
            header,
            ReplyCode::NonExistentDomain,
            question,
        ));
    }

    if qtype != QTYPE_A && qtype != QTYPE_ANY {
        return Err(QueryRejection::reply_with_question(
            header,
            ReplyCode::NonExistentDomain,
            question,
        ));
    }

    let mut name = DomainName::empty();
    if question[0] < NAME_GUARD {
        read_name(question, &mut name);
    }

    Ok(ParsedQuery {
        header,
        question,
        qtype,
        qclass,
        name,
    })
}

/// Follows the length-prefixed labels from `start` and returns the offset of
/// the zero-length terminator, or `None` if the chain overruns `buf` or uses
/// a label type other than a plain length.
fn walk_labels(buf: &[u8], start: usize) -> Option<usize> {
    let mut pos = start;
    loop {
        let len = *buf.get(pos)?;
        if len == 0 {
            return Some(pos);
        }
        if len & LABEL_TYPE_MASK != 0 {
            return None;
        }
        let next = pos + 1 + len as usize;
        if next > buf.len() {
            return None;
        }
        pos = next;
    }
}

/// Rebuilds the dotted name from a question section already bounded by
/// [`walk_labels`], stopping at the first label that no longer fits.
fn read_name(question: &[u8], name: &mut DomainName) {
    let mut pos = 0;
    while let Some(&len) = question.get(pos) {
        if len == 0 {
            break;
        }
        let start = pos + 1;
        let end = start + len as usize;
        let Some(label) = question.get(start..end) else {
            break;
        };
        if name.push_label(label).is_err() {
            break;
        }
        pos = end;
    }
}
