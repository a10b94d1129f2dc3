#![allow(dead_code)]
use std::net::SocketAddr;

pub const FLAG_QR: u16 = 0x8000;
pub const FLAG_AA: u16 = 0x0400;
pub const FLAG_TC: u16 = 0x0200;
pub const FLAG_RD: u16 = 0x0100;
pub const FLAG_RA: u16 = 0x0080;

pub fn client() -> SocketAddr {
    "192.168.4.23:40000".parse().unwrap()
}

/// Wire labels for a dotted name, zero terminator included.
pub fn encode_name(name: &str) -> Vec<u8> {
    let mut out = Vec::new();
    for label in name.split('.').filter(|l| !l.is_empty()) {
        out.push(label.len() as u8);
        out.extend_from_slice(label.as_bytes());
    }
    out.push(0);
    out
}

/// Hand-assembled query datagram. Defaults to a recursion-desired A/IN
/// question with ID 0x1234.
pub struct QueryBuilder {
    id: u16,
    flags: u16,
    counts: [u16; 4],
    question: Vec<u8>,
}

impl QueryBuilder {
    pub fn new(name: &str) -> Self {
        Self::with_question(question(name, 1, 1))
    }

    pub fn with_question(question: Vec<u8>) -> Self {
        Self {
            id: 0x1234,
            flags: FLAG_RD,
            counts: [1, 0, 0, 0],
            question,
        }
    }

    pub fn id(mut self, id: u16) -> Self {
        self.id = id;
        self
    }

    pub fn flags(mut self, flags: u16) -> Self {
        self.flags = flags;
        self
    }

    pub fn opcode(mut self, opcode: u8) -> Self {
        self.flags = (self.flags & !0x7800) | (u16::from(opcode & 0x0F) << 11);
        self
    }

    pub fn counts(mut self, qd: u16, an: u16, ns: u16, ar: u16) -> Self {
        self.counts = [qd, an, ns, ar];
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(12 + self.question.len());
        out.extend_from_slice(&self.id.to_be_bytes());
        out.extend_from_slice(&self.flags.to_be_bytes());
        for count in self.counts {
            out.extend_from_slice(&count.to_be_bytes());
        }
        out.extend_from_slice(&self.question);
        out
    }
}

/// Question section: labels, terminator, QTYPE, QCLASS.
pub fn question(name: &str, qtype: u16, qclass: u16) -> Vec<u8> {
    let mut out = encode_name(name);
    out.extend_from_slice(&qtype.to_be_bytes());
    out.extend_from_slice(&qclass.to_be_bytes());
    out
}

/// Name made of `labels` labels of `label_len` bytes each.
pub fn long_name(labels: usize, label_len: usize) -> String {
    vec!["a".repeat(label_len); labels].join(".")
}
