//! Fixed 12-byte DNS message header (RFC 1035 §4.1.1).
//!
//! Fields are packed and unpacked bit by bit; nothing here depends on the
//! in-memory layout of the struct. Multi-byte fields are big-endian on the wire.

pub const HEADER_SIZE: usize = 12;

pub const OPCODE_QUERY: u8 = 0;

// Flags byte 0 (offset 2): QR | OPCODE(4) | AA | TC | RD
const QR_BIT: u8 = 0b1000_0000;
const OPCODE_SHIFT: u8 = 3;
const OPCODE_MASK: u8 = 0b0000_1111;
const AA_BIT: u8 = 0b0000_0100;
const TC_BIT: u8 = 0b0000_0010;
const RD_BIT: u8 = 0b0000_0001;

// Flags byte 1 (offset 3): RA | Z(3) | RCODE(4)
const RA_BIT: u8 = 0b1000_0000;
const Z_SHIFT: u8 = 4;
const Z_MASK: u8 = 0b0000_0111;
const RCODE_MASK: u8 = 0b0000_1111;

const ID_OFFSET: usize = 0;
const FLAGS_OFFSET: usize = 2;
const QDCOUNT_OFFSET: usize = 4;
const ANCOUNT_OFFSET: usize = 6;
const NSCOUNT_OFFSET: usize = 8;
const ARCOUNT_OFFSET: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DnsHeader {
    pub id: u16,
    /// QR bit: `false` for a query, `true` for a response.
    pub response: bool,
    pub opcode: u8,
    pub authoritative: bool,
    pub truncated: bool,
    pub recursion_desired: bool,
    pub recursion_available: bool,
    /// Reserved Z bits, echoed untouched.
    pub z: u8,
    pub rcode: u8,
    pub qd_count: u16,
    pub an_count: u16,
    pub ns_count: u16,
    pub ar_count: u16,
}

impl DnsHeader {
    /// Unpacks the header from the first [`HEADER_SIZE`] bytes of `buf`.
    ///
    /// Returns `None` when the buffer is too short to hold a header.
    pub fn decode(buf: &[u8]) -> Option<Self> {
        if buf.len() < HEADER_SIZE {
            return None;
        }

        let flags_hi = buf[FLAGS_OFFSET];
        let flags_lo = buf[FLAGS_OFFSET + 1];

        Some(Self {
            id: read_u16(buf, ID_OFFSET),
            response: flags_hi & QR_BIT != 0,
            opcode: (flags_hi >> OPCODE_SHIFT) & OPCODE_MASK,
            authoritative: flags_hi & AA_BIT != 0,
            truncated: flags_hi & TC_BIT != 0,
            recursion_desired: flags_hi & RD_BIT != 0,
            recursion_available: flags_lo & RA_BIT != 0,
            z: (flags_lo >> Z_SHIFT) & Z_MASK,
            rcode: flags_lo & RCODE_MASK,
            qd_count: read_u16(buf, QDCOUNT_OFFSET),
            an_count: read_u16(buf, ANCOUNT_OFFSET),
            ns_count: read_u16(buf, NSCOUNT_OFFSET),
            ar_count: read_u16(buf, ARCOUNT_OFFSET),
        })
    }

    /// Packs the header into its wire form. Out-of-range opcode, Z and RCODE
    /// values are masked to their field width.
    pub fn encode(&self) -> [u8; HEADER_SIZE] {
        let mut buf = [0u8; HEADER_SIZE];

        buf[ID_OFFSET..ID_OFFSET + 2].copy_from_slice(&self.id.to_be_bytes());

        let mut flags_hi = (self.opcode & OPCODE_MASK) << OPCODE_SHIFT;
        if self.response {
            flags_hi |= QR_BIT;
        }
        if self.authoritative {
            flags_hi |= AA_BIT;
        }
        if self.truncated {
            flags_hi |= TC_BIT;
        }
        if self.recursion_desired {
            flags_hi |= RD_BIT;
        }

        let mut flags_lo = ((self.z & Z_MASK) << Z_SHIFT) | (self.rcode & RCODE_MASK);
        if self.recursion_available {
            flags_lo |= RA_BIT;
        }

        buf[FLAGS_OFFSET] = flags_hi;
        buf[FLAGS_OFFSET + 1] = flags_lo;

        buf[QDCOUNT_OFFSET..QDCOUNT_OFFSET + 2].copy_from_slice(&self.qd_count.to_be_bytes());
        buf[ANCOUNT_OFFSET..ANCOUNT_OFFSET + 2].copy_from_slice(&self.an_count.to_be_bytes());
        buf[NSCOUNT_OFFSET..NSCOUNT_OFFSET + 2].copy_from_slice(&self.ns_count.to_be_bytes());
        buf[ARCOUNT_OFFSET..ARCOUNT_OFFSET + 2].copy_from_slice(&self.ar_count.to_be_bytes());

        buf
    }

    pub fn is_query(&self) -> bool {
        !self.response
    }
}

fn read_u16(buf: &[u8], offset: usize) -> u16 {
    u16::from_be_bytes([buf[offset], buf[offset + 1]])
}
