use crate::DomainError;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Capacity of a [`DomainName`] in bytes.
pub const MAX_NAME_LEN: usize = 63;

const WWW_PREFIX: &[u8] = b"www.";
const WILDCARD: &[u8] = b"*";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("name exceeds {MAX_NAME_LEN} bytes")]
pub struct NameTooLong;

/// Dotted domain name held in a fixed-capacity inline buffer.
///
/// Names built from configuration are ASCII. Names reconstructed from the
/// wire keep whatever octets the client sent.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DomainName {
    buf: [u8; MAX_NAME_LEN],
    len: u8,
}

impl DomainName {
    pub const fn empty() -> Self {
        Self {
            buf: [0u8; MAX_NAME_LEN],
            len: 0,
        }
    }

    pub fn new(name: &str) -> Result<Self, DomainError> {
        if !name.is_ascii() {
            return Err(DomainError::InvalidDomainName(format!(
                "'{}' is not ASCII",
                name
            )));
        }
        let mut out = Self::empty();
        out.push_bytes(name.as_bytes())
            .map_err(|e| DomainError::InvalidDomainName(format!("'{}': {}", name, e)))?;
        Ok(out)
    }

    /// Appends one label, inserting a `.` separator when the name is not empty.
    ///
    /// On overflow the name is left unchanged.
    pub fn push_label(&mut self, label: &[u8]) -> Result<(), NameTooLong> {
        let separator = usize::from(!self.is_empty());
        if self.len() + separator + label.len() > MAX_NAME_LEN {
            return Err(NameTooLong);
        }
        if separator == 1 {
            self.buf[self.len()] = b'.';
            self.len += 1;
        }
        self.push_bytes(label)
    }

    fn push_bytes(&mut self, bytes: &[u8]) -> Result<(), NameTooLong> {
        let start = self.len();
        let end = start + bytes.len();
        if end > MAX_NAME_LEN {
            return Err(NameTooLong);
        }
        self.buf[start..end].copy_from_slice(bytes);
        self.len = end as u8;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.buf = [0u8; MAX_NAME_LEN];
        self.len = 0;
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len()]
    }

    /// Returns the name as text, or `""` if the wire octets are not UTF-8.
    pub fn as_str(&self) -> &str {
        core::str::from_utf8(self.as_bytes()).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_wildcard(&self) -> bool {
        self.as_bytes() == WILDCARD
    }

    /// The name with one leading, case-insensitive `www.` removed.
    pub fn without_www_prefix(&self) -> &[u8] {
        let bytes = self.as_bytes();
        match bytes.get(..WWW_PREFIX.len()) {
            Some(prefix) if prefix.eq_ignore_ascii_case(WWW_PREFIX) => {
                &bytes[WWW_PREFIX.len()..]
            }
            _ => bytes,
        }
    }
}

impl Default for DomainName {
    fn default() -> Self {
        Self::empty()
    }
}

impl FromStr for DomainName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chunk in self.as_bytes().utf8_chunks() {
            f.write_str(chunk.valid())?;
            for b in chunk.invalid() {
                write!(f, "\\x{:02x}", b)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DomainName(\"{}\")", self)
    }
}
