use crate::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// DNS response code (RCODE), the low four bits of the second flags byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[repr(u8)]
pub enum ReplyCode {
    NoError = 0,
    #[serde(alias = "FORMERR")]
    FormError = 1,
    #[serde(alias = "SERVFAIL")]
    ServerFailure = 2,
    #[default]
    #[serde(alias = "NXDOMAIN")]
    NonExistentDomain = 3,
    #[serde(alias = "NOTIMP")]
    NotImplemented = 4,
    #[serde(alias = "REFUSED")]
    Refused = 5,
    YXDomain = 6,
    YXRRSet = 7,
    NXRRSet = 8,
}

impl ReplyCode {
    pub const ALL: [ReplyCode; 9] = [
        ReplyCode::NoError,
        ReplyCode::FormError,
        ReplyCode::ServerFailure,
        ReplyCode::NonExistentDomain,
        ReplyCode::NotImplemented,
        ReplyCode::Refused,
        ReplyCode::YXDomain,
        ReplyCode::YXRRSet,
        ReplyCode::NXRRSet,
    ];

    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn from_u8(value: u8) -> Option<Self> {
        Self::ALL.get(value as usize).copied()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReplyCode::NoError => "NOERROR",
            ReplyCode::FormError => "FORMERR",
            ReplyCode::ServerFailure => "SERVFAIL",
            ReplyCode::NonExistentDomain => "NXDOMAIN",
            ReplyCode::NotImplemented => "NOTIMP",
            ReplyCode::Refused => "REFUSED",
            ReplyCode::YXDomain => "YXDOMAIN",
            ReplyCode::YXRRSet => "YXRRSET",
            ReplyCode::NXRRSet => "NXRRSET",
        }
    }
}

impl fmt::Display for ReplyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReplyCode {
    type Err = DomainError;

    /// Accepts the variant name (`NonExistentDomain`), the mnemonic
    /// (`NXDOMAIN`) or the numeric code, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(value) = trimmed.parse::<u8>() {
            return Self::from_u8(value)
                .ok_or_else(|| DomainError::InvalidReplyCode(trimmed.to_string()));
        }

        Self::ALL
            .iter()
            .copied()
            .find(|code| {
                code.as_str().eq_ignore_ascii_case(trimmed)
                    || format!("{:?}", code).eq_ignore_ascii_case(trimmed)
            })
            .ok_or_else(|| DomainError::InvalidReplyCode(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_values_follow_rcode_table() {
        for (i, code) in ReplyCode::ALL.iter().enumerate() {
            assert_eq!(code.as_u8() as usize, i);
            assert_eq!(ReplyCode::from_u8(i as u8), Some(*code));
        }
        assert_eq!(ReplyCode::from_u8(9), None);
    }

    #[test]
    fn test_default_is_nxdomain() {
        assert_eq!(ReplyCode::default(), ReplyCode::NonExistentDomain);
    }
}
