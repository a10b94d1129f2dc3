use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("Invalid reply code: {0}")]
    InvalidReplyCode(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Transport error: {0}")]
    TransportError(String),

    #[error("No client to reply to: nothing has been received yet")]
    NoPeer,

    #[error("Responder is not started")]
    NotStarted,
}
