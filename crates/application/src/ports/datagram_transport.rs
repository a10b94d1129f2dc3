use async_trait::async_trait;
use captive_dns_domain::DomainError;
use std::net::SocketAddr;

/// Datagram socket the responder reads queries from and answers on.
#[async_trait]
pub trait DatagramTransport: Send {
    /// Waits for the next datagram, copies at most `buf.len()` bytes of it
    /// into `buf` and returns the datagram's full size and its sender.
    ///
    /// The returned size may exceed `buf.len()` when the transport can tell
    /// that the datagram was truncated.
    async fn receive(&mut self, buf: &mut [u8]) -> Result<(usize, SocketAddr), DomainError>;

    /// Sends `payload` to the sender of the most recently received datagram.
    async fn send(&mut self, payload: &[u8]) -> Result<(), DomainError>;

    fn local_addr(&self) -> Option<SocketAddr>;

    fn protocol_name(&self) -> &'static str;
}
