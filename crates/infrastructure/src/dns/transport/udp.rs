//! UDP transport for the responder (RFC 1035 §4.2.1).
//!
//! Replies go to the sender of the most recently received datagram.

use async_trait::async_trait;
use captive_dns_application::ports::DatagramTransport;
use captive_dns_domain::DomainError;
use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;
use tokio::net::UdpSocket;
use tracing::debug;

pub struct UdpTransport {
    socket: UdpSocket,
    last_peer: Option<SocketAddr>,
}

impl UdpTransport {
    /// Binds a non-blocking UDP socket on `addr`. Must be called from within
    /// a Tokio runtime.
    pub fn bind(addr: SocketAddr) -> Result<Self, DomainError> {
        let socket = create_udp_socket(addr).map_err(|e| {
            DomainError::TransportError(format!("Failed to bind UDP socket on {}: {}", addr, e))
        })?;
        let socket = UdpSocket::from_std(socket).map_err(|e| {
            DomainError::TransportError(format!("Failed to register UDP socket: {}", e))
        })?;

        Ok(Self {
            socket,
            last_peer: None,
        })
    }

    pub fn last_peer(&self) -> Option<SocketAddr> {
        self.last_peer
    }
}

fn create_udp_socket(addr: SocketAddr) -> std::io::Result<std::net::UdpSocket> {
    let socket = Socket::new(Domain::for_address(addr), Type::DGRAM, Some(Protocol::UDP))?;
    if addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.bind(&addr.into())?;
    socket.set_nonblocking(true)?;
    Ok(socket.into())
}

#[async_trait]
impl DatagramTransport for UdpTransport {
    async fn receive(&mut self, buf: &mut [u8]) -> Result<(usize, SocketAddr), DomainError> {
        let (len, from) = self
            .socket
            .recv_from(buf)
            .await
            .map_err(|e| DomainError::IoError(format!("UDP receive failed: {}", e)))?;

        self.last_peer = Some(from);
        debug!(client = %from, bytes_received = len, "UDP datagram received");
        Ok((len, from))
    }

    async fn send(&mut self, payload: &[u8]) -> Result<(), DomainError> {
        let peer = self.last_peer.ok_or(DomainError::NoPeer)?;
        let sent = self
            .socket
            .send_to(payload, peer)
            .await
            .map_err(|e| DomainError::IoError(format!("UDP send to {} failed: {}", peer, e)))?;

        debug!(client = %peer, bytes_sent = sent, "UDP datagram sent");
        Ok(())
    }

    fn local_addr(&self) -> Option<SocketAddr> {
        self.socket.local_addr().ok()
    }

    fn protocol_name(&self) -> &'static str {
        "UDP"
    }
}
