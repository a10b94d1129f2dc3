use async_trait::async_trait;
use captive_dns_application::ports::DatagramTransport;
use captive_dns_domain::DomainError;
use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

/// Replays queued datagrams and records what was sent back.
pub struct MockTransport {
    inbound: VecDeque<(Vec<u8>, SocketAddr)>,
    sent: Arc<Mutex<Vec<(Vec<u8>, SocketAddr)>>>,
    last_peer: Option<SocketAddr>,
    fail_sends: bool,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            inbound: VecDeque::new(),
            sent: Arc::new(Mutex::new(Vec::new())),
            last_peer: None,
            fail_sends: false,
        }
    }

    pub fn with_datagram(mut self, datagram: Vec<u8>, from: SocketAddr) -> Self {
        self.inbound.push_back((datagram, from));
        self
    }

    pub fn failing_sends(mut self) -> Self {
        self.fail_sends = true;
        self
    }

    /// Handle on everything sent, usable after the transport is boxed.
    pub fn sent(&self) -> Arc<Mutex<Vec<(Vec<u8>, SocketAddr)>>> {
        self.sent.clone()
    }
}

#[async_trait]
impl DatagramTransport for MockTransport {
    async fn receive(&mut self, buf: &mut [u8]) -> Result<(usize, SocketAddr), DomainError> {
        let (datagram, from) = self
            .inbound
            .pop_front()
            .ok_or_else(|| DomainError::TransportError("no datagram queued".to_string()))?;

        let copied = datagram.len().min(buf.len());
        buf[..copied].copy_from_slice(&datagram[..copied]);
        self.last_peer = Some(from);
        Ok((datagram.len(), from))
    }

    async fn send(&mut self, payload: &[u8]) -> Result<(), DomainError> {
        let peer = self.last_peer.ok_or(DomainError::NoPeer)?;
        if self.fail_sends {
            return Err(DomainError::IoError("send refused".to_string()));
        }
        self.sent.lock().unwrap().push((payload.to_vec(), peer));
        Ok(())
    }

    fn local_addr(&self) -> Option<SocketAddr> {
        None
    }

    fn protocol_name(&self) -> &'static str {
        "mock"
    }
}
