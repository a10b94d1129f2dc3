use crate::DomainName;
use std::net::SocketAddr;

/// One validated question, borrowed from the request being handled.
#[derive(Debug, Clone, Copy)]
pub struct DnsRequest<'a> {
    pub name: &'a DomainName,
    pub client: SocketAddr,
}

impl<'a> DnsRequest<'a> {
    pub fn new(name: &'a DomainName, client: SocketAddr) -> Self {
        Self { name, client }
    }
}
