use super::server::DnsServerHandler;
use super::transport::UdpTransport;
use super::wire_query::MAX_PACKET_SIZE;
use super::wire_response::ResponseBuffer;
use captive_dns_application::ports::{DatagramTransport, QueryObserver, RecordRepository};
use captive_dns_application::use_cases::{
    ClearLocalRecordsUseCase, CreateLocalRecordUseCase, HandleDnsQueryUseCase,
    ListLocalRecordsUseCase,
};
use captive_dns_domain::{DomainError, DomainName, LocalRecord, RecordTable, ReplyCode};
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// One byte more than the largest accepted query, so oversize datagrams are
/// seen as oversize instead of silently truncated to a valid length.
const RECEIVE_BUFFER_SIZE: usize = MAX_PACKET_SIZE + 1;

/// Authoritative responder: a socket, a record table and the policy used to
/// answer from it. Requests are handled one at a time.
pub struct DnsResponder {
    handler: DnsServerHandler,
    create_record: CreateLocalRecordUseCase,
    clear_records: ClearLocalRecordsUseCase,
    list_records: ListLocalRecordsUseCase,
    records: Arc<dyn RecordRepository>,
    transport: Option<Box<dyn DatagramTransport>>,
    recv_buf: [u8; RECEIVE_BUFFER_SIZE],
    out: ResponseBuffer,
}

impl DnsResponder {
    pub fn new(records: Arc<dyn RecordRepository>) -> Self {
        Self::build(HandleDnsQueryUseCase::new(records.clone()), records)
    }

    /// Like [`DnsResponder::new`], with `observer` told about every question
    /// that reaches the lookup.
    pub fn with_observer(
        records: Arc<dyn RecordRepository>,
        observer: Arc<dyn QueryObserver>,
    ) -> Self {
        let use_case = HandleDnsQueryUseCase::new(records.clone()).with_observer(observer);
        Self::build(use_case, records)
    }

    fn build(use_case: HandleDnsQueryUseCase, records: Arc<dyn RecordRepository>) -> Self {
        Self {
            handler: DnsServerHandler::new(Arc::new(use_case)),
            create_record: CreateLocalRecordUseCase::new(records.clone()),
            clear_records: ClearLocalRecordsUseCase::new(records.clone()),
            list_records: ListLocalRecordsUseCase::new(records.clone()),
            records,
            transport: None,
            recv_buf: [0u8; RECEIVE_BUFFER_SIZE],
            out: ResponseBuffer::new(),
        }
    }

    /// Listens on `port` on every IPv4 interface.
    pub fn start(&mut self, port: u16) -> Result<SocketAddr, DomainError> {
        self.start_on(SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)))
    }

    /// Listens on `addr`, replacing any socket from an earlier start.
    pub fn start_on(&mut self, addr: SocketAddr) -> Result<SocketAddr, DomainError> {
        let transport = UdpTransport::bind(addr)?;
        let local = transport.local_addr().unwrap_or(addr);
        self.attach(Box::new(transport));
        info!(bind_address = %local, "DNS responder started");
        Ok(local)
    }

    /// Serves from an already open transport.
    pub fn attach(&mut self, transport: Box<dyn DatagramTransport>) {
        if self.transport.is_some() {
            self.stop();
        }
        debug!(protocol = transport.protocol_name(), "Transport attached");
        self.transport = Some(transport);
    }

    /// Closes the socket. Safe to call when already stopped.
    pub fn stop(&mut self) {
        if let Some(transport) = self.transport.take() {
            info!(
                protocol = transport.protocol_name(),
                local = ?transport.local_addr(),
                "DNS responder stopped"
            );
        }
    }

    pub fn is_running(&self) -> bool {
        self.transport.is_some()
    }

    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.transport.as_ref().and_then(|t| t.local_addr())
    }

    pub fn set_ttl(&mut self, seconds: u32) {
        self.handler.set_ttl(seconds);
    }

    pub fn ttl(&self) -> u32 {
        self.handler.ttl()
    }

    /// Reply code for names with no matching record.
    pub fn set_error_reply_code(&mut self, code: ReplyCode) {
        self.handler.set_error_reply_code(code);
    }

    pub fn error_reply_code(&self) -> ReplyCode {
        self.handler.error_reply_code()
    }

    /// Returns `Ok(false)` when the table is full and the record was dropped.
    pub fn add_record(&self, name: &str, address: Ipv4Addr) -> Result<bool, DomainError> {
        self.create_record.execute(name, address)
    }

    pub fn clear_records(&self) {
        self.clear_records.execute();
    }

    /// Records in lookup order.
    pub fn records(&self) -> Vec<LocalRecord> {
        self.list_records.execute()
    }

    pub fn find_record(&self, name: &DomainName) -> Option<LocalRecord> {
        self.records.find(name)
    }

    /// Copy of the records in a [`RecordTable`], walked with
    /// [`RecordTable::cursor`].
    pub fn snapshot(&self) -> RecordTable {
        self.records().into_iter().collect()
    }

    /// Waits for one datagram and answers it.
    ///
    /// Returns `Ok(true)` if a reply was sent, `Ok(false)` if the datagram
    /// was dropped or the responder is stopped. Send failures are logged and
    /// count as a drop; receive failures are returned.
    pub async fn process_next_request(&mut self) -> Result<bool, DomainError> {
        let Some(transport) = self.transport.as_mut() else {
            return Ok(false);
        };

        let (len, client) = transport.receive(&mut self.recv_buf).await?;
        if len > MAX_PACKET_SIZE {
            debug!(client = %client, len, "Dropping oversize datagram");
            return Ok(false);
        }

        let Some(reply) = self
            .handler
            .handle_datagram(&self.recv_buf[..len], client, &mut self.out)
        else {
            return Ok(false);
        };

        match transport.send(reply).await {
            Ok(()) => Ok(true),
            Err(e) => {
                warn!(client = %client, error = %e, "Failed to send reply");
                Ok(false)
            }
        }
    }

    /// Answers requests until `shutdown` is cancelled.
    pub async fn serve(&mut self, shutdown: CancellationToken) -> Result<(), DomainError> {
        if !self.is_running() {
            return Err(DomainError::NotStarted);
        }

        loop {
            tokio::select! {
                _ = shutdown.cancelled() => break,
                result = self.process_next_request() => {
                    if let Err(e) = result {
                        warn!(error = %e, "Receive failed");
                    }
                }
            }
        }

        debug!("Serve loop finished");
        Ok(())
    }
}

impl Drop for DnsResponder {
    fn drop(&mut self) {
        self.stop();
    }
}
