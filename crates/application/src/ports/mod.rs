mod datagram_transport;
mod query_observer;
mod record_repository;

pub use datagram_transport::DatagramTransport;
pub use query_observer::QueryObserver;
pub use record_repository::RecordRepository;
