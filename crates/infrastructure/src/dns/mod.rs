pub mod events;
pub mod query_logger;
pub mod responder;
pub mod server;
pub mod transport;
pub mod wire_query;
pub mod wire_response;

pub use events::{QueryEvent, QueryEventEmitter};
pub use query_logger::QueryEventLogger;
pub use responder::DnsResponder;
pub use server::DnsServerHandler;
