pub mod emitter;
pub mod types;

pub use emitter::QueryEventEmitter;
pub use types::QueryEvent;
