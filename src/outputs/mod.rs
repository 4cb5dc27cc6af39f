//! Output implementations

pub mod memory;
pub mod noop;
pub mod stream;

pub use memory::{MemoryHandle, MemoryOutput};
pub use noop::NoopOutput;
pub use stream::StreamOutput;

pub use crate::core::OutputSink;
