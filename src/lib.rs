//! Fixed-capacity FIFO queue over a single pre-allocated circular buffer.

pub mod config;
pub mod error;
pub mod fifo;

pub use config::{FixFifoConfig, OverflowPolicy};
pub use error::{FixFifoError, FixFifoResult};
pub use fifo::{FixFifo, Iter, PushOutcome};
