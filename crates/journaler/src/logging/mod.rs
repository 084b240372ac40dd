//! Logging abstractions shared by journals and their handles

mod traits;
mod noop;

pub use traits::{Logger, BoxedLogger, SharedLogger};
pub use noop::NoOpLogger;
